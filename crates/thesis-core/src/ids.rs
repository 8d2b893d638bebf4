//! ID prefix constants.
//!
//! Every row ID is `{prefix}-{8 hex chars}`, generated by the store.

pub const PREFIX_THESIS: &str = "ths";
pub const PREFIX_MILESTONE: &str = "mst";
pub const PREFIX_SUBMISSION: &str = "sub";
pub const PREFIX_HISTORY: &str = "hst";
pub const PREFIX_STUDENT: &str = "stu";
pub const PREFIX_SUPERVISOR: &str = "sup";
pub const PREFIX_COMMITTEE_MEMBER: &str = "cmt";
pub const PREFIX_DECISION: &str = "dec";
pub const PREFIX_EXTERNAL_REVIEWER: &str = "rev";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_THESIS,
    PREFIX_MILESTONE,
    PREFIX_SUBMISSION,
    PREFIX_HISTORY,
    PREFIX_STUDENT,
    PREFIX_SUPERVISOR,
    PREFIX_COMMITTEE_MEMBER,
    PREFIX_DECISION,
    PREFIX_EXTERNAL_REVIEWER,
];
