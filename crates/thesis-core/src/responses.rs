//! Composite read models returned by the workflow service and printed by
//! the `thesis` CLI.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{CommitteeMember, DecisionEntry, Thesis};
use crate::enums::{CommitteeDecision, ThesisStatus};

/// Number of theses currently in one status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ThesisStatus,
    pub count: u64,
}

/// Response from `thesis dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardSummary {
    /// One entry per status, in lifecycle order, zero counts included.
    pub counts: Vec<StatusCount>,
    pub total: u64,
    /// Most recently updated theses first.
    pub recent: Vec<Thesis>,
}

/// A committee member together with their latest decision, if any.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MemberDecision {
    pub member: CommitteeMember,
    pub latest: Option<DecisionEntry>,
}

/// Whether a thesis's committee currently allows `under_review -> approved`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommitteeStatus {
    pub thesis_id: String,
    pub can_approve: bool,
    pub reason: Option<String>,
    pub members: Vec<MemberDecision>,
}

impl CommitteeStatus {
    /// Evaluate the approval guard.
    ///
    /// A thesis without a committee may always be approved. Otherwise every
    /// member must have decided and no latest decision may be `reject`.
    #[must_use]
    pub fn evaluate(thesis_id: impl Into<String>, members: Vec<MemberDecision>) -> Self {
        let pending = members.iter().any(|m| m.latest.is_none());
        let rejected = members.iter().any(|m| {
            m.latest
                .as_ref()
                .is_some_and(|d| d.decision == CommitteeDecision::Reject)
        });

        let reason = if pending {
            Some("all committee decisions must be submitted before approval".to_string())
        } else if rejected {
            Some("one or more committee members rejected the thesis".to_string())
        } else {
            None
        };

        Self {
            thesis_id: thesis_id.into(),
            can_approve: reason.is_none(),
            reason,
            members,
        }
    }
}
