use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CommitteeDecision;

/// Reference data: a member of a review committee.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommitteeMember {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// An append-only committee decision on a thesis. The latest entry per
/// member is the one that counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DecisionEntry {
    pub id: String,
    pub thesis_id: String,
    pub committee_member_id: String,
    pub decision: CommitteeDecision,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
