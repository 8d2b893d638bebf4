use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MilestoneStatus;

/// A sub-deliverable of exactly one thesis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Milestone {
    pub id: String,
    pub thesis_id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: MilestoneStatus,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}
