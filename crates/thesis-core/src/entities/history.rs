use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ThesisStatus;

/// One row of the append-only status ledger. Never mutated once written.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusHistoryEntry {
    pub id: String,
    pub thesis_id: String,
    pub prior_status: ThesisStatus,
    pub new_status: ThesisStatus,
    pub changed_at: DateTime<Utc>,
    pub note: Option<String>,
}
