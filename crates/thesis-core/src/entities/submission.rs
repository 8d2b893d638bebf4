use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubmissionKind;

/// A dated document handed in against a thesis. Never implicitly superseded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Submission {
    pub id: String,
    pub thesis_id: String,
    pub kind: SubmissionKind,
    pub submitted_at: DateTime<Utc>,
    pub url: Option<String>,
    pub comment: Option<String>,
}
