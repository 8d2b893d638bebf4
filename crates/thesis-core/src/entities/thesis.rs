use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ThesisStatus;

/// The primary work item tracked through the workflow.
///
/// `status` and the two assignment columns (`supervisor_id`,
/// `external_reviewer_id`) are only changed through the workflow service;
/// `updated_at` is refreshed on every accepted mutation of the row.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Thesis {
    pub id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub student_id: String,
    pub supervisor_id: Option<String>,
    pub external_reviewer_id: Option<String>,
    pub submission_deadline: Option<NaiveDate>,
    pub status: ThesisStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
