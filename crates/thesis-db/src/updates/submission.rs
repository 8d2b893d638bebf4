//! Submission input and update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thesis_core::enums::SubmissionKind;

/// Input for `record_submission`. `submitted_at` defaults to now.
#[derive(Debug, Clone, Serialize)]
pub struct NewSubmission {
    pub thesis_id: String,
    pub kind: SubmissionKind,
    pub submitted_at: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub comment: Option<String>,
}

impl NewSubmission {
    #[must_use]
    pub fn new(thesis_id: impl Into<String>, kind: SubmissionKind) -> Self {
        Self {
            thesis_id: thesis_id.into(),
            kind,
            submitted_at: None,
            url: None,
            comment: None,
        }
    }

    #[must_use]
    pub fn at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(submitted_at);
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmissionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SubmissionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Option<String>>,
}

impl SubmissionUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.submitted_at.is_none()
            && self.url.is_none()
            && self.comment.is_none()
    }
}

pub struct SubmissionUpdateBuilder(SubmissionUpdate);

impl SubmissionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(SubmissionUpdate::default())
    }

    #[must_use]
    pub fn kind(mut self, kind: SubmissionKind) -> Self {
        self.0.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.0.submitted_at = Some(submitted_at);
        self
    }

    #[must_use]
    pub fn url(mut self, url: Option<String>) -> Self {
        self.0.url = Some(url);
        self
    }

    #[must_use]
    pub fn comment(mut self, comment: Option<String>) -> Self {
        self.0.comment = Some(comment);
        self
    }

    #[must_use]
    pub fn build(self) -> SubmissionUpdate {
        self.0
    }
}

impl Default for SubmissionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
