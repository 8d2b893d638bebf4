//! Thesis creation input and update builder.

use chrono::NaiveDate;
use serde::Serialize;

/// Input for `create_thesis`. New theses always start in `draft`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewThesis {
    pub title: String,
    pub abstract_text: Option<String>,
    pub student_id: String,
    pub supervisor_id: Option<String>,
    pub submission_deadline: Option<NaiveDate>,
}

impl NewThesis {
    #[must_use]
    pub fn new(title: impl Into<String>, student_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            student_id: student_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = Some(abstract_text.into());
        self
    }

    #[must_use]
    pub fn with_supervisor(mut self, supervisor_id: impl Into<String>) -> Self {
        self.supervisor_id = Some(supervisor_id.into());
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.submission_deadline = Some(deadline);
        self
    }
}

/// Editable thesis fields. Status and supervisor have their own operations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThesisUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_deadline: Option<Option<NaiveDate>>,
}

impl ThesisUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.abstract_text.is_none()
            && self.student_id.is_none()
            && self.submission_deadline.is_none()
    }
}

pub struct ThesisUpdateBuilder(ThesisUpdate);

impl ThesisUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ThesisUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn abstract_text(mut self, abstract_text: Option<String>) -> Self {
        self.0.abstract_text = Some(abstract_text);
        self
    }

    #[must_use]
    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.0.student_id = Some(student_id.into());
        self
    }

    #[must_use]
    pub fn submission_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.0.submission_deadline = Some(deadline);
        self
    }

    #[must_use]
    pub fn build(self) -> ThesisUpdate {
        self.0
    }
}

impl Default for ThesisUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
