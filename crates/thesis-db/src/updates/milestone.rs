//! Milestone update builder.

use chrono::NaiveDate;
use serde::Serialize;

/// Editable milestone fields. Status changes go through `transition_milestone`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MilestoneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl MilestoneUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.due_date.is_none() && self.notes.is_none()
    }
}

pub struct MilestoneUpdateBuilder(MilestoneUpdate);

impl MilestoneUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MilestoneUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn build(self) -> MilestoneUpdate {
        self.0
    }
}

impl Default for MilestoneUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
