//! Status enums, submission kinds, committee decisions, and entity types.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums carry their fixed transition table in `allowed_next_states()`;
//! the workflow service checks it on every write and never infers legality
//! from other fields.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::WorkflowError;

/// Normalize user-facing spellings (`UnderReview`, `under-review`,
/// `UNDER_REVIEW`) to the stored `snake_case` form.
fn normalize_variant(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.chars().any(|ch| ch.is_ascii_lowercase()) {
        return raw.to_ascii_lowercase().replace(['-', ' '], "_");
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        match ch {
            '-' | ' ' => out.push('_'),
            c if c.is_ascii_uppercase() => {
                if !out.is_empty() && !out.ends_with('_') {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
    out
}

fn parse_variant<T: Copy>(
    raw: &str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    field: &str,
) -> Result<T, WorkflowError> {
    let normalized = normalize_variant(raw);
    all.iter()
        .copied()
        .find(|variant| as_str(*variant) == normalized)
        .ok_or_else(|| {
            let expected = all.iter().map(|v| as_str(*v)).collect::<Vec<_>>().join(", ");
            WorkflowError::Validation(format!(
                "unknown {field} '{raw}' (expected one of: {expected})"
            ))
        })
}

// ---------------------------------------------------------------------------
// ThesisStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a thesis.
///
/// ```text
/// draft → submitted → under_review → approved → final_submitted → completed
///             ↑             ↓
///             └── revision_requested
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ThesisStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    RevisionRequested,
    FinalSubmitted,
    Completed,
}

impl ThesisStatus {
    pub const ALL: [Self; 7] = [
        Self::Draft,
        Self::Submitted,
        Self::UnderReview,
        Self::Approved,
        Self::RevisionRequested,
        Self::FinalSubmitted,
        Self::Completed,
    ];

    /// Status every new thesis starts in.
    pub const INITIAL: Self = Self::Draft;

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft | Self::RevisionRequested => &[Self::Submitted],
            Self::Submitted => &[Self::UnderReview],
            Self::UnderReview => &[Self::Approved, Self::RevisionRequested],
            Self::Approved => &[Self::FinalSubmitted],
            Self::FinalSubmitted => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::RevisionRequested => "revision_requested",
            Self::FinalSubmitted => "final_submitted",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for ThesisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThesisStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "thesis status")
    }
}

// ---------------------------------------------------------------------------
// MilestoneStatus
// ---------------------------------------------------------------------------

/// Status of a milestone. Strictly linear, no revision loop.
///
/// ```text
/// planned → in_progress → submitted → accepted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Planned,
    InProgress,
    Submitted,
    Accepted,
}

impl MilestoneStatus {
    pub const ALL: [Self; 4] = [
        Self::Planned,
        Self::InProgress,
        Self::Submitted,
        Self::Accepted,
    ];

    pub const INITIAL: Self = Self::Planned;

    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Planned => &[Self::InProgress],
            Self::InProgress => &[Self::Submitted],
            Self::Submitted => &[Self::Accepted],
            Self::Accepted => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Submitted => "submitted",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MilestoneStatus {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "milestone status")
    }
}

// ---------------------------------------------------------------------------
// SubmissionKind
// ---------------------------------------------------------------------------

/// Kind of document handed in against a thesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    Proposal,
    Interim,
    Final,
}

impl SubmissionKind {
    pub const ALL: [Self; 3] = [Self::Proposal, Self::Interim, Self::Final];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposal => "proposal",
            Self::Interim => "interim",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "submission kind")
    }
}

// ---------------------------------------------------------------------------
// CommitteeDecision
// ---------------------------------------------------------------------------

/// A committee member's verdict on a thesis under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommitteeDecision {
    Approve,
    Reject,
    MinorRevision,
}

impl CommitteeDecision {
    pub const ALL: [Self; 3] = [Self::Approve, Self::Reject, Self::MinorRevision];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::MinorRevision => "minor_revision",
        }
    }
}

impl fmt::Display for CommitteeDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitteeDecision {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "committee decision")
    }
}

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Entity kinds, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Thesis,
    Milestone,
    Submission,
    StatusHistory,
    Student,
    Supervisor,
    CommitteeMember,
    Decision,
    ExternalReviewer,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Thesis => "thesis",
            Self::Milestone => "milestone",
            Self::Submission => "submission",
            Self::StatusHistory => "status_history",
            Self::Student => "student",
            Self::Supervisor => "supervisor",
            Self::CommitteeMember => "committee_member",
            Self::Decision => "decision",
            Self::ExternalReviewer => "external_reviewer",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
