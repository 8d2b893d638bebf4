//! The workflow error taxonomy.
//!
//! Every workflow operation returns one of these four kinds. Storage-layer
//! errors (`DatabaseError` in `thesis-db`) are translated into
//! `StorageUnavailable` at the service boundary; the CLI converges
//! everything into `anyhow`.

use thiserror::Error;

use crate::enums::EntityType;

/// Errors surfaced by workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A referenced thesis, milestone, supervisor, etc. does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityType, id: String },

    /// The requested status edge is not in the transition table, or a guard
    /// on the edge rejected it.
    #[error(
        "Invalid {entity} transition for {id}: {from} -> {to}{}",
        reason_suffix(.reason)
    )]
    InvalidTransition {
        entity: EntityType,
        id: String,
        from: String,
        to: String,
        reason: Option<String>,
    },

    /// Malformed input: unknown enum value, missing required field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The store could not complete the operation. Nothing was changed.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

#[allow(clippy::ref_option)]
fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map_or_else(String::new, |r| format!(" ({r})"))
}

impl WorkflowError {
    #[must_use]
    pub fn not_found(entity: EntityType, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Build an `InvalidTransition` for an edge missing from the table.
    #[must_use]
    pub fn invalid_transition(
        entity: EntityType,
        id: impl Into<String>,
        from: impl ToString,
        to: impl ToString,
    ) -> Self {
        Self::InvalidTransition {
            entity,
            id: id.into(),
            from: from.to_string(),
            to: to.to_string(),
            reason: None,
        }
    }

    /// Attach a reason to an `InvalidTransition`; other kinds pass through.
    #[must_use]
    pub fn with_reason(self, why: impl Into<String>) -> Self {
        match self {
            Self::InvalidTransition {
                entity, id, from, to, ..
            } => Self::InvalidTransition {
                entity,
                id,
                from,
                to,
                reason: Some(why.into()),
            },
            other => other,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    #[must_use]
    pub const fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}
