//! Storage-layer errors and their mapping onto the workflow taxonomy.

use thesis_core::errors::WorkflowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A statement failed or a column held something unparseable.
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    /// A statement that always yields a row (e.g. `randomblob`) yielded none.
    #[error("No result returned")]
    NoResult,

    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Every storage failure surfaces to callers as `StorageUnavailable`; the
/// enclosing unit of work has already been rolled back.
impl From<DatabaseError> for WorkflowError {
    fn from(error: DatabaseError) -> Self {
        tracing::warn!(%error, "storage operation failed");
        Self::StorageUnavailable(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_become_unavailable() {
        let err: WorkflowError = DatabaseError::Query("bad column".into()).into();
        assert!(matches!(err, WorkflowError::StorageUnavailable(ref msg) if msg.contains("bad column")));
    }
}
