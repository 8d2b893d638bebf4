//! Service layer orchestrating the workflow.
//!
//! `WorkflowService` wraps `ThesisDb`. All operations are implemented as
//! `impl WorkflowService` blocks in `repos/`. Every mutation follows the
//! same protocol:
//! 1. Take the write gate and begin a transaction
//! 2. Check existence and legality, reading through the transaction
//! 3. Execute SQL (status update and ledger append for transitions)
//! 4. Commit, or roll back on any error

use crate::ThesisDb;
use crate::error::DatabaseError;

/// The workflow facade: one call per use case, one error taxonomy.
pub struct WorkflowService {
    db: ThesisDb,
}

impl WorkflowService {
    /// Open (or create) a local database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ThesisDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `ThesisDb`.
    #[must_use]
    pub const fn from_db(db: ThesisDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ThesisDb {
        &self.db
    }
}
