//! All-or-nothing write scope over the shared connection.
//!
//! While a unit of work is open, readers wait on the gate, so nothing
//! outside the transaction observes its uncommitted rows.

use tokio::sync::RwLockWriteGuard;

use thesis_core::errors::WorkflowError;

use crate::error::DatabaseError;

/// An open transaction plus the write gate guarding it.
///
/// Dropping a `UnitOfWork` without calling [`commit`](Self::commit) leaves
/// the rollback to libSQL; service code always ends it through
/// [`finish`](Self::finish).
pub struct UnitOfWork<'a> {
    tx: libsql::Transaction,
    _gate: RwLockWriteGuard<'a, ()>,
}

impl<'a> UnitOfWork<'a> {
    pub(crate) const fn new(tx: libsql::Transaction, gate: RwLockWriteGuard<'a, ()>) -> Self {
        Self { tx, _gate: gate }
    }

    /// Connection bound to the open transaction.
    #[must_use]
    pub fn conn(&self) -> &libsql::Connection {
        &self.tx
    }

    /// Generate a prefixed ID inside the transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        crate::generate_id(self.conn(), prefix).await
    }

    /// Commit and release the write gate.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the commit fails.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Roll back and release the write gate.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the rollback fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Commit on `Ok`, roll back on `Err`, and hand the result back.
    ///
    /// A failed rollback is logged; the original error still wins.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or `StorageUnavailable` if the
    /// commit fails.
    pub async fn finish<T>(self, result: Result<T, WorkflowError>) -> Result<T, WorkflowError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback failed");
                }
                Err(err)
            }
        }
    }
}
