//! # thesis-db
//!
//! libSQL storage and the workflow service for thesis tracking.
//!
//! Holds all relational state: theses, milestones, submissions, the
//! append-only status ledger, reference data (students, supervisors,
//! committee members) and committee decisions. Every composite mutation
//! runs inside a [`UnitOfWork`] so a status change and its ledger entry
//! commit or roll back together. Reads go through a [`ReadConn`] and only
//! ever see committed rows.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod unit_of_work;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use std::ops::Deref;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{RwLock, RwLockReadGuard};

pub use service::WorkflowService;
pub use unit_of_work::UnitOfWork;

/// Central database handle.
///
/// Wraps one libSQL database and its single connection. A unit of work
/// holds the gate exclusively for the life of its transaction; readers
/// share it, so no read runs inside an open transaction.
pub struct ThesisDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    gate: RwLock<()>,
}

/// Shared read access to the connection, outside any transaction.
pub struct ReadConn<'a> {
    conn: &'a libsql::Connection,
    _gate: RwLockReadGuard<'a, ()>,
}

impl ReadConn<'_> {
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        self.conn
    }
}

impl Deref for ReadConn<'_> {
    type Target = libsql::Connection;

    fn deref(&self) -> &Self::Target {
        self.conn
    }
}

impl ThesisDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let thesis_db = Self {
            db,
            conn,
            gate: RwLock::new(()),
        };
        thesis_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(thesis_db)
    }

    /// Wait until no unit of work is open, then read.
    ///
    /// The transaction of a [`UnitOfWork`] runs on this same connection, so
    /// reading without the gate would observe its uncommitted rows.
    pub async fn read(&self) -> ReadConn<'_> {
        ReadConn {
            conn: &self.conn,
            _gate: self.gate.read().await,
        }
    }

    /// Wait for exclusive use of the gate, then open a transaction.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started.
    pub async fn begin(&self) -> Result<UnitOfWork<'_>, DatabaseError> {
        let gate = self.gate.write().await;
        let tx = self.conn.transaction().await?;
        Ok(UnitOfWork::new(tx, gate))
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"ths-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        generate_id(self.read().await.conn(), prefix).await
    }
}

/// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
pub(crate) async fn generate_id(
    conn: &libsql::Connection,
    prefix: &str,
) -> Result<String, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
            (),
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<String>(0)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use thesis_core::ids::{ALL_PREFIXES, PREFIX_THESIS};

    async fn test_db() -> ThesisDb {
        ThesisDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "students",
            "supervisors",
            "committee_members",
            "external_reviewers",
            "theses",
            "milestones",
            "submissions",
            "status_history",
            "thesis_committee",
            "committee_decisions",
        ];
        for table in &tables {
            let mut rows = db
                .read()
                .await
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let mut rows = db.read().await.query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn generate_id_format() {
        let db = test_db().await;
        for prefix in ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            let (head, hex) = id.split_once('-').unwrap();
            assert_eq!(head, *prefix);
            assert_eq!(hex.len(), 8);
            assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[tokio::test]
    async fn generate_id_unique() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..200 {
            assert!(ids.insert(db.generate_id(PREFIX_THESIS).await.unwrap()));
        }
    }

    #[tokio::test]
    async fn history_rows_cannot_be_updated() {
        let db = test_db().await;
        db.read()
            .await
            .execute_batch(
                "INSERT INTO students (id, name, email) VALUES ('stu-1', 'Ada', 'ada@uni.edu');
                 INSERT INTO theses (id, title, student_id, status, created_at, updated_at)
                 VALUES ('ths-1', 'T', 'stu-1', 'submitted', 'x', 'x');
                 INSERT INTO status_history (id, thesis_id, prior_status, new_status, changed_at)
                 VALUES ('hst-1', 'ths-1', 'draft', 'submitted', 'x');",
            )
            .await
            .unwrap();
        let result = db
            .read()
            .await
            .execute("UPDATE status_history SET note = 'edited' WHERE id = 'hst-1'", ())
            .await;
        assert!(result.is_err());
    }
}
