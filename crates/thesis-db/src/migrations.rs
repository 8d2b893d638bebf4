//! Embedded schema migrations, applied in order on every open.
//!
//! Statements are written with `IF NOT EXISTS`, so re-running is a no-op.

use crate::ThesisDb;
use crate::error::DatabaseError;

/// `(name, sql)` pairs in application order.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial",
    // 10 tables, their indexes, and the append-only trigger on status_history.
    include_str!("../migrations/001_initial.sql"),
)];

impl ThesisDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        for (name, sql) in MIGRATIONS {
            tracing::debug!(migration = *name, "applying migration");
            self.conn
                .execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
        }
        Ok(())
    }
}
