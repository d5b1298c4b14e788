//! Schema migrations, compiled into the binary and applied whenever a store
//! is opened. Every statement is `IF NOT EXISTS`, so reopening is a no-op.

use crate::GradeDb;
use crate::error::DatabaseError;

/// Initial schema: 7 tables, 7 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl GradeDb {
    /// Apply the embedded schema.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
