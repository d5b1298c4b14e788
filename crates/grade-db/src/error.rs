//! Database error types for grade-db.

use grade_core::enums::EntityKind;
use grade_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A lookup or delete by id matched zero rows.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// An argument violates a domain constraint.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(message) => Self::InvalidInput(message),
        }
    }
}
