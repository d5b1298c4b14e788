//! Service layer exposing every gradebook operation.
//!
//! `GradebookService` wraps a `GradeDb` handle. All repo methods are
//! implemented as `impl GradebookService` blocks under `repos/`. Each write
//! is a single auto-committed statement; only the report queries open a
//! transaction, to read one consistent snapshot.

use grade_config::DatabaseConfig;
use grade_core::enums::EntityKind;

use crate::GradeDb;
use crate::error::DatabaseError;
use crate::helpers::entity_kind_to_table;

pub struct GradebookService {
    db: GradeDb,
}

impl GradebookService {
    /// Create a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: GradeDb::open_local(db_path).await?,
        })
    }

    /// Create a service over a remote libSQL endpoint.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the endpoint cannot be opened.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: GradeDb::open_remote(url, auth_token).await?,
        })
    }

    /// Open whichever store the configuration describes.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the configured store cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::new_remote(&config.url, &config.auth_token).await
        } else {
            Self::new_local(&config.path).await
        }
    }

    /// Create from an existing `GradeDb` (for testing).
    #[must_use]
    pub const fn from_db(db: GradeDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &GradeDb {
        &self.db
    }

    /// Id of the row inserted by the last successful INSERT on this connection.
    pub(crate) fn last_id(&self) -> i64 {
        self.db.conn().last_insert_rowid()
    }

    /// Delete the row with primary key `id`, reporting `NotFound` when none matched.
    pub(crate) async fn delete_by_id(
        &self,
        entity: EntityKind,
        id: i64,
    ) -> Result<(), DatabaseError> {
        let table = entity_kind_to_table(entity);
        let affected = self
            .db
            .conn()
            .execute(
                &format!("DELETE FROM {table} WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound { entity, id });
        }
        tracing::debug!(%entity, id, "deleted");
        Ok(())
    }

    /// Run a query expected to yield one TEXT value for the entity `id`.
    pub(crate) async fn single_text(
        &self,
        sql: &str,
        entity: EntityKind,
        id: i64,
    ) -> Result<String, DatabaseError> {
        let mut rows = self.db.conn().query(sql, libsql::params![id]).await?;
        let row = rows
            .next()
            .await?
            .ok_or(DatabaseError::NotFound { entity, id })?;
        Ok(row.get::<String>(0)?)
    }
}
