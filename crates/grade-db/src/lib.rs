//! # grade-db
//!
//! libSQL storage for the gradebook.
//!
//! Holds all relational state: persons, curriculums, courses, course
//! registrations, enrollments, validations, and grades. Every CRUD and
//! listing operation lives on [`service::GradebookService`], one repo module
//! per table, and the weighted average reports are computed from a snapshot
//! read inside a single transaction.
//!
//! Works against a local file, `:memory:`, or a remote libSQL endpoint.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Store handle. Owns the libSQL database and the single connection every
/// operation goes through. Dropping it releases the connection.
pub struct GradeDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl GradeDb {
    /// Open a local database at the given path (or `":memory:"`).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db, false).await
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the endpoint cannot be reached or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db, true).await
    }

    async fn init(db: libsql::Database, remote: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let grade_db = Self { db, conn, remote };
        grade_db.run_migrations().await?;
        tracing::debug!(remote, "gradebook store ready");
        Ok(grade_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote endpoint.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> GradeDb {
        GradeDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "persons",
            "curriculums",
            "courses",
            "course_curriculum",
            "curriculum_person",
            "validations",
            "grades",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
        assert!(!db.is_remote());
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn dangling_reference_rejected() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute("INSERT INTO courses (name, teacher) VALUES ('BDD', 999)", ())
            .await;
        assert!(result.is_err(), "FK to missing person should be rejected");
    }

    #[tokio::test]
    async fn negative_weights_rejected_by_schema() {
        let db = test_db().await;
        db.conn()
            .execute_batch(
                "INSERT INTO persons (lastname, firstname) VALUES ('Turing', 'Alan');
                 INSERT INTO courses (name, teacher) VALUES ('Calculabilité', 1);",
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO validations (course, name, date, coefficient) VALUES (1, 'Exam', '2024-01-10', -1)",
                (),
            )
            .await;
        assert!(result.is_err(), "CHECK (coefficient >= 0) should reject");
    }

    #[tokio::test]
    async fn file_backed_store_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("grades.db");
        let path = path.to_string_lossy();

        {
            let db = GradeDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO persons (lastname, firstname) VALUES ('Lovelace', 'Ada')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = GradeDb::open_local(&path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT lastname FROM persons", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Lovelace");
    }
}
