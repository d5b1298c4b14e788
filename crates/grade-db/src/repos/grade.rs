//! Grade repository.

use grade_core::entities::Grade;
use grade_core::errors::check_grade;

use crate::error::DatabaseError;
use crate::helpers::get_real;
use crate::service::GradebookService;

impl GradebookService {
    /// Record a student's grade on a validation. A second grade for the same
    /// pair violates the primary key.
    pub async fn add_grade(
        &self,
        validation: i64,
        student: i64,
        grade: f64,
    ) -> Result<Grade, DatabaseError> {
        check_grade(grade)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO grades (validation, student, grade) VALUES (?1, ?2, ?3)",
                libsql::params![validation, student, grade],
            )
            .await?;
        tracing::debug!(validation, student, "recorded grade");
        Ok(Grade {
            validation,
            student,
            grade,
        })
    }

    pub async fn get_grade(
        &self,
        validation: i64,
        student: i64,
    ) -> Result<Option<Grade>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT validation, student, grade FROM grades WHERE validation = ?1 AND student = ?2",
                libsql::params![validation, student],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(Grade {
                validation: row.get(0)?,
                student: row.get(1)?,
                grade: get_real(&row, 2)?,
            })),
            None => Ok(None),
        }
    }
}
