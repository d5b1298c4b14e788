//! Validation repository.

use chrono::NaiveDate;

use grade_core::entities::Validation;
use grade_core::enums::EntityKind;
use grade_core::errors::check_weight;
use grade_core::grading::round_grade;
use grade_core::views::ValidationGrade;

use crate::error::DatabaseError;
use crate::helpers::{format_date, get_real, parse_date};
use crate::service::GradebookService;

const SELECT_COLS: &str = "id, course, name, date, coefficient";

fn row_to_validation(row: &libsql::Row) -> Result<Validation, DatabaseError> {
    Ok(Validation {
        id: row.get(0)?,
        course: row.get(1)?,
        name: row.get(2)?,
        date: parse_date(&row.get::<String>(3)?)?,
        coefficient: get_real(row, 4)?,
    })
}

impl GradebookService {
    pub async fn add_validation_to_course(
        &self,
        name: &str,
        coefficient: f64,
        date: NaiveDate,
        course: i64,
    ) -> Result<Validation, DatabaseError> {
        check_weight("coefficient", coefficient)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO validations (name, coefficient, date, course) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![name, coefficient, format_date(date), course],
            )
            .await?;
        let id = self.last_id();
        tracing::debug!(id, course, coefficient, "added validation");

        Ok(Validation {
            id,
            course,
            name: name.to_string(),
            date,
            coefficient,
        })
    }

    pub async fn get_validation(&self, id: i64) -> Result<Validation, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM validations WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Validation,
            id,
        })?;
        row_to_validation(&row)
    }

    pub async fn list_validations_of_course(
        &self,
        course: i64,
    ) -> Result<Vec<Validation>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM validations WHERE course = ?1 ORDER BY date, id"
                ),
                libsql::params![course],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_validation(&row)?);
        }
        Ok(results)
    }

    /// Full name of a validation: `"{course} - {validation}"`.
    pub async fn validation_name(&self, id: i64) -> Result<String, DatabaseError> {
        self.single_text(
            "SELECT c.name || ' - ' || v.name
             FROM validations v
             JOIN courses c ON c.id = v.course
             WHERE v.id = ?1",
            EntityKind::Validation,
            id,
        )
        .await
    }

    /// Grades recorded for a validation, best first.
    pub async fn list_grades_of_validation(
        &self,
        validation: i64,
    ) -> Result<Vec<ValidationGrade>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT p.id, g.grade, p.lastname, p.firstname
                 FROM grades g
                 JOIN persons p ON p.id = g.student
                 WHERE g.validation = ?1
                 ORDER BY g.grade DESC, p.lastname, p.firstname",
                libsql::params![validation],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(ValidationGrade {
                student_id: row.get(0)?,
                grade: round_grade(get_real(&row, 1)?),
                lastname: row.get(2)?,
                firstname: row.get(3)?,
            });
        }
        Ok(results)
    }
}
