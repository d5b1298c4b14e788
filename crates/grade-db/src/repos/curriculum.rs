//! Curriculum repository.

use grade_core::entities::Curriculum;
use grade_core::enums::EntityKind;
use grade_core::views::{CurriculumCourse, CurriculumSummary};

use crate::error::DatabaseError;
use crate::helpers::get_real;
use crate::service::GradebookService;

fn row_to_curriculum(row: &libsql::Row) -> Result<Curriculum, DatabaseError> {
    Ok(Curriculum {
        id: row.get(0)?,
        name: row.get(1)?,
        secretary: row.get(2)?,
        director: row.get(3)?,
    })
}

fn row_to_summary(row: &libsql::Row) -> Result<CurriculumSummary, DatabaseError> {
    Ok(CurriculumSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        director_lastname: row.get(2)?,
        director_firstname: row.get(3)?,
        secretary_lastname: row.get(4)?,
        secretary_firstname: row.get(5)?,
    })
}

fn row_to_course(row: &libsql::Row) -> Result<CurriculumCourse, DatabaseError> {
    Ok(CurriculumCourse {
        course_id: row.get(0)?,
        course_name: row.get(1)?,
        teacher_lastname: row.get(2)?,
        teacher_firstname: row.get(3)?,
        ects: get_real(row, 4)?,
    })
}

impl GradebookService {
    pub async fn create_curriculum(
        &self,
        name: &str,
        secretary: i64,
        director: i64,
    ) -> Result<Curriculum, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO curriculums (name, secretary, director) VALUES (?1, ?2, ?3)",
                libsql::params![name, secretary, director],
            )
            .await?;
        let id = self.last_id();
        tracing::debug!(id, "created curriculum");

        Ok(Curriculum {
            id,
            name: name.to_string(),
            secretary,
            director,
        })
    }

    pub async fn get_curriculum(&self, id: i64) -> Result<Curriculum, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, secretary, director FROM curriculums WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Curriculum,
            id,
        })?;
        row_to_curriculum(&row)
    }

    /// Every curriculum with its director and secretary names.
    pub async fn list_curriculums(&self) -> Result<Vec<CurriculumSummary>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT c.id, c.name, dir.lastname, dir.firstname, sec.lastname, sec.firstname
                 FROM curriculums c
                 JOIN persons dir ON dir.id = c.director
                 JOIN persons sec ON sec.id = c.secretary
                 ORDER BY c.id",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_summary(&row)?);
        }
        Ok(results)
    }

    /// Delete a curriculum with its enrollments and course registrations.
    pub async fn delete_curriculum(&self, id: i64) -> Result<(), DatabaseError> {
        self.delete_by_id(EntityKind::Curriculum, id).await
    }

    pub async fn curriculum_name(&self, id: i64) -> Result<String, DatabaseError> {
        self.single_text(
            "SELECT name FROM curriculums WHERE id = ?1",
            EntityKind::Curriculum,
            id,
        )
        .await
    }

    /// Courses registered to a curriculum, with teacher names and ECTS.
    pub async fn list_courses_of_curriculum(
        &self,
        curriculum: i64,
    ) -> Result<Vec<CurriculumCourse>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT co.id, co.name, t.lastname, t.firstname, cc.ects
                 FROM course_curriculum cc
                 JOIN courses co ON co.id = cc.course
                 JOIN persons t ON t.id = co.teacher
                 WHERE cc.curriculum = ?1
                 ORDER BY co.name, co.id",
                libsql::params![curriculum],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_course(&row)?);
        }
        Ok(results)
    }
}
