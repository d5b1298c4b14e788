//! Course repository.

use grade_core::entities::Course;
use grade_core::enums::EntityKind;
use grade_core::grading::round_grade;
use grade_core::views::{CourseCurriculumEntry, CourseGradeEntry, CourseSummary, StudentRef};

use crate::error::DatabaseError;
use crate::helpers::{get_real, parse_date};
use crate::service::GradebookService;

fn row_to_summary(row: &libsql::Row) -> Result<CourseSummary, DatabaseError> {
    Ok(CourseSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        teacher_id: row.get(2)?,
        teacher_lastname: row.get(3)?,
        teacher_firstname: row.get(4)?,
    })
}

fn row_to_grade_entry(row: &libsql::Row) -> Result<CourseGradeEntry, DatabaseError> {
    Ok(CourseGradeEntry {
        validation_id: row.get(0)?,
        date: parse_date(&row.get::<String>(1)?)?,
        curriculum_name: row.get(2)?,
        student_lastname: row.get(3)?,
        student_firstname: row.get(4)?,
        validation_name: row.get(5)?,
        grade: round_grade(get_real(row, 6)?),
        coefficient: get_real(row, 7)?,
    })
}

impl GradebookService {
    pub async fn create_course(&self, name: &str, teacher: i64) -> Result<Course, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO courses (name, teacher) VALUES (?1, ?2)",
                libsql::params![name, teacher],
            )
            .await?;
        let id = self.last_id();
        tracing::debug!(id, teacher, "created course");

        Ok(Course {
            id,
            name: name.to_string(),
            teacher,
        })
    }

    pub async fn get_course(&self, id: i64) -> Result<Course, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, name, teacher FROM courses WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Course,
            id,
        })?;
        Ok(Course {
            id: row.get(0)?,
            name: row.get(1)?,
            teacher: row.get(2)?,
        })
    }

    /// Every course with its teacher.
    pub async fn list_courses(&self) -> Result<Vec<CourseSummary>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT c.id, c.name, t.id, t.lastname, t.firstname
                 FROM courses c
                 JOIN persons t ON t.id = c.teacher
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

    /// Delete a course with its registrations, validations, and grades.
    pub async fn delete_course(&self, id: i64) -> Result<(), DatabaseError> {
        self.delete_by_id(EntityKind::Course, id).await
    }

    pub async fn course_name(&self, id: i64) -> Result<String, DatabaseError> {
        self.single_text(
            "SELECT name FROM courses WHERE id = ?1",
            EntityKind::Course,
            id,
        )
        .await
    }

    /// Curriculums a course counts for, with the ECTS it carries in each.
    pub async fn list_curriculums_of_course(
        &self,
        course: i64,
    ) -> Result<Vec<CourseCurriculumEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT cu.id, cu.name, cc.ects
                 FROM course_curriculum cc
                 JOIN curriculums cu ON cu.id = cc.curriculum
                 WHERE cc.course = ?1
                 ORDER BY cu.name, cu.id",
                libsql::params![course],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(CourseCurriculumEntry {
                curriculum_id: row.get(0)?,
                name: row.get(1)?,
                ects: get_real(&row, 2)?,
            });
        }
        Ok(results)
    }

    /// Persons enrolled in at least one curriculum the course counts for.
    pub async fn list_students_of_course(
        &self,
        course: i64,
    ) -> Result<Vec<StudentRef>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT p.id, p.lastname, p.firstname
                 FROM persons p
                 JOIN curriculum_person cp ON cp.student = p.id
                 JOIN course_curriculum cc ON cc.curriculum = cp.curriculum
                 WHERE cc.course = ?1
                 ORDER BY p.lastname, p.firstname, p.id",
                libsql::params![course],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(StudentRef {
                id: row.get(0)?,
                lastname: row.get(1)?,
                firstname: row.get(2)?,
            });
        }
        Ok(results)
    }

    /// Recorded grades of a course, one row per curriculum shared by the
    /// course and the student, most recent validation first.
    pub async fn list_grades_of_course(
        &self,
        course: i64,
    ) -> Result<Vec<CourseGradeEntry>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT v.id, v.date, cu.name, p.lastname, p.firstname, v.name, g.grade, v.coefficient
                 FROM validations v
                 JOIN grades g ON g.validation = v.id
                 JOIN persons p ON p.id = g.student
                 JOIN curriculum_person cp ON cp.student = g.student
                 JOIN course_curriculum cc ON cc.course = v.course AND cc.curriculum = cp.curriculum
                 JOIN curriculums cu ON cu.id = cc.curriculum
                 WHERE v.course = ?1
                 ORDER BY v.date DESC, v.id, p.lastname, p.firstname, cu.name",
                libsql::params![course],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_grade_entry(&row)?);
        }
        Ok(results)
    }
}
