//! Weighted average reports.
//!
//! Both reports load a [`GradeSheet`] per curriculum and let the engine in
//! `grade_core::grading` do the arithmetic. All reads of one report happen
//! inside a single transaction, so course registrations, validations, and
//! grades are seen at the same point in time. Rounding happens once, on the
//! value handed back to the caller.

use grade_core::grading::{GradeSheet, round_grade};
use grade_core::views::{CurriculumAverage, StudentAverage};

use crate::error::DatabaseError;
use crate::helpers::get_real;
use crate::service::GradebookService;

/// Load everything needed to average `curriculum`.
///
/// With `student` set, only that student's grades are loaded.
async fn load_sheet(
    conn: &libsql::Connection,
    curriculum: i64,
    student: Option<i64>,
) -> Result<GradeSheet, DatabaseError> {
    let mut sheet = GradeSheet::new();

    let mut rows = conn
        .query(
            "SELECT course, ects FROM course_curriculum WHERE curriculum = ?1 ORDER BY course",
            libsql::params![curriculum],
        )
        .await?;
    while let Some(row) = rows.next().await? {
        sheet.add_course(row.get(0)?, get_real(&row, 1)?);
    }

    let mut rows = conn
        .query(
            "SELECT v.course, v.id, v.coefficient
             FROM validations v
             JOIN course_curriculum cc ON cc.course = v.course
             WHERE cc.curriculum = ?1
             ORDER BY v.course, v.id",
            libsql::params![curriculum],
        )
        .await?;
    while let Some(row) = rows.next().await? {
        sheet.add_validation(row.get(0)?, row.get(1)?, get_real(&row, 2)?);
    }

    let grade_sql = "SELECT g.validation, g.student, g.grade
         FROM grades g
         JOIN validations v ON v.id = g.validation
         JOIN course_curriculum cc ON cc.course = v.course
         WHERE cc.curriculum = ?1";
    let mut rows = match student {
        Some(student) => {
            conn.query(
                &format!("{grade_sql} AND g.student = ?2"),
                libsql::params![curriculum, student],
            )
            .await?
        }
        None => conn.query(grade_sql, libsql::params![curriculum]).await?,
    };
    while let Some(row) = rows.next().await? {
        sheet.record_grade(row.get(0)?, row.get(1)?, get_real(&row, 2)?);
    }

    tracing::debug!(
        curriculum,
        courses = sheet.courses().len(),
        grades = sheet.grade_count(),
        "loaded grade sheet"
    );
    Ok(sheet)
}

impl GradebookService {
    /// Weighted average of every student enrolled in a curriculum.
    ///
    /// Missing grades count as 0 and courses without any grade still weigh
    /// in with their ECTS. A curriculum without ECTS-weighted courses yields
    /// 0 for everyone. Ordered by last name, first name, id.
    pub async fn average_grades_of_students_in_curriculum(
        &self,
        curriculum: i64,
    ) -> Result<Vec<StudentAverage>, DatabaseError> {
        let tx = self.db().conn().transaction().await?;
        let sheet = load_sheet(&tx, curriculum, None).await?;

        let mut rows = tx
            .query(
                "SELECT p.id, p.lastname, p.firstname
                 FROM persons p
                 JOIN curriculum_person cp ON cp.student = p.id
                 WHERE cp.curriculum = ?1
                 ORDER BY p.lastname, p.firstname, p.id",
                libsql::params![curriculum],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            let student_id: i64 = row.get(0)?;
            results.push(StudentAverage {
                student_id,
                lastname: row.get(1)?,
                firstname: row.get(2)?,
                average: round_grade(sheet.curriculum_average(student_id)),
            });
        }
        drop(rows);
        tx.commit().await?;

        tracing::debug!(curriculum, students = results.len(), "computed curriculum averages");
        Ok(results)
    }

    /// Weighted average of a student in each curriculum that concerns them.
    ///
    /// Covers the curriculums the student is enrolled in plus any curriculum
    /// registering a course in which the student holds a grade. Each average
    /// spans all courses of the curriculum. Ordered by curriculum name, id.
    pub async fn curriculums_of_student(
        &self,
        student: i64,
    ) -> Result<Vec<CurriculumAverage>, DatabaseError> {
        let tx = self.db().conn().transaction().await?;

        let mut rows = tx
            .query(
                "SELECT c.id, c.name
                 FROM curriculums c
                 WHERE c.id IN (SELECT curriculum FROM curriculum_person WHERE student = ?1)
                    OR c.id IN (
                        SELECT cc.curriculum
                        FROM grades g
                        JOIN validations v ON v.id = g.validation
                        JOIN course_curriculum cc ON cc.course = v.course
                        WHERE g.student = ?1
                    )
                 ORDER BY c.name, c.id",
                libsql::params![student],
            )
            .await?;
        let mut curriculums: Vec<(i64, String)> = Vec::new();
        while let Some(row) = rows.next().await? {
            curriculums.push((row.get(0)?, row.get(1)?));
        }
        drop(rows);

        let mut results = Vec::with_capacity(curriculums.len());
        for (curriculum_id, name) in curriculums {
            let sheet = load_sheet(&tx, curriculum_id, Some(student)).await?;
            results.push(CurriculumAverage {
                curriculum_id,
                name,
                average: round_grade(sheet.curriculum_average(student)),
            });
        }
        tx.commit().await?;

        tracing::debug!(student, curriculums = results.len(), "computed student averages");
        Ok(results)
    }
}
