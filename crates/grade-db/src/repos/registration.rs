//! Link tables: course registrations with their ECTS, and student enrollments.

use grade_core::entities::{CourseRegistration, Enrollment};
use grade_core::enums::EntityKind;
use grade_core::errors::check_weight;

use crate::error::DatabaseError;
use crate::service::GradebookService;

impl GradebookService {
    /// Enroll a person as a student of a curriculum.
    pub async fn register_person_to_curriculum(
        &self,
        person: i64,
        curriculum: i64,
    ) -> Result<Enrollment, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO curriculum_person (student, curriculum) VALUES (?1, ?2)",
                libsql::params![person, curriculum],
            )
            .await?;
        tracing::debug!(person, curriculum, "enrolled student");
        Ok(Enrollment {
            student: person,
            curriculum,
        })
    }

    /// Count a course within a curriculum for `ects` credits.
    pub async fn register_course_to_curriculum(
        &self,
        course: i64,
        curriculum: i64,
        ects: f64,
    ) -> Result<CourseRegistration, DatabaseError> {
        check_weight("ects", ects)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO course_curriculum (course, curriculum, ects) VALUES (?1, ?2, ?3)",
                libsql::params![course, curriculum, ects],
            )
            .await?;
        tracing::debug!(course, curriculum, ects, "registered course");
        Ok(CourseRegistration {
            course,
            curriculum,
            ects,
        })
    }

    /// Remove a course from a curriculum. Validations and grades of the
    /// course are untouched.
    pub async fn delete_course_from_curriculum(
        &self,
        course: i64,
        curriculum: i64,
    ) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM course_curriculum WHERE curriculum = ?1 AND course = ?2",
                libsql::params![curriculum, course],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NotFound {
                entity: EntityKind::CourseRegistration,
                id: course,
            });
        }
        tracing::debug!(course, curriculum, "unregistered course");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_school, test_service};

    #[tokio::test]
    async fn duplicate_enrollment_rejected() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        let result = svc
            .register_person_to_curriculum(school.alice, school.curriculum)
            .await;
        assert!(matches!(result, Err(DatabaseError::LibSql(_))));
    }

    #[tokio::test]
    async fn duplicate_course_registration_rejected() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        let result = svc
            .register_course_to_curriculum(school.databases, school.curriculum, 3.0)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn negative_ects_rejected_before_reaching_store() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        svc.delete_course_from_curriculum(school.networks, school.curriculum)
            .await
            .unwrap();
        let result = svc
            .register_course_to_curriculum(school.networks, school.curriculum, -2.0)
            .await;
        assert!(matches!(result, Err(DatabaseError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn unregister_course() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        svc.delete_course_from_curriculum(school.databases, school.curriculum)
            .await
            .unwrap();

        let courses = svc
            .list_courses_of_curriculum(school.curriculum)
            .await
            .unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].course_id, school.networks);

        let again = svc
            .delete_course_from_curriculum(school.databases, school.curriculum)
            .await;
        assert!(matches!(
            again,
            Err(DatabaseError::NotFound {
                entity: EntityKind::CourseRegistration,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn enrollment_to_missing_curriculum_rejected() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        let result = svc
            .register_person_to_curriculum(school.alice, school.curriculum + 50)
            .await;
        assert!(result.is_err());
    }
}
