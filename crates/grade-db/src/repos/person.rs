//! Person repository: CRUD, enrollment counts, and per-student grade listing.

use grade_core::entities::Person;
use grade_core::enums::EntityKind;
use grade_core::grading::round_grade;
use grade_core::views::{PersonSummary, StudentGrade};

use crate::error::DatabaseError;
use crate::helpers::{get_real, parse_date};
use crate::service::GradebookService;

const SELECT_COLS: &str = "id, lastname, firstname, address, phone";

fn row_to_person(row: &libsql::Row) -> Result<Person, DatabaseError> {
    Ok(Person {
        id: row.get(0)?,
        lastname: row.get(1)?,
        firstname: row.get(2)?,
        address: row.get(3)?,
        phone: row.get(4)?,
    })
}

fn row_to_summary(row: &libsql::Row) -> Result<PersonSummary, DatabaseError> {
    Ok(PersonSummary {
        id: row.get(0)?,
        lastname: row.get(1)?,
        firstname: row.get(2)?,
        address: row.get(3)?,
        phone: row.get(4)?,
        curriculum_count: row.get(5)?,
    })
}

fn row_to_student_grade(row: &libsql::Row) -> Result<StudentGrade, DatabaseError> {
    Ok(StudentGrade {
        validation_id: row.get(0)?,
        date: parse_date(&row.get::<String>(1)?)?,
        curriculum_name: row.get(2)?,
        course_name: row.get(3)?,
        validation_name: row.get(4)?,
        grade: round_grade(get_real(row, 5)?),
    })
}

impl GradebookService {
    pub async fn create_person(
        &self,
        lastname: &str,
        firstname: &str,
        address: &str,
        phone: &str,
    ) -> Result<Person, DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO persons (lastname, firstname, address, phone) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![lastname, firstname, address, phone],
            )
            .await?;
        let id = self.last_id();
        tracing::debug!(id, "created person");

        Ok(Person {
            id,
            lastname: lastname.to_string(),
            firstname: firstname.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
        })
    }

    pub async fn get_person(&self, id: i64) -> Result<Person, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM persons WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Person,
            id,
        })?;
        row_to_person(&row)
    }

    /// Every person with the number of curriculums they are enrolled in.
    pub async fn list_persons(&self) -> Result<Vec<PersonSummary>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT p.id, p.lastname, p.firstname, p.address, p.phone, COUNT(cp.curriculum)
                 FROM persons p
                 LEFT JOIN curriculum_person cp ON cp.student = p.id
                 GROUP BY p.id
                 ORDER BY p.id",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_summary(&row)?);
        }
        Ok(results)
    }

    /// Delete a person. Enrollments, grades, and any curriculum or course
    /// referencing them cascade away.
    pub async fn delete_person(&self, id: i64) -> Result<(), DatabaseError> {
        self.delete_by_id(EntityKind::Person, id).await
    }

    /// `"{firstname} {lastname}"` of a person.
    pub async fn person_name(&self, id: i64) -> Result<String, DatabaseError> {
        self.single_text(
            "SELECT firstname || ' ' || lastname FROM persons WHERE id = ?1",
            EntityKind::Person,
            id,
        )
        .await
    }

    /// Every grade of a student, once per curriculum the course counts for,
    /// most recent validation first.
    pub async fn list_validations_of_student(
        &self,
        student: i64,
    ) -> Result<Vec<StudentGrade>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT v.id, v.date, cu.name, co.name, v.name, g.grade
                 FROM grades g
                 JOIN validations v ON v.id = g.validation
                 JOIN courses co ON co.id = v.course
                 JOIN course_curriculum cc ON cc.course = v.course
                 JOIN curriculums cu ON cu.id = cc.curriculum
                 WHERE g.student = ?1
                 ORDER BY v.date DESC, v.id, cu.name",
                libsql::params![student],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_student_grade(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{day, seed_school, test_service};

    #[tokio::test]
    async fn create_and_get_person() {
        let svc = test_service().await;
        let created = svc
            .create_person("Lovelace", "Ada", "12 St James's Square", "0207")
            .await
            .unwrap();
        let fetched = svc.get_person(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.full_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn ids_are_distinct() {
        let svc = test_service().await;
        let a = svc.create_person("A", "a", "", "").await.unwrap();
        let b = svc.create_person("B", "b", "", "").await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn list_counts_enrollments() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;

        let persons = svc.list_persons().await.unwrap();
        assert_eq!(persons.len(), 5);

        let alice = persons.iter().find(|p| p.id == school.alice).unwrap();
        assert_eq!(alice.curriculum_count, 1);
        let teacher = persons.iter().find(|p| p.id == school.teacher).unwrap();
        assert_eq!(teacher.curriculum_count, 0);
    }

    #[tokio::test]
    async fn person_name_formats_first_then_last() {
        let svc = test_service().await;
        let p = svc.create_person("Hopper", "Grace", "", "").await.unwrap();
        assert_eq!(svc.person_name(p.id).await.unwrap(), "Grace Hopper");
    }

    #[tokio::test]
    async fn missing_person_is_not_found() {
        let svc = test_service().await;
        let err = svc.person_name(42).await.unwrap_err();
        assert!(matches!(
            err,
            DatabaseError::NotFound {
                entity: EntityKind::Person,
                id: 42
            }
        ));
        assert!(matches!(
            svc.get_person(42).await.unwrap_err(),
            DatabaseError::NotFound { .. }
        ));
        assert!(matches!(
            svc.delete_person(42).await.unwrap_err(),
            DatabaseError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn delete_person_cascades_to_enrollments_and_grades() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        let exam = svc
            .add_validation_to_course("Exam", 1.0, day(2024, 1, 10), school.databases)
            .await
            .unwrap();
        svc.add_grade(exam.id, school.alice, 14.0).await.unwrap();

        svc.delete_person(school.alice).await.unwrap();

        assert!(svc.get_grade(exam.id, school.alice).await.unwrap().is_none());
        let students = svc.list_students_of_course(school.databases).await.unwrap();
        assert!(students.iter().all(|s| s.id != school.alice));
    }

    #[tokio::test]
    async fn validations_of_student_sorted_by_decreasing_date() {
        let svc = test_service().await;
        let school = seed_school(&svc).await;
        let early = svc
            .add_validation_to_course("Partiel", 1.0, day(2024, 1, 10), school.databases)
            .await
            .unwrap();
        let late = svc
            .add_validation_to_course("Final", 2.0, day(2024, 5, 20), school.networks)
            .await
            .unwrap();
        svc.add_grade(early.id, school.alice, 12.346).await.unwrap();
        svc.add_grade(late.id, school.alice, 16.0).await.unwrap();

        let grades = svc.list_validations_of_student(school.alice).await.unwrap();
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].validation_name, "Final");
        assert_eq!(grades[0].course_name, "Réseaux");
        assert_eq!(grades[1].date, day(2024, 1, 10));
        assert!((grades[1].grade - 12.35).abs() < 1e-9);
        assert_eq!(grades[1].curriculum_name, "L3 Informatique");
    }
}
