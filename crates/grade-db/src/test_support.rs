//! Shared test utilities for grade-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::NaiveDate;

    use crate::GradeDb;
    use crate::service::GradebookService;

    /// Create an in-memory service.
    pub async fn test_service() -> GradebookService {
        let db = GradeDb::open_local(":memory:").await.unwrap();
        GradebookService::from_db(db)
    }

    pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// A small school: one curriculum with two courses, two students enrolled.
    pub struct School {
        pub teacher: i64,
        pub director: i64,
        pub secretary: i64,
        pub alice: i64,
        pub bob: i64,
        pub curriculum: i64,
        pub databases: i64,
        pub networks: i64,
    }

    pub async fn seed_school(svc: &GradebookService) -> School {
        let teacher = svc
            .create_person("Codd", "Edgar", "1 rue des Tables", "0100000001")
            .await
            .unwrap()
            .id;
        let director = svc
            .create_person("Dijkstra", "Edsger", "2 rue des Graphes", "0100000002")
            .await
            .unwrap()
            .id;
        let secretary = svc
            .create_person("Hopper", "Grace", "3 rue du Compilateur", "0100000003")
            .await
            .unwrap()
            .id;
        let alice = svc
            .create_person("Martin", "Alice", "4 rue d'Ulm", "0100000004")
            .await
            .unwrap()
            .id;
        let bob = svc
            .create_person("Durand", "Bob", "5 rue d'Ulm", "0100000005")
            .await
            .unwrap()
            .id;
        let curriculum = svc
            .create_curriculum("L3 Informatique", secretary, director)
            .await
            .unwrap()
            .id;
        let databases = svc.create_course("BDD", teacher).await.unwrap().id;
        let networks = svc.create_course("Réseaux", teacher).await.unwrap().id;

        svc.register_course_to_curriculum(databases, curriculum, 6.0)
            .await
            .unwrap();
        svc.register_course_to_curriculum(networks, curriculum, 4.0)
            .await
            .unwrap();
        svc.register_person_to_curriculum(alice, curriculum)
            .await
            .unwrap();
        svc.register_person_to_curriculum(bob, curriculum)
            .await
            .unwrap();

        School {
            teacher,
            director,
            secretary,
            alice,
            bob,
            curriculum,
            databases,
            networks,
        }
    }
}
