//! Shared test utilities for thesis-db unit tests.

pub(crate) mod helpers {
    use crate::ThesisDb;
    use crate::service::WorkflowService;
    use crate::updates::thesis::NewThesis;

    /// Create an in-memory `WorkflowService`.
    pub async fn test_service() -> WorkflowService {
        let db = ThesisDb::open_local(":memory:").await.unwrap();
        WorkflowService::from_db(db)
    }

    /// Create a student and return its ID.
    pub async fn seed_student(svc: &WorkflowService, name: &str) -> String {
        svc.create_student(name, &format!("{name}@uni.edu"))
            .await
            .unwrap()
            .id
    }

    /// Create a supervisor and return its ID.
    pub async fn seed_supervisor(svc: &WorkflowService, name: &str) -> String {
        svc.create_supervisor(name, &format!("{name}@uni.edu"), "Computer Science")
            .await
            .unwrap()
            .id
    }

    pub async fn seed_reviewer(svc: &WorkflowService, name: &str) -> String {
        svc.create_external_reviewer(name, &format!("{name}@elsewhere.edu"))
            .await
            .unwrap()
            .id
    }

    /// Create a draft thesis owned by a fresh student and return its ID.
    pub async fn seed_thesis(svc: &WorkflowService) -> String {
        let n = svc.list_students().await.unwrap().len();
        let student = seed_student(svc, &format!("student{n}")).await;
        svc.create_thesis(NewThesis::new("A Study of Things", student))
            .await
            .unwrap()
            .id
    }
}
