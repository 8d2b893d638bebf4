//! Reference data: students, supervisors, committee members, and external
//! reviewers.
//!
//! Email addresses are unique per table; a duplicate is reported as a
//! validation error rather than a storage failure.

use thesis_core::entities::{CommitteeMember, ExternalReviewer, Student, Supervisor};
use thesis_core::enums::EntityType;
use thesis_core::errors::WorkflowError;
use thesis_core::ids::{
    PREFIX_COMMITTEE_MEMBER, PREFIX_EXTERNAL_REVIEWER, PREFIX_STUDENT, PREFIX_SUPERVISOR,
};

use crate::error::DatabaseError;
use crate::helpers::{non_blank, query_all, query_opt};
use crate::service::WorkflowService;

const STUDENT_COLS: &str = "id, name, email";
const SUPERVISOR_COLS: &str = "id, name, email, department";
const MEMBER_COLS: &str = "id, name, email";
const REVIEWER_COLS: &str = "id, name, email";

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

fn row_to_supervisor(row: &libsql::Row) -> Result<Supervisor, DatabaseError> {
    Ok(Supervisor {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        department: row.get(3)?,
    })
}

pub(crate) fn row_to_member(row: &libsql::Row) -> Result<CommitteeMember, DatabaseError> {
    Ok(CommitteeMember {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

fn row_to_reviewer(row: &libsql::Row) -> Result<ExternalReviewer, DatabaseError> {
    Ok(ExternalReviewer {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}

pub(crate) async fn fetch_reviewer(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Option<ExternalReviewer>, DatabaseError> {
    query_opt(
        conn,
        &format!("SELECT {REVIEWER_COLS} FROM external_reviewers WHERE id = ?1"),
        [id],
        row_to_reviewer,
    )
    .await
}

pub(crate) async fn fetch_supervisor(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Option<Supervisor>, DatabaseError> {
    query_opt(
        conn,
        &format!("SELECT {SUPERVISOR_COLS} FROM supervisors WHERE id = ?1"),
        [id],
        row_to_supervisor,
    )
    .await
}

pub(crate) async fn fetch_member(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Option<CommitteeMember>, DatabaseError> {
    query_opt(
        conn,
        &format!("SELECT {MEMBER_COLS} FROM committee_members WHERE id = ?1"),
        [id],
        row_to_member,
    )
    .await
}

pub(crate) async fn student_exists(
    conn: &libsql::Connection,
    id: &str,
) -> Result<bool, DatabaseError> {
    crate::helpers::row_exists(conn, "students", id).await
}

/// Trimmed name and email, or a validation error naming the empty field.
fn required_identity(name: &str, email: &str) -> Result<(String, String), WorkflowError> {
    let name = non_blank(Some(name))
        .ok_or_else(|| WorkflowError::Validation("name must not be empty".into()))?;
    let email = non_blank(Some(email))
        .ok_or_else(|| WorkflowError::Validation("email must not be empty".into()))?;
    if !email.contains('@') {
        return Err(WorkflowError::Validation(format!(
            "email '{email}' is not an address"
        )));
    }
    Ok((name, email))
}

async fn ensure_email_free(
    conn: &libsql::Connection,
    table: &str,
    email: &str,
) -> Result<(), WorkflowError> {
    let taken = query_opt(
        conn,
        &format!("SELECT 1 FROM {table} WHERE email = ?1"),
        [email],
        |_| Ok(()),
    )
    .await?;
    if taken.is_some() {
        return Err(WorkflowError::Validation(format!(
            "email '{email}' is already registered"
        )));
    }
    Ok(())
}

impl WorkflowService {
    pub async fn create_student(&self, name: &str, email: &str) -> Result<Student, WorkflowError> {
        let (name, email) = required_identity(name, email)?;
        let uow = self.db().begin().await?;
        let result: Result<Student, WorkflowError> = async {
            ensure_email_free(uow.conn(), "students", &email).await?;
            let id = uow.generate_id(PREFIX_STUDENT).await?;
            uow.conn()
                .execute(
                    &format!("INSERT INTO students ({STUDENT_COLS}) VALUES (?1, ?2, ?3)"),
                    libsql::params![id.as_str(), name.as_str(), email.as_str()],
                )
                .await
                .map_err(DatabaseError::from)?;
            Ok(Student { id, name, email })
        }
        .await;
        let student = uow.finish(result).await?;
        tracing::info!(student_id = %student.id, "student created");
        Ok(student)
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, WorkflowError> {
        query_opt(
            self.db().read().await.conn(),
            &format!("SELECT {STUDENT_COLS} FROM students WHERE id = ?1"),
            [id],
            row_to_student,
        )
        .await?
        .ok_or_else(|| WorkflowError::not_found(EntityType::Student, id))
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, WorkflowError> {
        Ok(query_all(
            self.db().read().await.conn(),
            &format!("SELECT {STUDENT_COLS} FROM students ORDER BY name, id"),
            (),
            row_to_student,
        )
        .await?)
    }

    pub async fn create_supervisor(
        &self,
        name: &str,
        email: &str,
        department: &str,
    ) -> Result<Supervisor, WorkflowError> {
        let (name, email) = required_identity(name, email)?;
        let department = non_blank(Some(department))
            .ok_or_else(|| WorkflowError::Validation("department must not be empty".into()))?;
        let uow = self.db().begin().await?;
        let result: Result<Supervisor, WorkflowError> = async {
            ensure_email_free(uow.conn(), "supervisors", &email).await?;
            let id = uow.generate_id(PREFIX_SUPERVISOR).await?;
            uow.conn()
                .execute(
                    &format!("INSERT INTO supervisors ({SUPERVISOR_COLS}) VALUES (?1, ?2, ?3, ?4)"),
                    libsql::params![
                        id.as_str(),
                        name.as_str(),
                        email.as_str(),
                        department.as_str()
                    ],
                )
                .await
                .map_err(DatabaseError::from)?;
            Ok(Supervisor {
                id,
                name,
                email,
                department,
            })
        }
        .await;
        let supervisor = uow.finish(result).await?;
        tracing::info!(supervisor_id = %supervisor.id, "supervisor created");
        Ok(supervisor)
    }

    pub async fn get_supervisor(&self, id: &str) -> Result<Supervisor, WorkflowError> {
        fetch_supervisor(self.db().read().await.conn(), id)
            .await?
            .ok_or_else(|| WorkflowError::not_found(EntityType::Supervisor, id))
    }

    pub async fn list_supervisors(&self) -> Result<Vec<Supervisor>, WorkflowError> {
        Ok(query_all(
            self.db().read().await.conn(),
            &format!("SELECT {SUPERVISOR_COLS} FROM supervisors ORDER BY name, id"),
            (),
            row_to_supervisor,
        )
        .await?)
    }

    pub async fn create_committee_member(
        &self,
        name: &str,
        email: &str,
    ) -> Result<CommitteeMember, WorkflowError> {
        let (name, email) = required_identity(name, email)?;
        let uow = self.db().begin().await?;
        let result: Result<CommitteeMember, WorkflowError> = async {
            ensure_email_free(uow.conn(), "committee_members", &email).await?;
            let id = uow.generate_id(PREFIX_COMMITTEE_MEMBER).await?;
            uow.conn()
                .execute(
                    &format!("INSERT INTO committee_members ({MEMBER_COLS}) VALUES (?1, ?2, ?3)"),
                    libsql::params![id.as_str(), name.as_str(), email.as_str()],
                )
                .await
                .map_err(DatabaseError::from)?;
            Ok(CommitteeMember { id, name, email })
        }
        .await;
        let member = uow.finish(result).await?;
        tracing::info!(member_id = %member.id, "committee member created");
        Ok(member)
    }

    pub async fn get_committee_member(&self, id: &str) -> Result<CommitteeMember, WorkflowError> {
        fetch_member(self.db().read().await.conn(), id)
            .await?
            .ok_or_else(|| WorkflowError::not_found(EntityType::CommitteeMember, id))
    }

    pub async fn list_committee_members(&self) -> Result<Vec<CommitteeMember>, WorkflowError> {
        Ok(query_all(
            self.db().read().await.conn(),
            &format!("SELECT {MEMBER_COLS} FROM committee_members ORDER BY name, id"),
            (),
            row_to_member,
        )
        .await?)
    }

    pub async fn create_external_reviewer(
        &self,
        name: &str,
        email: &str,
    ) -> Result<ExternalReviewer, WorkflowError> {
        let (name, email) = required_identity(name, email)?;
        let uow = self.db().begin().await?;
        let result: Result<ExternalReviewer, WorkflowError> = async {
            ensure_email_free(uow.conn(), "external_reviewers", &email).await?;
            let id = uow.generate_id(PREFIX_EXTERNAL_REVIEWER).await?;
            uow.conn()
                .execute(
                    &format!(
                        "INSERT INTO external_reviewers ({REVIEWER_COLS}) VALUES (?1, ?2, ?3)"
                    ),
                    libsql::params![id.as_str(), name.as_str(), email.as_str()],
                )
                .await
                .map_err(DatabaseError::from)?;
            Ok(ExternalReviewer { id, name, email })
        }
        .await;
        let reviewer = uow.finish(result).await?;
        tracing::info!(reviewer_id = %reviewer.id, "external reviewer created");
        Ok(reviewer)
    }

    pub async fn get_external_reviewer(&self, id: &str) -> Result<ExternalReviewer, WorkflowError> {
        fetch_reviewer(self.db().read().await.conn(), id)
            .await?
            .ok_or_else(|| WorkflowError::not_found(EntityType::ExternalReviewer, id))
    }

    pub async fn list_external_reviewers(&self) -> Result<Vec<ExternalReviewer>, WorkflowError> {
        Ok(query_all(
            self.db().read().await.conn(),
            &format!("SELECT {REVIEWER_COLS} FROM external_reviewers ORDER BY name, id"),
            (),
            row_to_reviewer,
        )
        .await?)
    }
}
