//! Submission repository. Recording a submission never changes thesis status.

use thesis_core::entities::Submission;
use thesis_core::enums::EntityType;
use thesis_core::errors::WorkflowError;
use thesis_core::ids::PREFIX_SUBMISSION;

use crate::error::DatabaseError;
use crate::helpers::{
    format_timestamp, get_opt_string, non_blank, now, parse_datetime, parse_enum, query_all,
    query_opt,
};
use crate::repos::thesis::require_thesis;
use crate::service::WorkflowService;
use crate::updates::SetClause;
use crate::updates::submission::{NewSubmission, SubmissionUpdate};

const SELECT_COLS: &str = "id, thesis_id, kind, submitted_at, url, comment";

fn row_to_submission(row: &libsql::Row) -> Result<Submission, DatabaseError> {
    Ok(Submission {
        id: row.get(0)?,
        thesis_id: row.get(1)?,
        kind: parse_enum(&row.get::<String>(2)?)?,
        submitted_at: parse_datetime(&row.get::<String>(3)?)?,
        url: get_opt_string(row, 4)?,
        comment: get_opt_string(row, 5)?,
    })
}

async fn require_submission(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Submission, WorkflowError> {
    query_opt(
        conn,
        &format!("SELECT {SELECT_COLS} FROM submissions WHERE id = ?1"),
        [id],
        row_to_submission,
    )
    .await?
    .ok_or_else(|| WorkflowError::not_found(EntityType::Submission, id))
}

impl WorkflowService {
    /// Append a submission to an existing thesis.
    pub async fn record_submission(
        &self,
        input: NewSubmission,
    ) -> Result<Submission, WorkflowError> {
        let url = non_blank(input.url.as_deref());
        let comment = non_blank(input.comment.as_deref());
        let submitted_at = input.submitted_at.unwrap_or_else(now);

        let uow = self.db().begin().await?;
        let result: Result<Submission, WorkflowError> = async {
            require_thesis(uow.conn(), &input.thesis_id).await?;
            let id = uow.generate_id(PREFIX_SUBMISSION).await?;
            uow.conn()
                .execute(
                    &format!("INSERT INTO submissions ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
                    libsql::params![
                        id.as_str(),
                        input.thesis_id.as_str(),
                        input.kind.as_str(),
                        format_timestamp(&submitted_at),
                        url.clone(),
                        comment.clone()
                    ],
                )
                .await
                .map_err(DatabaseError::from)?;

            Ok(Submission {
                id,
                thesis_id: input.thesis_id.clone(),
                kind: input.kind,
                submitted_at,
                url,
                comment,
            })
        }
        .await;

        let submission = uow.finish(result).await?;
        tracing::info!(
            submission_id = %submission.id,
            thesis_id = %submission.thesis_id,
            kind = %submission.kind,
            "submission recorded"
        );
        Ok(submission)
    }

    pub async fn get_submission(&self, id: &str) -> Result<Submission, WorkflowError> {
        require_submission(self.db().read().await.conn(), id).await
    }

    pub async fn update_submission(
        &self,
        id: &str,
        update: SubmissionUpdate,
    ) -> Result<Submission, WorkflowError> {
        if update.is_empty() {
            return self.get_submission(id).await;
        }

        let uow = self.db().begin().await?;
        let result: Result<Submission, WorkflowError> = async {
            require_submission(uow.conn(), id).await?;

            let mut clause = SetClause::default();
            if let Some(kind) = update.kind {
                clause.push("kind", kind.as_str());
            }
            if let Some(ref submitted_at) = update.submitted_at {
                clause.push("submitted_at", format_timestamp(submitted_at));
            }
            if let Some(ref url) = update.url {
                clause.push_opt("url", non_blank(url.as_deref()));
            }
            if let Some(ref comment) = update.comment {
                clause.push_opt("comment", non_blank(comment.as_deref()));
            }

            let (sql, params) = clause.into_update("submissions", id);
            uow.conn()
                .execute(&sql, libsql::params_from_iter(params))
                .await
                .map_err(DatabaseError::from)?;

            require_submission(uow.conn(), id).await
        }
        .await;

        let submission = uow.finish(result).await?;
        tracing::info!(submission_id = id, "submission updated");
        Ok(submission)
    }

    pub async fn delete_submission(&self, id: &str) -> Result<(), WorkflowError> {
        let uow = self.db().begin().await?;
        let result: Result<(), WorkflowError> = async {
            require_submission(uow.conn(), id).await?;
            uow.conn()
                .execute("DELETE FROM submissions WHERE id = ?1", [id])
                .await
                .map_err(DatabaseError::from)?;
            Ok(())
        }
        .await;

        uow.finish(result).await?;
        tracing::info!(submission_id = id, "submission deleted");
        Ok(())
    }

    /// Submissions of a thesis, newest first.
    pub async fn list_submissions(
        &self,
        thesis_id: &str,
    ) -> Result<Vec<Submission>, WorkflowError> {
        tracing::debug!(thesis_id, "listing submissions");
        Ok(query_all(
            self.db().read().await.conn(),
            &format!(
                "SELECT {SELECT_COLS} FROM submissions
                 WHERE thesis_id = ?1
                 ORDER BY submitted_at DESC, rowid DESC"
            ),
            [thesis_id],
            row_to_submission,
        )
        .await?)
    }
}
