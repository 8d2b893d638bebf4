//! Milestone repository. Every milestone belongs to exactly one existing
//! thesis and is removed with it.

use chrono::NaiveDate;

use thesis_core::entities::Milestone;
use thesis_core::enums::{EntityType, MilestoneStatus};
use thesis_core::errors::WorkflowError;
use thesis_core::ids::PREFIX_MILESTONE;

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_timestamp, get_opt_string, non_blank, now, parse_date, parse_datetime,
    parse_enum, query_all, query_opt,
};
use crate::repos::thesis::require_thesis;
use crate::service::WorkflowService;
use crate::updates::SetClause;
use crate::updates::milestone::MilestoneUpdate;

const SELECT_COLS: &str = "id, thesis_id, title, due_date, status, notes, updated_at";

fn row_to_milestone(row: &libsql::Row) -> Result<Milestone, DatabaseError> {
    Ok(Milestone {
        id: row.get(0)?,
        thesis_id: row.get(1)?,
        title: row.get(2)?,
        due_date: parse_date(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        notes: get_opt_string(row, 5)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

pub(crate) async fn require_milestone(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Milestone, WorkflowError> {
    query_opt(
        conn,
        &format!("SELECT {SELECT_COLS} FROM milestones WHERE id = ?1"),
        [id],
        row_to_milestone,
    )
    .await?
    .ok_or_else(|| WorkflowError::not_found(EntityType::Milestone, id))
}

impl WorkflowService {
    /// Add a milestone in `planned` to an existing thesis.
    pub async fn add_milestone(
        &self,
        thesis_id: &str,
        title: &str,
        due_date: NaiveDate,
        notes: Option<&str>,
    ) -> Result<Milestone, WorkflowError> {
        let title = non_blank(Some(title))
            .ok_or_else(|| WorkflowError::Validation("milestone title must not be empty".into()))?;
        let notes = non_blank(notes);

        let uow = self.db().begin().await?;
        let result: Result<Milestone, WorkflowError> = async {
            require_thesis(uow.conn(), thesis_id).await?;
            let id = uow.generate_id(PREFIX_MILESTONE).await?;
            let ts = now();
            uow.conn()
                .execute(
                    &format!("INSERT INTO milestones ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                    libsql::params![
                        id.as_str(),
                        thesis_id,
                        title.as_str(),
                        format_date(due_date),
                        MilestoneStatus::INITIAL.as_str(),
                        notes.clone(),
                        format_timestamp(&ts)
                    ],
                )
                .await
                .map_err(DatabaseError::from)?;

            Ok(Milestone {
                id,
                thesis_id: thesis_id.to_string(),
                title,
                due_date,
                status: MilestoneStatus::INITIAL,
                notes,
                updated_at: ts,
            })
        }
        .await;

        let milestone = uow.finish(result).await?;
        tracing::info!(milestone_id = %milestone.id, thesis_id, "milestone added");
        Ok(milestone)
    }

    pub async fn get_milestone(&self, id: &str) -> Result<Milestone, WorkflowError> {
        require_milestone(self.db().read().await.conn(), id).await
    }

    /// Edit title, due date, or notes. Status has its own transition.
    pub async fn update_milestone(
        &self,
        id: &str,
        update: MilestoneUpdate,
    ) -> Result<Milestone, WorkflowError> {
        if update.is_empty() {
            return self.get_milestone(id).await;
        }

        let uow = self.db().begin().await?;
        let result: Result<Milestone, WorkflowError> = async {
            let current = require_milestone(uow.conn(), id).await?;

            let mut clause = SetClause::default();
            if let Some(ref title) = update.title {
                let title = non_blank(Some(title)).ok_or_else(|| {
                    WorkflowError::Validation("milestone title must not be empty".into())
                })?;
                clause.push("title", title);
            }
            if let Some(due_date) = update.due_date {
                clause.push("due_date", format_date(due_date));
            }
            if let Some(ref notes) = update.notes {
                clause.push_opt("notes", non_blank(notes.as_deref()));
            }
            clause.push(
                "updated_at",
                format_timestamp(&now().max(current.updated_at)),
            );

            let (sql, params) = clause.into_update("milestones", id);
            uow.conn()
                .execute(&sql, libsql::params_from_iter(params))
                .await
                .map_err(DatabaseError::from)?;

            require_milestone(uow.conn(), id).await
        }
        .await;

        let milestone = uow.finish(result).await?;
        tracing::info!(milestone_id = id, "milestone updated");
        Ok(milestone)
    }

    pub async fn delete_milestone(&self, id: &str) -> Result<(), WorkflowError> {
        let uow = self.db().begin().await?;
        let result: Result<(), WorkflowError> = async {
            require_milestone(uow.conn(), id).await?;
            uow.conn()
                .execute("DELETE FROM milestones WHERE id = ?1", [id])
                .await
                .map_err(DatabaseError::from)?;
            Ok(())
        }
        .await;

        uow.finish(result).await?;
        tracing::info!(milestone_id = id, "milestone deleted");
        Ok(())
    }

    /// Milestones of a thesis, earliest due date first.
    pub async fn list_milestones(&self, thesis_id: &str) -> Result<Vec<Milestone>, WorkflowError> {
        tracing::debug!(thesis_id, "listing milestones");
        Ok(query_all(
            self.db().read().await.conn(),
            &format!(
                "SELECT {SELECT_COLS} FROM milestones
                 WHERE thesis_id = ?1
                 ORDER BY due_date ASC, rowid ASC"
            ),
            [thesis_id],
            row_to_milestone,
        )
        .await?)
    }
}
