//! Review committee: membership per thesis, the decision log, and the
//! approval guard evaluated before `under_review -> approved`.

use std::collections::HashSet;

use thesis_core::entities::{CommitteeMember, DecisionEntry};
use thesis_core::enums::{CommitteeDecision, EntityType};
use thesis_core::errors::WorkflowError;
use thesis_core::ids::PREFIX_DECISION;
use thesis_core::responses::{CommitteeStatus, MemberDecision};

use crate::error::DatabaseError;
use crate::helpers::{
    format_timestamp, get_opt_string, non_blank, now, parse_datetime, parse_enum, query_all,
    query_opt,
};
use crate::repos::people::{fetch_member, row_to_member};
use crate::repos::thesis::{require_thesis, touch_thesis};
use crate::service::WorkflowService;

const DECISION_COLS: &str = "id, thesis_id, committee_member_id, decision, comment, created_at";

fn row_to_decision(row: &libsql::Row) -> Result<DecisionEntry, DatabaseError> {
    Ok(DecisionEntry {
        id: row.get(0)?,
        thesis_id: row.get(1)?,
        committee_member_id: row.get(2)?,
        decision: parse_enum(&row.get::<String>(3)?)?,
        comment: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

async fn committee_of(
    conn: &libsql::Connection,
    thesis_id: &str,
) -> Result<Vec<CommitteeMember>, DatabaseError> {
    query_all(
        conn,
        "SELECT cm.id, cm.name, cm.email FROM committee_members cm
         JOIN thesis_committee tc ON tc.committee_member_id = cm.id
         WHERE tc.thesis_id = ?1
         ORDER BY cm.name, cm.id",
        [thesis_id],
        row_to_member,
    )
    .await
}

async fn latest_decision(
    conn: &libsql::Connection,
    thesis_id: &str,
    member_id: &str,
) -> Result<Option<DecisionEntry>, DatabaseError> {
    query_opt(
        conn,
        &format!(
            "SELECT {DECISION_COLS} FROM committee_decisions
             WHERE thesis_id = ?1 AND committee_member_id = ?2
             ORDER BY created_at DESC, rowid DESC
             LIMIT 1"
        ),
        [thesis_id, member_id],
        row_to_decision,
    )
    .await
}

/// Current committee members with their latest decisions, judged by the
/// approval guard.
pub(crate) async fn evaluate_committee(
    conn: &libsql::Connection,
    thesis_id: &str,
) -> Result<CommitteeStatus, DatabaseError> {
    let mut members = Vec::new();
    for member in committee_of(conn, thesis_id).await? {
        let latest = latest_decision(conn, thesis_id, &member.id).await?;
        members.push(MemberDecision { member, latest });
    }
    Ok(CommitteeStatus::evaluate(thesis_id, members))
}

impl WorkflowService {
    /// Replace the committee of a thesis. Earlier decisions stay in the log
    /// but only current members count towards approval.
    pub async fn set_committee(
        &self,
        thesis_id: &str,
        member_ids: &[String],
    ) -> Result<Vec<CommitteeMember>, WorkflowError> {
        let mut seen = HashSet::new();
        let member_ids: Vec<&str> = member_ids
            .iter()
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect();

        let uow = self.db().begin().await?;
        let result: Result<Vec<CommitteeMember>, WorkflowError> = async {
            require_thesis(uow.conn(), thesis_id).await?;
            for id in &member_ids {
                if fetch_member(uow.conn(), id).await?.is_none() {
                    return Err(WorkflowError::not_found(EntityType::CommitteeMember, *id));
                }
            }

            uow.conn()
                .execute(
                    "DELETE FROM thesis_committee WHERE thesis_id = ?1",
                    [thesis_id],
                )
                .await
                .map_err(DatabaseError::from)?;
            for id in &member_ids {
                uow.conn()
                    .execute(
                        "INSERT INTO thesis_committee (thesis_id, committee_member_id) VALUES (?1, ?2)",
                        [thesis_id, *id],
                    )
                    .await
                    .map_err(DatabaseError::from)?;
            }
            touch_thesis(uow.conn(), thesis_id, &now()).await?;

            Ok(committee_of(uow.conn(), thesis_id).await?)
        }
        .await;

        let members = uow.finish(result).await?;
        tracing::info!(thesis_id, members = members.len(), "committee set");
        Ok(members)
    }

    pub async fn list_committee(
        &self,
        thesis_id: &str,
    ) -> Result<Vec<CommitteeMember>, WorkflowError> {
        let reader = self.db().read().await;
        require_thesis(reader.conn(), thesis_id).await?;
        Ok(committee_of(reader.conn(), thesis_id).await?)
    }

    /// Append a decision from a member of the thesis's committee.
    pub async fn record_decision(
        &self,
        thesis_id: &str,
        member_id: &str,
        decision: CommitteeDecision,
        comment: Option<&str>,
    ) -> Result<DecisionEntry, WorkflowError> {
        let comment = non_blank(comment);
        let uow = self.db().begin().await?;
        let result: Result<DecisionEntry, WorkflowError> = async {
            require_thesis(uow.conn(), thesis_id).await?;
            if fetch_member(uow.conn(), member_id).await?.is_none() {
                return Err(WorkflowError::not_found(
                    EntityType::CommitteeMember,
                    member_id,
                ));
            }
            let on_committee = query_opt(
                uow.conn(),
                "SELECT 1 FROM thesis_committee WHERE thesis_id = ?1 AND committee_member_id = ?2",
                [thesis_id, member_id],
                |_| Ok(()),
            )
            .await?;
            if on_committee.is_none() {
                return Err(WorkflowError::Validation(format!(
                    "{member_id} is not on the committee for {thesis_id}"
                )));
            }

            let id = uow.generate_id(PREFIX_DECISION).await?;
            let ts = now();
            uow.conn()
                .execute(
                    &format!(
                        "INSERT INTO committee_decisions ({DECISION_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
                    ),
                    libsql::params![
                        id.as_str(),
                        thesis_id,
                        member_id,
                        decision.as_str(),
                        comment.clone(),
                        format_timestamp(&ts)
                    ],
                )
                .await
                .map_err(DatabaseError::from)?;

            Ok(DecisionEntry {
                id,
                thesis_id: thesis_id.to_string(),
                committee_member_id: member_id.to_string(),
                decision,
                comment,
                created_at: ts,
            })
        }
        .await;

        let entry = uow.finish(result).await?;
        tracing::info!(thesis_id, member_id, %decision, "committee decision recorded");
        Ok(entry)
    }

    /// Full decision log for a thesis, oldest first.
    pub async fn decision_log(&self, thesis_id: &str) -> Result<Vec<DecisionEntry>, WorkflowError> {
        Ok(query_all(
            self.db().read().await.conn(),
            &format!(
                "SELECT {DECISION_COLS} FROM committee_decisions
                 WHERE thesis_id = ?1
                 ORDER BY created_at ASC, rowid ASC"
            ),
            [thesis_id],
            row_to_decision,
        )
        .await?)
    }

    pub async fn committee_status(&self, thesis_id: &str) -> Result<CommitteeStatus, WorkflowError> {
        let reader = self.db().read().await;
        require_thesis(reader.conn(), thesis_id).await?;
        Ok(evaluate_committee(reader.conn(), thesis_id).await?)
    }
}
