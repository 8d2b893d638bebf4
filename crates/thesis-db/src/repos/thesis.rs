//! Thesis repository: CRUD, filtered listing, dashboard, overdue report,
//! and supervisor and external reviewer assignment.

use chrono::{DateTime, NaiveDate, Utc};

use thesis_core::entities::Thesis;
use thesis_core::enums::{EntityType, ThesisStatus};
use thesis_core::errors::WorkflowError;
use thesis_core::ids::PREFIX_THESIS;
use thesis_core::responses::{DashboardSummary, StatusCount};

use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_timestamp, get_opt_string, non_blank, now, parse_datetime, parse_enum,
    parse_optional_date, query_all, query_opt,
};
use crate::repos::people::{fetch_reviewer, fetch_supervisor, student_exists};
use crate::service::WorkflowService;
use crate::updates::SetClause;
use crate::updates::thesis::{NewThesis, ThesisUpdate};

pub(crate) const SELECT_COLS: &str = "id, title, abstract, student_id, supervisor_id, \
     submission_deadline, status, created_at, updated_at, external_reviewer_id";

/// Statuses that are past the point where a missed deadline matters.
const DEADLINE_EXEMPT: [ThesisStatus; 3] = [
    ThesisStatus::Approved,
    ThesisStatus::FinalSubmitted,
    ThesisStatus::Completed,
];

pub(crate) fn row_to_thesis(row: &libsql::Row) -> Result<Thesis, DatabaseError> {
    Ok(Thesis {
        id: row.get(0)?,
        title: row.get(1)?,
        abstract_text: get_opt_string(row, 2)?,
        student_id: row.get(3)?,
        supervisor_id: get_opt_string(row, 4)?,
        external_reviewer_id: get_opt_string(row, 9)?,
        submission_deadline: parse_optional_date(get_opt_string(row, 5)?.as_deref())?,
        status: parse_enum(&row.get::<String>(6)?)?,
        created_at: parse_datetime(&row.get::<String>(7)?)?,
        updated_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

pub(crate) async fn fetch_thesis(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Option<Thesis>, DatabaseError> {
    query_opt(
        conn,
        &format!("SELECT {SELECT_COLS} FROM theses WHERE id = ?1"),
        [id],
        row_to_thesis,
    )
    .await
}

pub(crate) async fn require_thesis(
    conn: &libsql::Connection,
    id: &str,
) -> Result<Thesis, WorkflowError> {
    fetch_thesis(conn, id)
        .await?
        .ok_or_else(|| WorkflowError::not_found(EntityType::Thesis, id))
}

/// Refresh `updated_at` on a thesis row.
pub(crate) async fn touch_thesis(
    conn: &libsql::Connection,
    id: &str,
    at: &DateTime<Utc>,
) -> Result<(), DatabaseError> {
    conn.execute(
        "UPDATE theses SET updated_at = ?1 WHERE id = ?2",
        libsql::params![format_timestamp(at), id],
    )
    .await?;
    Ok(())
}

/// Filter for `list_theses`. Every field is optional; results are ordered
/// most recently updated first.
#[derive(Debug, Clone, Default)]
pub struct ThesisFilter {
    pub status: Option<ThesisStatus>,
    pub student_id: Option<String>,
    pub supervisor_id: Option<String>,
    pub limit: Option<u32>,
}

impl ThesisFilter {
    #[must_use]
    pub fn with_status(status: ThesisStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    fn to_sql(&self) -> (String, Vec<libsql::Value>) {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(status) = self.status {
            params.push(status.as_str().into());
            conditions.push(format!("status = ?{}", params.len()));
        }
        if let Some(ref student_id) = self.student_id {
            params.push(student_id.clone().into());
            conditions.push(format!("student_id = ?{}", params.len()));
        }
        if let Some(ref supervisor_id) = self.supervisor_id {
            params.push(supervisor_id.clone().into());
            conditions.push(format!("supervisor_id = ?{}", params.len()));
        }

        let mut sql = format!("SELECT {SELECT_COLS} FROM theses");
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push_str(" ORDER BY updated_at DESC, rowid DESC");
        if let Some(limit) = self.limit {
            params.push(i64::from(limit).into());
            sql.push_str(&format!(" LIMIT ?{}", params.len()));
        }
        (sql, params)
    }
}

async fn theses_matching(
    conn: &libsql::Connection,
    filter: &ThesisFilter,
) -> Result<Vec<Thesis>, DatabaseError> {
    let (sql, params) = filter.to_sql();
    query_all(conn, &sql, libsql::params_from_iter(params), row_to_thesis).await
}

impl WorkflowService {
    /// Create a thesis in `draft`. No ledger entry is written for creation.
    pub async fn create_thesis(&self, input: NewThesis) -> Result<Thesis, WorkflowError> {
        let title = non_blank(Some(&input.title))
            .ok_or_else(|| WorkflowError::Validation("title must not be empty".into()))?;
        let abstract_text = non_blank(input.abstract_text.as_deref());
        let supervisor_id = non_blank(input.supervisor_id.as_deref());

        let uow = self.db().begin().await?;
        let result: Result<Thesis, WorkflowError> = async {
            if !student_exists(uow.conn(), &input.student_id).await? {
                return Err(WorkflowError::not_found(
                    EntityType::Student,
                    &input.student_id,
                ));
            }
            if let Some(ref sup) = supervisor_id {
                if fetch_supervisor(uow.conn(), sup).await?.is_none() {
                    return Err(WorkflowError::not_found(EntityType::Supervisor, sup));
                }
            }

            let id = uow.generate_id(PREFIX_THESIS).await?;
            let ts = now();
            uow.conn()
                .execute(
                    &format!(
                        "INSERT INTO theses ({SELECT_COLS})
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL)"
                    ),
                    libsql::params![
                        id.as_str(),
                        title.as_str(),
                        abstract_text.clone(),
                        input.student_id.as_str(),
                        supervisor_id.clone(),
                        input.submission_deadline.map(format_date),
                        ThesisStatus::INITIAL.as_str(),
                        format_timestamp(&ts),
                        format_timestamp(&ts)
                    ],
                )
                .await
                .map_err(DatabaseError::from)?;

            Ok(Thesis {
                id,
                title,
                abstract_text,
                student_id: input.student_id.clone(),
                supervisor_id,
                external_reviewer_id: None,
                submission_deadline: input.submission_deadline,
                status: ThesisStatus::INITIAL,
                created_at: ts,
                updated_at: ts,
            })
        }
        .await;

        let thesis = uow.finish(result).await?;
        tracing::info!(thesis_id = %thesis.id, "thesis created");
        Ok(thesis)
    }

    pub async fn get_thesis(&self, id: &str) -> Result<Thesis, WorkflowError> {
        require_thesis(self.db().read().await.conn(), id).await
    }

    /// Edit title, abstract, student, or deadline. An empty update returns
    /// the current row unchanged.
    pub async fn update_thesis(
        &self,
        id: &str,
        update: ThesisUpdate,
    ) -> Result<Thesis, WorkflowError> {
        if update.is_empty() {
            return self.get_thesis(id).await;
        }

        let uow = self.db().begin().await?;
        let result: Result<Thesis, WorkflowError> = async {
            require_thesis(uow.conn(), id).await?;

            let mut clause = SetClause::default();
            if let Some(ref title) = update.title {
                let title = non_blank(Some(title))
                    .ok_or_else(|| WorkflowError::Validation("title must not be empty".into()))?;
                clause.push("title", title);
            }
            if let Some(ref abstract_text) = update.abstract_text {
                clause.push_opt("abstract", non_blank(abstract_text.as_deref()));
            }
            if let Some(ref student_id) = update.student_id {
                if !student_exists(uow.conn(), student_id).await? {
                    return Err(WorkflowError::not_found(EntityType::Student, student_id));
                }
                clause.push("student_id", student_id.clone());
            }
            if let Some(deadline) = update.submission_deadline {
                clause.push_opt("submission_deadline", deadline.map(format_date));
            }
            clause.push("updated_at", format_timestamp(&now()));

            let (sql, params) = clause.into_update("theses", id);
            uow.conn()
                .execute(&sql, libsql::params_from_iter(params))
                .await
                .map_err(DatabaseError::from)?;

            require_thesis(uow.conn(), id).await
        }
        .await;

        let thesis = uow.finish(result).await?;
        tracing::info!(thesis_id = %thesis.id, "thesis updated");
        Ok(thesis)
    }

    /// Delete a thesis together with its milestones, submissions, ledger,
    /// committee links and decisions.
    pub async fn delete_thesis(&self, id: &str) -> Result<(), WorkflowError> {
        let uow = self.db().begin().await?;
        let result: Result<(), WorkflowError> = async {
            require_thesis(uow.conn(), id).await?;
            uow.conn()
                .execute("DELETE FROM theses WHERE id = ?1", [id])
                .await
                .map_err(DatabaseError::from)?;
            Ok(())
        }
        .await;

        uow.finish(result).await?;
        tracing::info!(thesis_id = id, "thesis deleted");
        Ok(())
    }

    pub async fn list_theses(&self, filter: &ThesisFilter) -> Result<Vec<Thesis>, WorkflowError> {
        tracing::debug!(?filter, "listing theses");
        Ok(theses_matching(self.db().read().await.conn(), filter).await?)
    }

    /// Most recently updated theses first.
    pub async fn recent_activity(&self, limit: u32) -> Result<Vec<Thesis>, WorkflowError> {
        self.list_theses(&ThesisFilter {
            limit: Some(limit),
            ..ThesisFilter::default()
        })
        .await
    }

    /// Count per status (all seven, zeros included), total, and the
    /// `recent_limit` most recently updated theses.
    pub async fn dashboard(&self, recent_limit: u32) -> Result<DashboardSummary, WorkflowError> {
        // Counts and the recent list come from the same committed state.
        let reader = self.db().read().await;
        let rows = query_all(
            reader.conn(),
            "SELECT status, COUNT(*) FROM theses GROUP BY status",
            (),
            |row| {
                let status: ThesisStatus = parse_enum(&row.get::<String>(0)?)?;
                let count = u64::try_from(row.get::<i64>(1)?).unwrap_or_default();
                Ok((status, count))
            },
        )
        .await?;

        let counts: Vec<StatusCount> = ThesisStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: rows
                    .iter()
                    .find(|(s, _)| s == status)
                    .map_or(0, |(_, c)| *c),
            })
            .collect();
        let total = counts.iter().map(|c| c.count).sum();
        let recent = theses_matching(
            reader.conn(),
            &ThesisFilter {
                limit: Some(recent_limit),
                ..ThesisFilter::default()
            },
        )
        .await?;

        Ok(DashboardSummary {
            counts,
            total,
            recent,
        })
    }

    /// Theses whose deadline is before `today` and that have not yet been
    /// approved. Report only; statuses are never changed here.
    pub async fn list_overdue(&self, today: NaiveDate) -> Result<Vec<Thesis>, WorkflowError> {
        let exempt = DEADLINE_EXEMPT
            .iter()
            .map(|s| format!("'{}'", s.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(query_all(
            self.db().read().await.conn(),
            &format!(
                "SELECT {SELECT_COLS} FROM theses
                 WHERE submission_deadline IS NOT NULL
                   AND submission_deadline < ?1
                   AND status NOT IN ({exempt})
                 ORDER BY submission_deadline ASC, id ASC"
            ),
            [format_date(today)],
            row_to_thesis,
        )
        .await?)
    }

    /// Set or clear the supervisor. Legal in every status and never written
    /// to the status ledger.
    pub async fn assign_supervisor(
        &self,
        thesis_id: &str,
        supervisor_id: Option<&str>,
    ) -> Result<Thesis, WorkflowError> {
        let uow = self.db().begin().await?;
        let result: Result<Thesis, WorkflowError> = async {
            let mut thesis = require_thesis(uow.conn(), thesis_id).await?;
            if let Some(sup) = supervisor_id {
                if fetch_supervisor(uow.conn(), sup).await?.is_none() {
                    return Err(WorkflowError::not_found(EntityType::Supervisor, sup));
                }
            }

            let ts = now();
            uow.conn()
                .execute(
                    "UPDATE theses SET supervisor_id = ?1, updated_at = ?2 WHERE id = ?3",
                    libsql::params![supervisor_id, format_timestamp(&ts), thesis_id],
                )
                .await
                .map_err(DatabaseError::from)?;

            thesis.supervisor_id = supervisor_id.map(String::from);
            thesis.updated_at = ts;
            Ok(thesis)
        }
        .await;

        let thesis = uow.finish(result).await?;
        tracing::info!(
            thesis_id,
            supervisor_id = supervisor_id.unwrap_or("none"),
            "supervisor assigned"
        );
        Ok(thesis)
    }

    /// Set or clear the external reviewer. Like supervisor assignment this
    /// is legal in every status and leaves the status ledger untouched.
    pub async fn assign_reviewer(
        &self,
        thesis_id: &str,
        reviewer_id: Option<&str>,
    ) -> Result<Thesis, WorkflowError> {
        let uow = self.db().begin().await?;
        let result: Result<Thesis, WorkflowError> = async {
            let mut thesis = require_thesis(uow.conn(), thesis_id).await?;
            if let Some(rev) = reviewer_id {
                if fetch_reviewer(uow.conn(), rev).await?.is_none() {
                    return Err(WorkflowError::not_found(EntityType::ExternalReviewer, rev));
                }
            }

            let ts = now();
            uow.conn()
                .execute(
                    "UPDATE theses SET external_reviewer_id = ?1, updated_at = ?2 WHERE id = ?3",
                    libsql::params![reviewer_id, format_timestamp(&ts), thesis_id],
                )
                .await
                .map_err(DatabaseError::from)?;

            thesis.external_reviewer_id = reviewer_id.map(String::from);
            thesis.updated_at = ts;
            Ok(thesis)
        }
        .await;

        let thesis = uow.finish(result).await?;
        tracing::info!(
            thesis_id,
            reviewer_id = reviewer_id.unwrap_or("none"),
            "external reviewer assigned"
        );
        Ok(thesis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_reviewer, seed_student, seed_supervisor, test_service};
    use crate::updates::thesis::ThesisUpdateBuilder;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn create_thesis_starts_in_draft() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let thesis = svc
            .create_thesis(
                NewThesis::new("Analytical Engines", &student)
                    .with_abstract("On the engine")
                    .with_deadline(date("2026-06-30")),
            )
            .await
            .unwrap();

        assert!(thesis.id.starts_with("ths-"));
        assert_eq!(thesis.status, ThesisStatus::Draft);
        assert_eq!(thesis.created_at, thesis.updated_at);

        let fetched = svc.get_thesis(&thesis.id).await.unwrap();
        assert_eq!(fetched, thesis);
        assert!(svc.history_for(&thesis.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_thesis_requires_existing_student() {
        let svc = test_service().await;
        let err = svc
            .create_thesis(NewThesis::new("T", "stu-00000000"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::NotFound {
                entity: EntityType::Student,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn create_thesis_requires_existing_supervisor() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let err = svc
            .create_thesis(NewThesis::new("T", &student).with_supervisor("sup-00000000"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::NotFound {
                entity: EntityType::Supervisor,
                ..
            }
        ));
        assert!(svc.list_theses(&ThesisFilter::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_thesis_rejects_blank_title() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let err = svc
            .create_thesis(NewThesis::new("   ", &student))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Validation(_)));
    }

    #[tokio::test]
    async fn update_thesis_partial() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let thesis = svc
            .create_thesis(NewThesis::new("Old", &student).with_abstract("keep me"))
            .await
            .unwrap();

        let updated = svc
            .update_thesis(
                &thesis.id,
                ThesisUpdateBuilder::new()
                    .title("New")
                    .submission_deadline(Some(date("2027-01-15")))
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.abstract_text.as_deref(), Some("keep me"));
        assert_eq!(updated.submission_deadline, Some(date("2027-01-15")));
        assert_eq!(updated.status, ThesisStatus::Draft);
        assert!(updated.updated_at >= thesis.updated_at);
    }

    #[tokio::test]
    async fn update_thesis_clears_abstract() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let thesis = svc
            .create_thesis(NewThesis::new("T", &student).with_abstract("text"))
            .await
            .unwrap();
        let updated = svc
            .update_thesis(&thesis.id, ThesisUpdateBuilder::new().abstract_text(None).build())
            .await
            .unwrap();
        assert_eq!(updated.abstract_text, None);
    }

    #[tokio::test]
    async fn empty_update_returns_current_row() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let thesis = svc.create_thesis(NewThesis::new("T", &student)).await.unwrap();
        let same = svc
            .update_thesis(&thesis.id, ThesisUpdate::default())
            .await
            .unwrap();
        assert_eq!(same, thesis);
    }

    #[tokio::test]
    async fn update_missing_thesis_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .update_thesis("ths-00000000", ThesisUpdateBuilder::new().title("x").build())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_thesis_and_missing() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let thesis = svc.create_thesis(NewThesis::new("T", &student)).await.unwrap();

        svc.delete_thesis(&thesis.id).await.unwrap();
        assert!(svc.get_thesis(&thesis.id).await.unwrap_err().is_not_found());
        assert!(svc.delete_thesis(&thesis.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_filters_by_status() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let a = svc.create_thesis(NewThesis::new("A", &student)).await.unwrap();
        let b = svc.create_thesis(NewThesis::new("B", &student)).await.unwrap();
        svc.transition_thesis(&b.id, ThesisStatus::Submitted, None)
            .await
            .unwrap();

        let drafts = svc
            .list_theses(&ThesisFilter::with_status(ThesisStatus::Draft))
            .await
            .unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].id, a.id);

        let all = svc.list_theses(&ThesisFilter::default()).await.unwrap();
        assert_eq!(all[0].id, b.id, "most recently updated first");
    }

    #[tokio::test]
    async fn list_respects_limit() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        for i in 0..4 {
            svc.create_thesis(NewThesis::new(format!("T{i}"), &student))
                .await
                .unwrap();
        }
        let recent = svc.recent_activity(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].title, "T3");
    }

    #[tokio::test]
    async fn dashboard_counts_every_status() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let a = svc.create_thesis(NewThesis::new("A", &student)).await.unwrap();
        svc.create_thesis(NewThesis::new("B", &student)).await.unwrap();
        svc.transition_thesis(&a.id, ThesisStatus::Submitted, None)
            .await
            .unwrap();

        let summary = svc.dashboard(5).await.unwrap();
        assert_eq!(summary.counts.len(), 7);
        assert_eq!(summary.total, 2);
        let count_of = |status| {
            summary
                .counts
                .iter()
                .find(|c| c.status == status)
                .unwrap()
                .count
        };
        assert_eq!(count_of(ThesisStatus::Draft), 1);
        assert_eq!(count_of(ThesisStatus::Submitted), 1);
        assert_eq!(count_of(ThesisStatus::Completed), 0);
        assert_eq!(summary.recent[0].id, a.id);
    }

    #[tokio::test]
    async fn overdue_report_skips_approved_and_leaves_status() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let late = svc
            .create_thesis(NewThesis::new("Late", &student).with_deadline(date("2026-01-01")))
            .await
            .unwrap();
        svc.create_thesis(NewThesis::new("Future", &student).with_deadline(date("2027-01-01")))
            .await
            .unwrap();
        svc.create_thesis(NewThesis::new("Open", &student))
            .await
            .unwrap();
        let approved = svc
            .create_thesis(NewThesis::new("Done", &student).with_deadline(date("2026-01-01")))
            .await
            .unwrap();
        for status in [
            ThesisStatus::Submitted,
            ThesisStatus::UnderReview,
            ThesisStatus::Approved,
        ] {
            svc.transition_thesis(&approved.id, status, None)
                .await
                .unwrap();
        }

        let overdue = svc.list_overdue(date("2026-10-19")).await.unwrap();
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].id, late.id);
        assert_eq!(
            svc.get_thesis(&late.id).await.unwrap().status,
            ThesisStatus::Draft
        );
    }

    #[tokio::test]
    async fn assign_supervisor_twice_keeps_last_without_history() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let first = seed_supervisor(&svc, "grace").await;
        let second = seed_supervisor(&svc, "alan").await;
        let thesis = svc.create_thesis(NewThesis::new("T", &student)).await.unwrap();

        svc.assign_supervisor(&thesis.id, Some(&first)).await.unwrap();
        let after = svc.assign_supervisor(&thesis.id, Some(&second)).await.unwrap();

        assert_eq!(after.supervisor_id.as_deref(), Some(second.as_str()));
        assert_eq!(
            svc.get_thesis(&thesis.id).await.unwrap().supervisor_id,
            Some(second)
        );
        assert!(svc.history_for(&thesis.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn assign_supervisor_can_clear_and_validates() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let sup = seed_supervisor(&svc, "grace").await;
        let thesis = svc
            .create_thesis(NewThesis::new("T", &student).with_supervisor(&sup))
            .await
            .unwrap();

        let err = svc
            .assign_supervisor(&thesis.id, Some("sup-00000000"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            svc.get_thesis(&thesis.id).await.unwrap().supervisor_id,
            Some(sup)
        );

        let cleared = svc.assign_supervisor(&thesis.id, None).await.unwrap();
        assert_eq!(cleared.supervisor_id, None);
    }

    #[tokio::test]
    async fn assign_reviewer_in_any_status_without_history() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let reviewer = seed_reviewer(&svc, "ines").await;
        let thesis = svc.create_thesis(NewThesis::new("T", &student)).await.unwrap();
        assert_eq!(thesis.external_reviewer_id, None);
        svc.transition_thesis(&thesis.id, ThesisStatus::Submitted, None)
            .await
            .unwrap();

        let assigned = svc.assign_reviewer(&thesis.id, Some(&reviewer)).await.unwrap();
        assert_eq!(assigned.external_reviewer_id.as_deref(), Some(reviewer.as_str()));
        assert_eq!(assigned.status, ThesisStatus::Submitted);
        assert!(assigned.updated_at >= thesis.updated_at);
        assert_eq!(svc.get_thesis(&thesis.id).await.unwrap(), assigned);
        assert_eq!(svc.history_for(&thesis.id).await.unwrap().len(), 1);

        let cleared = svc.assign_reviewer(&thesis.id, None).await.unwrap();
        assert_eq!(cleared.external_reviewer_id, None);
    }

    #[tokio::test]
    async fn assign_reviewer_rejects_unknown_reviewer_and_thesis() {
        let svc = test_service().await;
        let student = seed_student(&svc, "ada").await;
        let thesis = svc.create_thesis(NewThesis::new("T", &student)).await.unwrap();

        let err = svc
            .assign_reviewer(&thesis.id, Some("rev-00000000"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::NotFound {
                entity: EntityType::ExternalReviewer,
                ..
            }
        ));
        assert_eq!(svc.get_thesis(&thesis.id).await.unwrap(), thesis);

        let err = svc.assign_reviewer("ths-00000000", None).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::NotFound {
                entity: EntityType::Thesis,
                ..
            }
        ));
    }
}
