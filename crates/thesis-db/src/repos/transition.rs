//! Status changes for theses and milestones.
//!
//! Both state machines check the closed transition table on every write.
//! A thesis transition updates the row and appends its ledger entry in one
//! unit of work; a milestone transition touches only the milestone.

use thesis_core::entities::{Milestone, Thesis};
use thesis_core::enums::{EntityType, MilestoneStatus, ThesisStatus};
use thesis_core::errors::WorkflowError;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, now};
use crate::repos::committee::evaluate_committee;
use crate::repos::history::latest_change;
use crate::repos::milestone::require_milestone;
use crate::repos::thesis::require_thesis;
use crate::service::WorkflowService;

impl WorkflowService {
    /// Move a thesis along one edge of its lifecycle and record it.
    ///
    /// `under_review -> approved` is additionally guarded by the thesis's
    /// committee, if it has one.
    pub async fn transition_thesis(
        &self,
        id: &str,
        target: ThesisStatus,
        note: Option<&str>,
    ) -> Result<Thesis, WorkflowError> {
        let note = crate::helpers::non_blank(note);
        let uow = self.db().begin().await?;
        let result: Result<(Thesis, ThesisStatus), WorkflowError> = async {
            let mut thesis = require_thesis(uow.conn(), id).await?;
            let from = thesis.status;

            if !from.can_transition_to(target) {
                return Err(WorkflowError::invalid_transition(
                    EntityType::Thesis,
                    id,
                    from,
                    target,
                ));
            }
            if from == ThesisStatus::UnderReview && target == ThesisStatus::Approved {
                let committee = evaluate_committee(uow.conn(), id).await?;
                if let Some(reason) = committee.reason {
                    return Err(
                        WorkflowError::invalid_transition(EntityType::Thesis, id, from, target)
                            .with_reason(reason),
                    );
                }
            }

            // Ledger order must never run backwards, even if the clock does.
            let mut changed_at = now().max(thesis.updated_at);
            if let Some(last) = latest_change(uow.conn(), id).await? {
                changed_at = changed_at.max(last);
            }

            let affected = uow
                .conn()
                .execute(
                    "UPDATE theses SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
                    libsql::params![
                        target.as_str(),
                        format_timestamp(&changed_at),
                        id,
                        from.as_str()
                    ],
                )
                .await
                .map_err(DatabaseError::from)?;
            if affected != 1 {
                return Err(DatabaseError::Query(format!(
                    "status update for {id} touched {affected} rows"
                ))
                .into());
            }

            self.append_history(&uow, id, from, target, changed_at, note.as_deref())
                .await?;

            thesis.status = target;
            thesis.updated_at = changed_at;
            Ok((thesis, from))
        }
        .await;

        match uow.finish(result).await {
            Ok((thesis, from)) => {
                tracing::info!(thesis_id = id, %from, to = %target, "thesis transitioned");
                Ok(thesis)
            }
            Err(err) => {
                if err.is_invalid_transition() {
                    tracing::warn!(thesis_id = id, to = %target, %err, "thesis transition rejected");
                }
                Err(err)
            }
        }
    }

    /// Move a milestone one step forward. Never written to the thesis ledger.
    pub async fn transition_milestone(
        &self,
        id: &str,
        target: MilestoneStatus,
    ) -> Result<Milestone, WorkflowError> {
        let uow = self.db().begin().await?;
        let result: Result<(Milestone, MilestoneStatus), WorkflowError> = async {
            let mut milestone = require_milestone(uow.conn(), id).await?;
            let from = milestone.status;

            if !from.can_transition_to(target) {
                return Err(WorkflowError::invalid_transition(
                    EntityType::Milestone,
                    id,
                    from,
                    target,
                ));
            }

            let ts = now().max(milestone.updated_at);
            uow.conn()
                .execute(
                    "UPDATE milestones SET status = ?1, updated_at = ?2 WHERE id = ?3",
                    libsql::params![target.as_str(), format_timestamp(&ts), id],
                )
                .await
                .map_err(DatabaseError::from)?;

            milestone.status = target;
            milestone.updated_at = ts;
            Ok((milestone, from))
        }
        .await;

        match uow.finish(result).await {
            Ok((milestone, from)) => {
                tracing::info!(milestone_id = id, %from, to = %target, "milestone transitioned");
                Ok(milestone)
            }
            Err(err) => {
                if err.is_invalid_transition() {
                    tracing::warn!(milestone_id = id, to = %target, %err, "milestone transition rejected");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{seed_thesis, test_service};
    use crate::updates::milestone::MilestoneUpdate;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    async fn thesis_in(svc: &WorkflowService, path: &[ThesisStatus]) -> String {
        let id = seed_thesis(svc).await;
        for status in path {
            svc.transition_thesis(&id, *status, None).await.unwrap();
        }
        id
    }

    #[tokio::test]
    async fn accepted_transition_writes_one_entry() {
        let svc = test_service().await;
        let id = seed_thesis(&svc).await;

        let thesis = svc
            .transition_thesis(&id, ThesisStatus::Submitted, Some("first draft in"))
            .await
            .unwrap();
        assert_eq!(thesis.status, ThesisStatus::Submitted);

        let history = svc.history_for(&id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].prior_status, ThesisStatus::Draft);
        assert_eq!(history[0].new_status, ThesisStatus::Submitted);
        assert_eq!(history[0].note.as_deref(), Some("first draft in"));
        assert_eq!(history[0].changed_at, thesis.updated_at);
        assert_eq!(svc.get_thesis(&id).await.unwrap(), thesis);
    }

    #[rstest]
    #[case::self_loop(ThesisStatus::Draft)]
    #[case::skip_ahead(ThesisStatus::Completed)]
    #[case::skip_review(ThesisStatus::Approved)]
    #[case::revision_from_draft(ThesisStatus::RevisionRequested)]
    #[tokio::test]
    async fn illegal_edges_from_draft_change_nothing(#[case] target: ThesisStatus) {
        let svc = test_service().await;
        let id = seed_thesis(&svc).await;
        let before = svc.get_thesis(&id).await.unwrap();

        let err = svc.transition_thesis(&id, target, None).await.unwrap_err();
        match err {
            WorkflowError::InvalidTransition { from, to, .. } => {
                assert_eq!(from, "draft");
                assert_eq!(to, target.as_str());
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
        assert_eq!(svc.get_thesis(&id).await.unwrap(), before);
        assert!(svc.history_for(&id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn completed_is_terminal() {
        let svc = test_service().await;
        let id = thesis_in(
            &svc,
            &[
                ThesisStatus::Submitted,
                ThesisStatus::UnderReview,
                ThesisStatus::Approved,
                ThesisStatus::FinalSubmitted,
                ThesisStatus::Completed,
            ],
        )
        .await;

        for target in ThesisStatus::ALL {
            let err = svc.transition_thesis(&id, target, None).await.unwrap_err();
            assert!(err.is_invalid_transition());
        }
        assert_eq!(svc.history_for(&id).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn missing_thesis_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .transition_thesis("ths-00000000", ThesisStatus::Submitted, None)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn history_timestamps_never_decrease() {
        let svc = test_service().await;
        let id = thesis_in(
            &svc,
            &[
                ThesisStatus::Submitted,
                ThesisStatus::UnderReview,
                ThesisStatus::RevisionRequested,
                ThesisStatus::Submitted,
            ],
        )
        .await;
        let history = svc.history_for(&id).await.unwrap();
        for pair in history.windows(2) {
            assert!(pair[0].changed_at <= pair[1].changed_at);
            assert_eq!(pair[0].new_status, pair[1].prior_status);
        }
    }

    async fn seed_milestone(svc: &WorkflowService) -> String {
        let thesis = seed_thesis(svc).await;
        svc.add_milestone(
            &thesis,
            "Literature review",
            NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
            None,
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn milestone_walks_forward() {
        let svc = test_service().await;
        let id = seed_milestone(&svc).await;
        for target in [
            MilestoneStatus::InProgress,
            MilestoneStatus::Submitted,
            MilestoneStatus::Accepted,
        ] {
            let m = svc.transition_milestone(&id, target).await.unwrap();
            assert_eq!(m.status, target);
        }
        let m = svc.get_milestone(&id).await.unwrap();
        assert_eq!(m.status, MilestoneStatus::Accepted);
        assert!(svc.history_for(&m.thesis_id).await.unwrap().is_empty());
    }

    #[rstest]
    #[case::from_in_progress(1)]
    #[case::from_submitted(2)]
    #[case::from_accepted(3)]
    #[tokio::test]
    async fn milestone_never_returns_to_planned(#[case] steps: usize) {
        let svc = test_service().await;
        let id = seed_milestone(&svc).await;
        for target in &MilestoneStatus::ALL[1..=steps] {
            svc.transition_milestone(&id, *target).await.unwrap();
        }
        let before = svc.get_milestone(&id).await.unwrap();
        let err = svc
            .transition_milestone(&id, MilestoneStatus::Planned)
            .await
            .unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(svc.get_milestone(&id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn milestone_cannot_skip() {
        let svc = test_service().await;
        let id = seed_milestone(&svc).await;
        let err = svc
            .transition_milestone(&id, MilestoneStatus::Submitted)
            .await
            .unwrap_err();
        assert!(err.is_invalid_transition());
    }

    #[tokio::test]
    async fn milestone_missing_is_not_found() {
        let svc = test_service().await;
        let err = svc
            .transition_milestone("mst-00000000", MilestoneStatus::InProgress)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(
            svc.update_milestone("mst-00000000", MilestoneUpdate::default())
                .await
                .unwrap_err()
                .is_not_found()
        );
    }
}
