//! Property tests: the ledger mirrors exactly the accepted transitions.

use proptest::prelude::*;

use thesis_core::enums::ThesisStatus;
use thesis_db::WorkflowService;
use thesis_db::updates::thesis::NewThesis;

fn status() -> impl Strategy<Value = ThesisStatus> {
    prop::sample::select(ThesisStatus::ALL.to_vec())
}

/// Apply `requests` in order and return (accepted count, final status,
/// ledger length, ledger chains correctly).
async fn run(requests: Vec<ThesisStatus>) -> (usize, ThesisStatus, usize, bool) {
    let svc = WorkflowService::new_local(":memory:").await.unwrap();
    let student = svc.create_student("P", "p@uni.edu").await.unwrap();
    let id = svc
        .create_thesis(NewThesis::new("Property", student.id))
        .await
        .unwrap()
        .id;

    let mut accepted = 0;
    let mut current = ThesisStatus::Draft;
    for target in requests {
        let legal = current.can_transition_to(target);
        match svc.transition_thesis(&id, target, None).await {
            Ok(thesis) => {
                assert!(legal, "{current} -> {target} should have been rejected");
                accepted += 1;
                current = thesis.status;
            }
            Err(err) => {
                assert!(!legal, "{current} -> {target} should have been accepted");
                assert!(err.is_invalid_transition());
            }
        }
    }

    let history = svc.history_for(&id).await.unwrap();
    let mut expected_prior = ThesisStatus::Draft;
    let mut chained = true;
    for entry in &history {
        chained &= entry.prior_status == expected_prior;
        expected_prior = entry.new_status;
    }
    let final_status = svc.get_thesis(&id).await.unwrap().status;
    (accepted, final_status, history.len(), chained && expected_prior == final_status)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ledger_length_equals_accepted_transitions(
        requests in prop::collection::vec(status(), 0..24)
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let (accepted, _final, ledger_len, chained) = rt.block_on(run(requests));
        prop_assert_eq!(accepted, ledger_len);
        prop_assert!(chained);
    }
}
