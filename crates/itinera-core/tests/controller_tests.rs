mod common;

use std::{sync::Arc, time::Duration};

use common::{paris_draft, today, RecordingApi};
use itinera_core::{
    models::{Budget, InterestSelection},
    FailureKind, FixedClock, Settlement, SubmissionController, SubmissionFailure,
    SubmissionStatus, SubmitOutcome, GENERIC_FAILURE_MESSAGE,
};
use jiff::civil::date;
use serde_json::json;

fn controller(api: RecordingApi) -> SubmissionController<Arc<RecordingApi>> {
    SubmissionController::new(Arc::new(api)).with_clock(FixedClock(today()))
}

fn failure(outcome: SubmitOutcome) -> SubmissionFailure {
    match outcome {
        SubmitOutcome::Settled(Settlement::Failure(failure)) => failure,
        other => panic!("expected a failed settlement, got {other:?}"),
    }
}

#[tokio::test]
async fn test_valid_draft_is_sent_once_and_succeeds() {
    let controller = controller(RecordingApi::succeeding("plan-123"));

    let outcome = controller.submit(&paris_draft()).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Settled(Settlement::Success("plan-123".into()))
    );
    assert_eq!(controller.api().calls(), 1);
    assert_eq!(
        controller.status(),
        SubmissionStatus::Settled(Settlement::Success("plan-123".into()))
    );

    let sent = controller.api().requests();
    assert_eq!(
        serde_json::to_value(&sent[0]).unwrap(),
        json!({
            "location": "Paris",
            "start_date": "2025-06-01",
            "days": 3,
            "budget": "medium",
            "interests": ["Art", "Food"]
        })
    );
}

#[tokio::test]
async fn test_invalid_draft_reports_every_rule_without_network() {
    let controller = controller(RecordingApi::succeeding("unused"));
    let draft = paris_draft()
        .with_location("  ")
        .with_start_date(date(2025, 4, 30))
        .with_days_text("0")
        .with_budget(Budget::Amount(0.0))
        .with_interests(InterestSelection::default());

    let failure = failure(controller.submit(&draft).await);

    match &failure {
        SubmissionFailure::Validation(errors) => assert_eq!(
            errors.kinds(),
            vec![
                FailureKind::MissingLocation,
                FailureKind::InvalidStartDate,
                FailureKind::InvalidDayCount,
                FailureKind::InvalidBudget,
                FailureKind::NoInterestsSelected,
            ]
        ),
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert_eq!(failure.messages().len(), 5);
    assert_eq!(controller.api().calls(), 0);
}

#[tokio::test]
async fn test_missing_location_and_interests_are_both_reported() {
    let controller = controller(RecordingApi::succeeding("unused"));
    let draft = paris_draft()
        .with_location("")
        .with_interests(InterestSelection::default());

    let messages = failure(controller.submit(&draft).await).messages();

    assert_eq!(
        messages,
        vec![
            "Please enter a location".to_string(),
            "Please select at least one interest".to_string(),
        ]
    );
    assert_eq!(controller.api().calls(), 0);
}

#[tokio::test]
async fn test_server_detail_is_surfaced() {
    let controller = controller(RecordingApi::failing(422, Some("Location not found")));

    let failure = failure(controller.submit(&paris_draft()).await);

    match failure {
        SubmissionFailure::Server(err) => {
            assert_eq!(err.message(), "Location not found");
            assert_eq!(err.status(), Some(422));
        }
        other => panic!("expected server failure, got {other:?}"),
    }
    assert_eq!(controller.api().calls(), 1);
}

#[tokio::test]
async fn test_timeout_uses_generic_message() {
    let controller = controller(RecordingApi::timing_out());

    let messages = failure(controller.submit(&paris_draft()).await).messages();

    assert_eq!(messages, vec![GENERIC_FAILURE_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_double_submit_sends_one_request() {
    let controller = controller(
        RecordingApi::succeeding("plan-1").with_delay(Duration::from_millis(50)),
    );
    let draft = paris_draft();

    let (first, second) = tokio::join!(controller.submit(&draft), controller.submit(&draft));

    assert_eq!(
        first,
        SubmitOutcome::Settled(Settlement::Success("plan-1".into()))
    );
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(controller.api().calls(), 1);
}

#[tokio::test]
async fn test_resubmit_after_failure_is_allowed() {
    let controller = controller(RecordingApi::failing(500, None));

    failure(controller.submit(&paris_draft()).await);
    let messages = failure(controller.submit(&paris_draft()).await).messages();

    assert_eq!(messages, vec![GENERIC_FAILURE_MESSAGE.to_string()]);
    assert_eq!(controller.api().calls(), 2);
}

#[tokio::test]
async fn test_reset_returns_to_idle() {
    let controller = controller(RecordingApi::succeeding("plan-9"));
    assert_eq!(controller.status(), SubmissionStatus::Idle);

    controller.submit(&paris_draft()).await;
    assert!(matches!(controller.status(), SubmissionStatus::Settled(_)));

    controller.reset();
    assert_eq!(controller.status(), SubmissionStatus::Idle);
    assert!(!controller.is_submitting());
}

#[tokio::test]
async fn test_abandoned_submission_returns_to_idle() {
    let controller = controller(
        RecordingApi::succeeding("plan-2").with_delay(Duration::from_secs(5)),
    );
    let draft = paris_draft();

    let timed_out =
        tokio::time::timeout(Duration::from_millis(20), controller.submit(&draft)).await;

    assert!(timed_out.is_err());
    assert_eq!(controller.status(), SubmissionStatus::Idle);
    assert_eq!(controller.api().calls(), 1);
}
