//! Email classification integration tests
//!
//! Full round trips from the submit message to the verdict on state,
//! including the dashboard refetch a successful check triggers.

use serde_json::json;
use tokio::sync::mpsc;

use phishline_app::{process_message, DashboardPhase, Message};

use super::mock_backend::MockBackendBuilder;
use crate::{authed_state, logged_out_state, memory_store, recv_message};

// --- Classification Tests ---

#[tokio::test]
async fn test_classify_round_trip() {
    let backend = MockBackendBuilder::new().with_verdict("Phishing").spawn().await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    process_message(
        &mut state,
        Message::PredictionInput {
            text: "Click here to claim your prize".to_string(),
        },
        &msg_tx,
        &api,
        &store,
    );
    process_message(&mut state, Message::SubmitPrediction, &msg_tx, &api, &store);
    assert!(state.prediction.busy);

    let completion = recv_message(&mut msg_rx).await;
    assert!(matches!(completion, Message::PredictCompleted { .. }));
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert!(!state.prediction.busy);
    assert_eq!(state.prediction.last_result.as_deref(), Some("Phishing"));

    let predict = backend.last_request().expect("predict request reached the backend");
    assert_eq!(predict.path, "/predict");
    assert!(predict.body.contains("Click here to claim your prize"));
    // Anonymous check: no bearer attached
    assert_eq!(predict.bearer, None);
}

#[tokio::test]
async fn test_classify_attaches_bearer_token_when_logged_in() {
    let backend = MockBackendBuilder::new().with_summary(1, 1, 0).spawn().await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = authed_state("tok-bearer", "frank");

    process_message(
        &mut state,
        Message::PredictionInput {
            text: "quarterly report attached".to_string(),
        },
        &msg_tx,
        &api,
        &store,
    );
    process_message(&mut state, Message::SubmitPrediction, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    let predict = backend
        .requests()
        .into_iter()
        .find(|r| r.path == "/predict")
        .expect("predict request reached the backend");
    assert_eq!(predict.bearer.as_deref(), Some("tok-bearer"));
}

#[tokio::test]
async fn test_successful_check_refreshes_dashboard() {
    let backend = MockBackendBuilder::new().with_summary(5, 4, 1).spawn().await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = authed_state("tok-refresh", "grace");

    process_message(
        &mut state,
        Message::PredictionInput {
            text: "is this genuine?".to_string(),
        },
        &msg_tx,
        &api,
        &store,
    );
    process_message(&mut state, Message::SubmitPrediction, &msg_tx, &api, &store);

    // Verdict lands and chains straight into a stats refetch
    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);
    assert_eq!(state.refresh_signal, 1);
    assert_eq!(state.dashboard.phase, DashboardPhase::Loading);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    match &state.dashboard.phase {
        DashboardPhase::Ready(summary) => assert_eq!(summary.total, 5),
        other => panic!("expected Ready, got {:?}", other),
    }
    assert_eq!(backend.request_count(), 2);
}

#[tokio::test]
async fn test_failed_check_shows_fallback_label() {
    let backend = MockBackendBuilder::new()
        .with_response("POST", "/predict", 500, json!({"error": "model offline"}))
        .spawn()
        .await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = authed_state("tok-x", "henry");

    process_message(
        &mut state,
        Message::PredictionInput {
            text: "some email".to_string(),
        },
        &msg_tx,
        &api,
        &store,
    );
    process_message(&mut state, Message::SubmitPrediction, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    assert!(matches!(completion, Message::PredictFailed { .. }));
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert!(!state.prediction.busy);
    assert_eq!(
        state.prediction.last_result.as_deref(),
        Some("Unauthorized or API error.")
    );
    // Failure does not nudge the dashboard
    assert_eq!(state.refresh_signal, 0);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn test_blank_email_never_reaches_backend() {
    let backend = MockBackendBuilder::new().spawn().await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, _msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    process_message(
        &mut state,
        Message::PredictionInput {
            text: "   \n  ".to_string(),
        },
        &msg_tx,
        &api,
        &store,
    );
    process_message(&mut state, Message::SubmitPrediction, &msg_tx, &api, &store);

    assert!(!state.prediction.busy);
    // Give a stray request a moment to land before checking
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert_eq!(backend.request_count(), 0);
}
