//! Login, registration, and logout integration tests
//!
//! Drives the update loop against a mock backend and asserts on the
//! state transitions the UI would render.

use serde_json::json;
use tokio::sync::mpsc;

use std::sync::Arc;

use phishline_api::ApiClient;
use phishline_app::{
    process_message, AppState, DashboardFailure, DashboardPhase, FileSessionStore, Message,
    SessionStore, SharedSessionStore, UiMode,
};

use super::mock_backend::MockBackendBuilder;
use crate::{assert_mode, authed_state, logged_out_state, memory_store, recv_message, wait_until};

/// Open the auth dialog and type credentials into both fields.
fn type_credentials(
    state: &mut AppState,
    msg_tx: &mpsc::Sender<Message>,
    api: &ApiClient,
    store: &SharedSessionStore,
    username: &str,
    password: &str,
) {
    process_message(state, Message::ToggleAuthDialog, msg_tx, api, store);
    process_message(
        state,
        Message::AuthInput {
            text: username.to_string(),
        },
        msg_tx,
        api,
        store,
    );
    process_message(state, Message::AuthFocusToggle, msg_tx, api, store);
    process_message(
        state,
        Message::AuthInput {
            text: password.to_string(),
        },
        msg_tx,
        api,
        store,
    );
}

// --- Login Tests ---

#[tokio::test]
async fn test_login_flow_installs_session_and_loads_dashboard() {
    let backend = MockBackendBuilder::new()
        .with_token("jwt-e2e")
        .with_summary(12, 9, 3)
        .spawn()
        .await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    type_credentials(&mut state, &msg_tx, &api, &store, "alice", "hunter2");
    process_message(&mut state, Message::SubmitLogin, &msg_tx, &api, &store);
    assert!(state.auth.busy);

    // Login task resolves with a fresh session
    let completion = recv_message(&mut msg_rx).await;
    assert!(matches!(completion, Message::LoginCompleted { .. }));
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert_eq!(state.session.token, "jwt-e2e");
    assert_eq!(state.session.username, "alice");
    assert_mode!(state, UiMode::Normal);
    // The follow-up stats fetch is already in flight
    assert_eq!(state.dashboard.phase, DashboardPhase::Loading);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    match &state.dashboard.phase {
        DashboardPhase::Ready(summary) => {
            assert_eq!(summary.total, 12);
            assert_eq!(summary.legit, 9);
            assert_eq!(summary.phishing, 3);
        }
        other => panic!("expected Ready, got {:?}", other),
    }

    // The credentials actually went over the wire
    let login = backend
        .requests()
        .into_iter()
        .find(|r| r.path == "/login")
        .expect("login request reached the backend");
    assert!(login.body.contains("\"username\":\"alice\""));
}

#[tokio::test]
async fn test_login_persists_session_to_store() {
    let backend = MockBackendBuilder::new().with_token("jwt-persist").spawn().await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    type_credentials(&mut state, &msg_tx, &api, &store, "carol", "pw");
    process_message(&mut state, Message::SubmitLogin, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    // Persistence runs on the blocking pool
    wait_until(|| store.load().token == "jwt-persist").await;
    assert_eq!(store.load().username, "carol");
}

#[tokio::test]
async fn test_login_persists_session_to_disk() {
    let temp = tempfile::tempdir().expect("tempdir");
    let state_dir = temp.path().join("state");

    let backend = MockBackendBuilder::new().with_token("jwt-disk").spawn().await;
    let api = backend.client();
    let store: SharedSessionStore = Arc::new(FileSessionStore::new(state_dir.clone()));
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    type_credentials(&mut state, &msg_tx, &api, &store, "ivy", "pw");
    process_message(&mut state, Message::SubmitLogin, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    wait_until(|| state_dir.join("session.toml").exists()).await;
    // A fresh store over the same directory sees the session, as a
    // restart would
    let restored = FileSessionStore::new(state_dir).load();
    assert_eq!(restored.token, "jwt-disk");
    assert_eq!(restored.username, "ivy");
}

#[tokio::test]
async fn test_failed_login_alerts_and_keeps_typed_credentials() {
    let backend = MockBackendBuilder::new()
        .with_response("POST", "/login", 401, json!({"error": "Bad credentials"}))
        .spawn()
        .await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    type_credentials(&mut state, &msg_tx, &api, &store, "mallory", "wrong");
    process_message(&mut state, Message::SubmitLogin, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    assert!(matches!(completion, Message::LoginFailed { .. }));
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert_mode!(state, UiMode::Alert);
    assert_eq!(
        state.alert.as_deref(),
        Some("Login failed. Check your credentials.")
    );
    assert!(!state.auth.busy);
    assert!(!state.session.is_authenticated());

    // Dismissing drops back into the dialog with the typed username intact
    process_message(&mut state, Message::DismissAlert, &msg_tx, &api, &store);
    assert_mode!(state, UiMode::Auth);
    assert_eq!(state.auth.username, "mallory");
}

// --- Registration Tests ---

#[tokio::test]
async fn test_register_success_prompts_login() {
    let backend = MockBackendBuilder::new().spawn().await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    type_credentials(&mut state, &msg_tx, &api, &store, "newuser", "pw");
    process_message(&mut state, Message::SubmitRegister, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    assert!(matches!(completion, Message::RegisterCompleted));
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert_eq!(
        state.alert.as_deref(),
        Some("User registered! You can now log in.")
    );
    // Registration never logs the user in
    assert!(!state.session.is_authenticated());
    assert_eq!(backend.last_request().expect("request recorded").path, "/register");
}

#[tokio::test]
async fn test_register_duplicate_username_alerts() {
    let backend = MockBackendBuilder::new()
        .with_response("POST", "/register", 409, json!({"error": "taken"}))
        .spawn()
        .await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = logged_out_state();

    type_credentials(&mut state, &msg_tx, &api, &store, "taken", "pw");
    process_message(&mut state, Message::SubmitRegister, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert_mode!(state, UiMode::Alert);
    assert_eq!(state.alert.as_deref(), Some("Username already exists."));
}

// --- Logout Tests ---

#[tokio::test]
async fn test_logout_drops_session_and_clears_store() {
    let backend = MockBackendBuilder::new().spawn().await;
    let api = backend.client();
    let store = memory_store();
    store
        .save(&crate::test_session("tok-1", "dave"))
        .expect("seed store");
    let (msg_tx, _msg_rx) = mpsc::channel(32);
    let mut state = authed_state("tok-1", "dave");

    process_message(&mut state, Message::Logout, &msg_tx, &api, &store);

    assert!(!state.session.is_authenticated());
    assert_eq!(state.dashboard.phase, DashboardPhase::LoggedOut);
    wait_until(|| !store.load().is_authenticated()).await;
}

// --- Token Expiry Tests ---

#[tokio::test]
async fn test_expired_token_prompts_relogin() {
    let backend = MockBackendBuilder::new()
        .with_response("GET", "/dashboard", 401, json!({"error": "Token expired"}))
        .spawn()
        .await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = authed_state("stale-token", "erin");

    process_message(&mut state, Message::RefreshDashboard, &msg_tx, &api, &store);
    assert_eq!(state.dashboard.phase, DashboardPhase::Loading);

    let completion = recv_message(&mut msg_rx).await;
    assert!(matches!(
        completion,
        Message::DashboardFetchFailed {
            failure: DashboardFailure::Unauthorized,
            ..
        }
    ));
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert_eq!(state.dashboard.phase, DashboardPhase::Unauthorized);
    // No alert: the panel itself carries the re-login prompt
    assert!(state.alert.is_none());
}

#[tokio::test]
async fn test_dashboard_outage_raises_alert() {
    let backend = MockBackendBuilder::new()
        .with_response("GET", "/dashboard", 500, json!({"error": "boom"}))
        .spawn()
        .await;
    let api = backend.client();
    let store = memory_store();
    let (msg_tx, mut msg_rx) = mpsc::channel(32);
    let mut state = authed_state("tok-ok", "frank");

    process_message(&mut state, Message::RefreshDashboard, &msg_tx, &api, &store);

    let completion = recv_message(&mut msg_rx).await;
    process_message(&mut state, completion, &msg_tx, &api, &store);

    assert_eq!(state.dashboard.phase, DashboardPhase::Error);
    assert_eq!(state.alert.as_deref(), Some("Failed to load dashboard data."));
}
