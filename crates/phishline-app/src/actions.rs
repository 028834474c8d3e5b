//! Where the I/O actually happens.
//!
//! Each `UpdateAction` maps to one spawned task. API tasks resolve to a
//! completion or failure `Message` sent back on the channel; persistence
//! tasks run on the blocking pool and only log on failure.

use tokio::sync::mpsc;

use phishline_api::ApiClient;
use phishline_core::prelude::*;
use phishline_core::Session;

use crate::handler::{auth, UpdateAction};
use crate::message::{DashboardFailure, Message};
use crate::session_store::SharedSessionStore;

const REGISTER_FAILED_FALLBACK: &str = "Registration failed. Please try again.";

/// Spawn the task an action calls for. Never blocks; the spawned task
/// owns its channel sender and the send is best-effort (the receiver is
/// gone only during shutdown).
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    api: ApiClient,
    store: SharedSessionStore,
) {
    match action {
        UpdateAction::Predict { email, token } => {
            tokio::spawn(async move {
                debug!("Dispatching classify request ({} bytes)", email.len());
                let msg = match api.predict(&email, token.as_deref()).await {
                    Ok(prediction) => Message::PredictCompleted {
                        label: prediction.label,
                    },
                    Err(e) => Message::PredictFailed {
                        reason: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::Login { username, password } => {
            tokio::spawn(async move {
                debug!("Dispatching login for {}", username);
                let msg = match api.login(&username, &password).await {
                    Ok(token) => Message::LoginCompleted {
                        session: Session { token, username },
                    },
                    Err(e) => Message::LoginFailed {
                        reason: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::Register { username, password } => {
            tokio::spawn(async move {
                debug!("Dispatching registration for {}", username);
                let msg = match api.register(&username, &password).await {
                    Ok(()) => Message::RegisterCompleted,
                    Err(e) => Message::RegisterFailed {
                        message: register_failure_text(&e),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::FetchDashboard { token, epoch } => {
            tokio::spawn(async move {
                debug!("Fetching dashboard stats (epoch {})", epoch);
                let msg = match api.dashboard(&token).await {
                    Ok(summary) => Message::DashboardFetchCompleted { summary, epoch },
                    Err(e) => Message::DashboardFetchFailed {
                        failure: dashboard_failure(&e),
                        epoch,
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SaveSession { session } => {
            tokio::task::spawn_blocking(move || persist_session(&store, &session));
        }

        UpdateAction::ClearStorage => {
            tokio::task::spawn_blocking(move || wipe_storage(&store));
        }
    }
}

/// Map a register error to the text shown in the blocking alert.
fn register_failure_text(err: &Error) -> String {
    match err {
        Error::Conflict { .. } => auth::DUPLICATE_USER_ALERT.to_string(),
        Error::Api { message, .. } if !message.is_empty() => message.clone(),
        _ => REGISTER_FAILED_FALLBACK.to_string(),
    }
}

/// Classify a dashboard error: 401 drives the re-login prompt, anything
/// else the generic alert.
fn dashboard_failure(err: &Error) -> DashboardFailure {
    match err {
        Error::Unauthorized => DashboardFailure::Unauthorized,
        _ => DashboardFailure::Other,
    }
}

/// Persistence failures never interrupt the session the user just
/// obtained; they only cost durability across restarts.
pub(crate) fn persist_session(store: &SharedSessionStore, session: &Session) {
    if let Err(e) = store.save(session) {
        warn!("Failed to persist session: {}", e);
    }
}

pub(crate) fn wipe_storage(store: &SharedSessionStore) {
    if let Err(e) = store.clear() {
        warn!("Failed to clear session storage: {}", e);
    }
}
