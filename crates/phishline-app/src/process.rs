//! Feeds messages through `update` and dispatches the side effects.

use tokio::sync::mpsc;

use phishline_api::ApiClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::session_store::SharedSessionStore;
use crate::state::AppState;

/// Run one message and every follow-up it produces to completion.
///
/// Draining follow-ups here means a completion that triggers a refetch
/// settles before the next frame is drawn. Each action is handed to a
/// background task as it appears; none of them block this call.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &ApiClient,
    store: &SharedSessionStore,
) {
    let mut pending = Some(message);
    while let Some(current) = pending {
        let outcome = handler::update(state, current);

        if let Some(action) = outcome.action {
            handle_action(action, msg_tx.clone(), api.clone(), store.clone());
        }

        pending = outcome.message;
    }
}
