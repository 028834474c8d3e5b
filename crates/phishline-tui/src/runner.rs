//! Terminal lifecycle and the main event loop.

use phishline_api::ApiClient;
use phishline_app::message::Message;
use phishline_app::{process_message, spawn_signal_handler, AppState, SharedSessionStore};
use phishline_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Bring up the terminal, run until quit, restore the terminal.
pub async fn run(mut state: AppState, api: ApiClient, store: SharedSessionStore) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    // One channel carries everything that happens off-thread: API task
    // completions and the signal listener's Quit
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    spawn_signal_handler(msg_tx.clone());

    // Seed the dashboard when a stored session was restored; a no-op while
    // logged out
    process_message(&mut state, Message::RefreshDashboard, &msg_tx, &api, &store);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &api, &store);

    ratatui::restore();
    result
}

/// Drain completions, then draw, then poll for input, until quit.
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    api: &ApiClient,
    store: &SharedSessionStore,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, api, store);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // The 50ms poll keeps the loop responsive to completions without
        // spinning
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, api, store);
        }
    }

    Ok(())
}
