//! Delivers OS shutdown signals into the message loop.

use tokio::sync::mpsc;

use crate::message::Message;
use phishline_core::prelude::*;

/// Listen for a shutdown signal in the background and translate the
/// first one into `Message::Quit`. The task ends after one delivery;
/// the app is already tearing down by then.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_requested().await {
            Ok(name) => {
                info!("Received {}, shutting down", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal listener failed: {}", e),
        }
    });
}

#[cfg(unix)]
async fn shutdown_requested() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT handler: {}", e)))?;
    let mut terminate = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM handler: {}", e)))?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(windows)]
async fn shutdown_requested() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok("Ctrl+C")
}
