//! phishline-app - Application state and orchestration for Phishline
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: messages describe everything that happens, a pure update
//! function folds them into [`state::AppState`], and side effects run as
//! spawned actions that report back through the message channel.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod session_store;
pub mod signals;
pub mod state;

pub use actions::handle_action;
pub use config::Settings;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{DashboardFailure, Message};
pub use process::process_message;
pub use session_store::{
    FileSessionStore, MemorySessionStore, SessionStore, SharedSessionStore,
};
pub use signals::spawn_signal_handler;
pub use state::{AppState, AuthField, DashboardPhase, UiMode};

// Re-export core types the TUI needs
pub use phishline_core::{DashboardSummary, Session};
