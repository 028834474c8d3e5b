//! phishline-tui - Terminal UI for Phishline
//!
//! This crate provides the ratatui-based terminal interface. It renders the
//! prediction and dashboard panels from `phishline-app` state and translates
//! terminal events into application messages.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
