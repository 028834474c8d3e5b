//! Shared foundation for the Phishline workspace: domain types, the
//! workspace [`Error`]/[`Result`] pair, and file logging setup.
//!
//! Everything here is leaf code. The crate pulls in serde, thiserror, and
//! the tracing stack, and nothing from the rest of the workspace, so any
//! other crate can depend on it without cycles.
//!
//! The types a caller usually wants come in through [`prelude`]:
//!
//! ```rust
//! use phishline_core::prelude::*;
//! ```
//!
//! [`Session`] carries the bearer token and display name of a logged-in
//! user, [`Prediction`] is the classification label for one email, and
//! [`DashboardSummary`] holds aggregate counts parsed leniently from the
//! backend. [`Error`] splits failures into recoverable ones the UI
//! absorbs and fatal ones the event loop exits on.

pub mod error;
pub mod logging;
pub mod prediction;
pub mod prelude;
pub mod session;
pub mod summary;

pub use error::{Error, Result, ResultExt};
pub use prediction::Prediction;
pub use session::Session;
pub use summary::DashboardSummary;
