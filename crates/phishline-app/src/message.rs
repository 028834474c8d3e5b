//! Everything that can happen, as data.

use crate::input_key::InputKey;
use phishline_core::{DashboardSummary, Session};

/// Why a dashboard fetch did not produce a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFailure {
    /// Backend rejected the bearer token (401).
    Unauthorized,
    /// Network failure or any non-401 error status.
    Other,
}

/// The single input type of `update`: key presses, task completions,
/// and the few commands other parts of the system inject directly.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press, already translated off crossterm's types
    Key(InputKey),

    /// The input poll timed out; nothing happened
    Tick,

    /// Quit the application (Ctrl+C/Ctrl+Q, signal handler)
    Quit,

    // --- Email classification ---
    /// Replace the email text under edit
    PredictionInput { text: String },
    /// Submit the current email text for classification
    SubmitPrediction,
    /// Classify call resolved with a verdict label
    PredictCompleted { label: String },
    /// Classify call failed (network error or any error status)
    PredictFailed { reason: String },

    // --- Auth ---
    /// Toggle the login/register dialog
    ToggleAuthDialog,
    /// Close the login/register dialog without logging in
    CloseAuthDialog,
    /// Replace the contents of the focused credential field
    AuthInput { text: String },
    /// Move focus between the username and password fields
    AuthFocusToggle,
    /// Submit credentials to the login endpoint
    SubmitLogin,
    /// Login resolved with a fresh session
    LoginCompleted { session: Session },
    /// Login rejected or failed
    LoginFailed { reason: String },
    /// Submit credentials to the register endpoint
    SubmitRegister,
    /// Registration accepted (does not log the user in)
    RegisterCompleted,
    /// Registration rejected, e.g. duplicate username
    RegisterFailed { message: String },
    /// Drop the session and wipe saved credentials
    Logout,

    // --- Dashboard ---
    /// Re-fetch the stats summary for the current session
    RefreshDashboard,
    /// Dashboard fetch resolved with stats
    DashboardFetchCompleted { summary: DashboardSummary, epoch: u64 },
    /// Dashboard fetch failed
    DashboardFetchFailed { failure: DashboardFailure, epoch: u64 },

    // --- Alerts ---
    /// Dismiss the blocking alert modal
    DismissAlert,
}
