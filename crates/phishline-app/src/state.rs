//! The model: every piece of state the UI renders from.

use phishline_core::{DashboardSummary, Session};

/// Which surface owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal TUI with prediction editor and dashboard
    #[default]
    Normal,

    /// Login/register dialog is open and captures all key input
    Auth,

    /// Blocking alert modal is open
    Alert,
}

// --- Prediction panel ---

/// State for the email check panel.
#[derive(Debug, Clone, Default)]
pub struct PredictionState {
    /// Email text under edit.
    pub input: String,

    /// A classify request is in flight. Blocks re-submission.
    pub busy: bool,

    /// Outcome of the most recent check: the backend's verdict label on
    /// success, or a generic failure line. `None` until the first submit.
    pub last_result: Option<String>,
}

impl PredictionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit action is currently allowed.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.input.trim().is_empty()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}

// --- Auth dialog ---

/// Which credential field of the auth dialog has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Username,
    Password,
}

impl AuthField {
    /// Move focus to the other field (Tab / Shift+Tab both flip).
    pub fn toggle(&mut self) {
        *self = match self {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }
}

/// State for the login/register dialog.
#[derive(Debug, Clone, Default)]
pub struct AuthDialogState {
    /// Username field contents.
    pub username: String,

    /// Password field contents (rendered masked).
    pub password: String,

    /// Which field receives typed characters.
    pub focus: AuthField,

    /// A login or register request is in flight.
    pub busy: bool,
}

impl AuthDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether login/register can be dispatched: both fields non-empty
    /// and no request already outstanding.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.username.is_empty() && !self.password.is_empty()
    }

    /// Mutable handle on whichever field currently has focus.
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }

    /// Wipe both fields and reset focus. Called when the dialog closes.
    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.focus = AuthField::Username;
        self.busy = false;
    }
}

// --- Dashboard ---

/// Lifecycle of the dashboard data fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardPhase {
    /// No session token. Nothing is fetched in this phase.
    #[default]
    LoggedOut,

    /// A fetch is dispatched and its response has not arrived yet.
    Loading,

    /// Stats arrived and are renderable.
    Ready(DashboardSummary),

    /// The backend rejected the token (401). Prompts re-login.
    Unauthorized,

    /// The fetch failed for a non-auth reason. Stale data is discarded
    /// rather than left on screen.
    Error,
}

/// State for the stats dashboard panel.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub phase: DashboardPhase,

    /// Identity of the most recent fetch. Bumped each time a fetch is
    /// dispatched (and on logout); a completion carrying an older value
    /// is stale and gets dropped.
    pub epoch: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current summary, if the panel is in the Ready phase.
    pub fn summary(&self) -> Option<&DashboardSummary> {
        match &self.phase {
            DashboardPhase::Ready(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == DashboardPhase::Loading
    }

    /// Invalidate any in-flight fetch and mark the next one as current.
    pub fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

/// The whole application state. `update` is the only writer; rendering
/// only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which surface owns the keyboard right now.
    pub ui_mode: UiMode,

    /// Authenticated identity; empty token means logged out
    pub session: Session,

    /// Counter bumped once per successful email check. The dashboard
    /// refetches when it observes a change; the value itself carries no
    /// meaning.
    pub refresh_signal: u64,

    /// Email check panel state
    pub prediction: PredictionState,

    /// Login/register dialog state
    pub auth: AuthDialogState,

    /// Stats dashboard state
    pub dashboard: DashboardState,

    /// Text of the blocking alert modal, when one is shown
    pub alert: Option<String>,

    /// Mode to restore once the alert is dismissed
    alert_return: UiMode,

    /// Set once the user asked to quit; the run loop exits on the next turn
    quitting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state restored from a previously saved session.
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    // --- UI mode ---

    /// Open the login/register dialog with cleared fields.
    pub fn show_auth_dialog(&mut self) {
        self.auth.reset();
        self.ui_mode = UiMode::Auth;
    }

    /// Close the login/register dialog.
    pub fn hide_auth_dialog(&mut self) {
        self.auth.reset();
        self.ui_mode = UiMode::Normal;
    }

    /// Show a blocking alert. Replaces any alert already on screen and
    /// remembers which mode to restore on dismiss, so an alert raised
    /// over the auth dialog drops back into the dialog with the typed
    /// credentials intact.
    pub fn show_alert(&mut self, text: impl Into<String>) {
        if self.ui_mode != UiMode::Alert {
            self.alert_return = self.ui_mode;
        }
        self.alert = Some(text.into());
        self.ui_mode = UiMode::Alert;
    }

    /// Dismiss the alert and restore the mode it interrupted.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = self.alert_return;
        self.alert_return = UiMode::Normal;
    }

    // --- Session ---

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Install a fresh session after a successful login.
    pub fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// Drop the session and reset everything derived from it.
    pub fn clear_session(&mut self) {
        self.session.clear();
        self.dashboard.next_epoch();
        self.dashboard.phase = DashboardPhase::LoggedOut;
    }

    // --- Quit ---

    /// Flag the run loop to exit on its next turn.
    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
