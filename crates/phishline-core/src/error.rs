//! Error taxonomy shared by every Phishline crate.

use thiserror::Error;

/// Alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong, grouped by where it goes wrong.
#[derive(Debug, Error)]
pub enum Error {
    // --- Ambient failures ---
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    // --- Terminal lifecycle ---
    #[error("Terminal failure: {message}")]
    Terminal { message: String },

    #[error("Could not initialize the terminal: {0}")]
    TerminalInit(String),

    // --- Backend contract ---
    /// Transport-level failure: connection refused, timeout, bad body.
    #[error("Request failed: {message}")]
    Http { message: String },

    /// The backend answered with a non-success status other than 401/409.
    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    /// HTTP 401: the bearer token is missing, expired, or invalid.
    #[error("Unauthorized")]
    Unauthorized,

    /// HTTP 409: the resource already exists (duplicate username on register).
    #[error("Conflict: {message}")]
    Conflict { message: String },

    // --- Settings and persistence ---
    #[error("Configuration problem: {message}")]
    Config { message: String },

    #[error("Session store failure: {message}")]
    SessionStore { message: String },

    // --- Message plumbing ---
    #[error("Could not send on the message channel: {message}")]
    ChannelSend { message: String },

    #[error("Message channel closed")]
    ChannelClosed,
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal { message: message.into() }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http { message: message.into() }
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api { status, message: message.into() }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn session_store(message: impl Into<String>) -> Self {
        Self::SessionStore { message: message.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend { message: message.into() }
    }

    /// Errors the UI absorbs: they surface as a result line, alert, or
    /// dashboard phase while the application keeps running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. }
                | Error::Api { .. }
                | Error::Unauthorized
                | Error::Conflict { .. }
                | Error::SessionStore { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Errors there is no living with: the event loop exits on these.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }
}

/// Attaches a caller-supplied label to a failure as it propagates,
/// logging it at the point of annotation.
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like [`ResultExt::context`], but the label is only built on the
    /// error path.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
