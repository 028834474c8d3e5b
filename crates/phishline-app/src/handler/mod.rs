//! The update function and everything it dispatches to.
//!
//! `update` itself only routes: key handling lives in `keys`, email
//! classification in `prediction`, login/register/logout in `auth`, and
//! stats fetching in `dashboard`. Handlers never touch the network; they
//! return an [`UpdateAction`] and the event loop does the I/O.

pub(crate) mod auth;
pub(crate) mod dashboard;
pub(crate) mod keys;
pub(crate) mod prediction;
pub(crate) mod update;


use crate::message::Message;
use phishline_core::Session;

pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects a handler asks the event loop to carry out.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// POST the email text to the classify endpoint.
    /// `token` is attached as a bearer credential when present.
    Predict {
        email: String,
        token: Option<String>,
    },

    /// POST credentials to the login endpoint
    Login { username: String, password: String },

    /// POST credentials to the register endpoint
    Register { username: String, password: String },

    /// GET the stats summary. `epoch` identifies this fetch so the
    /// completion can be dropped if a newer fetch supersedes it.
    FetchDashboard { token: String, epoch: u64 },

    /// Persist the session to durable storage
    SaveSession { session: Session },

    /// Wipe durable storage entirely (logout)
    ClearStorage,
}

/// What a single `update` call produced: at most one follow-up message
/// (processed before the next input) and at most one side effect.
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
