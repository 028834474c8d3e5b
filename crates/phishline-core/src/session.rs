//! Authenticated session identity

use serde::{Deserialize, Serialize};

/// The authenticated identity of the current user.
///
/// An empty `token` means unauthenticated. Both fields are written together
/// by the session store on login and cleared together on logout; partial
/// sessions never exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer credential issued by the backend at login.
    #[serde(default)]
    pub token: String,

    /// Display name of the logged-in user.
    #[serde(default)]
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    /// Whether this session holds a bearer token.
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Reset to the unauthenticated state.
    pub fn clear(&mut self) {
        self.token.clear();
        self.username.clear();
    }
}
