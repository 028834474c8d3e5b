//! Request and response payloads for the backend HTTP contract

use serde::{Deserialize, Serialize};

/// Body for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub email: &'a str,
}

/// Successful response from `POST /predict`.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
}

/// Body for `POST /login` and `POST /register`.
#[derive(Debug, Serialize)]
pub struct CredentialsRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful response from `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Error payload the backend may attach to a non-success status.
///
/// The backend is not consistent about the field name, so both common
/// spellings are accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The backend-provided message, preferring `error` over `message`.
    pub fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}
