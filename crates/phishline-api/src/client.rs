//! Async HTTP client for the classification backend

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use phishline_core::{DashboardSummary, Error, Prediction, Result};

use crate::wire::{CredentialsRequest, ErrorBody, LoginResponse, PredictRequest};

/// Timeout applied to every backend request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the backend HTTP contract.
///
/// One instance is created at startup and cloned into every spawned request
/// task (reqwest clients are cheap handles over a shared connection pool).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// A trailing slash on the URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Classify one email.
    ///
    /// The bearer token is attached when present and non-empty; the endpoint
    /// also accepts anonymous calls.
    pub async fn predict(&self, email: &str, token: Option<&str>) -> Result<Prediction> {
        let mut request = self
            .client
            .post(self.url("/predict"))
            .json(&PredictRequest { email });
        if let Some(token) = bearer(token) {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        debug!("POST /predict -> {}", response.status());
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: crate::wire::PredictResponse = response
            .json()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(Prediction::new(body.prediction))
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(&CredentialsRequest { username, password })
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        debug!("POST /login -> {}", response.status());
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(body.access_token)
    }

    /// Create a new account. A 2xx response body carries nothing we use.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let response = self
            .client
            .post(self.url("/register"))
            .json(&CredentialsRequest { username, password })
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        debug!("POST /register -> {}", response.status());
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// Fetch the aggregate usage counts. Requires a bearer token.
    pub async fn dashboard(&self, token: &str) -> Result<DashboardSummary> {
        let response = self
            .client
            .get(self.url("/dashboard"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        debug!("GET /dashboard -> {}", response.status());
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        Ok(DashboardSummary::from_value(&value))
    }
}

/// A token worth sending: present and non-empty.
fn bearer(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

/// Map a non-success response to an [`Error`], salvaging the backend message.
async fn error_from_response(response: reqwest::Response) -> Error {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    classify_status(status, message)
}

/// Map an HTTP status plus optional backend message onto the error taxonomy.
fn classify_status(status: StatusCode, message: Option<String>) -> Error {
    let message = message.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized,
        StatusCode::CONFLICT => Error::conflict(message),
        _ => Error::api(status.as_u16(), message),
    }
}
