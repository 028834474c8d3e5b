//! # phishline-api - Backend HTTP Client
//!
//! Async client for the classification backend. Covers the four endpoints of
//! the backend contract:
//!
//! - `POST /predict`: classify one email (bearer token optional)
//! - `POST /login`: exchange credentials for a bearer token
//! - `POST /register`: create an account (advisory; does not log in)
//! - `GET /dashboard`: aggregate usage counts (bearer token required)
//!
//! Non-success statuses map onto the `phishline-core` error taxonomy:
//! 401 → [`Error::Unauthorized`], 409 → [`Error::Conflict`], anything else →
//! [`Error::Api`]; transport failures → [`Error::Http`].
//!
//! [`Error::Unauthorized`]: phishline_core::Error::Unauthorized
//! [`Error::Conflict`]: phishline_core::Error::Conflict
//! [`Error::Api`]: phishline_core::Error::Api
//! [`Error::Http`]: phishline_core::Error::Http

pub mod client;
pub mod wire;

pub use client::ApiClient;
