//! Admin login exchange.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: the call reports [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an [`ApiError`] so the login page can show a
//! message instead of crashing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::state::session::AdminSession;

pub const LOGIN_ENDPOINT: &str = "/api/admin/auth/login";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("request failed: {0}")]
    Request(String),

    #[error("login failed: {}", status_message(*.0))]
    Status(u16),

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("backend not reachable from this build")]
    Unavailable,
}

fn status_message(status: u16) -> String {
    match status {
        401 => "invalid credentials".to_owned(),
        other => format!("status {other}"),
    }
}

/// Body of `POST /api/admin/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a request from raw form input. The username is trimmed; the
    /// password is sent as typed but must not be blank.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidInput`] if either field is blank.
    pub fn from_form(username: &str, password: &str) -> Result<Self, ApiError> {
        let username = username.trim();
        if username.is_empty() || password.trim().is_empty() {
            return Err(ApiError::InvalidInput("Enter both username and password."));
        }
        Ok(Self { username: username.to_owned(), password: password.to_owned() })
    }
}

/// Token response from the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

impl From<LoginResponse> for AdminSession {
    fn from(resp: LoginResponse) -> Self {
        AdminSession::new(resp.access_token)
    }
}

/// Exchange credentials for a bearer token.
///
/// # Errors
///
/// [`ApiError`] on transport failure, a non-OK status, or a malformed body.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = gate::config::api_url(LOGIN_ENDPOINT);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<LoginResponse>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
