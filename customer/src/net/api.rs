//! Table login and logout against the customer auth endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds and tests: calls report [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as an [`ApiError`] so the scanner page can show a
//! message and the logout path can still clear the local session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::{Deserialize, Serialize};

use crate::state::session::TableSession;

pub const LOGIN_ENDPOINT: &str = "/api/customer/auth/login";
pub const LOGOUT_ENDPOINT: &str = "/api/customer/auth/logout";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("request failed: {0}")]
    Request(String),

    #[error("{}", status_message(*.0))]
    Status(u16),

    #[error("unexpected response: {0}")]
    Parse(String),

    #[error("backend not reachable from this build")]
    Unavailable,
}

fn status_message(status: u16) -> String {
    match status {
        404 => "Table not found or inactive.".to_owned(),
        400 => "Session already ended.".to_owned(),
        other => format!("request failed: status {other}"),
    }
}

/// Body of `POST /api/customer/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLoginRequest {
    pub qr_code: String,
}

impl TableLoginRequest {
    /// Build a request from a scanned or typed code.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidInput`] if the code is blank.
    pub fn from_code(code: &str) -> Result<Self, ApiError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ApiError::InvalidInput("Scan or enter the table code."));
        }
        Ok(Self { qr_code: code.to_owned() })
    }
}

/// Session opened for the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableLoginResponse {
    pub session_token: String,
    pub table_number: String,
    pub table_id: i64,
}

impl From<TableLoginResponse> for TableSession {
    fn from(resp: TableLoginResponse) -> Self {
        TableSession::new(resp.table_id.to_string(), resp.session_token).with_table_number(resp.table_number)
    }
}

/// Open a table session from a QR code.
///
/// # Errors
///
/// [`ApiError`] on transport failure, a non-OK status, or a malformed body.
pub async fn login(request: &TableLoginRequest) -> Result<TableLoginResponse, ApiError> {
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
        resp.json::<TableLoginResponse>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// End the table session on the backend.
///
/// # Errors
///
/// [`ApiError`] on transport failure or a non-OK status.
pub async fn logout(session_token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = gate::config::api_url(LOGOUT_ENDPOINT);
        let resp = gloo_net::http::Request::post(&url)
            .query([("session_token", session_token)])
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session_token;
        Err(ApiError::Unavailable)
    }
}
