//! Admin bearer-token session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page establishes the session from the backend's token response,
//! the guarded outlet reads presence on every navigation, and the console
//! layout clears it on logout. One [`SessionContext`] is created by the app
//! root and provided through Leptos context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::SessionRecord;

/// Storage key for the admin bearer token.
pub const TOKEN_KEY: &str = "admin_token";

/// Opaque bearer token issued by `/api/admin/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminSession {
    pub token: String,
}

impl AdminSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }
}

impl SessionRecord for AdminSession {
    const KEYS: &'static [&'static str] = &[TOKEN_KEY];

    fn from_storage(mut read: impl FnMut(&'static str) -> Option<String>) -> Self {
        Self { token: read(TOKEN_KEY).unwrap_or_default() }
    }

    fn to_storage(&self) -> Vec<(&'static str, &str)> {
        vec![(TOKEN_KEY, self.token.as_str())]
    }

    fn is_complete(&self) -> bool {
        !self.token.is_empty()
    }
}

/// Reactive handle over the tab's admin session.
pub type SessionContext = gate::SessionContext<AdminSession>;
