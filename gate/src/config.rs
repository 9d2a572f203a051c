//! Per-app navigation profile.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::route::{RouteError, RouteTable, RouteTarget};

/// Default API base when `TABLE_ORDER_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "";

/// Entry and landing routes for one app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppProfile {
    pub name: &'static str,
    /// Unauthenticated entry view (`/login`, `/qr-scan`).
    pub entry: &'static str,
    /// Default authenticated view (`/dashboard`, `/menu`).
    pub landing: &'static str,
}

impl AppProfile {
    /// Check the profile against `table`.
    ///
    /// The entry route must be a public view and the landing route a
    /// protected view; anything else would let the guard bounce forever.
    ///
    /// # Errors
    ///
    /// [`RouteError::UnknownRoute`] if either path is missing or has the
    /// wrong shape.
    pub fn validate(&self, table: &RouteTable) -> Result<(), RouteError> {
        match table.resolve(self.entry) {
            Some(e) if e.target == RouteTarget::View && !e.requires_auth => {}
            _ => return Err(RouteError::UnknownRoute(self.entry)),
        }
        match table.resolve(self.landing) {
            Some(e) if e.target == RouteTarget::View && e.requires_auth => Ok(()),
            _ => Err(RouteError::UnknownRoute(self.landing)),
        }
    }
}

/// Backend base URL baked in at build time. Empty means same-origin.
pub fn api_base() -> &'static str {
    option_env!("TABLE_ORDER_API_BASE").map_or(DEFAULT_API_BASE, |base| base.trim_end_matches('/'))
}

/// Join `path` onto [`api_base`].
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}
