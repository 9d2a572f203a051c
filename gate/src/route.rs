//! Static route table and path resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each app declares one ordered table at startup. The navigator resolves
//! every attempted location against it before the guard runs.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::collections::HashSet;

/// Errors detected while building a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route table is empty")]
    Empty,

    #[error("route path must start with '/': {0}")]
    RelativePath(&'static str),

    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),

    #[error("redirect from {from} targets unknown path {to}")]
    DanglingRedirect { from: &'static str, to: &'static str },

    #[error("unknown route: {0}")]
    UnknownRoute(&'static str),
}

/// What a matched route does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render the view registered under the route's name.
    View,
    /// Forward to another path in the same table.
    Redirect(&'static str),
}

/// One path binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub target: RouteTarget,
    pub requires_auth: bool,
}

impl RouteEntry {
    /// Public view route.
    pub const fn view(path: &'static str, name: &'static str) -> Self {
        Self { path, name, target: RouteTarget::View, requires_auth: false }
    }

    /// Redirect-only route.
    pub const fn redirect(path: &'static str, name: &'static str, to: &'static str) -> Self {
        Self { path, name, target: RouteTarget::Redirect(to), requires_auth: false }
    }

    /// Mark the route as requiring a session.
    #[must_use]
    pub const fn protected(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// Ordered, immutable list of routes. First match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting relative paths, duplicates and redirects
    /// that point outside the table.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteError`] found while scanning `entries` in order.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        if entries.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::RelativePath(entry.path));
            }
            if !seen.insert(entry.path) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
        }

        for entry in &entries {
            if let RouteTarget::Redirect(to) = entry.target {
                if !seen.contains(to) {
                    return Err(RouteError::DanglingRedirect { from: entry.path, to });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Resolve `path` to its route. Query and fragment are ignored, as is a
    /// single trailing slash.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        let path = normalize_path(path);
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Look up a route by name.
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

/// Strip `?query` and `#fragment`, then drop a trailing slash unless the
/// path is the root.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.is_empty() {
        return "/";
    }
    if path.len() > 1 {
        if let Some(trimmed) = path.strip_suffix('/') {
            return trimmed;
        }
    }
    path
}
