//! Navigation guard and full navigation resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard runs before every route transition. Authentication state is
//! never stored here: callers pass the current session presence on each
//! evaluation, so the two states (unauthenticated, authenticated) are always
//! derived fresh.
//!
//! DESIGN
//! ======
//! [`NavigationGuard::check`] is the pure decision over one target.
//! [`Navigator`] layers route resolution and redirect-entry following on
//! top, producing the final [`Outcome`] the app renders.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::AppProfile;
use crate::route::{RouteEntry, RouteError, RouteTable, RouteTarget, normalize_path};

/// Upper bound on redirect hops for one navigation.
pub const MAX_REDIRECTS: usize = 8;

/// Guard verdict for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(&'static str),
}

/// Redirects between the entry route and protected routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationGuard {
    entry: &'static str,
    landing: &'static str,
}

impl NavigationGuard {
    pub const fn new(entry: &'static str, landing: &'static str) -> Self {
        Self { entry, landing }
    }

    pub const fn from_profile(profile: &AppProfile) -> Self {
        Self::new(profile.entry, profile.landing)
    }

    pub const fn entry(&self) -> &'static str {
        self.entry
    }

    pub const fn landing(&self) -> &'static str {
        self.landing
    }

    /// Decide whether navigating to `target` proceeds.
    ///
    /// Protected targets without a session go to the entry route. Visiting the
    /// entry route itself with a session goes to the landing route. Everything
    /// else is allowed.
    pub fn check(&self, target: &RouteEntry, present: bool) -> Decision {
        if target.requires_auth && !present {
            Decision::Redirect(self.entry)
        } else if target.path == self.entry && present {
            Decision::Redirect(self.landing)
        } else {
            Decision::Allow
        }
    }
}

/// Errors from following a redirect chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("redirect loop starting at {0}")]
    RedirectLoop(String),
}

/// Final result of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Render this route's view at its own path.
    Render(RouteEntry),
    /// Replace the current location with this path.
    Redirect(&'static str),
    /// No route matched.
    NotFound,
}

/// Route table plus guard for one app.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    guard: NavigationGuard,
}

impl Navigator {
    /// # Errors
    ///
    /// Propagates [`AppProfile::validate`] failures.
    pub fn new(table: RouteTable, profile: &AppProfile) -> Result<Self, RouteError> {
        profile.validate(&table)?;
        Ok(Self { table, guard: NavigationGuard::from_profile(profile) })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn guard(&self) -> &NavigationGuard {
        &self.guard
    }

    /// Resolve an attempted navigation to `path` with the given session
    /// presence.
    ///
    /// Redirect entries and guard redirects are followed until a route is
    /// allowed. If that route sits at the requested path it is rendered;
    /// otherwise the caller is told where to go.
    ///
    /// # Errors
    ///
    /// [`NavigationError::RedirectLoop`] if the chain exceeds
    /// [`MAX_REDIRECTS`] hops.
    pub fn navigate(&self, path: &str, present: bool) -> Result<Outcome, NavigationError> {
        let requested = normalize_path(path);
        let Some(mut current) = self.table.resolve(requested) else {
            return Ok(Outcome::NotFound);
        };

        for _ in 0..MAX_REDIRECTS {
            let next = match current.target {
                RouteTarget::Redirect(to) => to,
                RouteTarget::View => match self.guard.check(current, present) {
                    Decision::Allow if current.path == requested => return Ok(Outcome::Render(*current)),
                    Decision::Allow => return Ok(Outcome::Redirect(current.path)),
                    Decision::Redirect(to) => {
                        log::debug!("guard redirect {} -> {to} (present={present})", current.path);
                        to
                    }
                },
            };
            match self.table.resolve(next) {
                Some(entry) => current = entry,
                None => return Ok(Outcome::NotFound),
            }
        }

        Err(NavigationError::RedirectLoop(requested.to_owned()))
    }
}
