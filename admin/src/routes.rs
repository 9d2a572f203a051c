//! Admin console route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use gate::{AppProfile, Navigator, RouteEntry, RouteError, RouteTable};

pub const ROOT: &str = "Root";
pub const LOGIN: &str = "Login";
pub const DASHBOARD: &str = "Dashboard";
pub const TABLES: &str = "Tables";
pub const MENUS: &str = "Menus";
pub const CATEGORIES: &str = "Categories";

pub const PROFILE: AppProfile = AppProfile { name: "admin", entry: "/login", landing: "/dashboard" };

/// `/` forwards to the dashboard; every console page needs a token.
///
/// # Errors
///
/// Only if the table itself is malformed.
pub fn table() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteEntry::redirect("/", ROOT, "/dashboard"),
        RouteEntry::view("/login", LOGIN),
        RouteEntry::view("/dashboard", DASHBOARD).protected(),
        RouteEntry::view("/tables", TABLES).protected(),
        RouteEntry::view("/menus", MENUS).protected(),
        RouteEntry::view("/categories", CATEGORIES).protected(),
    ])
}

/// # Errors
///
/// Propagates table or profile validation failures.
pub fn navigator() -> Result<Navigator, RouteError> {
    Navigator::new(table()?, &PROFILE)
}
