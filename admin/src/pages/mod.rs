//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are registered by route name and built lazily the first time the
//! guarded outlet renders them.

pub mod console;
pub mod login;

use gate::ViewRegistry;
use leptos::prelude::*;

use crate::routes;

/// Views for every admin route.
pub fn registry() -> ViewRegistry<ViewFn> {
    ViewRegistry::new()
        .with(routes::LOGIN, || ViewFn::from(login::LoginPage))
        .with(routes::DASHBOARD, || ViewFn::from(console::DashboardPage))
        .with(routes::TABLES, || ViewFn::from(console::TablesPage))
        .with(routes::MENUS, || ViewFn::from(console::MenusPage))
        .with(routes::CATEGORIES, || ViewFn::from(console::CategoriesPage))
}
