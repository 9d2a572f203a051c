//! # gate
//!
//! Session-gated client routing shared by the admin console and the
//! customer ordering client.
//!
//! This crate is framework-agnostic: it owns the route table and resolver,
//! the navigation guard, the session store and its storage backends, and
//! the lazy view registry. The `leptos` feature adds the reactive session
//! context and the guarded outlet the apps mount inside their router.

pub mod config;
#[cfg(feature = "leptos")]
pub mod context;
pub mod guard;
#[cfg(feature = "leptos")]
pub mod outlet;
pub mod route;
pub mod session;
pub mod storage;
pub mod views;

pub use config::AppProfile;
#[cfg(feature = "leptos")]
pub use context::SessionContext;
pub use guard::{Decision, NavigationError, NavigationGuard, Navigator, Outcome};
pub use route::{RouteEntry, RouteError, RouteTable, RouteTarget};
pub use session::{SessionRecord, SessionStore};
pub use storage::{BrowserStorage, MemoryStorage, SessionStorage, StorageError};
pub use views::ViewRegistry;
