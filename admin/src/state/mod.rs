//! Shared client-side state for the admin console.

pub mod session;
