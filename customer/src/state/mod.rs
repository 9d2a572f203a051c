//! Shared client-side state for the ordering client.

pub mod session;
