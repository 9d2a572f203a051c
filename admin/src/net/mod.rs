//! Backend calls made by the admin console.

pub mod api;
