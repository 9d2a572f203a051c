//! Backend calls made by the ordering client.

pub mod api;
