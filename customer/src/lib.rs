//! # customer
//!
//! Leptos + WASM ordering client used at the table.
//!
//! A diner scans the table's QR code, the backend opens a table session, and
//! the session token gates the menu, order and order-status screens for the
//! lifetime of the browser tab.

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; that logger takes the warning.
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
