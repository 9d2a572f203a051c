//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are registered by route name and built lazily the first time the
//! guarded outlet renders them.

pub mod ordering;
pub mod qr_scan;

use gate::ViewRegistry;
use leptos::prelude::*;

use crate::routes;

/// Views for every customer route.
pub fn registry() -> ViewRegistry<ViewFn> {
    ViewRegistry::new()
        .with(routes::QR_SCAN, || ViewFn::from(qr_scan::QrScanPage))
        .with(routes::MENU, || ViewFn::from(ordering::MenuPage))
        .with(routes::ORDER, || ViewFn::from(ordering::OrderPage))
        .with(routes::ORDER_STATUS, || ViewFn::from(ordering::OrderStatusPage))
}
