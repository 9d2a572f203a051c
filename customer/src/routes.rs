//! Ordering client route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use gate::{AppProfile, Navigator, RouteEntry, RouteError, RouteTable};

pub const ROOT: &str = "Root";
pub const QR_SCAN: &str = "QRScan";
pub const MENU: &str = "Menu";
pub const ORDER: &str = "Order";
pub const ORDER_STATUS: &str = "OrderStatus";

pub const PROFILE: AppProfile = AppProfile { name: "customer", entry: "/qr-scan", landing: "/menu" };

/// `/` forwards to the scanner; ordering screens need a table session.
///
/// # Errors
///
/// Only if the table itself is malformed.
pub fn table() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteEntry::redirect("/", ROOT, "/qr-scan"),
        RouteEntry::view("/qr-scan", QR_SCAN),
        RouteEntry::view("/menu", MENU).protected(),
        RouteEntry::view("/order", ORDER).protected(),
        RouteEntry::view("/order-status", ORDER_STATUS).protected(),
    ])
}

/// # Errors
///
/// Propagates table or profile validation failures.
pub fn navigator() -> Result<Navigator, RouteError> {
    Navigator::new(table()?, &PROFILE)
}
