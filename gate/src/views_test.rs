use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn resolve_unknown_name_is_none() {
    let registry = ViewRegistry::<&'static str>::new();
    assert_eq!(registry.resolve("Login"), None);
    assert!(!registry.contains("Login"));
}

#[test]
fn resolve_is_lazy_and_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = ViewRegistry::new().with("Menu", move || {
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("menu#{n}")
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!registry.is_resolved("Menu"));

    assert_eq!(registry.resolve("Menu").as_deref(), Some("menu#1"));
    assert_eq!(registry.resolve("Menu").as_deref(), Some("menu#1"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(registry.is_resolved("Menu"));
}

#[test]
fn re_registering_drops_cached_view() {
    let registry = ViewRegistry::new().with("Order", || "old");
    assert_eq!(registry.resolve("Order"), Some("old"));

    let registry = registry.with("Order", || "new");
    assert!(!registry.is_resolved("Order"));
    assert_eq!(registry.resolve("Order"), Some("new"));
}

#[test]
fn missing_lists_unregistered_names() {
    let registry = ViewRegistry::new().with("Login", || 1).with("Dashboard", || 2);
    assert_eq!(registry.missing(["Login", "Tables", "Dashboard", "Menus"]), vec!["Tables", "Menus"]);
}
