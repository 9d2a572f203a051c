//! Hygiene: entry-point and manifest checks for the app crate.

use std::fs;

fn read(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {path}: {e}"))
}

#[test]
fn logger_init_failure_is_not_discarded() {
    let lib = read("src/lib.rs");
    assert!(!lib.contains("let _ = console_log"), "console_log init result dropped");
    assert!(lib.contains("if let Err(e) = console_log::init_with_level"), "console_log init not checked");
}

/// `serde_json` only backs the wire-shape tests; gloo-net does the runtime
/// JSON work.
#[test]
fn serde_json_is_test_only() {
    let manifest = read("Cargo.toml");
    let (runtime, dev) = manifest.split_once("[dev-dependencies]").unwrap_or((manifest.as_str(), ""));
    assert!(!runtime.contains("serde_json"), "serde_json listed as a runtime dependency");
    assert!(dev.contains("serde_json"), "serde_json missing from dev-dependencies");
}
