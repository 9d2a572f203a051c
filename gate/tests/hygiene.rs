//! Hygiene: source-level bans for the gate crate.
//!
//! Guard and session code runs on the UI thread on every navigation. A panic
//! there blanks the app and a discarded storage error hides a broken tab, so
//! these patterns have a budget of zero in production sources.

use std::fs;
use std::path::{Path, PathBuf};

const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("let _ =", "silent discard"),
    (".ok()", "error-to-option"),
    ("#[allow(dead_code)]", "allow(dead_code)"),
];

/// Production `.rs` files under `src/`; `*_test.rs` files are skipped.
fn source_files(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn sources_are_found() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|(p, _)| p.ends_with("session.rs")), "gate/src not scanned");
}

#[test]
fn banned_patterns_have_zero_budget() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);

    let mut hits = Vec::new();
    for (path, content) in &files {
        for (lineno, line) in content.lines().enumerate() {
            for (pattern, label) in BANNED {
                if line.contains(pattern) {
                    hits.push(format!("  {}:{}: {label}", path.display(), lineno + 1));
                }
            }
        }
    }

    assert!(hits.is_empty(), "banned patterns found:\n{}", hits.join("\n"));
}
