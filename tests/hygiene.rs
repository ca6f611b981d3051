//! Hygiene: enforces coding standards at test time
//!
//! These tests scan the client source tree for antipatterns. Session and
//! catalog failures must degrade to signed-out or empty UI, never crash
//! hydration, so every panic path has a budget of zero. The budget never grows.

use std::fs;
use std::path::Path;

/// `(pattern, budget, description)` for substring checks across `src/`.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics: these crash hydration.
    (".unwrap()", 0, "unwrap"),
    (".expect(", 0, "expect"),
    ("panic!(", 0, "panic"),
    ("unreachable!(", 0, "unreachable"),
    ("todo!(", 0, "todo"),
    ("unimplemented!(", 0, "unimplemented"),
    // Silent loss: discards errors without inspecting.
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "dot ok"),
    // Global state: the session store is provided through context.
    ("static mut", 0, "static mut"),
    ("thread_local!", 0, "thread_local"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "allow(dead_code)"),
];

/// Only the diagnostic channel may emit error-level console output.
const ERROR_LOG_PATTERN: &str = "logging::error!";
const DIAGNOSTICS_FILE: &str = "diagnostics.rs";

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, label) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            failures.push(format!("{label} budget exceeded: found {count}, max {budget}.\n{}", format_hits(&found)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn error_logging_goes_through_diagnostics() {
    let files = source_files();
    let stray: Vec<_> = hits(&files, ERROR_LOG_PATTERN)
        .into_iter()
        .filter(|(path, _)| !path.ends_with(DIAGNOSTICS_FILE))
        .collect();
    assert!(
        stray.is_empty(),
        "error-level logging outside the diagnostic channel:\n{}",
        format_hits(&stray)
    );
}
