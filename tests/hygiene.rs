//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the shim's source tree for patterns that would crash the
//! page or swallow a failure the host needs to see. Each pattern has a budget
//! (ideally zero). The budget never grows: fix an existing hit first.

use std::fs;
use std::path::Path;

/// `(pattern, budget, why)` for every counted pattern.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics: these abort the wasm instance and take the page's shim with it.
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "panics"),
    ("unimplemented!(", 0, "panics"),
    // Silent loss: a host misconfiguration must surface, not vanish.
    ("let _ =", 0, "discards an error"),
    (".ok()", 0, "discards an error"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "hides unused code"),
    // Leaked closures: the content-loaded handler, the prototype wrapper and
    // the key listener. Each lives for the page; anything else must be dropped.
    (".forget()", 3, "leaks a closure"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files under `src/`, excluding `*_test.rs`.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Public functions returning `Result` whose doc block lacks `# Errors`.
fn undocumented_errors(file: &SourceFile) -> Vec<String> {
    let lines: Vec<&str> = file.content.lines().collect();
    let mut missing = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with("pub fn ") {
            continue;
        }
        let signature: String = lines[i..]
            .iter()
            .take_while(|l| !l.contains('{'))
            .chain(lines[i..].iter().find(|l| l.contains('{')))
            .copied()
            .collect();
        if !signature.contains("-> Result<") {
            continue;
        }
        let documented = lines[..i]
            .iter()
            .rev()
            .map(|l| l.trim_start())
            .take_while(|l| l.starts_with("///") || l.starts_with("#["))
            .any(|l| l.contains("# Errors"));
        if !documented {
            missing.push(format!("  {}:{}: {}", file.path, i + 1, trimmed));
        }
    }
    missing
}

/// The attribute line directly above the first line equal to `marker`.
fn attribute_above(content: &str, marker: &str) -> Option<String> {
    let lines: Vec<&str> = content.lines().map(str::trim).collect();
    let at = lines.iter().position(|l| *l == marker)?;
    at.checked_sub(1).map(|i| lines[i].to_owned())
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "no sources under src/; run from the crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let hits = count_in_source(&files, pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget {
            failures.push(format!(
                "{pattern} ({why}) budget exceeded: found {count}, max {budget}.\n{}",
                format_hits(&hits)
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn fallible_public_functions_document_errors() {
    let missing: Vec<String> = source_files().iter().flat_map(undocumented_errors).collect();
    assert!(
        missing.is_empty(),
        "public functions returning Result without a `# Errors` section:\n{}",
        missing.join("\n")
    );
}

#[test]
fn wasm_entry_points_are_mutually_exclusive() {
    let Ok(content) = fs::read_to_string("src/web/mod.rs") else {
        panic!("src/web/mod.rs not found");
    };
    assert_eq!(
        attribute_above(&content, "#[wasm_bindgen(start)]").as_deref(),
        Some(r#"#[cfg(feature = "auto-start")]"#),
        "the start hook must only exist with auto-start"
    );
    assert_eq!(
        attribute_above(&content, "#[wasm_bindgen(js_name = install)]").as_deref(),
        Some(r#"#[cfg(not(feature = "auto-start"))]"#),
        "the exported install must not exist alongside auto-start"
    );
}
