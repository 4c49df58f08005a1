//! Shared test utilities for the reqcat workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), and the CLI tests need the same
//! fixture handling.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder written over `tool.version`.
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";
/// Placeholder written over run timestamps.
pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the *root* object looks like a report
/// envelope (`schema`, `tool`, `status`, `data`); `started_at` and
/// `finished_at` are replaced at the root only, since nothing nested carries
/// timestamps.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_envelope = obj.contains_key("schema")
        && obj.contains_key("tool")
        && obj.contains_key("status")
        && obj.contains_key("data");
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool")
        && let Some(tool_obj) = tool.as_object_mut()
        && tool_obj.contains_key("version")
    {
        tool_obj.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }
    for key in ["started_at", "finished_at"] {
        if obj.contains_key(key) {
            obj.insert(
                key.to_string(),
                Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
            );
        }
    }
    value
}

/// `tests/fixtures` at the workspace root.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Copy a fixture tree into a fresh temp dir so a build can write into it.
///
/// Golden files (`expected.*`) are left behind.
pub fn copy_fixture(name: &str) -> std::io::Result<tempfile::TempDir> {
    let src = fixtures_dir().join(name);
    let tmp = tempfile::tempdir()?;

    for entry in walkdir::WalkDir::new(&src).min_depth(1) {
        let entry = entry.map_err(std::io::Error::other)?;
        let rel = entry
            .path()
            .strip_prefix(&src)
            .map_err(std::io::Error::other)?;
        if rel
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("expected."))
        {
            continue;
        }
        let dest = tmp.path().join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest)?;
        } else {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &dest)?;
        }
    }

    Ok(tmp)
}

/// Read and parse a fixture's `expected.report.json`, if it has one.
pub fn expected_report(name: &str) -> Option<Value> {
    let text = fs::read_to_string(fixtures_dir().join(name).join("expected.report.json")).ok()?;
    serde_json::from_str(&text).ok()
}
