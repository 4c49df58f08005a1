//! Integration tests for source scanning.
//!
//! These tests verify that scanning produces a stable, deterministic set of
//! identifiers regardless of filesystem traversal order.

use camino::Utf8PathBuf;
use reqcat_repo::{discover_sources, scan_sources, ScanOptions};
use reqcat_types::FileId;
use std::path::PathBuf;

/// Get the path to the test fixtures directory (repo root / tests / fixtures).
fn fixtures_dir() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/reqcat-repo -> crates -> repo root
    let repo_root = manifest_dir
        .parent()
        .expect("reqcat-repo should have parent (crates)")
        .parent()
        .expect("crates should have parent (repo root)");
    Utf8PathBuf::from_path_buf(repo_root.join("tests").join("fixtures"))
        .expect("fixture path should be valid UTF-8")
}

#[test]
fn basic_fixture_ids_are_relative_and_sorted() {
    let root = fixtures_dir().join("basic");

    let found = discover_sources(&root, &ScanOptions::default()).expect("discovery should succeed");
    let actual: Vec<&str> = found.iter().map(FileId::as_str).collect();

    assert_eq!(
        actual,
        vec![
            "Folder 1/File 1-1.txt",
            "Folder 2/File 2-1.txt",
            "Folder 2/File 2-2.txt"
        ]
    );
}

/// Running discovery multiple times should produce identical results.
#[test]
fn scan_is_idempotent() {
    let root = fixtures_dir().join("basic");

    let run1 = scan_sources(&root, &ScanOptions::default()).expect("first scan should succeed");
    let run2 = scan_sources(&root, &ScanOptions::default()).expect("second scan should succeed");

    assert_eq!(run1, run2);
}

#[test]
fn scan_reads_full_content() {
    let root = fixtures_dir().join("basic");

    let sources = scan_sources(&root, &ScanOptions::default()).expect("scan should succeed");
    let base = &sources[&FileId::new("Folder 2/File 2-1.txt")];
    assert_eq!(base, "Base layer, no requirements.\n");
}

#[test]
fn other_extension_selects_other_files() {
    let root = fixtures_dir().join("custom_config");

    let opts = ScanOptions {
        extension: "md".to_string(),
        output: FileId::new("bundle.md"),
        exclude: vec!["drafts/**".to_string()],
    };
    let found = discover_sources(&root, &opts).expect("discovery should succeed");
    let actual: Vec<&str> = found.iter().map(FileId::as_str).collect();

    assert_eq!(actual, vec!["index.md", "parts/intro.md"]);
}
