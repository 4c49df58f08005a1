//! Repository adapters: walk a root directory and read participating sources.
//!
//! This crate is allowed to do filesystem IO. It does not interpret content;
//! declaration extraction lives in `reqcat-domain`.

#![forbid(unsafe_code)]

mod scan;

use camino::Utf8PathBuf;
use reqcat_types::FileId;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub use scan::{discover_sources, scan_sources};

/// Scanned file contents keyed by root-relative identifier.
pub type SourceSet = BTreeMap<FileId, String>;

/// What participates in a scan.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Extension without the leading dot.
    pub extension: String,
    /// Root-relative artifact path; never scanned, even when it has the extension.
    pub output: FileId,
    /// Root-relative globs of files to leave out.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "txt".to_string(),
            output: FileId::new("result.txt"),
            exclude: Vec::new(),
        }
    }
}

/// Failures while scanning. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("root directory does not exist: {0}")]
    MissingRoot(Utf8PathBuf),

    #[error("walk {path}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("compile exclude globset")]
    Glob(#[from] globset::Error),
}
