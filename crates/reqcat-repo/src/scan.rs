use crate::{ScanError, ScanOptions, SourceSet};
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use reqcat_types::FileId;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Discover participating files under `root`, sorted by identifier.
///
/// Behavior:
/// - recurse the whole subtree; only regular files are considered, and a
///   symlink counts when its target is one (symlinked directories are not entered)
/// - keep files whose extension equals `opts.extension`
/// - drop the output artifact and anything matching `opts.exclude`
/// - any walk error or non-UTF-8 path fails the whole discovery
pub fn discover_sources(root: &Utf8Path, opts: &ScanOptions) -> Result<Vec<FileId>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let exclude = build_globset(&opts.exclude)?;
    let mut out: Vec<FileId> = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| root.to_string()),
            source,
        })?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let abs = pathbuf_to_utf8(entry.path().to_path_buf())?;
        if abs.extension() != Some(opts.extension.as_str()) {
            continue;
        }

        let id = FileId::new(abs.strip_prefix(root).unwrap_or(&abs).as_str());
        if id == opts.output {
            tracing::debug!(file = %id, "skipping output artifact");
            continue;
        }
        if exclude.is_match(id.as_str()) {
            tracing::debug!(file = %id, "excluded");
            continue;
        }

        out.push(id);
    }

    // Stable order.
    out.sort();
    out.dedup();

    Ok(out)
}

/// Discover and read every participating file.
///
/// Reading fails fast: the first unreadable file aborts the scan.
pub fn scan_sources(root: &Utf8Path, opts: &ScanOptions) -> Result<SourceSet, ScanError> {
    let ids = discover_sources(root, opts)?;
    let mut sources = SourceSet::new();

    for id in ids {
        let abs = root.join(id.as_str());
        let content =
            std::fs::read_to_string(&abs).map_err(|source| ScanError::Read { path: abs, source })?;
        tracing::debug!(file = %id, bytes = content.len(), "read source");
        sources.insert(id, content);
    }

    tracing::info!(root = %root, files = sources.len(), extension = %opts.extension, "scanned sources");
    Ok(sources)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ScanError> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Result<Utf8PathBuf, ScanError> {
    Utf8PathBuf::from_path_buf(path).map_err(ScanError::NonUtf8Path)
}
