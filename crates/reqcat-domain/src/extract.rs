//! Dependency declaration extraction.
//!
//! The resolver only sees `FileId`s. How they are found in file content is a
//! [`DependencyExtractor`]: the default [`RequireExtractor`] matches
//! `require '<identifier>'`, but any pattern with a capture group (or any
//! closure) can be plugged in.

use crate::model::DeclaredDependencies;
use regex::Regex;
use reqcat_types::FileId;
use std::collections::{BTreeMap, BTreeSet};

/// Lazy match up to the first closing quote on the same line.
pub const DEFAULT_REQUIRE_PATTERN: &str = "require '(.+?)'";

pub trait DependencyExtractor {
    /// Declared identifiers in order of appearance; duplicates kept.
    fn extract(&self, content: &str) -> Vec<FileId>;
}

impl<F> DependencyExtractor for F
where
    F: Fn(&str) -> Vec<FileId>,
{
    fn extract(&self, content: &str) -> Vec<FileId> {
        self(content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid dependency pattern `{pattern}`")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("dependency pattern `{pattern}` has no capture group for the identifier")]
    NoCaptureGroup { pattern: String },
}

/// Regex-driven extractor; the first capture group is the identifier.
#[derive(Clone, Debug)]
pub struct RequireExtractor {
    re: Regex,
}

impl RequireExtractor {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let re = Regex::new(pattern).map_err(|source| PatternError::Invalid {
            pattern: pattern.to_string(),
            source,
        })?;
        // captures_len counts the implicit whole-match group.
        if re.captures_len() < 2 {
            return Err(PatternError::NoCaptureGroup {
                pattern: pattern.to_string(),
            });
        }
        Ok(Self { re })
    }
}

impl Default for RequireExtractor {
    fn default() -> Self {
        Self {
            re: Regex::new(DEFAULT_REQUIRE_PATTERN).expect("default pattern compiles"),
        }
    }
}

impl DependencyExtractor for RequireExtractor {
    fn extract(&self, content: &str) -> Vec<FileId> {
        self.re
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| FileId::new(m.as_str()))
            .collect()
    }
}

/// Run `extractor` over every source.
pub fn extract_all<E>(sources: &BTreeMap<FileId, String>, extractor: &E) -> DeclaredDependencies
where
    E: DependencyExtractor + ?Sized,
{
    sources
        .iter()
        .map(|(id, content)| (id.clone(), extractor.extract(content)))
        .collect()
}

/// Rewrite extension-less references to the scanned file they name.
///
/// A declared `dir/name` that is not itself a scanned file becomes
/// `dir/name.{extension}` when that one is. Everything else is kept verbatim,
/// so unknown identifiers still reach the resolver unchanged.
pub fn canonicalize_references(
    deps: DeclaredDependencies,
    extension: &str,
) -> DeclaredDependencies {
    let known: BTreeSet<FileId> = deps.keys().cloned().collect();
    deps.into_iter()
        .map(|(file, declared)| {
            let declared = declared
                .into_iter()
                .map(|dep| {
                    if known.contains(&dep) {
                        return dep;
                    }
                    let with_ext = dep.with_appended_extension(extension);
                    if known.contains(&with_ext) {
                        with_ext
                    } else {
                        dep
                    }
                })
                .collect();
            (file, declared)
        })
        .collect()
}
