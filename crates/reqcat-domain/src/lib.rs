//! Pure dependency resolution (no IO).
//!
//! Input: file identifiers mapped to the identifiers they declare, built elsewhere.
//! Output: a dependency-first order over every node, or a cycle error.

#![forbid(unsafe_code)]

pub mod extract;
pub mod graph;
pub mod model;
pub mod policy;

mod resolve;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use extract::{
    canonicalize_references, extract_all, DependencyExtractor, PatternError, RequireExtractor,
    DEFAULT_REQUIRE_PATTERN,
};
pub use graph::DependencyGraph;
pub use model::DeclaredDependencies;
pub use resolve::{resolve, CycleError};
