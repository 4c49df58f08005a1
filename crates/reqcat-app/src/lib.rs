//! Use case orchestration for reqcat.
//!
//! This crate provides the application layer: use cases that coordinate the settings, repo,
//! domain, and render layers. It is intentionally thin and delegates heavy lifting to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and process concerns.

#![forbid(unsafe_code)]

mod build;
mod error;
mod explain;
mod output;
mod render;
mod report;

pub use build::{run_build, run_order, BuildInput, BuildOutput, BuildPlan};
pub use error::BuildError;
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use output::write_atomic;
pub use render::{render_plan, OrderFormat};
pub use report::{failure_report, runtime_error_report, serialize_report, success_report, write_report};
