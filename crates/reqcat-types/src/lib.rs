//! Stable DTOs and IDs used across the reqcat workspace.
//!
//! This crate is intentionally boring:
//! - canonical file identifiers (graph node identity)
//! - stable string codes for every failure kind
//! - explain registry for remediation guidance
//! - data types for the emitted run report

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::FileId;
pub use receipt::{
    ReportData, ReportError, ReportStatus, ReqcatReport, ReqcatReportV1, ToolMeta,
    SCHEMA_REPORT_V1,
};
