use crate::FileId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for reqcat run reports.
pub const SCHEMA_REPORT_V1: &str = "reqcat.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Ok,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Why a run failed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportError {
    /// One of the codes in [`crate::ids`].
    pub code: String,
    pub message: String,

    /// Files involved in the failure (cycle members, unresolved references).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileId>,
}

/// reqcat-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ReportData {
    pub profile: String,
    pub extension: String,

    pub files_scanned: u32,
    pub dependencies_declared: u32,

    /// Resolved order. Empty when resolution failed.
    #[serde(default)]
    pub order: Vec<FileId>,

    /// Ordered identifiers that had no content and were skipped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<FileId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Lowercase hex SHA-256 of the written artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_sha256: Option<String>,
}

/// A generic report envelope.
///
/// Keeping this generic allows embedding tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReqcatReport<TData = ReportData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
    pub data: TData,
}

pub type ReqcatReportV1 = ReqcatReport<ReportData>;
