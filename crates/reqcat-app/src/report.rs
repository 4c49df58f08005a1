use anyhow::Context;
use camino::Utf8Path;
use reqcat_types::{
    ids, ReportData, ReportError, ReportStatus, ReqcatReportV1, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

use crate::build::BuildOutput;
use crate::error::BuildError;
use crate::output::write_atomic;

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "reqcat".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn unknown_data() -> ReportData {
    ReportData {
        profile: "unknown".to_string(),
        extension: "unknown".to_string(),
        ..ReportData::default()
    }
}

/// Render an error and its sources as one line, outermost first.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

pub fn success_report(output: &BuildOutput, started_at: OffsetDateTime) -> ReqcatReportV1 {
    ReqcatReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        status: ReportStatus::Ok,
        error: None,
        data: output.report_data(),
    }
}

pub fn failure_report(err: &BuildError, started_at: OffsetDateTime) -> ReqcatReportV1 {
    ReqcatReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        status: ReportStatus::Failed,
        error: Some(ReportError {
            code: err.code().to_string(),
            message: error_chain(err),
            files: err.files().to_vec(),
        }),
        data: err.report_data().cloned().unwrap_or_else(unknown_data),
    }
}

/// Report for failures outside the build pipeline (argument or config file handling).
pub fn runtime_error_report(message: &str) -> ReqcatReportV1 {
    let now = OffsetDateTime::now_utc();
    ReqcatReportV1 {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        status: ReportStatus::Failed,
        error: Some(ReportError {
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            files: Vec::new(),
        }),
        data: unknown_data(),
    }
}

pub fn serialize_report(report: &ReqcatReportV1) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn write_report(path: &Utf8Path, report: &ReqcatReportV1) -> anyhow::Result<()> {
    let mut bytes = serialize_report(report)?;
    bytes.push(b'\n');
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    write_atomic(path, &bytes).with_context(|| format!("write report {path}"))
}
