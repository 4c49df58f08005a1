use camino::Utf8PathBuf;
use reqcat_domain::{CycleError, PatternError};
use reqcat_repo::ScanError;
use reqcat_types::{ids, FileId, ReportData};

/// Every way a build can fail. Each variant maps to one stable code.
///
/// Failures raised after config and scan succeeded carry what was known by then.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid configuration")]
    Config(#[source] anyhow::Error),

    #[error("invalid pattern")]
    Pattern(#[from] PatternError),

    #[error("scan sources")]
    Scan(#[from] ScanError),

    #[error("{cycle}")]
    Cycle {
        cycle: CycleError,
        context: Box<ReportData>,
    },

    #[error("unresolved references: {}", join_ids(.references))]
    Unresolved {
        references: Vec<FileId>,
        context: Box<ReportData>,
    },

    #[error("write {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn join_ids(ids: &[FileId]) -> String {
    ids.iter().map(FileId::as_str).collect::<Vec<_>>().join(", ")
}

impl BuildError {
    pub fn code(&self) -> &'static str {
        match self {
            BuildError::Config(_) | BuildError::Pattern(_) => ids::CODE_INVALID_CONFIG,
            BuildError::Scan(_) => ids::CODE_UNREADABLE_INPUT,
            BuildError::Cycle { .. } => ids::CODE_CYCLE_DETECTED,
            BuildError::Unresolved { .. } => ids::CODE_UNRESOLVED_REFERENCE,
            BuildError::Write { .. } => ids::CODE_WRITE_FAILED,
        }
    }

    /// Files named by the failure: cycle members or unresolved references.
    pub fn files(&self) -> &[FileId] {
        match self {
            BuildError::Cycle { cycle, .. } => &cycle.cycle,
            BuildError::Unresolved { references, .. } => references,
            _ => &[],
        }
    }

    /// Report payload known at the point of failure, if config and scan got that far.
    pub fn report_data(&self) -> Option<&ReportData> {
        match self {
            BuildError::Cycle { context, .. } | BuildError::Unresolved { context, .. } => {
                Some(context.as_ref())
            }
            _ => None,
        }
    }

    /// Map to a process exit code: 2 = the inputs cannot be ordered/emitted, 1 = tool error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::Cycle { .. } | BuildError::Unresolved { .. } => 2,
            _ => 1,
        }
    }
}
