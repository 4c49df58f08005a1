//! The `build` and `order` use cases: scan, resolve, and concatenate.

use camino::{Utf8Path, Utf8PathBuf};
use reqcat_domain::policy::{EffectiveConfig, MissingPolicy};
use reqcat_domain::{DeclaredDependencies, RequireExtractor};
use reqcat_render::{EmitError, EmitSummary, PlanEntry, RenderablePlan};
use reqcat_repo::{ScanOptions, SourceSet};
use reqcat_settings::Overrides;
use reqcat_types::{FileId, ReportData};
use sha2::{Digest, Sha256};

use crate::error::BuildError;
use crate::output::write_atomic;

/// Input for the build and order use cases.
#[derive(Clone, Debug)]
pub struct BuildInput<'a> {
    /// Directory to scan; the artifact is written relative to it.
    pub root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// A resolved order together with everything needed to emit or describe it.
#[derive(Clone, Debug)]
pub struct BuildPlan {
    pub config: EffectiveConfig,
    pub sources: SourceSet,
    pub declared: DeclaredDependencies,
    /// Dependency-first order over every node, including never-scanned ones.
    pub order: Vec<FileId>,
}

impl BuildPlan {
    /// Ordered identifiers that have no scanned content.
    pub fn missing(&self) -> Vec<FileId> {
        self.order
            .iter()
            .filter(|id| !self.sources.contains_key(*id))
            .cloned()
            .collect()
    }

    pub fn to_renderable(&self) -> RenderablePlan {
        let entries = self
            .order
            .iter()
            .map(|id| {
                let mut requires: Vec<String> = Vec::new();
                for dep in self.declared.get(id).into_iter().flatten() {
                    if !requires.iter().any(|r| r == dep.as_str()) {
                        requires.push(dep.to_string());
                    }
                }
                PlanEntry {
                    id: id.to_string(),
                    has_content: self.sources.contains_key(id),
                    requires,
                }
            })
            .collect();

        RenderablePlan {
            output: self.config.output.to_string(),
            entries,
        }
    }

    /// Report payload for this plan; output fields are filled by the caller.
    pub fn report_data(&self) -> ReportData {
        ReportData {
            order: self.order.clone(),
            ..scan_data(&self.config, &self.sources, &self.declared)
        }
    }
}

fn scan_data(
    config: &EffectiveConfig,
    sources: &SourceSet,
    declared: &DeclaredDependencies,
) -> ReportData {
    ReportData {
        profile: config.profile.clone(),
        extension: config.extension.clone(),
        files_scanned: sources.len() as u32,
        dependencies_declared: reqcat_domain::model::declaration_count(declared) as u32,
        ..ReportData::default()
    }
}

/// Output from the build use case.
#[derive(Clone, Debug)]
pub struct BuildOutput {
    pub plan: BuildPlan,
    /// Absolute (root-joined) path of the written artifact.
    pub output_path: Utf8PathBuf,
    pub summary: EmitSummary,
    /// Lowercase hex SHA-256 of the artifact bytes.
    pub sha256: String,
}

impl BuildOutput {
    pub fn report_data(&self) -> ReportData {
        ReportData {
            skipped: self.summary.skipped.clone(),
            output: Some(self.plan.config.output.to_string()),
            output_sha256: Some(self.sha256.clone()),
            ..self.plan.report_data()
        }
    }
}

/// Resolve config, scan the root, extract declarations, and order them. Writes nothing.
pub fn run_order(input: BuildInput<'_>) -> Result<BuildPlan, BuildError> {
    let cfg = if input.config_text.trim().is_empty() {
        reqcat_settings::ReqcatConfigV1::default()
    } else {
        reqcat_settings::parse_config_toml(input.config_text).map_err(BuildError::Config)?
    };
    let resolved =
        reqcat_settings::resolve_config(cfg, input.overrides).map_err(BuildError::Config)?;
    let config = resolved.effective;

    let extractor = RequireExtractor::new(&config.pattern)?;
    let opts = ScanOptions {
        extension: config.extension.clone(),
        output: config.output.clone(),
        exclude: config.exclude.clone(),
    };
    let sources = reqcat_repo::scan_sources(input.root, &opts)?;

    let mut declared = reqcat_domain::extract_all(&sources, &extractor);
    if config.implicit_extension {
        declared = reqcat_domain::canonicalize_references(declared, &config.extension);
    }

    let order = reqcat_domain::resolve(&declared).map_err(|cycle| BuildError::Cycle {
        cycle,
        context: Box::new(scan_data(&config, &sources, &declared)),
    })?;
    tracing::debug!(nodes = order.len(), "resolved order");

    Ok(BuildPlan {
        config,
        sources,
        declared,
        order,
    })
}

/// Run the full pipeline and atomically write the concatenated artifact.
///
/// Nothing is written on any failure; a previous artifact stays as it was.
pub fn run_build(input: BuildInput<'_>) -> Result<BuildOutput, BuildError> {
    let root = input.root.to_path_buf();
    let plan = run_order(input)?;
    let output_path = root.join(plan.config.output.as_str());

    let missing = plan.missing();
    if !missing.is_empty() {
        match plan.config.missing {
            MissingPolicy::Fail => {
                return Err(BuildError::Unresolved {
                    references: missing,
                    context: Box::new(plan.report_data()),
                });
            }
            MissingPolicy::Skip => {
                for id in &missing {
                    tracing::warn!(file = %id, "required file has no content; skipping");
                }
            }
        }
    }

    let mut buf = Vec::new();
    let summary = reqcat_render::emit(&plan.order, &plan.sources, &mut buf, plan.config.missing)
        .map_err(|err| match err {
            EmitError::MissingContent(id) => BuildError::Unresolved {
                references: vec![id],
                context: Box::new(plan.report_data()),
            },
            EmitError::Io(source) => BuildError::Write {
                path: output_path.clone(),
                source,
            },
        })?;

    write_atomic(&output_path, &buf).map_err(|source| BuildError::Write {
        path: output_path.clone(),
        source,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&buf);
    let sha256 = hex::encode(hasher.finalize());

    tracing::info!(
        output = %output_path,
        files = summary.written,
        skipped = summary.skipped.len(),
        bytes = summary.bytes,
        "wrote artifact"
    );

    Ok(BuildOutput {
        plan,
        output_path,
        summary,
        sha256,
    })
}
