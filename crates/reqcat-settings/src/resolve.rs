use crate::{model::ReqcatConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use reqcat_domain::policy::{EffectiveConfig, MissingPolicy};
use reqcat_domain::RequireExtractor;
use reqcat_types::FileId;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub extension: Option<String>,
    pub output: Option<String>,
    pub missing: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(cfg: ReqcatConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::KNOWN_PROFILES.join("|")
        )
    })?;

    if let Some(ext) = overrides.extension.clone().or(cfg.extension.clone()) {
        effective.extension = parse_extension(&ext)?;
    }

    if let Some(output) = overrides.output.clone().or(cfg.output.clone()) {
        effective.output = parse_output(&output)?;
    }

    if let Some(pattern) = cfg.pattern.clone() {
        RequireExtractor::new(&pattern).context("invalid pattern")?;
        effective.pattern = pattern;
    }

    if let Some(missing) = overrides.missing.clone().or(cfg.missing.clone()) {
        effective.missing = parse_missing(&missing)?;
    }

    if let Some(implicit) = cfg.implicit_extension {
        effective.implicit_extension = implicit;
    }

    if !cfg.exclude.is_empty() {
        validate_globs(&cfg.exclude)?;
        effective.exclude = cfg.exclude.clone();
    }

    Ok(ResolvedConfig { effective })
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid exclude glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_extension(v: &str) -> anyhow::Result<String> {
    let ext = v.trim().trim_start_matches('.');
    if ext.is_empty() || ext.contains(['/', '\\']) {
        anyhow::bail!("invalid extension: {v:?}");
    }
    Ok(ext.to_string())
}

fn parse_output(v: &str) -> anyhow::Result<FileId> {
    let id = FileId::new(v.trim());
    let s = id.as_str();
    let absolute = s.starts_with('/') || s.as_bytes().get(1) == Some(&b':');
    if s.is_empty() || s.ends_with('/') || absolute {
        anyhow::bail!("invalid output path: {v:?} (expected a file path relative to the root)");
    }
    if s.split('/').any(|seg| seg == "..") {
        anyhow::bail!("invalid output path: {v:?} (must stay inside the root)");
    }
    Ok(id)
}

fn parse_missing(v: &str) -> anyhow::Result<MissingPolicy> {
    match v {
        "fail" => Ok(MissingPolicy::Fail),
        "skip" => Ok(MissingPolicy::Skip),
        other => anyhow::bail!("unknown missing policy: {other} (expected fail|skip)"),
    }
}
