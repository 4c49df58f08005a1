//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::ReqcatConfigV1;
pub use resolve::{Overrides, ResolvedConfig};

/// File name looked up at the root when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "reqcat.toml";

/// Parse `reqcat.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ReqcatConfigV1> {
    let cfg: ReqcatConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the pipeline (profile + config + overrides).
pub fn resolve_config(cfg: ReqcatConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
