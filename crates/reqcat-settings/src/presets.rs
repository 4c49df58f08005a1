use reqcat_domain::policy::{EffectiveConfig, MissingPolicy};

pub const KNOWN_PROFILES: &[&str] = &["strict", "lenient"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "lenient" => Some(lenient_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig::default()
}

fn lenient_profile() -> EffectiveConfig {
    // Unresolved references are tolerated; everything else matches strict.
    EffectiveConfig {
        profile: "lenient".to_string(),
        missing: MissingPolicy::Skip,
        ..EffectiveConfig::default()
    }
}
