use crate::extract::DEFAULT_REQUIRE_PATTERN;
use reqcat_types::FileId;

/// What to do with an ordered identifier that has no scanned content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Abort the run before any output is written.
    Fail,
    /// Order it, emit nothing for it.
    Skip,
}

impl MissingPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MissingPolicy::Fail => "fail",
            MissingPolicy::Skip => "skip",
        }
    }
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    /// Recognized source extension, without the leading dot.
    pub extension: String,
    /// Root-relative location of the concatenated artifact.
    pub output: FileId,
    /// Marker pattern; capture group 1 is the identifier.
    pub pattern: String,
    pub missing: MissingPolicy,
    /// Resolve `require 'x'` to `x.{extension}` when only the latter was scanned.
    pub implicit_extension: bool,
    /// Globs (root-relative) of files that never participate.
    pub exclude: Vec<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            profile: "strict".to_string(),
            extension: "txt".to_string(),
            output: FileId::new("result.txt"),
            pattern: DEFAULT_REQUIRE_PATTERN.to_string(),
            missing: MissingPolicy::Fail,
            implicit_extension: true,
            exclude: Vec::new(),
        }
    }
}
