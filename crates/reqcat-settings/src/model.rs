use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `reqcat.toml` schema v1.
///
/// Every field is optional; unset fields come from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ReqcatConfigV1 {
    /// Optional schema string for tooling (`reqcat.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default) or `lenient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Extension of participating files, with or without the leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Root-relative output file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Regular expression whose first capture group is the required identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// `fail` or `skip` for identifiers without scanned content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit_extension: Option<bool>,

    /// Root-relative globs of files to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
}
