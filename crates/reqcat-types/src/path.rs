use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical root-relative identifier of a source file.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`), whatever the host separator
/// - no leading `./`
///
/// Identifiers taken from `require '...'` declarations go through the same
/// normalization, so `dir\a.txt` and `./dir/a.txt` name the same node.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while let Some(rest) = v.strip_prefix("./") {
            v = rest.to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extension of the final path segment, without the dot.
    pub fn extension(&self) -> Option<&str> {
        Utf8Path::new(self.as_str()).extension()
    }

    /// This identifier with `.{ext}` appended.
    pub fn with_appended_extension(&self, ext: &str) -> FileId {
        FileId(format!("{}.{}", self.0, ext))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        FileId::new(value)
    }
}
