//! Explain registry for failure codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the failure.
    pub title: &'static str,
    /// When the failure occurs and what the run does about it.
    pub description: &'static str,
    /// How to fix it.
    pub remediation: &'static str,
    /// Before/after source examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that triggers the failure.
    pub before: &'static str,
    /// Input that does not.
    pub after: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the code is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CODE_UNREADABLE_INPUT => Some(explain_unreadable_input()),
        ids::CODE_CYCLE_DETECTED => Some(explain_cycle_detected()),
        ids::CODE_UNRESOLVED_REFERENCE => Some(explain_unresolved_reference()),
        ids::CODE_WRITE_FAILED => Some(explain_write_failed()),
        ids::CODE_INVALID_CONFIG => Some(explain_invalid_config()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_UNREADABLE_INPUT,
        ids::CODE_CYCLE_DETECTED,
        ids::CODE_UNRESOLVED_REFERENCE,
        ids::CODE_WRITE_FAILED,
        ids::CODE_INVALID_CONFIG,
    ]
}

fn explain_unreadable_input() -> Explanation {
    Explanation {
        title: "Unreadable Input",
        description: "\
A file under the root could not be walked or read.

The scan fails fast: a single unreadable file aborts the whole run before any
dependency graph is built. Common causes:
- missing read permission on a file or directory
- a file that is not valid UTF-8 text
- a path that is not valid UTF-8",
        remediation: "\
Fix the permissions or encoding of the reported path, or move it out of the
scanned tree. Files that should not participate can be excluded in reqcat.toml:

    exclude = [\"vendor/**\"]",
        examples: ExamplePair {
            before: "root/\n  a.txt        (mode 000)",
            after: "root/\n  a.txt        (mode 644)",
        },
    }
}

fn explain_cycle_detected() -> Explanation {
    Explanation {
        title: "Dependency Cycle",
        description: "\
Two or more files require each other, directly or through other files.

No order exists in which every file comes after everything it requires, so the
run stops after scanning and writes no output. The error names one concrete
cycle and lists every file that could not be ordered (cycle members and files
that depend on them).",
        remediation: "\
Break the cycle by removing one of the `require` lines on it. Usually the shared
part belongs in a separate file that both sides require.",
        examples: ExamplePair {
            before: "a.txt: require 'b.txt'\nb.txt: require 'a.txt'",
            after: "a.txt: require 'common.txt'\nb.txt: require 'common.txt'\ncommon.txt:",
        },
    }
}

fn explain_unresolved_reference() -> Explanation {
    Explanation {
        title: "Unresolved Reference",
        description: "\
A file requires an identifier that does not match any scanned file.

The identifier is still ordered like any other file, but there is no content to
emit for it. With `missing = \"fail\"` (the strict profile) the run stops before
writing output. With `missing = \"skip\"` (the lenient profile) nothing is
emitted for it and a warning is logged.",
        remediation: "\
Check the spelling and the path: identifiers are root-relative and use `/`.
When `implicit_extension` is enabled, `require 'dir/file'` also matches
`dir/file.txt`.",
        examples: ExamplePair {
            before: "a.txt: require 'lib/missing.txt'",
            after: "a.txt: require 'lib/present.txt'",
        },
    }
}

fn explain_write_failed() -> Explanation {
    Explanation {
        title: "Output Write Failed",
        description: "\
The concatenated output could not be written.

Output goes to a temporary file next to the target and is renamed into place
only once complete, so a failed run never leaves a truncated artifact behind.
An artifact from an earlier successful run is left untouched.",
        remediation: "\
Check that the output directory exists, is writable, and has free space.",
        examples: ExamplePair {
            before: "output = \"readonly/result.txt\"",
            after: "output = \"result.txt\"",
        },
    }
}

fn explain_invalid_config() -> Explanation {
    Explanation {
        title: "Invalid Configuration",
        description: "\
reqcat.toml or a command line override could not be applied.

Examples: unknown profile, unknown missing policy, a `pattern` that is not a
valid regular expression or has no capture group, or an invalid exclude glob.",
        remediation: "\
Fix the reported key. The marker pattern must capture the identifier in its
first group:

    pattern = \"require '(.+?)'\"",
        examples: ExamplePair {
            before: "pattern = \"require '.+?'\"",
            after: "pattern = \"require '(.+?)'\"",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code() {
        assert!(lookup_explanation(ids::CODE_UNREADABLE_INPUT).is_some());
        assert!(lookup_explanation(ids::CODE_CYCLE_DETECTED).is_some());
        assert!(lookup_explanation(ids::CODE_UNRESOLVED_REFERENCE).is_some());
        assert!(lookup_explanation(ids::CODE_WRITE_FAILED).is_some());
        assert!(lookup_explanation(ids::CODE_INVALID_CONFIG).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown_code").is_none());
        assert!(lookup_explanation(ids::CODE_RUNTIME_ERROR).is_none());
    }

    #[test]
    fn all_codes_are_valid() {
        for code in all_codes() {
            assert!(
                lookup_explanation(code).is_some(),
                "code {} should be in registry",
                code
            );
        }
    }
}
