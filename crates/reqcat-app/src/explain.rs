//! The `explain` use case: look up failure code documentation.

use reqcat_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the code.
    Found(Explanation),
    /// Unknown code; includes the codes that do exist.
    NotFound {
        identifier: String,
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a code.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Fails:\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("Works:\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, codes: &[&'static str]) -> String {
    let mut out = format!("Unknown code: {identifier}\n\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {code}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqcat_types::ids;

    #[test]
    fn explain_known_code() {
        let output = run_explain(ids::CODE_CYCLE_DETECTED);
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        match run_explain("not_a_real_thing") {
            ExplainOutput::NotFound {
                identifier,
                available_codes,
            } => {
                assert_eq!(identifier, "not_a_real_thing");
                assert!(available_codes.contains(&ids::CODE_UNRESOLVED_REFERENCE));
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain(ids::CODE_UNRESOLVED_REFERENCE) else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with(exp.title));
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("```text"));
        assert!(formatted.contains(exp.examples.before));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["code.one", "code.two"]);
        assert!(formatted.contains("Unknown code: missing"));
        assert!(formatted.contains("  - code.one\n"));
        assert!(formatted.contains("  - code.two\n"));
    }
}
