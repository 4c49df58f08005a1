//! Stable identifiers for failure kinds.
//!
//! Codes are short snake_case discriminators. They appear in the JSON report,
//! in CLI error output, and are accepted by `reqcat explain`.

pub const CODE_UNREADABLE_INPUT: &str = "unreadable_input";
pub const CODE_CYCLE_DETECTED: &str = "cycle_detected";
pub const CODE_UNRESOLVED_REFERENCE: &str = "unresolved_reference";
pub const CODE_WRITE_FAILED: &str = "write_failed";
pub const CODE_INVALID_CONFIG: &str = "invalid_config";

// Tool-level
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
