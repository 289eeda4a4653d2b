//! The fixed allow/deny rule set for proposed file paths.

use crate::decision::Decision;

/// Evaluate a proposed file path against the edit policy.
///
/// The protected-directory check runs first: a path inside `.agc/` is
/// blocked even if it would also match an allow rule. Everything else is
/// allowed only if it matches the editable set.
pub fn evaluate(path: &str) -> Decision {
    if is_protected(path) {
        return Decision::block(path);
    }
    if !is_editable(path) {
        return Decision::block(path);
    }
    Decision::allow()
}

/// Paths inside the `.agc/` directory are managed by dreamer and never
/// editable directly.
fn is_protected(path: &str) -> bool {
    path.starts_with(".agc/") || path.contains("/.agc/")
}

/// The allowlist: source trees plus a handful of planning files.
fn is_editable(path: &str) -> bool {
    path.starts_with("src/")
        || path.contains("/src/")
        || path.ends_with("PRD.md")
        || path == "planning/DATA-PLAN.md"
        || path.ends_with("/DATA-PLAN.md")
        || path.ends_with("agent.yaml")
}
