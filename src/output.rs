//! Response formatting for hook output.

use crate::decision::{BlockInfo, Decision};

/// Format a decision as output for stderr. Allow produces no output.
pub fn format_response(decision: &Decision) -> Option<String> {
    match decision {
        Decision::Allow => None,
        Decision::Block(info) => Some(format_block_message(info)),
    }
}

fn format_block_message(info: &BlockInfo) -> String {
    format!(
        "File operation blocked: Path \"{}\" is not allowed. \
         Only files in src directories, agent.yaml, PRD.md, or planning/DATA-PLAN.md \
         are allowed for editing. \
         The .agc/ directory is managed by dreamer and cannot be edited directly.",
        info.path
    )
}
