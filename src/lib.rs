//! AGC Edit Gate - file path policy hook.
//!
//! A PreToolUse hook that restricts file-modifying tools to src/ trees and a
//! small set of planning files, and keeps the dreamer-managed `.agc/`
//! directory off limits.

pub mod decision;
pub mod input;
pub mod output;
pub mod policy;

pub use decision::Decision;
pub use input::{HookInput, InputError};
pub use output::format_response;
pub use policy::evaluate;
