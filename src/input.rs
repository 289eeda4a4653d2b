//! Input parsing for hook invocations.

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when parsing hook input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {field} to be {expected}")]
    UnexpectedShape {
        field: &'static str,
        expected: &'static str,
    },
}

/// The raw input from a PreToolUse hook invocation.
///
/// Only `tool_input.file_path` matters to the gate; everything else the hook
/// runner sends is carried as raw JSON and ignored.
#[derive(Debug, Clone)]
pub struct HookInput {
    raw: Value,
}

impl HookInput {
    /// Parse from a JSON string. The top level must be an object.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        let raw: Value = serde_json::from_str(json)?;
        if !raw.is_object() {
            return Err(InputError::UnexpectedShape {
                field: "input",
                expected: "a JSON object",
            });
        }
        Ok(Self { raw })
    }

    /// Get the path being written, or the empty string if absent.
    ///
    /// `tool_input` and `file_path` are both optional, but if present they
    /// must be an object and a string respectively. A wrong-typed value is an
    /// error rather than a silent coercion.
    pub fn file_path(&self) -> Result<&str, InputError> {
        let Some(tool_input) = self.raw.get("tool_input") else {
            return Ok("");
        };
        let fields = tool_input.as_object().ok_or(InputError::UnexpectedShape {
            field: "tool_input",
            expected: "an object",
        })?;
        let Some(path) = fields.get("file_path") else {
            return Ok("");
        };
        path.as_str().ok_or(InputError::UnexpectedShape {
            field: "tool_input.file_path",
            expected: "a string",
        })
    }
}
