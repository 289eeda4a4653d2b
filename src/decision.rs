//! Verdict types for hook responses.

/// The result of evaluating a proposed file path against policy.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Allow the file operation to proceed.
    Allow,
    /// Block the file operation.
    Block(BlockInfo),
}

/// Information about why a path was blocked.
#[derive(Debug, Clone)]
pub struct BlockInfo {
    /// The path that was rejected.
    pub path: String,
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision for the given path.
    pub fn block(path: impl Into<String>) -> Self {
        Decision::Block(BlockInfo { path: path.into() })
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }
}
