//! Error types for media operations.
//!
//! These errors stay internal to this crate: the capability traits convert
//! every failure into an empty signal before it reaches the scoring engine.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while invoking external media tools.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("{tool} exited with status {exit_code:?}")]
    ToolFailed {
        tool: &'static str,
        exit_code: Option<i32>,
    },

    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Frame decode error: {0}")]
    FrameDecode(#[from] image::ImageError),
}

impl MediaError {
    /// Create a tool failure error.
    pub fn tool_failed(tool: &'static str, exit_code: Option<i32>) -> Self {
        Self::ToolFailed { tool, exit_code }
    }
}
