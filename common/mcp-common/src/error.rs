//! Error handling utilities for MCP servers
//!
//! Two layers, matching the two ways a request line can fail:
//!
//! - [`ProtocolError`]: the line could not be turned into a dispatchable
//!   request. The line is logged to stderr and dropped without a response.
//! - [`ToolError`]: a dispatched tool failed. The failure is rendered as text
//!   inside a normal `tools/call` envelope.

/// Text returned in the envelope when `tools/call` names a tool the server
/// does not provide.
pub const UNKNOWN_TOOL_TEXT: &str = "Unknown tool";

/// Type alias for tool handler results
pub type ToolResult<T> = Result<T, ToolError>;

/// Failure to turn an input line into a request
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The line is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The line is JSON but not an object
    #[error("request is not a JSON object")]
    NotAnObject,

    /// No string `method` field
    #[error("request has no string `method` field")]
    MissingMethod,

    /// `tools/call` without a `params` object
    #[error("tools/call request has no `params` object")]
    MissingParams,

    /// `tools/call` without a string `params.name`
    #[error("tools/call request has no string `params.name` field")]
    MissingToolName,
}

/// Failure while executing a tool
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool was not found in the server
    #[error("tool not found: {0}")]
    UnknownTool(String),

    /// Arguments did not match the tool's parameter type
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// The operating system could not provide the requested data
    #[error("{0}")]
    Unavailable(String),
}

impl ToolError {
    /// Text placed in the response envelope for this error
    ///
    /// Unknown tools pass through as the bare [`UNKNOWN_TOOL_TEXT`]; every
    /// other failure is prefixed with `Error: `.
    pub fn envelope_text(&self) -> String {
        match self {
            ToolError::UnknownTool(_) => UNKNOWN_TOOL_TEXT.to_string(),
            other => format!("Error: {}", other),
        }
    }
}

/// Create an [`ToolError::Unavailable`] error with a message
///
/// # Example
///
/// ```rust,ignore
/// use mcp_common::unavailable;
///
/// let pid = sysinfo::get_current_pid().map_err(unavailable)?;
/// ```
pub fn unavailable(message: impl Into<String>) -> ToolError {
    ToolError::Unavailable(message.into())
}
