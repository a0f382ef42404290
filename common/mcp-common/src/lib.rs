//! MCP Common - Shared utilities for line-delimited MCP servers
//!
//! This crate provides everything a server needs apart from its tools:
//!
//! - **Protocol**: request parsing and the response shapes
//! - **Server**: the [`ToolServer`] trait and [`handle_request`] dispatch
//! - **Transport**: the [`serve_lines`] stdin/stdout loop
//! - **Initialization**: tracing setup and the `serve_stdio!` macro
//! - **Errors**: protocol-level and tool-level error types
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, ToolServer};
//!
//! // In main.rs
//! serve_stdio!(MyServer, "my_mcp");
//! ```

pub mod error;
pub mod init;
pub mod protocol;
pub mod server;
pub mod transport;

// Re-export commonly used items at crate root
pub use error::{unavailable, ProtocolError, ToolError, ToolResult, UNKNOWN_TOOL_TEXT};
pub use init::{init_tracing, LogFormat};
pub use protocol::{
    CallToolResult, Content, InputSchema, Request, Response, SchemaProperty, Tool,
};
pub use server::{handle_request, ToolServer};
pub use transport::{respond_to_line, serve_lines, ServeStats};
