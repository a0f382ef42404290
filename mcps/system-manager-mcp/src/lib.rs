//! System Manager MCP Library
//!
//! Read-only system introspection over line-delimited JSON: host
//! information, process listing by memory, and disk usage.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use mcp_common::ToolServer;
//! use system_manager_mcp::SystemManagerServer;
//!
//! let server = SystemManagerServer::new();
//! let text = server.call_tool("list_processes", Some(serde_json::json!({ "top": 5 })))?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `system-manager-mcp`, then write one request per line:
//! ```json
//! {"method":"tools/call","params":{"name":"get_disk_info"}}
//! ```

pub mod info;
pub mod params;
pub mod server;
pub mod types;

// Re-export main server type
pub use server::{SystemManagerServer, ToolName, TOOLS};

// Re-export parameter types for direct API usage
pub use params::ListProcessesParams;
