//! System Manager MCP Server
//!
//! Read-only host, process, and disk introspection tools.
//! Requests and responses are single JSON objects, one per line, on
//! stdin/stdout. Logs go to stderr.
//!
//! # Usage
//!
//! Run directly: `system-manager-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "system-manager": { "command": "./system-manager-mcp" } } }
//! ```

use system_manager_mcp::SystemManagerServer;

mcp_common::serve_stdio!(SystemManagerServer, "system_manager_mcp");
