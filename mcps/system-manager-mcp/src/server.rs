//! Server implementation for system management tools

use mcp_common::{InputSchema, SchemaProperty, Tool, ToolError, ToolResult, ToolServer};
use serde_json::Value;

use crate::info;
use crate::params::ListProcessesParams;

const SERVER_NAME: &str = "system-manager-mcp";

const SERVER_DESCRIPTION: &str = "System Manager MCP Server - read-only tools for host \
     information, process listing, and disk usage.";

// ============================================================================
// Tool Table
// ============================================================================

const LIST_PROCESSES_PROPERTIES: &[SchemaProperty] = &[SchemaProperty {
    name: "top",
    kind: "number",
    description: "Return the top N processes sorted by memory",
}];

/// Every tool this server provides, in `tools/list` order
pub const TOOLS: &[Tool] = &[
    Tool {
        name: "get_system_info",
        description: "Get system information (OS, processors, uptime, host, user, memory)",
        input_schema: InputSchema::empty(),
    },
    Tool {
        name: "list_processes",
        description: "List running processes sorted by memory usage",
        input_schema: InputSchema::with_properties(LIST_PROCESSES_PROPERTIES),
    },
    Tool {
        name: "get_disk_info",
        description: "Get disk space information for each ready volume",
        input_schema: InputSchema::empty(),
    },
];

/// Tools known to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetSystemInfo,
    ListProcesses,
    GetDiskInfo,
}

impl ToolName {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "get_system_info" => Some(ToolName::GetSystemInfo),
            "list_processes" => Some(ToolName::ListProcesses),
            "get_disk_info" => Some(ToolName::GetDiskInfo),
            _ => None,
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// The System Manager MCP Server
#[derive(Debug, Clone, Default)]
pub struct SystemManagerServer;

impl SystemManagerServer {
    /// Create the server and start the uptime tick counter
    pub fn new() -> Self {
        info::host::start_tick_counter();
        Self
    }

    fn get_system_info(&self) -> ToolResult<String> {
        Ok(info::host::get_host_info()?.to_string())
    }

    fn list_processes(&self, params: ListProcessesParams) -> ToolResult<String> {
        Ok(info::process::list_processes(params.top()).to_string())
    }

    fn get_disk_info(&self) -> ToolResult<String> {
        Ok(info::disk::get_disk_info().to_string())
    }
}

impl ToolServer for SystemManagerServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn server_version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn server_description(&self) -> Option<&str> {
        Some(SERVER_DESCRIPTION)
    }

    fn tools(&self) -> &'static [Tool] {
        TOOLS
    }

    fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult<String> {
        match ToolName::from_name(name) {
            Some(ToolName::GetSystemInfo) => self.get_system_info(),
            Some(ToolName::ListProcesses) => {
                let params = ListProcessesParams::from_arguments(arguments)?;
                self.list_processes(params)
            }
            Some(ToolName::GetDiskInfo) => self.get_disk_info(),
            None => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}
