//! Tool server trait and request dispatch
//!
//! A server provides its identity, a static tool table, and a synchronous
//! `call_tool`. [`handle_request`] turns a parsed [`Request`] into exactly one
//! [`Response`]; tool failures never escape it.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{handle_request, Request, ToolServer};
//!
//! let server = MyServer::new();
//! let request = Request::parse(r#"{"method":"tools/list"}"#)?;
//! let response = handle_request(&server, request);
//! ```

use serde_json::Value;

use crate::error::ToolResult;
use crate::protocol::{
    CallToolParams, CallToolResult, ErrorResponse, InitializeResult, ListToolsResult, Request,
    Response, ServerCapabilities, ServerInfo, Tool, PROTOCOL_VERSION, UNKNOWN_METHOD,
};

/// Trait for servers exposed over the line protocol
///
/// Calls are strictly sequential; implementations hold no per-request state.
pub trait ToolServer {
    /// Returns the server name reported by `initialize`
    fn server_name(&self) -> &str;

    /// Returns the server version reported by `initialize`
    fn server_version(&self) -> &str;

    /// Returns the static tool table served by `tools/list`
    fn tools(&self) -> &'static [Tool];

    /// Executes a tool by name
    ///
    /// Unrecognized names must return [`ToolError::UnknownTool`](crate::ToolError::UnknownTool).
    fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult<String>;

    /// Returns an optional description of the server, logged at startup
    fn server_description(&self) -> Option<&str> {
        None
    }
}

/// Dispatch a request to the server and build its response
pub fn handle_request<S: ToolServer + ?Sized>(server: &S, request: Request) -> Response {
    tracing::debug!(method = request.method(), "Dispatching request");

    match request {
        Request::Initialize => Response::Initialize(InitializeResult {
            protocol_version: PROTOCOL_VERSION,
            server_info: ServerInfo {
                name: server.server_name().to_string(),
                version: server.server_version().to_string(),
            },
            capabilities: ServerCapabilities::default(),
        }),
        Request::ListTools => Response::ListTools(ListToolsResult {
            tools: server.tools(),
        }),
        Request::CallTool(params) => Response::CallTool(call_tool(server, params)),
        Request::Unknown(method) => {
            tracing::warn!(%method, "Unknown method");
            Response::Error(ErrorResponse {
                error: UNKNOWN_METHOD,
            })
        }
    }
}

fn call_tool<S: ToolServer + ?Sized>(server: &S, params: CallToolParams) -> CallToolResult {
    tracing::info!(tool = %params.name, "Calling tool");

    match server.call_tool(&params.name, params.arguments) {
        Ok(text) => CallToolResult::text(text),
        Err(e) => {
            tracing::warn!(tool = %params.name, error = %e, "Tool call failed");
            CallToolResult::text(e.envelope_text())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{unavailable, ToolError};
    use crate::protocol::InputSchema;
    use serde_json::json;

    const TEST_TOOLS: &[Tool] = &[
        Tool {
            name: "echo",
            description: "Echo the `say` argument",
            input_schema: InputSchema::empty(),
        },
        Tool {
            name: "fail",
            description: "Always fails",
            input_schema: InputSchema::empty(),
        },
    ];

    // Minimal test implementation
    struct TestServer;

    impl ToolServer for TestServer {
        fn server_name(&self) -> &str {
            "test-server"
        }

        fn server_version(&self) -> &str {
            "9.9.9"
        }

        fn tools(&self) -> &'static [Tool] {
            TEST_TOOLS
        }

        fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult<String> {
            match name {
                "echo" => Ok(arguments
                    .and_then(|a| a.get("say").and_then(Value::as_str).map(str::to_string))
                    .unwrap_or_default()),
                "fail" => Err(unavailable("boom")),
                _ => Err(ToolError::UnknownTool(name.to_string())),
            }
        }
    }

    fn respond(line: &str) -> Value {
        let request = Request::parse(line).unwrap();
        serde_json::to_value(handle_request(&TestServer, request)).unwrap()
    }

    #[test]
    fn test_initialize() {
        assert_eq!(
            respond(r#"{"method":"initialize"}"#),
            json!({
                "protocolVersion": "2024-11-05",
                "serverInfo": { "name": "test-server", "version": "9.9.9" },
                "capabilities": { "tools": {} }
            })
        );
    }

    #[test]
    fn test_list_tools() {
        let value = respond(r#"{"method":"tools/list"}"#);
        let names: Vec<&str> = value["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["echo", "fail"]);
    }

    #[test]
    fn test_call_tool_success() {
        let value = respond(
            r#"{"method":"tools/call","params":{"name":"echo","arguments":{"say":"hello"}}}"#,
        );
        assert_eq!(value, json!({ "content": [ { "type": "text", "text": "hello" } ] }));
    }

    #[test]
    fn test_call_tool_failure_is_enveloped() {
        let value = respond(r#"{"method":"tools/call","params":{"name":"fail"}}"#);
        assert_eq!(value["content"][0]["text"], "Error: boom");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_unknown_tool() {
        let value = respond(r#"{"method":"tools/call","params":{"name":"bogus"}}"#);
        assert_eq!(
            value,
            json!({ "content": [ { "type": "text", "text": "Unknown tool" } ] })
        );
    }

    #[test]
    fn test_unknown_method() {
        assert_eq!(
            respond(r#"{"method":"resources/list"}"#),
            json!({ "error": "Unknown method" })
        );
    }

    #[test]
    fn test_default_description() {
        assert!(TestServer.server_description().is_none());
    }
}
