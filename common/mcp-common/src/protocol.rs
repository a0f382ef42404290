//! Line protocol types
//!
//! Each input line is one JSON object with a `method` field; each response is
//! one JSON object written on its own line. There is no JSON-RPC framing:
//! `jsonrpc` and `id` fields are accepted and ignored, and responses carry
//! the result object directly.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::error::ProtocolError;

/// Protocol version reported by `initialize`
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Body of the response to an unrecognized method
pub const UNKNOWN_METHOD: &str = "Unknown method";

// ============================================================================
// Requests
// ============================================================================

/// A parsed request line
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// `initialize`
    Initialize,
    /// `tools/list`
    ListTools,
    /// `tools/call`
    CallTool(CallToolParams),
    /// Any other method string
    Unknown(String),
}

/// Parameters of a `tools/call` request
#[derive(Debug, Clone, PartialEq)]
pub struct CallToolParams {
    pub name: String,
    /// `None` when `arguments` is absent or `null`
    pub arguments: Option<Value>,
}

impl Request {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(line)?;
        Self::from_value(value)
    }

    /// Build a request from an already-decoded JSON value
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        let Value::Object(mut object) = value else {
            return Err(ProtocolError::NotAnObject);
        };

        let method = match object.remove("method") {
            Some(Value::String(method)) => method,
            _ => return Err(ProtocolError::MissingMethod),
        };

        match method.as_str() {
            "initialize" => Ok(Request::Initialize),
            "tools/list" => Ok(Request::ListTools),
            "tools/call" => {
                let Some(Value::Object(mut params)) = object.remove("params") else {
                    return Err(ProtocolError::MissingParams);
                };
                let name = match params.remove("name") {
                    Some(Value::String(name)) => name,
                    _ => return Err(ProtocolError::MissingToolName),
                };
                let arguments = match params.remove("arguments") {
                    None | Some(Value::Null) => None,
                    Some(arguments) => Some(arguments),
                };
                Ok(Request::CallTool(CallToolParams { name, arguments }))
            }
            _ => Ok(Request::Unknown(method)),
        }
    }

    /// The method name, for logging
    pub fn method(&self) -> &str {
        match self {
            Request::Initialize => "initialize",
            Request::ListTools => "tools/list",
            Request::CallTool(_) => "tools/call",
            Request::Unknown(method) => method,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Any response line
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Initialize(InitializeResult),
    ListTools(ListToolsResult),
    CallTool(CallToolResult),
    Error(ErrorResponse),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: &'static str,
    pub server_info: ServerInfo,
    pub capabilities: ServerCapabilities,
}

/// Name and version reported by `initialize`
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// Serializes as `{}`: the server supports tools, with no further options
#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Clone, Serialize)]
pub struct ListToolsResult {
    pub tools: &'static [Tool],
}

/// The `tools/call` envelope
#[derive(Debug, Clone, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
}

impl CallToolResult {
    /// Envelope holding a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::Text { text: text.into() }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

// ============================================================================
// Tool descriptors
// ============================================================================

/// Static tool metadata returned by `tools/list`
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: InputSchema,
}

/// A flat object schema; every declared property is optional
#[derive(Debug, Clone, Copy)]
pub struct InputSchema {
    pub properties: &'static [SchemaProperty],
}

impl InputSchema {
    /// Schema for a tool that takes no arguments
    pub const fn empty() -> Self {
        Self { properties: &[] }
    }

    pub const fn with_properties(properties: &'static [SchemaProperty]) -> Self {
        Self { properties }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SchemaProperty {
    pub name: &'static str,
    /// JSON Schema type name, e.g. `"number"`
    pub kind: &'static str,
    pub description: &'static str,
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "object")?;
        map.serialize_entry("properties", &Properties(self.properties))?;
        map.end()
    }
}

struct Properties(&'static [SchemaProperty]);

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for property in self.0 {
            map.serialize_entry(property.name, property)?;
        }
        map.end()
    }
}

impl Serialize for SchemaProperty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.kind)?;
        map.serialize_entry("description", self.description)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_known_methods() {
        assert_eq!(
            Request::parse(r#"{"method":"initialize"}"#).unwrap(),
            Request::Initialize
        );
        assert_eq!(
            Request::parse(r#"{"jsonrpc":"2.0","id":7,"method":"tools/list"}"#).unwrap(),
            Request::ListTools
        );
    }

    #[test]
    fn test_parse_tool_call() {
        let request = Request::parse(
            r#"{"method":"tools/call","params":{"name":"list_processes","arguments":{"top":3}}}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            Request::CallTool(CallToolParams {
                name: "list_processes".to_string(),
                arguments: Some(json!({ "top": 3 })),
            })
        );
    }

    #[test]
    fn test_parse_tool_call_null_arguments() {
        let request =
            Request::parse(r#"{"method":"tools/call","params":{"name":"x","arguments":null}}"#)
                .unwrap();
        assert!(matches!(
            request,
            Request::CallTool(CallToolParams { arguments: None, .. })
        ));
    }

    #[test]
    fn test_method_names_are_case_sensitive() {
        let request = Request::parse(r#"{"method":"Initialize"}"#).unwrap();
        assert_eq!(request, Request::Unknown("Initialize".to_string()));
        assert_eq!(request.method(), "Initialize");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Request::parse("not json"),
            Err(ProtocolError::InvalidJson(_))
        ));
        assert!(matches!(
            Request::parse("[1,2]"),
            Err(ProtocolError::NotAnObject)
        ));
        assert!(matches!(
            Request::parse(r#"{"method":5}"#),
            Err(ProtocolError::MissingMethod)
        ));
        assert!(matches!(
            Request::parse(r#"{"method":"tools/call"}"#),
            Err(ProtocolError::MissingParams)
        ));
        assert!(matches!(
            Request::parse(r#"{"method":"tools/call","params":{"arguments":{}}}"#),
            Err(ProtocolError::MissingToolName)
        ));
    }

    #[test]
    fn test_call_tool_result_shape() {
        let value = serde_json::to_value(Response::CallTool(CallToolResult::text("hi"))).unwrap();
        assert_eq!(value, json!({ "content": [ { "type": "text", "text": "hi" } ] }));
    }

    #[test]
    fn test_error_response_shape() {
        let value = serde_json::to_value(Response::Error(ErrorResponse {
            error: UNKNOWN_METHOD,
        }))
        .unwrap();
        assert_eq!(value, json!({ "error": "Unknown method" }));
    }

    #[test]
    fn test_tool_descriptor_shape() {
        const PROPS: &[SchemaProperty] = &[SchemaProperty {
            name: "top",
            kind: "number",
            description: "how many",
        }];
        let tool = Tool {
            name: "demo",
            description: "A demo tool",
            input_schema: InputSchema::with_properties(PROPS),
        };
        assert_eq!(
            serde_json::to_value(tool).unwrap(),
            json!({
                "name": "demo",
                "description": "A demo tool",
                "inputSchema": {
                    "type": "object",
                    "properties": { "top": { "type": "number", "description": "how many" } }
                }
            })
        );

        let empty = serde_json::to_value(InputSchema::empty()).unwrap();
        assert_eq!(empty, json!({ "type": "object", "properties": {} }));
    }
}
