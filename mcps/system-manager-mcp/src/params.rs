//! Parameter types for System Manager MCP tools

use serde::de::{Error as _, Unexpected};
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `list_processes`
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ListProcessesParams {
    /// Return the top N processes sorted by memory
    #[serde(default)]
    pub top: Option<i64>,
}

impl ListProcessesParams {
    pub const DEFAULT_TOP: i64 = 10;

    /// Decode tool arguments; absent arguments mean all defaults
    ///
    /// Arguments must be a JSON object. serde would otherwise accept an array
    /// as the struct's fields in order.
    pub fn from_arguments(arguments: Option<Value>) -> Result<Self, serde_json::Error> {
        match arguments {
            Some(value @ Value::Object(_)) => serde_json::from_value(value),
            Some(other) => Err(serde_json::Error::invalid_type(
                unexpected(&other),
                &"an arguments object",
            )),
            None => Ok(Self::default()),
        }
    }

    /// Requested row count, as given by the caller
    pub fn top(&self) -> i64 {
        self.top.unwrap_or(Self::DEFAULT_TOP)
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => Unexpected::Float(f),
            None => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
