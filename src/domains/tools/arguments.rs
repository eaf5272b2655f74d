//! Argument extraction for tool invocations.
//!
//! Clients send tool arguments as an untyped JSON object. `ToolArguments`
//! wraps that object and applies the string-parameter rules every tool
//! shares; `FromArguments` turns it into a tool's typed params struct in a
//! single step so handlers never look at raw JSON.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ToolError;

/// The argument mapping of a single tool invocation.
#[derive(Debug, Clone, Default)]
pub struct ToolArguments {
    inner: JsonObject,
}

impl ToolArguments {
    /// Wrap an argument object.
    pub fn new(inner: JsonObject) -> Self {
        Self { inner }
    }

    /// Get a required string argument.
    ///
    /// Fails with `MissingArgument` when the key is absent or its value is
    /// not a JSON string. No coercion is attempted.
    pub fn required_str(&self, name: &str) -> Result<&str, ToolError> {
        self.string(name)
            .ok_or_else(|| ToolError::missing_argument(name))
    }

    /// Get an optional string argument, substituting `default` when it is
    /// absent or not a string.
    pub fn optional_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.string(name).unwrap_or(default)
    }

    fn string(&self, name: &str) -> Option<&str> {
        self.inner.get(name).and_then(Value::as_str)
    }
}

impl From<JsonObject> for ToolArguments {
    fn from(inner: JsonObject) -> Self {
        Self::new(inner)
    }
}

impl From<Option<JsonObject>> for ToolArguments {
    fn from(inner: Option<JsonObject>) -> Self {
        Self::new(inner.unwrap_or_default())
    }
}

/// Decode a typed params struct from raw tool arguments.
pub trait FromArguments: Sized {
    fn from_arguments(arguments: &ToolArguments) -> Result<Self, ToolError>;
}
