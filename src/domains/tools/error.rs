//! Tool-specific error types.
//!
//! A `ToolError` is a propagated fault: the invocation produces no tool
//! result at all and the client receives a JSON-RPC error instead. Failures
//! that should reach the client as tool output (missing API key, network
//! errors, non-200 responses) are reported through `CallToolResult::error`
//! and never become a `ToolError`.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that abort a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    Duplicate(String),

    /// A required argument was absent or not a string.
    #[error("{0} parameter is required")]
    MissingArgument(String),

    /// Arguments were present but unusable.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The caller cancelled the invocation before it completed.
    #[error("Tool invocation cancelled")]
    Cancelled,

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "missing argument" error.
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_)
            | ToolError::MissingArgument(_)
            | ToolError::InvalidArguments(_) => McpError::invalid_params(err.to_string(), None),
            ToolError::Duplicate(_) | ToolError::Cancelled | ToolError::Internal(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_missing_argument_message() {
        let err = ToolError::missing_argument("url");
        assert_eq!(err.to_string(), "url parameter is required");
    }

    #[test]
    fn test_validation_faults_map_to_invalid_params() {
        let err: McpError = ToolError::missing_argument("query").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "query parameter is required");

        let err: McpError = ToolError::not_found("summarize").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_runtime_faults_map_to_internal_error() {
        let err: McpError = ToolError::internal("body read failed").into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);

        let err: McpError = ToolError::Cancelled.into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
