//! Response formatting for tool results.
//!
//! Every tool answers with a single text content item. Success and reported
//! errors differ only in the `is_error` flag.

use rmcp::model::{CallToolResult, Content, RawContent};
use tracing::warn;

/// Create a success result with text content.
pub fn success_result(content: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content.into())])
}

/// Create a reported error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Text of the first content item, if it is text.
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

/// Whether the result is a reported error.
pub fn is_reported_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
