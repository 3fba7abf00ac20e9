//! Common utilities for MCP tools.

use rmcp::model::{CallToolResult, Content};

use crate::template::ErrorResponse;

/// Error result for tool failures
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Error result carrying the message and any attached documentation
pub fn error_response(response: &ErrorResponse) -> CallToolResult {
    tool_error(response.render())
}
