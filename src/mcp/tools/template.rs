//! Template tool adapter.

use rmcp::{model::*, ErrorData as McpError};

use crate::template::TemplateTool;

use super::common::error_response;

/// Run a template tool call and wrap the outcome as an MCP result
pub fn template(tool: &TemplateTool, args: JsonObject) -> Result<CallToolResult, McpError> {
    match tool.call(Some(args)) {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(response) => Ok(error_response(&response)),
    }
}
