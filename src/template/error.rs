//! Error taxonomy for template tool calls.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::OPERATIONS;

/// A user-facing failure of a single tool call.
///
/// None of these are internal faults: they are reported back to the caller
/// and the process keeps serving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// `operation` is absent or not a supported value.
    #[error(
        "Unknown operation: {}. Available operations: {}",
        .0.as_deref().unwrap_or("(missing)"),
        OPERATIONS.join(", ")
    )]
    UnknownOperation(Option<String>),

    /// `tool_unlock_token` is absent or does not match this installation.
    #[error("Invalid or missing tool_unlock_token: this indicates your context is missing the following details, which are needed to correctly use this tool:")]
    Unauthorized,

    /// A parameter is missing, unexpected, or of the wrong type.
    #[error("{0}")]
    ValidationError(String),
}

impl ToolError {
    /// Build an `UnknownOperation` naming whatever value the caller sent.
    pub fn unknown_operation(value: Option<&Value>) -> Self {
        let rendered = value.map(|v| match v {
            Value::String(s) => format!("'{}'", s),
            other => other.to_string(),
        });
        ToolError::UnknownOperation(rendered)
    }
}

/// Structured error returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &ToolError, documentation: Option<String>) -> Self {
        Self {
            message: error.to_string(),
            documentation,
        }
    }

    /// Message followed by the embedded documentation, if any.
    pub fn render(&self) -> String {
        match &self.documentation {
            Some(docs) => format!("{}{}", self.message, docs),
            None => self.message.clone(),
        }
    }
}
