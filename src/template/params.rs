//! Real parameters of the template tool and their validation.
//!
//! The public MCP schema only advertises a single `input` object. The
//! parameters below are what goes inside it; callers learn them from the
//! `readme` operation.

use serde_json::{json, Map, Value};

use super::error::ToolError;
use super::OPERATIONS;

pub const OPERATION: &str = "operation";
pub const TEXT: &str = "text";
pub const TOOL_UNLOCK_TOKEN: &str = "tool_unlock_token";

/// Every key accepted inside `input`
pub const EXPECTED: &[&str] = &[OPERATION, TEXT, TOOL_UNLOCK_TOKEN];

/// JSON schema of the real parameters, with the unlock token spelled out.
pub fn real_parameters(token: &str) -> Value {
    json!({
        "properties": {
            OPERATION: {
                "type": "string",
                "enum": OPERATIONS,
                "description": "Operation to perform"
            },
            TEXT: {
                "type": "string",
                "description": "Text to echo back for the echo operation"
            },
            TOOL_UNLOCK_TOKEN: {
                "type": "string",
                "description": format!(
                    "Security token, {}, obtained from readme operation, or re-provided any time the AI lost context or gave a wrong token",
                    token
                )
            }
        },
        "required": [OPERATION, TOOL_UNLOCK_TOKEN],
        "type": "object"
    })
}

/// Name of a JSON value's type, as reported in validation messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reject keys that are not real parameters.
pub fn check_unexpected(input: &Map<String, Value>) -> Result<(), ToolError> {
    let mut unexpected: Vec<&str> = input
        .keys()
        .map(String::as_str)
        .filter(|key| !EXPECTED.contains(key))
        .collect();

    if unexpected.is_empty() {
        return Ok(());
    }
    unexpected.sort_unstable();

    let mut expected = EXPECTED.to_vec();
    expected.sort_unstable();

    Err(ToolError::ValidationError(format!(
        "Unexpected parameters provided: {}. Expected parameters are: {}. Please consult the attached doc.",
        unexpected.join(", "),
        expected.join(", ")
    )))
}

/// Fetch the echo `text` parameter.
pub fn require_text(input: &Map<String, Value>) -> Result<&str, ToolError> {
    match input.get(TEXT) {
        None | Some(Value::Null) => Err(ToolError::ValidationError(format!(
            "Parameter '{}' is required for echo operation. Please provide the text you want to echo back.",
            TEXT
        ))),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(ToolError::ValidationError(format!(
            "Parameter '{}' must be a string, got {}. Please provide a string value to echo.",
            TEXT,
            type_name(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_real_parameters_mentions_token() {
        let schema = real_parameters("tok123");
        assert_eq!(schema["properties"]["operation"]["enum"], json!(["readme", "echo"]));
        assert!(schema["properties"]["tool_unlock_token"]["description"]
            .as_str()
            .unwrap()
            .contains("tok123"));
        assert_eq!(schema["required"], json!(["operation", "tool_unlock_token"]));
    }

    #[test]
    fn test_check_unexpected() {
        assert!(check_unexpected(&object(json!({
            "operation": "echo",
            "text": "x",
            "tool_unlock_token": "t"
        })))
        .is_ok());

        let err = check_unexpected(&object(json!({
            "operation": "echo",
            "zeta": 1,
            "alpha": 2
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ToolError::ValidationError(
                "Unexpected parameters provided: alpha, zeta. Expected parameters are: operation, text, tool_unlock_token. Please consult the attached doc.".to_string()
            )
        );
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text(&object(json!({ "text": "" }))), Ok(""));

        let missing = require_text(&object(json!({}))).unwrap_err();
        assert!(missing.to_string().contains("'text' is required"));

        let null = require_text(&object(json!({ "text": null }))).unwrap_err();
        assert!(null.to_string().contains("'text' is required"));

        let wrong = require_text(&object(json!({ "text": [1, 2] }))).unwrap_err();
        assert!(wrong.to_string().contains("must be a string, got array"));
    }
}
