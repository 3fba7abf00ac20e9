//! Echo operation.

use serde_json::{Map, Value};
use tracing::debug;

use crate::token::TokenIssuer;

use super::error::ToolError;
use super::params::{self, OPERATION, TOOL_UNLOCK_TOKEN};

/// Validates an echo call and returns its text unchanged.
///
/// Checks run in a fixed order: operation, then token, then parameters.
/// The handler holds no mutable state, so identical calls always produce
/// identical results.
#[derive(Debug, Clone)]
pub struct EchoHandler {
    issuer: TokenIssuer,
}

impl EchoHandler {
    pub fn new(issuer: TokenIssuer) -> Self {
        Self { issuer }
    }

    pub fn handle(&self, input: &Map<String, Value>) -> Result<String, ToolError> {
        match input.get(OPERATION) {
            Some(Value::String(op)) if op == "echo" => {}
            other => return Err(ToolError::unknown_operation(other)),
        }

        match input.get(TOOL_UNLOCK_TOKEN) {
            Some(Value::String(token)) if self.issuer.verify(token) => {}
            _ => return Err(ToolError::Unauthorized),
        }

        params::check_unexpected(input)?;
        let text = params::require_text(input)?;

        debug!("Processing echo request: text length={}", text.len());
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenScope;
    use serde_json::json;

    fn handler() -> EchoHandler {
        let scope = TokenScope::new("template", "0.1.0", "tester");
        EchoHandler::new(TokenIssuer::new(b"test-secret", &scope).unwrap())
    }

    fn valid_token() -> String {
        handler().issuer.token().to_string()
    }

    fn call(value: Value) -> Result<String, ToolError> {
        match value {
            Value::Object(map) => handler().handle(&map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_echo_returns_text_unchanged() {
        let samples = [
            "Hello, World!",
            "",
            "tab\tnewline\nnul\u{0}bell\u{7}",
            "héllo wörld — 你好 🦀",
            "   leading and trailing   ",
        ];

        for sample in samples {
            let result = call(json!({
                "operation": "echo",
                "text": sample,
                "tool_unlock_token": valid_token()
            }));
            assert_eq!(result, Ok(sample.to_string()));
        }
    }

    #[test]
    fn test_unknown_operation_wins_over_everything() {
        let cases = [
            json!({ "operation": "ecko", "text": "x", "tool_unlock_token": valid_token() }),
            json!({ "operation": "ECHO", "text": "x", "tool_unlock_token": valid_token() }),
            json!({ "operation": "readme", "tool_unlock_token": "bad" }),
            json!({ "operation": 7, "text": 1 }),
            json!({ "text": "x", "tool_unlock_token": valid_token() }),
            json!({}),
        ];

        for case in cases {
            let err = call(case.clone()).unwrap_err();
            assert!(
                matches!(err, ToolError::UnknownOperation(_)),
                "{} gave {:?}",
                case,
                err
            );
        }
    }

    #[test]
    fn test_unknown_operation_names_offending_value() {
        let err = call(json!({
            "operation": "ecko",
            "text": "x",
            "tool_unlock_token": valid_token()
        }))
        .unwrap_err();
        assert_eq!(err, ToolError::UnknownOperation(Some("'ecko'".to_string())));
    }

    #[test]
    fn test_bad_token_is_unauthorized_even_with_valid_text() {
        let cases = [
            json!({ "operation": "echo", "text": "x", "tool_unlock_token": "bad" }),
            json!({ "operation": "echo", "text": "x", "tool_unlock_token": "" }),
            json!({ "operation": "echo", "text": "x", "tool_unlock_token": 12345 }),
            json!({ "operation": "echo", "text": "x", "tool_unlock_token": null }),
            json!({ "operation": "echo", "text": "x" }),
            // Token problems are reported before parameter problems
            json!({ "operation": "echo", "surprise": true }),
        ];

        for case in cases {
            assert_eq!(call(case), Err(ToolError::Unauthorized));
        }
    }

    #[test]
    fn test_token_from_another_installation_is_unauthorized() {
        let scope = TokenScope::new("template", "0.1.0", "tester");
        let foreign = TokenIssuer::new(b"other-secret", &scope).unwrap();
        let result = call(json!({
            "operation": "echo",
            "text": "x",
            "tool_unlock_token": foreign.token()
        }));
        assert_eq!(result, Err(ToolError::Unauthorized));
    }

    #[test]
    fn test_missing_or_non_string_text_is_validation_error() {
        let cases = [
            json!({ "operation": "echo", "tool_unlock_token": valid_token() }),
            json!({ "operation": "echo", "text": null, "tool_unlock_token": valid_token() }),
            json!({ "operation": "echo", "text": 42, "tool_unlock_token": valid_token() }),
            json!({ "operation": "echo", "text": ["a"], "tool_unlock_token": valid_token() }),
            json!({ "operation": "echo", "text": { "a": 1 }, "tool_unlock_token": valid_token() }),
        ];

        for case in cases {
            let err = call(case.clone()).unwrap_err();
            match err {
                ToolError::ValidationError(message) => {
                    assert!(message.contains("'text'"), "{}", message)
                }
                other => panic!("{} gave {:?}", case, other),
            }
        }
    }

    #[test]
    fn test_unexpected_parameter_is_validation_error() {
        let err = call(json!({
            "operation": "echo",
            "text": "x",
            "tool_unlock_token": valid_token(),
            "extra": 1
        }))
        .unwrap_err();
        match err {
            ToolError::ValidationError(message) => assert!(message.contains("extra")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let handler = handler();
        let request = json!({
            "operation": "echo",
            "text": "same",
            "tool_unlock_token": handler.issuer.token()
        });
        let Value::Object(map) = request else {
            unreachable!()
        };

        let first = handler.handle(&map);
        for _ in 0..5 {
            assert_eq!(handler.handle(&map), first);
        }

        let Value::Object(bad) = json!({ "operation": "nope" }) else {
            unreachable!()
        };
        let first_err = handler.handle(&bad);
        assert_eq!(handler.handle(&bad), first_err);
    }
}
