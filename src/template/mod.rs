//! The template tool: an echo operation guarded by a usage-safety token.
//!
//! Callers pass every parameter inside one `input` object. The `readme`
//! operation is always allowed and returns the full documentation,
//! including the unlock token; everything else goes through
//! [`EchoHandler`], which checks the operation, the token and the
//! parameters in that order.

mod echo;
mod error;
mod params;
mod readme;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::token::TokenIssuer;

use echo::EchoHandler;
use error::ToolError;

pub use error::ErrorResponse;
pub use readme::DESCRIPTION;

/// Name the tool is registered under
pub const TOOL_NAME: &str = "template";

/// Advertised tool name: the base name followed by an optional suffix, so
/// several installations can be registered with one host.
pub fn tool_name(suffix: &str) -> String {
    format!("{}{}", TOOL_NAME, suffix)
}

/// Operations accepted in `input.operation`
pub const OPERATIONS: &[&str] = &["readme", "echo"];

/// Key of the wrapper object that carries the real parameters
const INPUT_KEY: &str = "input";

/// Synthetic key some hosts add for routing; never part of the request
const HANDLER_INFO_KEY: &str = "handler_info";

/// Template tool bound to one installation's token
#[derive(Debug, Clone)]
pub struct TemplateTool {
    handler: EchoHandler,
    token: String,
    documentation: String,
}

impl TemplateTool {
    pub fn new(issuer: TokenIssuer) -> Self {
        let token = issuer.token().to_string();
        let documentation = readme::documentation(&token);
        Self {
            handler: EchoHandler::new(issuer),
            token,
            documentation,
        }
    }

    /// Unlock token for this installation
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Documentation block returned by the `readme` operation
    pub fn readme(&self) -> &str {
        self.documentation.trim_start()
    }

    /// Handle one tool call with its raw arguments.
    pub fn call(&self, arguments: Option<Map<String, Value>>) -> Result<String, ErrorResponse> {
        let input = match collapse_input(arguments.unwrap_or_default()) {
            Ok(input) => input,
            Err(e) => return Err(self.error_response(e)),
        };

        if input.get(params::OPERATION).and_then(Value::as_str) == Some("readme") {
            info!("Processing readme request");
            return Ok(self.readme().to_string());
        }

        self.handler.handle(&input).map_err(|e| self.error_response(e))
    }

    fn error_response(&self, error: ToolError) -> ErrorResponse {
        warn!("Error: {}", error);
        ErrorResponse::new(&error, Some(self.documentation.clone()))
    }
}

/// Drop host-injected keys and unwrap `{"input": {...}}`.
fn collapse_input(mut arguments: Map<String, Value>) -> Result<Map<String, Value>, ToolError> {
    if arguments.remove(HANDLER_INFO_KEY).is_some() {
        debug!("Discarded {} from tool arguments", HANDLER_INFO_KEY);
    }

    match arguments.remove(INPUT_KEY) {
        None => Ok(arguments),
        Some(Value::Object(inner)) => Ok(inner),
        Some(other) => Err(ToolError::ValidationError(format!(
            "Invalid input format. Expected dictionary with tool parameters, got {}.",
            params::type_name(&other)
        ))),
    }
}
