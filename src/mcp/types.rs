//! MCP tool parameter types.
//!
//! The template tool deserializes its arguments as a raw `JsonObject` so
//! flat and wrapped calls both reach the dispatcher untouched. These types
//! only describe the advertised schema.

use rmcp::model::JsonObject;
use schemars::JsonSchema;

/// Public parameters of the template tool
#[derive(Debug, JsonSchema)]
#[allow(dead_code)]
pub struct TemplateArgs {
    /// All tool parameters are passed in this single dict.
    /// Use {"input":{"operation":"readme"}} to get full documentation,
    /// parameters, and an unlock token.
    pub input: Option<JsonObject>,
}

impl TemplateArgs {
    /// JSON schema advertised as the tool's `inputSchema`
    pub fn input_schema() -> JsonObject {
        match serde_json::to_value(schemars::schema_for!(TemplateArgs)) {
            Ok(serde_json::Value::Object(schema)) => schema,
            _ => JsonObject::new(),
        }
    }
}
