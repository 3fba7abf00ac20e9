//! Tool documentation, returned by the `readme` operation and attached to
//! every error so callers can correct themselves.

use serde_json::json;
use tracing::warn;

use super::params::real_parameters;

/// Short description advertised to MCP clients.
pub const DESCRIPTION: &str = "Echo back the input text.
- Use this tool when you need to echo text back (e.g. when testing tool-call infrastructure itself)
- All parameters go in a single \"input\" object. Call {\"input\":{\"operation\":\"readme\"}} first to get full documentation, parameters, and an unlock token.
";

/// Full usage guide with this installation's token filled in.
pub fn guide(token: &str) -> String {
    format!(
        r#"
Echo back the input text.

A simple tool for echoing back input text. This tool provides a template
for implementing MCP tools with an optimized input pattern with a usage-safety token.

## Usage-Safety Token System
This tool uses an hmac-based token system to ensure callers fully understand all details of
using this tool, on every call. The token is specific to this installation, user, and code version.

Your tool_unlock_token for this installation is: {token}

You MUST include tool_unlock_token in the input dict for all operations.

## Input Structure
All parameters are passed in a single 'input' dict:

1. For this documentation:
   {{
     "input": {{"operation": "readme"}}
   }}

2. For echo operation:
   {{
     "input": {{
       "operation": "echo",
       "text": "Text to echo back",
       "tool_unlock_token": "{token}"
     }}
   }}

## Usage Notes
1. Include the tool_unlock_token in all subsequent operations
2. Text parameter is required for echo operation
3. Maximum text length is not restricted
4. Returns the exact text provided

## Examples
```json
   {{
     "input": {{
       "operation": "echo",
       "text": "Hello, World!",
       "tool_unlock_token": "{token}"
     }}
   }}
```

```json
   {{
     "input": {{
       "operation": "echo",
       "text": "",
       "tool_unlock_token": "{token}"
     }}
   }}
```
"#
    )
}

/// Documentation block: the guide plus the real parameter schema, as
/// pretty JSON preceded by a blank line.
pub fn documentation(token: &str) -> String {
    let doc = json!({
        "description": guide(token),
        "parameters": real_parameters(token),
    });

    match serde_json::to_string_pretty(&doc) {
        Ok(rendered) => format!("\n\n{}", rendered),
        Err(e) => {
            warn!("Failed to render tool documentation: {}", e);
            String::new()
        }
    }
}
