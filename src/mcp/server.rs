//! MCP server implementation.
//!
//! This module contains the TemplateMcpServer struct and its tool routing.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::template::{TemplateTool, DESCRIPTION};

use super::tools;
use super::types::TemplateArgs;

/// Template MCP Server
#[derive(Clone)]
pub struct TemplateMcpServer {
    tool: Arc<TemplateTool>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TemplateMcpServer {
    /// Create a server exposing `tool` under `tool_name`
    pub fn new(tool: TemplateTool, tool_name: String) -> Self {
        Self {
            tool: Arc::new(tool),
            tool_router: Self::published_router(tool_name),
        }
    }

    /// Macro-built router with the advertised name, description and schema
    /// replaced by the runtime values.
    fn published_router(tool_name: String) -> ToolRouter<Self> {
        let mut router = Self::tool_router();
        let routes: Vec<_> = router.map.drain().map(|(_, route)| route).collect();
        for mut route in routes {
            route.attr.name = tool_name.clone().into();
            route.attr.description = Some(DESCRIPTION.into());
            route.attr.input_schema = Arc::new(TemplateArgs::input_schema());
            router.add_route(route);
        }
        router
    }

    #[tool]
    fn template(
        &self,
        Parameters(args): Parameters<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        tools::template(&self.tool, args)
    }
}

#[tool_handler]
impl ServerHandler for TemplateMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(DESCRIPTION.to_string()),
        }
    }
}
