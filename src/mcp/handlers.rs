//! MCP server handlers.
//!
//! This module contains only the MCP server startup logic. The installation
//! secret is loaded and the tool built in main.rs before we get here.

use anyhow::Result;
use tracing::{error, info};

use crate::template::TemplateTool;

use super::server::TemplateMcpServer;

/// Run the MCP server over stdio until the host closes the connection.
///
/// # Arguments
/// * `tool` - Tool bound to this installation's token
/// * `tool_name` - Name the tool is advertised under (base name plus any suffix)
pub async fn run_mcp_server(tool: TemplateTool, tool_name: String) -> Result<()> {
    info!("🔧 Starting template MCP tool server...");
    info!("📝 Stdio mode (using rmcp), tool name: {}", tool_name);

    let server = TemplateMcpServer::new(tool, tool_name);

    run_server(server).await
}

/// Run the MCP server with the given server instance.
async fn run_server(server: TemplateMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("✅ MCP tool server started");
    info!("🔗 Ready for MCP client connections");

    let service = server.serve(stdio()).await.map_err(|e| {
        error!("Failed to start MCP service: {:?}", e);
        anyhow::anyhow!("Failed to start MCP service: {:?}", e)
    })?;

    service.waiting().await.map_err(|e| {
        error!("MCP service error: {:?}", e);
        anyhow::anyhow!("MCP service error: {:?}", e)
    })?;

    info!("MCP server shutting down");
    Ok(())
}
