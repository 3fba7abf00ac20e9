//! MCP (Model Context Protocol) server implementation using rmcp.
//!
//! Exposes the template tool over stdio to the host process that spawns us.

mod handlers;
mod server;
mod tools;
mod types;

pub use handlers::run_mcp_server;
