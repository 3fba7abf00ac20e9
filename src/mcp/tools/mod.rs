//! MCP tool implementations.

mod common;
mod template;

pub use template::template;
