use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;
mod mcp;
mod secret;
mod template;
mod token;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr: stdout carries the MCP protocol
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = cli::resolve_data_dir(cli.data_dir)?;

    if cli.mcp {
        let tool = command::open_tool(&data_dir)?;
        let tool_name = template::tool_name(&cli.tool_suffix);
        return mcp::run_mcp_server(tool, tool_name).await;
    }

    match cli.command {
        Some(Commands::Init { force }) => command::run_init(&data_dir, force).await?,
        Some(Commands::Token) => command::run_token(&data_dir).await?,
        Some(Commands::Readme) => command::run_readme(&data_dir).await?,
        Some(Commands::Status) => command::run_status(&data_dir).await?,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!(
                "Use 'template-tool init' to install or 'template-tool --mcp' to start the MCP server."
            );
        }
    }

    Ok(())
}
