use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Template tool - echo with a usage-safety token, served over MCP
#[derive(Parser)]
#[command(name = "template-tool")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as MCP server over stdio
    #[arg(long)]
    pub mcp: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding the installation secret. Defaults to ~/.template-tool
    #[arg(long, env = "TEMPLATE_TOOL_HOME")]
    pub data_dir: Option<PathBuf>,

    /// Suffix appended to the advertised tool name
    #[arg(long, env = "TOOL_SUFFIX", default_value = "")]
    pub tool_suffix: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the installation secret
    Init {
        /// Replace an existing secret (invalidates issued tokens)
        #[arg(long)]
        force: bool,
    },
    /// Print the tool unlock token for this installation
    Token,
    /// Print the tool documentation
    Readme,
    /// Show installation status
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mcp_flag() {
        let cli = Cli::try_parse_from(["template-tool", "--mcp", "-v"]).unwrap();
        assert!(cli.mcp);
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_tool_suffix() {
        let cli =
            Cli::try_parse_from(["template-tool", "--mcp", "--tool-suffix", "_dev"]).unwrap();
        assert_eq!(cli.tool_suffix, "_dev");
    }

    #[test]
    fn test_parse_init_force() {
        let cli =
            Cli::try_parse_from(["template-tool", "--data-dir", "/tmp/x", "init", "--force"])
                .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Some(Commands::Init { force: true })));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
