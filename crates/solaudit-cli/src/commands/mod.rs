//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod run;
pub mod tools;

/// solaudit - Slither + Mythril security report for Solidity contracts
#[derive(Parser)]
#[command(name = "solaudit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory the analyzers run in (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run both analyzers and write the merged security report
    Run(run::RunArgs),

    /// Show whether the analyzer executables are installed
    Tools(tools::ToolsArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };

        match self.command {
            Commands::Run(args) => run::execute(args, &project_dir).await,
            Commands::Tools(args) => tools::execute(args, &project_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["solaudit", "run", "-v", "--project", "/tmp"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp")));
        assert!(matches!(cli.command, Commands::Run(_)));
    }
}
