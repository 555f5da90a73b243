//! Analyzer availability command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use solaudit_core::tools::check_tools;
use solaudit_core::AuditConfig;
use std::path::{Path, PathBuf};

/// Analyzer executables, shared by every command that launches them.
#[derive(Args)]
pub struct ToolArgs {
    /// Slither executable
    #[arg(
        long = "slither",
        value_name = "BIN",
        env = "SOLAUDIT_SLITHER",
        default_value = "slither"
    )]
    pub slither_bin: PathBuf,

    /// Mythril executable
    #[arg(
        long = "mythril",
        value_name = "BIN",
        env = "SOLAUDIT_MYTHRIL",
        default_value = "myth"
    )]
    pub mythril_bin: PathBuf,
}

#[derive(Args)]
pub struct ToolsArgs {
    #[command(flatten)]
    pub tools: ToolArgs,
}

pub fn execute(args: ToolsArgs, project_dir: &Path) -> Result<()> {
    let config = AuditConfig {
        slither_bin: args.tools.slither_bin,
        mythril_bin: args.tools.mythril_bin,
        ..AuditConfig::in_dir(project_dir)
    };

    println!("{}", "Analyzer Status".bold());
    println!("{}", "─".repeat(50));

    for status in check_tools(&config) {
        match &status.resolved {
            Some(path) => println!(
                "  {} {:<10} {}",
                "●".green(),
                status.tool.name(),
                path.display().to_string().dimmed()
            ),
            None => println!(
                "  {} {:<10} {} ({})",
                "●".red(),
                status.tool.name(),
                "not found".red(),
                status.program.display()
            ),
        }
    }

    println!("{}", "─".repeat(50));
    Ok(())
}
