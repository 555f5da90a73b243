//! Run both analyzers and write the merged report.

use anyhow::{Context, Result};
use clap::Args;
use solaudit_core::config::{DEFAULT_REPORT_PATH, DEFAULT_SLITHER_OUTPUT, DEFAULT_TIMEOUT_SECS};
use solaudit_core::contract::{load_contract, EXAMPLE_CONTRACT};
use solaudit_core::AuditConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::tools::ToolArgs;
use crate::output;

#[derive(Args)]
pub struct RunArgs {
    /// Solidity file to analyze (defaults to the bundled MultiSigWallet example)
    #[arg(long, value_name = "FILE")]
    pub contract: Option<PathBuf>,

    /// Where to write the merged report
    #[arg(long, short, value_name = "FILE", default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Where Slither writes its JSON output
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SLITHER_OUTPUT)]
    pub slither_output: PathBuf,

    #[command(flatten)]
    pub tools: ToolArgs,

    /// Per-analyzer timeout in seconds
    #[arg(
        long,
        env = "SOLAUDIT_TIMEOUT",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Don't open the report when done
    #[arg(long)]
    pub no_open: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl RunArgs {
    /// Build the run configuration rooted at `project_dir`.
    pub fn into_config(self, project_dir: &Path) -> Result<AuditConfig> {
        let contract_source = match &self.contract {
            Some(path) => load_contract(path)?,
            None => EXAMPLE_CONTRACT.to_string(),
        };

        Ok(AuditConfig {
            work_dir: project_dir.to_path_buf(),
            contract_source,
            report_path: self.output,
            slither_output: self.slither_output,
            slither_bin: self.tools.slither_bin,
            mythril_bin: self.tools.mythril_bin,
            timeout: Duration::from_secs(self.timeout),
            open_report: !self.no_open,
        })
    }
}

pub async fn execute(args: RunArgs, project_dir: &Path) -> Result<()> {
    let config = args.into_config(project_dir)?;
    tracing::debug!(
        work_dir = %config.work_dir.display(),
        contract_bytes = config.contract_source.len(),
        timeout_secs = config.timeout.as_secs(),
        "Starting audit"
    );

    solaudit_core::run_audit(&config, |event| output::print_event(&event))
        .await
        .context("Security report could not be written")?;

    Ok(())
}
