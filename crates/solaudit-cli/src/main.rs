//! solaudit CLI
//!
//! Runs Slither and Mythril against a Solidity contract and merges their
//! findings into one JSON report.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
///
/// Status lines go to stdout via `println!`; tracing stays on stderr so the
/// two never interleave on the same stream.
fn init_tracing(verbose: bool, log_file: Option<&std::path::Path>) -> Result<()> {
    let default_filter = if verbose {
        "solaudit=debug,solaudit_core=debug"
    } else {
        "solaudit=warn,solaudit_core=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Run(args) => args.log_file.clone(),
        Commands::Tools(_) => None,
    };
    init_tracing(cli.verbose, log_file.as_deref())?;

    cli.execute().await
}
