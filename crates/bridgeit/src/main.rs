//! Bridge-it in the terminal.

use anyhow::{Context, Result};
use bridgeit::{Cli, Console, GameSettings};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let settings = GameSettings::load(&cli)?;
    tracing::info!(rows = settings.rows(), cols = settings.cols(), "Starting bridgeit");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let settings = if cli.setup {
        console.setup(settings)?
    } else {
        settings
    };
    console.run(&settings)
}

/// Logs go to stderr, or to a file when one is given, filtered by
/// `RUST_LOG` (default `warn`).
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
