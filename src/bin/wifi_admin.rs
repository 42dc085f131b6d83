//! Command-line entry point for the wifi installation admin dashboard.
//!
//! Reads `.env` when present, logs to stderr (filtered by `RUST_LOG`,
//! default `info`) and writes screens to stdout.

use clap::Parser;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wifi_admin::cli::{Cli, execute};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let dotenv = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = dotenv {
        debug!(error = %err, "no .env file loaded");
    }

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    execute(cli, &mut stdout).await
}
