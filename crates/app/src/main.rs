//! Encore - Main Entry Point
//!
//! Parses the command line, installs logging and runs one catalog command.

mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::Commands;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Browse artists, albums and top tracks from the music catalog")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ./encore.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!("Starting Encore v{}", env!("CARGO_PKG_VERSION"));

    cli.command.execute(cli.config.as_deref()).await
}
