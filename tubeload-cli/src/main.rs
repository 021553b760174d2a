//! Tubeload CLI
//!
//! Command-line interface for the tubeload download backend: look up video
//! metadata, submit audio/video download jobs, watch their progress, and
//! save the finished artifact locally.

mod commands;
mod config;
mod save;
mod view;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tubeload")]
#[command(about = "Download videos through a tubeload backend", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        env = "TUBELOAD_BACKEND_URL",
        default_value = "http://localhost:5000"
    )]
    backend_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Quiet by default so the progress line stays readable; RUST_LOG opts in.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tubeload_client=warn,tubeload_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
    };

    handle_command(cli.command, &config).await
}
