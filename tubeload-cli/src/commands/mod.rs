//! CLI commands

mod download;
mod info;

use anyhow::Result;
use clap::Subcommand;

pub use download::DownloadArgs;

use crate::config::Config;

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch title and thumbnail for a video URL
    Info {
        /// Video page URL
        url: String,
    },
    /// Download a video (or its audio track) and save it locally
    Download(DownloadArgs),
}

/// Routes commands to their respective handlers
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Info { url } => info::show_info(config, &url).await,
        Commands::Download(args) => download::run(config, args).await,
    }
}
