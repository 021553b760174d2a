//! Info command handler

use anyhow::Result;
use colored::*;

use tubeload_client::BackendClient;

use crate::config::Config;

/// Fetch and display video metadata
pub async fn show_info(config: &Config, url: &str) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);

    println!("{}", "Fetching details...".dimmed());
    let info = client.fetch_info(url).await?;

    println!("{}", "Video Details:".bold());
    println!(
        "  Title:     {}",
        info.title.as_deref().unwrap_or("Untitled Video").cyan()
    );
    match info.thumbnail_url() {
        Some(thumb) => println!("  Thumbnail: {}", thumb.dimmed()),
        None => println!("  Thumbnail: {}", "(none)".dimmed()),
    }

    Ok(())
}
