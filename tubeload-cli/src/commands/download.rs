//! Download command handler
//!
//! Drives the whole flow the browser UI used to: look up the video, submit
//! the job, watch the progress endpoint, then save the artifact to disk.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::*;
use tracing::debug;

use tubeload_client::{BackendClient, CancelToken, ClientError, PollPolicy, TaskPoller};
use tubeload_core::domain::job::MediaKind;

use crate::config::Config;
use crate::save;
use crate::view::ProgressLine;

/// Arguments for the download command
#[derive(Args)]
pub struct DownloadArgs {
    /// Video page URL
    pub url: String,

    /// Download the audio track only (mp3 instead of mp4)
    #[arg(long)]
    pub audio: bool,

    /// Directory to save into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// File label (defaults to the video title, then the task id)
    #[arg(long)]
    pub name: Option<String>,

    /// Give up after this many seconds without a terminal status
    #[arg(long, default_value_t = 600)]
    pub timeout: u64,
}

/// Submit a download and poll it to a saved file
pub async fn run(config: &Config, args: DownloadArgs) -> Result<()> {
    let kind = if args.audio {
        MediaKind::Audio
    } else {
        MediaKind::Video
    };

    let client = BackendClient::new(&config.backend_url);

    // Look up the video first: validates the URL early and provides the
    // default file label.
    println!("{}", "Fetching details...".dimmed());
    let info = client.fetch_info(&args.url).await?;
    let title = info.title;
    println!(
        "  Title: {}",
        title.as_deref().unwrap_or("Untitled Video").cyan()
    );

    let policy = PollPolicy {
        max_elapsed: Duration::from_secs(args.timeout),
        ..PollPolicy::default()
    };
    policy.validate()?;
    let poller = TaskPoller::with_policy(client, policy);

    let job = poller.backend().start_download(&args.url, kind).await?;
    println!("  Task:  {}", job.id.to_string().dimmed());

    // Ctrl-C trips the token; the loop stops at its next tick boundary.
    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                debug!("ctrl-c received, cancelling poll loop");
                cancel.cancel();
            }
        });
    }

    let mut view = ProgressLine::new();
    let artifact = match poller.run(&job, &mut view, &cancel).await {
        Ok(artifact) => artifact,
        Err(ClientError::Cancelled) => {
            view.finish();
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
        Err(e) => {
            view.finish();
            return Err(e.into());
        }
    };
    view.finish();

    let label = args
        .name
        .or_else(|| title.as_deref().and_then(save::sanitize_label))
        .unwrap_or_else(|| job.id.to_string());

    let path = save::save_artifact(artifact, &args.output, &label, kind.extension()).await?;

    println!(
        "{} saved to {}",
        "Done ✓".green().bold(),
        path.display().to_string().cyan()
    );

    Ok(())
}
