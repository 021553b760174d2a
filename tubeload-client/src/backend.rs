//! Backend abstraction for the task poller

use async_trait::async_trait;

use tubeload_core::domain::job::{DownloadJob, MediaKind, TaskId};
use tubeload_core::domain::progress::ProgressSnapshot;
use tubeload_core::domain::video::VideoInfo;

use crate::BackendClient;
use crate::error::Result;

/// The backend operations the poller depends on
///
/// [`BackendClient`] is the production implementation; tests drive the
/// poller with scripted in-memory backends instead of a live HTTP server.
#[async_trait]
pub trait DownloadBackend: Send + Sync {
    /// Look up title and thumbnail for a video URL
    async fn fetch_info(&self, url: &str) -> Result<VideoInfo>;

    /// Submit a download job, returning the accepted job
    async fn start_download(&self, url: &str, kind: MediaKind) -> Result<DownloadJob>;

    /// Fetch the current progress snapshot for a task
    async fn fetch_progress(&self, task: &TaskId) -> Result<ProgressSnapshot>;

    /// Fetch the produced artifact's bytes
    async fn fetch_artifact(&self, file: &str) -> Result<Vec<u8>>;
}

#[async_trait]
impl DownloadBackend for BackendClient {
    async fn fetch_info(&self, url: &str) -> Result<VideoInfo> {
        BackendClient::fetch_info(self, url).await
    }

    async fn start_download(&self, url: &str, kind: MediaKind) -> Result<DownloadJob> {
        BackendClient::start_download(self, url, kind).await
    }

    async fn fetch_progress(&self, task: &TaskId) -> Result<ProgressSnapshot> {
        BackendClient::fetch_progress(self, task).await
    }

    async fn fetch_artifact(&self, file: &str) -> Result<Vec<u8>> {
        BackendClient::fetch_artifact(self, file).await
    }
}
