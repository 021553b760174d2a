//! Download submission and progress endpoints

use tracing::debug;

use tubeload_core::domain::job::{DownloadJob, MediaKind, TaskId};
use tubeload_core::domain::progress::ProgressSnapshot;
use tubeload_core::dto::download::{StartDownloadRequest, StartDownloadResponse};

use crate::BackendClient;
use crate::error::{ClientError, Result};

impl BackendClient {
    /// Submit a download job to the backend
    ///
    /// # Arguments
    /// * `url` - The video page URL to download from
    /// * `kind` - Whether to produce the audio track or the full video
    ///
    /// # Returns
    /// The accepted job, carrying the backend-assigned task id.
    ///
    /// Fails with [`ClientError::Submission`] when the backend rejects the
    /// URL or cannot be reached. No polling happens here.
    pub async fn start_download(&self, url: &str, kind: MediaKind) -> Result<DownloadJob> {
        let endpoint = format!("{}/download/{}", self.base_url, kind.endpoint());
        let response = self
            .client
            .post(&endpoint)
            .json(&StartDownloadRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::submission(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Submission {
                message: Self::error_message(response).await,
            });
        }

        let body: StartDownloadResponse = Self::parse_json(response).await?;
        debug!("submitted {} download, task {}", kind, body.task_id);

        Ok(DownloadJob {
            id: body.task_id,
            kind,
            source_url: url.to_string(),
        })
    }

    /// Fetch the current progress snapshot for a task
    ///
    /// Single request/response; the caller owns the retry decision. Network
    /// failures map to [`ClientError::Transient`].
    pub async fn fetch_progress(&self, task: &TaskId) -> Result<ProgressSnapshot> {
        let endpoint = format!("{}/progress/{}", self.base_url, task);
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| ClientError::transient(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::Transient {
                message: Self::error_message(response).await,
            });
        }

        Self::parse_json(response).await
    }
}
