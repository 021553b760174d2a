//! Video metadata endpoint

use tubeload_core::domain::video::VideoInfo;
use tubeload_core::dto::info::InfoRequest;

use crate::BackendClient;
use crate::error::{ClientError, Result};

impl BackendClient {
    /// Look up title and thumbnail for a video URL
    ///
    /// # Arguments
    /// * `url` - The video page URL to inspect
    ///
    /// # Returns
    /// The video metadata; both fields may be absent when the backend's
    /// extractor is limited.
    ///
    /// Fails with [`ClientError::Submission`] when the backend rejects the
    /// URL or cannot be reached.
    pub async fn fetch_info(&self, url: &str) -> Result<VideoInfo> {
        let endpoint = format!("{}/info", self.base_url);
        let response = self
            .client
            .post(&endpoint)
            .json(&InfoRequest {
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

        Self::parse_json(response).await
    }
}
