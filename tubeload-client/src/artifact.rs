//! Artifact retrieval endpoint

use crate::BackendClient;
use crate::error::{ClientError, Result};

impl BackendClient {
    /// Fetch the produced artifact's bytes
    ///
    /// # Arguments
    /// * `file` - The result identifier from a `done` progress snapshot
    ///
    /// The backend answers 404 while the file is still being finalized (or
    /// ended up empty); that maps to [`ClientError::EmptyArtifact`] so the
    /// poller can retry it rather than fail outright. Network failures map
    /// to [`ClientError::Transient`].
    pub async fn fetch_artifact(&self, file: &str) -> Result<Vec<u8>> {
        let endpoint = format!("{}/download/{}", self.base_url, file);
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| ClientError::transient(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::EmptyArtifact { size: 0 });
        }
        if !status.is_success() {
            return Err(ClientError::Transient {
                message: Self::error_message(response).await,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::transient(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
