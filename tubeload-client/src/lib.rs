//! Tubeload HTTP Client
//!
//! A type-safe client for the tubeload download backend, plus the task
//! poller that turns a submitted background job into a progress-reported,
//! eventually-downloadable artifact.
//!
//! # Example
//!
//! ```no_run
//! use tubeload_client::{BackendClient, CancelToken, TaskPoller};
//! use tubeload_core::domain::job::MediaKind;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = BackendClient::new("http://localhost:5000");
//!     let poller = TaskPoller::new(client);
//!
//!     let artifact = poller
//!         .submit_and_run(
//!             "https://example.com/watch?v=abc",
//!             MediaKind::Video,
//!             &mut (),
//!             &CancelToken::new(),
//!         )
//!         .await?;
//!
//!     println!("fetched {} ({} bytes)", artifact.file, artifact.len());
//!     Ok(())
//! }
//! ```

mod artifact;
mod backend;
pub mod error;
mod info;
mod poller;
mod tasks;

// Re-export commonly used types
pub use backend::DownloadBackend;
pub use error::{ClientError, Result};
pub use poller::{CancelToken, PollPolicy, ProgressObserver, TaskPoller};

use reqwest::Client;
use serde::de::DeserializeOwned;

use tubeload_core::dto::download::ApiError;

/// HTTP client for the tubeload backend API
///
/// Provides one method per backend endpoint:
/// - Video metadata lookup (`/info`)
/// - Download submission (`/download/video`, `/download/audio`)
/// - Progress polling (`/progress/{task_id}`)
/// - Artifact retrieval (`/download/{file}`)
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// Base URL of the backend (e.g., "http://localhost:5000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl BackendClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API
    ///
    /// # Example
    /// ```
    /// use tubeload_client::BackendClient;
    ///
    /// let client = BackendClient::new("http://localhost:5000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Deserialize a successful JSON response body
    ///
    /// The caller is responsible for having checked the status code; this
    /// only classifies undecodable bodies.
    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("invalid JSON response: {}", e)))
    }

    /// Extract the backend's error message from a non-2xx response
    ///
    /// The backend attaches `{"error": "..."}` bodies to its failures; when
    /// the body is missing or unreadable the HTTP status stands in for it.
    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        serde_json::from_str::<ApiError>(&body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| format!("HTTP {}", status))
    }
}
