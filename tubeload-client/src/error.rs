//! Error types for the tubeload client

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the tubeload client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend rejected the submission, or was unreachable for it
    #[error("submission failed: {message}")]
    Submission {
        /// Error message from the backend, verbatim when it provided one
        message: String,
    },

    /// A network failure during a poll or artifact fetch
    #[error("transient network failure: {message}")]
    Transient {
        /// Description of the failure
        message: String,
    },

    /// The backend reported the task itself failed
    #[error("{message}")]
    Backend {
        /// Error message from the progress snapshot, verbatim
        message: String,
    },

    /// The fetched artifact was below the minimum plausible size
    #[error("artifact too small ({size} bytes); backend result not ready")]
    EmptyArtifact {
        /// Size of the rejected payload
        size: usize,
    },

    /// No terminal status within the polling cutoff
    #[error("no terminal status after {}s of polling", elapsed.as_secs())]
    Timeout {
        /// How long the loop ran before giving up
        elapsed: Duration,
    },

    /// The cancellation token was tripped
    #[error("download cancelled")]
    Cancelled,

    /// A poll loop is already running for this task
    #[error("a poll loop is already active for task {task}")]
    AlreadyActive {
        /// The contested task id
        task: String,
    },

    /// Undecodable response body
    #[error("failed to parse backend response: {0}")]
    Parse(String),

    /// Poll policy rejected by validation
    #[error("invalid poll policy: {0}")]
    InvalidPolicy(String),
}

impl ClientError {
    /// Create a submission error
    pub fn submission(message: impl Into<String>) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    /// Create a transient error
    pub fn transient(message: impl Into<String>) -> Self {
        Self::Transient {
            message: message.into(),
        }
    }

    /// Create a backend-reported error
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// True for failures the poll loop may retry on its own
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transient { .. } | Self::EmptyArtifact { .. }
        )
    }
}
