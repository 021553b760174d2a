//! Configuration module
//!
//! Handles CLI configuration. Polling knobs live on the download command
//! itself; the only shared setting is where the backend is.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the download backend
    pub backend_url: String,
}
