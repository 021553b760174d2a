//! Video metadata types

use serde::{Deserialize, Serialize};

/// Metadata returned by the info endpoint
///
/// Both fields are optional: the backend falls back to a placeholder title
/// and an empty thumbnail when the upstream extractor gives it nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl VideoInfo {
    /// Thumbnail URL, treating the backend's empty-string fallback as absent
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|t| !t.is_empty())
    }
}
