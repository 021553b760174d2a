//! Download job domain types

use serde::{Deserialize, Serialize};

/// Backend-assigned task identifier
///
/// The backend currently hands out UUID strings, but the identifier is
/// treated as opaque: it is only ever echoed back in the progress URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId(s)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

/// What the backend is asked to produce for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Audio track only, extracted to mp3
    Audio,
    /// Full video with merged audio, mp4
    Video,
}

impl MediaKind {
    /// File extension of the artifact the backend produces for this kind
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Audio => "mp3",
            MediaKind::Video => "mp4",
        }
    }

    /// Path segment of the submit endpoint (`/download/{segment}`)
    pub fn endpoint(&self) -> &'static str {
        match self {
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// A download request accepted by the backend
///
/// Created on successful submission; the id is assigned by the backend and
/// drives all subsequent progress polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadJob {
    pub id: TaskId,
    pub kind: MediaKind,
    pub source_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_extension_and_endpoint() {
        assert_eq!(MediaKind::Audio.extension(), "mp3");
        assert_eq!(MediaKind::Video.extension(), "mp4");
        assert_eq!(MediaKind::Audio.endpoint(), "audio");
        assert_eq!(MediaKind::Video.endpoint(), "video");
    }

    #[test]
    fn task_id_is_transparent_in_json() {
        let id: TaskId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(id.as_str(), "abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");
    }
}
