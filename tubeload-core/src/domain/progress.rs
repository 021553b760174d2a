//! Task progress reporting types

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-reported task state
///
/// `starting` is emitted between submission and the first progress write;
/// `unknown` is what the backend answers for task ids it has no record of.
/// Unrecognized status strings also map to `Unknown` so a newer backend
/// cannot break deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Queued,
    Starting,
    Downloading,
    Processing,
    Done,
    Error,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// True once the task can make no further progress
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done | TaskStatus::Error)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskStatus::Queued => "queued",
            TaskStatus::Starting => "starting",
            TaskStatus::Downloading => "downloading",
            TaskStatus::Processing => "processing",
            TaskStatus::Done => "done",
            TaskStatus::Error => "error",
            TaskStatus::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// One response from the progress endpoint
///
/// Immutable value; each poll supersedes the previous snapshot. `file` is
/// only present on `done`, `error` only on `error`. `speed` (bytes/s) and
/// `eta` (seconds) show up during `downloading` when the backend knows them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "percent_or_zero")]
    pub percent: u8,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub eta: Option<u64>,
}

impl ProgressSnapshot {
    /// True once the snapshot reports a terminal status
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Missing or null percent defaults to 0; out-of-range values are clamped.
fn percent_or_zero<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?.unwrap_or(0);
    Ok(raw.clamp(0, 100) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_downloading_snapshot() {
        let snap: ProgressSnapshot = serde_json::from_str(
            r#"{"status": "downloading", "percent": 42, "speed": 1048576.0, "eta": 12}"#,
        )
        .unwrap();
        assert_eq!(snap.status, TaskStatus::Downloading);
        assert_eq!(snap.percent, 42);
        assert_eq!(snap.speed, Some(1_048_576.0));
        assert_eq!(snap.eta, Some(12));
        assert!(!snap.is_terminal());
    }

    #[test]
    fn missing_percent_defaults_to_zero() {
        let snap: ProgressSnapshot =
            serde_json::from_str(r#"{"status": "queued"}"#).unwrap();
        assert_eq!(snap.percent, 0);
    }

    #[test]
    fn null_percent_defaults_to_zero() {
        let snap: ProgressSnapshot =
            serde_json::from_str(r#"{"status": "queued", "percent": null}"#).unwrap();
        assert_eq!(snap.percent, 0);
    }

    #[test]
    fn out_of_range_percent_is_clamped() {
        let snap: ProgressSnapshot =
            serde_json::from_str(r#"{"status": "processing", "percent": 250}"#).unwrap();
        assert_eq!(snap.percent, 100);

        let snap: ProgressSnapshot =
            serde_json::from_str(r#"{"status": "processing", "percent": -5}"#).unwrap();
        assert_eq!(snap.percent, 0);
    }

    #[test]
    fn parses_every_backend_status() {
        for (text, status) in [
            ("queued", TaskStatus::Queued),
            ("starting", TaskStatus::Starting),
            ("downloading", TaskStatus::Downloading),
            ("processing", TaskStatus::Processing),
            ("done", TaskStatus::Done),
            ("error", TaskStatus::Error),
            ("unknown", TaskStatus::Unknown),
        ] {
            let parsed: TaskStatus =
                serde_json::from_str(&format!("\"{}\"", text)).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unrecognized_status_maps_to_unknown() {
        let snap: ProgressSnapshot =
            serde_json::from_str(r#"{"status": "rehashing", "percent": 3}"#).unwrap();
        assert_eq!(snap.status, TaskStatus::Unknown);
    }

    #[test]
    fn only_done_and_error_are_terminal() {
        assert!(TaskStatus::Done.is_terminal());
        assert!(TaskStatus::Error.is_terminal());
        assert!(!TaskStatus::Queued.is_terminal());
        assert!(!TaskStatus::Starting.is_terminal());
        assert!(!TaskStatus::Downloading.is_terminal());
        assert!(!TaskStatus::Processing.is_terminal());
        assert!(!TaskStatus::Unknown.is_terminal());
    }

    #[test]
    fn done_snapshot_carries_file_reference() {
        let snap: ProgressSnapshot = serde_json::from_str(
            r#"{"status": "done", "percent": 100, "file": "abc.mp4"}"#,
        )
        .unwrap();
        assert!(snap.is_terminal());
        assert_eq!(snap.file.as_deref(), Some("abc.mp4"));
    }
}
