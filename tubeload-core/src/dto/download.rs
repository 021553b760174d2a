//! Download endpoint DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::TaskId;

/// Body of `POST /download/{video,audio}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDownloadRequest {
    pub url: String,
}

/// Success response of `POST /download/{video,audio}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartDownloadResponse {
    pub task_id: TaskId,
}

/// Error body the backend attaches to non-2xx responses
///
/// Parsed leniently: some failure paths return bodies with no `error` field
/// at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_response_uses_task_id_field() {
        let resp: StartDownloadResponse =
            serde_json::from_str(r#"{"task_id": "f3a1"}"#).unwrap();
        assert_eq!(resp.task_id.as_str(), "f3a1");
    }

    #[test]
    fn error_body_without_error_field_parses() {
        let body: ApiError = serde_json::from_str("{}").unwrap();
        assert!(body.error.is_none());
    }
}
