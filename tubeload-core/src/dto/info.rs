//! Info endpoint DTOs

use serde::{Deserialize, Serialize};

/// Body of `POST /info`
///
/// The success response deserializes directly into
/// [`crate::domain::video::VideoInfo`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoRequest {
    pub url: String,
}
