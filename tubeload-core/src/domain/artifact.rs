//! Downloaded artifact types

/// The media file produced by a completed task
///
/// `file` is the backend's result identifier (the final path segment of the
/// artifact endpoint); `bytes` is the payload itself. Produced at most once
/// per poll run and handed to the save routine, which consumes the buffer.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
