//! Artifact save routine
//!
//! Writes to a `.part` file first and renames into place, so an interrupted
//! write never leaves a plausible-looking final file behind.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use tubeload_core::domain::artifact::Artifact;

/// Save an artifact as `<label>.<extension>` inside `dir`
///
/// Consumes the artifact; the in-memory payload is released once written.
///
/// # Returns
/// The path of the saved file.
pub async fn save_artifact(
    artifact: Artifact,
    dir: &Path,
    label: &str,
    extension: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let final_path = dir.join(format!("{}.{}", label, extension));
    let part_path = dir.join(format!("{}.{}.part", label, extension));

    fs::write(&part_path, &artifact.bytes)
        .await
        .with_context(|| format!("failed to write {}", part_path.display()))?;
    drop(artifact);

    fs::rename(&part_path, &final_path)
        .await
        .with_context(|| format!("failed to move {} into place", part_path.display()))?;

    Ok(final_path)
}

/// Turn a video title into a safe file label
///
/// Keeps alphanumerics, dashes, and underscores; whitespace becomes a single
/// underscore; everything else is dropped. Returns `None` when nothing
/// usable remains, so the caller can fall back to the task id.
pub fn sanitize_label(title: &str) -> Option<String> {
    let mut label = String::with_capacity(title.len());
    let mut last_was_separator = true;

    for ch in title.chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            label.push(ch);
            last_was_separator = false;
        } else if ch.is_whitespace() && !last_was_separator {
            label.push('_');
            last_was_separator = true;
        }
    }

    let label = label.trim_end_matches('_').to_string();
    if label.is_empty() {
        return None;
    }

    // Keep names comfortably under filesystem limits.
    Some(label.chars().take(80).collect())
}
