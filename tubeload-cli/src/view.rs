//! Progress rendering
//!
//! The view state lives in an explicit object handed to the poll loop
//! through [`ProgressObserver`]; nothing here is ambient or global.

use std::io::{self, Write};

use colored::*;

use tubeload_client::ProgressObserver;
use tubeload_core::domain::progress::{ProgressSnapshot, TaskStatus};

/// Single-line, carriage-return progress display
pub struct ProgressLine {
    dirty: bool,
}

impl ProgressLine {
    pub fn new() -> Self {
        Self { dirty: false }
    }

    /// Terminate the progress line so later output starts fresh
    pub fn finish(&mut self) {
        if self.dirty {
            println!();
            self.dirty = false;
        }
    }
}

impl ProgressObserver for ProgressLine {
    fn on_progress(&mut self, snapshot: &ProgressSnapshot) {
        let mut line = format!("  {} {:>3}%", phase_message(snapshot.status), snapshot.percent);

        if snapshot.status == TaskStatus::Downloading {
            if let Some(speed) = snapshot.speed {
                line.push_str(&format!("  {:.1} MB/s", speed / 1_048_576.0));
            }
            if let Some(eta) = snapshot.eta {
                line.push_str(&format!("  eta {}s", eta));
            }
        }

        // Pad before coloring so stale characters get overwritten.
        let padded = format!("{:<60}", line);
        let rendered = match snapshot.status {
            TaskStatus::Done => padded.green(),
            TaskStatus::Error => padded.red(),
            _ => padded.cyan(),
        };

        print!("\r{}", rendered);
        io::stdout().flush().ok();
        self.dirty = true;
    }
}

/// Status text per phase, matching what the backend is actually doing
fn phase_message(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Queued => "Queued...",
        TaskStatus::Starting => "Starting...",
        TaskStatus::Downloading => "Downloading...",
        TaskStatus::Processing => "Merging audio & video...",
        TaskStatus::Done => "Complete ✓",
        TaskStatus::Error => "Failed",
        TaskStatus::Unknown => "Waiting for backend...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_phase_message() {
        for status in [
            TaskStatus::Queued,
            TaskStatus::Starting,
            TaskStatus::Downloading,
            TaskStatus::Processing,
            TaskStatus::Done,
            TaskStatus::Error,
            TaskStatus::Unknown,
        ] {
            assert!(!phase_message(status).is_empty());
        }
    }
}
