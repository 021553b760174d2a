//! Task poller
//!
//! Polls the backend for a submitted task's progress until it reaches a
//! terminal state, then retrieves the produced artifact. The loop drives a
//! small state machine keyed purely off each snapshot's status:
//!
//! `Submitted -> {queued|starting|downloading|processing} -> {done -> fetched | error}`
//!
//! Deviations from a bare timer loop, all deliberate:
//! - polling is bounded by a maximum elapsed time (`Timeout`)
//! - transient poll failures are absorbed up to a consecutive-failure bound
//!   instead of killing the loop
//! - cancellation is an explicit token, honored at every tick boundary; a
//!   response that lands after cancellation is discarded, never rendered
//! - an undersized artifact is treated as a not-yet-ready backend result and
//!   refetched a bounded number of times

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, warn};

use tubeload_core::domain::artifact::Artifact;
use tubeload_core::domain::job::{DownloadJob, MediaKind, TaskId};
use tubeload_core::domain::progress::{ProgressSnapshot, TaskStatus};

use crate::backend::DownloadBackend;
use crate::error::{ClientError, Result};

/// Tuning knobs for the poll loop
///
/// The defaults match the backend's observed behavior: a 400ms tick keeps
/// the progress display responsive without hammering the service, and
/// anything under 1KiB out of the artifact endpoint is a result that has not
/// finished being written.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    /// Fixed delay between progress polls
    pub interval: Duration,

    /// Give up with `Timeout` once this much time has passed without a
    /// terminal status
    pub max_elapsed: Duration,

    /// How many consecutive transient poll failures to absorb before the
    /// loop fails with the last error
    pub max_transient_failures: u32,

    /// Total attempts to fetch the artifact when it comes back undersized
    /// or not yet ready
    pub artifact_attempts: u32,

    /// Delay between artifact fetch attempts
    pub artifact_retry_delay: Duration,

    /// Artifacts smaller than this are treated as not ready
    pub min_artifact_bytes: usize,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(400),
            max_elapsed: Duration::from_secs(600),
            max_transient_failures: 5,
            artifact_attempts: 5,
            artifact_retry_delay: Duration::from_millis(500),
            min_artifact_bytes: 1024,
        }
    }
}

impl PollPolicy {
    /// Validates the policy
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(ClientError::InvalidPolicy(
                "interval must be greater than 0".to_string(),
            ));
        }
        if self.max_elapsed.is_zero() {
            return Err(ClientError::InvalidPolicy(
                "max_elapsed must be greater than 0".to_string(),
            ));
        }
        if self.artifact_attempts == 0 {
            return Err(ClientError::InvalidPolicy(
                "artifact_attempts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Explicit cancellation handle for a poll loop
///
/// Cloneable; tripping any clone stops the loop at its next tick boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, untripped token
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token; the loop observes it at the next tick boundary
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// True once the token has been tripped
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// View-state seam for progress rendering
///
/// Receives every snapshot the loop accepts, in order. Snapshots that arrive
/// after cancellation are discarded and never reach the observer.
pub trait ProgressObserver: Send {
    /// Called once per accepted progress snapshot
    fn on_progress(&mut self, snapshot: &ProgressSnapshot);
}

/// No-op observer for callers that don't render progress
impl ProgressObserver for () {
    fn on_progress(&mut self, _snapshot: &ProgressSnapshot) {}
}

/// Drives a submitted task to completion
///
/// Holds the backend and the policy; `run` may be called for many tasks over
/// the poller's lifetime, but never concurrently for the same task id.
pub struct TaskPoller<B> {
    backend: B,
    policy: PollPolicy,
    active: Mutex<HashSet<TaskId>>,
}

impl<B: DownloadBackend> TaskPoller<B> {
    /// Creates a poller with the default policy
    pub fn new(backend: B) -> Self {
        Self::with_policy(backend, PollPolicy::default())
    }

    /// Creates a poller with a custom policy
    pub fn with_policy(backend: B, policy: PollPolicy) -> Self {
        Self {
            backend,
            policy,
            active: Mutex::new(HashSet::new()),
        }
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Submit a download and poll it to completion
    ///
    /// A failed submission starts no polling.
    pub async fn submit_and_run(
        &self,
        url: &str,
        kind: MediaKind,
        observer: &mut dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> Result<Artifact> {
        let job = self.backend.start_download(url, kind).await?;
        self.run(&job, observer, cancel).await
    }

    /// Poll a submitted job until it terminates, then fetch its artifact
    ///
    /// # Arguments
    /// * `job` - The accepted job to track
    /// * `observer` - Receives each accepted progress snapshot
    /// * `cancel` - Checked at every tick boundary and after each response
    ///
    /// # Returns
    /// The artifact exactly once on success. On `error` snapshots the
    /// backend's message is surfaced verbatim ("Download failed" when it
    /// gave none).
    pub async fn run(
        &self,
        job: &DownloadJob,
        observer: &mut dyn ProgressObserver,
        cancel: &CancelToken,
    ) -> Result<Artifact> {
        let _guard = self.claim(&job.id)?;

        let started = Instant::now();
        let mut ticker = time::interval(self.policy.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut failures: u32 = 0;

        let file = loop {
            ticker.tick().await;

            if cancel.is_cancelled() {
                return Err(ClientError::Cancelled);
            }

            let elapsed = started.elapsed();
            if elapsed >= self.policy.max_elapsed {
                return Err(ClientError::Timeout { elapsed });
            }

            let snapshot = match self.backend.fetch_progress(&job.id).await {
                Ok(snapshot) => {
                    failures = 0;
                    snapshot
                }
                Err(e @ ClientError::Transient { .. }) => {
                    failures += 1;
                    if failures > self.policy.max_transient_failures {
                        return Err(e);
                    }
                    warn!(
                        "poll failed for task {} ({}/{} consecutive): {}",
                        job.id, failures, self.policy.max_transient_failures, e
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };

            // The request was in flight when the token tripped; discard.
            if cancel.is_cancelled() {
                debug!("discarding snapshot that arrived after cancellation, task {}", job.id);
                return Err(ClientError::Cancelled);
            }

            observer.on_progress(&snapshot);

            match snapshot.status {
                TaskStatus::Done => match snapshot.file {
                    Some(file) => break file,
                    None => {
                        return Err(ClientError::backend(
                            "task completed without an artifact reference",
                        ));
                    }
                },
                TaskStatus::Error => {
                    return Err(ClientError::backend(
                        snapshot
                            .error
                            .unwrap_or_else(|| "Download failed".to_string()),
                    ));
                }
                _ => {
                    debug!("task {} {} at {}%", job.id, snapshot.status, snapshot.percent);
                }
            }
        };

        let bytes = self.fetch_artifact_with_retry(&file, cancel).await?;
        Ok(Artifact { file, bytes })
    }

    /// Fetch the artifact, retrying not-yet-ready results a bounded number
    /// of times
    async fn fetch_artifact_with_retry(
        &self,
        file: &str,
        cancel: &CancelToken,
    ) -> Result<Vec<u8>> {
        let mut attempt: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(ClientError::Cancelled);
            }
            attempt += 1;

            let result = match self.backend.fetch_artifact(file).await {
                Ok(bytes) if bytes.len() < self.policy.min_artifact_bytes => {
                    Err(ClientError::EmptyArtifact { size: bytes.len() })
                }
                other => other,
            };

            match result {
                Ok(bytes) => return Ok(bytes),
                Err(e) if e.is_retryable() && attempt < self.policy.artifact_attempts => {
                    warn!(
                        "artifact {} not ready (attempt {}/{}): {}",
                        file, attempt, self.policy.artifact_attempts, e
                    );
                    time::sleep(self.policy.artifact_retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Register the task as actively polled, enforcing the one-loop-per-task
    /// invariant
    fn claim(&self, task: &TaskId) -> Result<ActiveGuard<'_>> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);

        if !active.insert(task.clone()) {
            return Err(ClientError::AlreadyActive {
                task: task.to_string(),
            });
        }

        Ok(ActiveGuard {
            active: &self.active,
            task: task.clone(),
        })
    }
}

/// Releases the task's active-loop slot when the run ends, however it ends
struct ActiveGuard<'a> {
    active: &'a Mutex<HashSet<TaskId>>,
    task: TaskId,
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.task);
    }
}
