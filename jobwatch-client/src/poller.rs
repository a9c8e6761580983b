//! Status poller
//!
//! Polls the status endpoint on a fixed interval until the job leaves the
//! pending state. Each check is awaited before the next tick is taken, so
//! a single poller never has two requests in flight; a slow response
//! delays the next check instead of overlapping it.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::source::StatusSource;
use jobwatch_core::{JobId, JobState, TerminalStatus};

/// How often the poller checks the status endpoint by default
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Polling configuration
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Time between consecutive status checks
    pub interval: Duration,
}

impl PollConfig {
    /// Creates a configuration with the given interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

/// Watches one job until it leaves the pending state
///
/// The poller owns its schedule: there is no shared timer handle to clear.
/// Run it in place with [`run`](StatusPoller::run), or move it to a
/// background task with [`spawn`](StatusPoller::spawn) and keep the
/// returned [`PollerHandle`] — dropping the handle cancels the poll.
pub struct StatusPoller {
    source: Arc<dyn StatusSource>,
    job_id: JobId,
    config: PollConfig,
}

impl StatusPoller {
    /// Creates a poller with the default interval
    pub fn new(source: Arc<dyn StatusSource>, job_id: JobId) -> Self {
        Self::with_config(source, job_id, PollConfig::default())
    }

    /// Creates a poller with a custom configuration
    pub fn with_config(source: Arc<dyn StatusSource>, job_id: JobId, config: PollConfig) -> Self {
        Self {
            source,
            job_id,
            config,
        }
    }

    /// Polls until the job leaves the pending state
    ///
    /// Fetch and parse failures are logged and do not stop the schedule;
    /// the loop only exits on the first terminal observation. There is no
    /// timeout or attempt limit: a job that stays pending is polled until
    /// the future is dropped.
    pub async fn run(&self) -> TerminalStatus {
        info!(
            "Starting status poller for job {} (interval: {:?})",
            self.job_id, self.config.interval
        );

        // tokio panics on a zero-period interval
        let period = self.config.interval.max(Duration::from_millis(1));
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            debug!("Checking status of job {}", self.job_id);

            match self.check_once().await {
                Ok(JobState::Pending) => {
                    debug!("Job {} still pending", self.job_id);
                }
                Ok(JobState::Terminal(status)) => {
                    if status.status.is_none() {
                        warn!(
                            "Status response for job {} carried no job-status value, treating job as finished",
                            self.job_id
                        );
                    }
                    info!("Job {} left pending state: {}", self.job_id, status);
                    return status;
                }
                Err(e) => {
                    error!("Error fetching status of job {}: {:#}", self.job_id, e);
                }
            }
        }
    }

    /// Performs a single status check
    async fn check_once(&self) -> Result<JobState> {
        let report = self.source.fetch(&self.job_id).await?;
        Ok(report.state())
    }

    /// Moves the poller onto a background task
    ///
    /// Must be called inside a tokio runtime. The returned handle is the
    /// only way to reach the poll: await [`PollerHandle::wait`] for the
    /// terminal status, or drop the handle to cancel the task.
    pub fn spawn(self) -> PollerHandle {
        let task = tokio::spawn(async move { self.run().await });
        PollerHandle { task }
    }
}

/// Owned handle to a spawned poller
///
/// Dropping the handle aborts the background task, so a poll can never
/// outlive the component that started it.
pub struct PollerHandle {
    task: JoinHandle<TerminalStatus>,
}

impl PollerHandle {
    /// Waits for the poller to observe a terminal status
    pub async fn wait(mut self) -> std::result::Result<TerminalStatus, WaitError> {
        (&mut self.task).await.map_err(|e| {
            if e.is_cancelled() {
                WaitError::Cancelled
            } else {
                WaitError::Panicked
            }
        })
    }

    /// Whether the background task has finished
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Error waiting on a spawned poller
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaitError {
    /// The task was aborted before a terminal status was observed
    #[error("poller was cancelled before the job left the pending state")]
    Cancelled,
    /// The task panicked
    #[error("poller task panicked")]
    Panicked,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use async_trait::async_trait;
    use jobwatch_core::StatusReport;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Plays back a fixed sequence of responses, then reports pending
    /// forever. Counts how many times it was asked.
    struct ScriptedSource {
        script: Mutex<VecDeque<Result<StatusReport>>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<StatusReport>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into_iter().collect()),
                calls: AtomicUsize::new(0),
            })
        }

        fn pending_forever() -> Arc<Self> {
            Self::new(Vec::new())
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusSource for ScriptedSource {
        async fn fetch(&self, _job_id: &JobId) -> Result<StatusReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(StatusReport::with_status("pending")))
        }
    }

    fn job_id() -> JobId {
        JobId::new(uuid::Uuid::new_v4().to_string()).unwrap()
    }

    fn pending() -> Result<StatusReport> {
        Ok(StatusReport::with_status("pending"))
    }

    fn fast_config() -> PollConfig {
        // Virtual time makes the period cheap; use the real default so the
        // tests run the same schedule as production.
        PollConfig::default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_responses_keep_polling() {
        let source = ScriptedSource::pending_forever();
        let poller = StatusPoller::with_config(source.clone(), job_id(), fast_config());

        // The poller must still be going after plenty of virtual time.
        let outcome = time::timeout(Duration::from_secs(30), poller.run()).await;
        assert!(outcome.is_err(), "poller stopped on a pending status");
        assert!(
            source.calls() >= 10,
            "expected repeated checks, got {}",
            source.calls()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_terminal_status_stops_polling() {
        let source = ScriptedSource::new(vec![
            pending(),
            pending(),
            Ok(StatusReport::with_status("done")),
        ]);
        let poller = StatusPoller::with_config(source.clone(), job_id(), fast_config());

        let status = poller.run().await;

        assert_eq!(status.status.as_deref(), Some("done"));
        assert_eq!(source.calls(), 3, "poller kept checking after terminal");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_error_does_not_stop_polling() {
        let source = ScriptedSource::new(vec![
            pending(),
            Err(ClientError::api_error(500, "simulated outage")),
            Ok(StatusReport::with_status("failed")),
        ]);
        let poller = StatusPoller::with_config(source.clone(), job_id(), fast_config());

        let status = poller.run().await;

        assert_eq!(status.status.as_deref(), Some("failed"));
        assert_eq!(source.calls(), 3, "error tick should not end the schedule");
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_status_field_is_terminal() {
        let report: StatusReport = serde_json::from_str(r#"{"unrelated": true}"#).unwrap();
        let source = ScriptedSource::new(vec![Ok(report)]);
        let poller = StatusPoller::with_config(source.clone(), job_id(), fast_config());

        let status = poller.run().await;

        assert_eq!(status.status, None);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_spawned_poller_delivers_terminal_status() {
        let source = ScriptedSource::new(vec![pending(), Ok(StatusReport::with_status("done"))]);
        let poller = StatusPoller::with_config(source, job_id(), fast_config());

        let status = poller.spawn().wait().await.unwrap();

        assert_eq!(status.status.as_deref(), Some("done"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels_polling() {
        let source = ScriptedSource::pending_forever();
        let poller = StatusPoller::with_config(source.clone(), job_id(), fast_config());

        let handle = poller.spawn();
        time::sleep(Duration::from_secs(10)).await;

        let calls_before_drop = source.calls();
        assert!(calls_before_drop > 0, "poller never ran");
        drop(handle);

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(
            source.calls(),
            calls_before_drop,
            "poller kept checking after its handle was dropped"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_after_abort_reports_cancelled() {
        let source = ScriptedSource::pending_forever();
        let poller = StatusPoller::with_config(source, job_id(), fast_config());

        let handle = poller.spawn();
        handle.task.abort();

        assert_eq!(handle.wait().await, Err(WaitError::Cancelled));
    }
}
