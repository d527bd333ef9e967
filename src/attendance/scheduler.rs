//! Periodic attendance refresh.

use super::client::{AttendanceClient, AttendanceRecord, FetchError};
use crate::notify::Notifier;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;

/// Keeps the in-memory roster consistent with server state.
///
/// Refreshes once when started, then on a fixed period, and immediately
/// when triggered out-of-band (after a successful submission). The
/// out-of-band trigger does not reset the periodic timer. The background
/// task is aborted deterministically on shutdown or drop — never left as
/// a dangling timer.
pub struct SyncScheduler {
    roster: Arc<RwLock<Vec<AttendanceRecord>>>,
    client: Arc<AttendanceClient>,
    notifier: Arc<dyn Notifier>,
    period: Duration,
    task: Option<JoinHandle<()>>,
    trigger: Option<mpsc::UnboundedSender<()>>,
}

impl SyncScheduler {
    /// Creates a stopped scheduler.
    pub fn new(client: AttendanceClient, notifier: Arc<dyn Notifier>, period: Duration) -> Self {
        Self {
            roster: Arc::new(RwLock::new(Vec::new())),
            client: Arc::new(client),
            notifier,
            period,
            task: None,
            trigger: None,
        }
    }

    /// Starts the refresh task.
    ///
    /// The first tick fires immediately (the startup refresh); later
    /// ticks follow the configured period. Each tick is an independent
    /// attempt: failures are surfaced and the timer keeps running.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let roster = Arc::clone(&self.roster);
        let client = Arc::clone(&self.client);
        let notifier = Arc::clone(&self.notifier);
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    received = rx.recv() => {
                        if received.is_none() {
                            break;
                        }
                    }
                }

                match refresh_roster(&client, &roster).await {
                    Ok(count) => {
                        tracing::debug!(records = count, "Attendance roster refreshed");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Attendance refresh failed");
                        notifier.modal("Error", "Failed to fetch attendance data.");
                    }
                }
            }
        });

        self.task = Some(task);
        self.trigger = Some(tx);
        tracing::info!(period_secs = self.period.as_secs(), "Attendance sync started");
    }

    /// Requests an immediate refresh without waiting for the next tick.
    ///
    /// Fire-and-forget; a no-op when the scheduler is not running.
    pub fn trigger_refresh(&self) {
        if let Some(trigger) = &self.trigger {
            let _ = trigger.send(());
        }
    }

    /// Performs one on-demand refresh, bypassing the timer.
    ///
    /// On failure the previous roster is retained unchanged.
    pub async fn refresh_once(&self) -> Result<usize, FetchError> {
        refresh_roster(&self.client, &self.roster).await
    }

    /// Returns a snapshot of the current roster.
    pub async fn roster(&self) -> Vec<AttendanceRecord> {
        self.roster.read().await.clone()
    }

    /// Stops the refresh task.
    pub fn shutdown(&mut self) {
        self.trigger = None;
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::info!("Attendance sync stopped");
        }
    }
}

impl Drop for SyncScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for SyncScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncScheduler")
            .field("period", &self.period)
            .field("running", &self.task.is_some())
            .finish()
    }
}

/// Fetches today's list and replaces the roster wholesale.
///
/// Replacement, never a merge: entries from a previous date or a
/// previous poll must not linger. On failure the roster is untouched.
async fn refresh_roster(
    client: &AttendanceClient,
    roster: &RwLock<Vec<AttendanceRecord>>,
) -> Result<usize, FetchError> {
    let records = client.fetch_today().await?;
    let count = records.len();
    *roster.write().await = records;
    Ok(count)
}
