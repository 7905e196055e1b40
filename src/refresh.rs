// Refresh loop - periodic recomputation of the published snapshot
//
// Two states, expressed through ownership:
// - Idle:    a `RefreshLoop` value that hasn't been started
// - Running: a `RefreshHandle` owning the spawned ticker task
//
// `start` consumes the loop, so it can only go Idle -> Running once. The
// handle is the only way to stop the ticker; `cancel` (or dropping the handle)
// releases it. Each tick recomputes from the epoch, nothing is accumulated.
//
// Published values travel over a watch channel: receivers only ever see the
// latest snapshot, which is all the display needs.

use crate::ledger::{Ledger, Snapshot};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Default cadence of the refresh loop
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

/// Floor for configured periods (tokio intervals reject zero)
const MIN_PERIOD: Duration = Duration::from_millis(10);

/// Source of the current instant
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// An unstarted refresh loop
pub struct RefreshLoop<C: Clock = SystemClock> {
    ledger: Ledger,
    clock: C,
    period: Duration,
}

impl RefreshLoop<SystemClock> {
    pub fn new(ledger: Ledger) -> Self {
        Self::with_clock(ledger, SystemClock)
    }
}

impl<C: Clock> RefreshLoop<C> {
    pub fn with_clock(ledger: Ledger, clock: C) -> Self {
        Self {
            ledger,
            clock,
            period: DEFAULT_PERIOD,
        }
    }

    /// Override the tick period
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period.max(MIN_PERIOD);
        self
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Compute a snapshot for the clock's current instant
    pub fn snapshot_now(&self) -> Snapshot {
        self.ledger.snapshot(self.clock.now())
    }

    /// Start ticking
    ///
    /// The receiver already holds a snapshot for the current instant, so the
    /// display has something to show before the first tick fires.
    /// Must be called from within a tokio runtime.
    pub fn start(self) -> (RefreshHandle, watch::Receiver<Snapshot>) {
        let (tx, rx) = watch::channel(self.snapshot_now());
        let (stop_tx, stop_rx) = oneshot::channel();

        tracing::debug!("Refresh loop started (period {:?})", self.period());
        let task = tokio::spawn(self.run(tx, stop_rx));

        let handle = RefreshHandle {
            stop: Some(stop_tx),
            task,
        };
        (handle, rx)
    }

    async fn run(self, tx: watch::Sender<Snapshot>, mut stop_rx: oneshot::Receiver<()>) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        // First tick completes immediately; the initial snapshot is already out
        ticker.tick().await;

        loop {
            tokio::select! {
                // Fires on an explicit stop and when the handle is dropped
                _ = &mut stop_rx => {
                    tracing::debug!("Refresh loop stopped");
                    break;
                }

                _ = ticker.tick() => {
                    let snapshot = self.snapshot_now();
                    tracing::trace!(
                        periods = snapshot.periods,
                        countdown = %snapshot.countdown,
                        "Refresh tick"
                    );
                    if tx.send(snapshot).is_err() {
                        tracing::debug!("All snapshot receivers dropped, stopping refresh loop");
                        break;
                    }
                }
            }
        }
    }
}

/// A running refresh loop
///
/// Dropping the handle without cancelling aborts the ticker task; `cancel`
/// stops it cleanly and waits for it to finish.
pub struct RefreshHandle {
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the ticker and wait for it to exit
    pub async fn cancel(mut self) -> Result<()> {
        if let Some(stop) = self.stop.take() {
            // Err means the task already exited on its own
            let _ = stop.send(());
        }
        (&mut self.task).await.context("Refresh task panicked")?;
        Ok(())
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        // Still set only when `cancel` never ran
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
            self.task.abort();
        }
    }
}
