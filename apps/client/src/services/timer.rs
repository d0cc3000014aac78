//! Wall-clock elapsed time for the active session.
//!
//! The tracker recomputes `now − reference` on every read instead of summing
//! per-tick deltas, so missed ticks (throttled timers, suspended hosts) never
//! skew the value. A background ticker exists only to push periodic updates
//! to a display; it carries no state of its own.

use std::sync::Arc;
use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::clock::Clock;

/// Elapsed-seconds tracker bound to an injected clock.
pub struct ElapsedTimeTracker {
    clock: Arc<dyn Clock>,
    reference: Option<OffsetDateTime>,
    frozen: Option<u64>,
}

impl ElapsedTimeTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            reference: None,
            frozen: None,
        }
    }

    /// Anchor the tracker at the given reference instant (Active entry).
    pub fn start_at(&mut self, reference: OffsetDateTime) {
        self.reference = Some(reference);
        self.frozen = None;
    }

    /// Current elapsed whole seconds. Zero when never started; constant once
    /// frozen.
    pub fn elapsed_seconds(&self) -> u64 {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        self.compute()
    }

    /// Pin the elapsed value at the moment of completion. Idempotent: a
    /// second freeze returns the first value unchanged.
    pub fn freeze(&mut self) -> u64 {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        let value = self.compute();
        self.frozen = Some(value);
        value
    }

    pub fn clear(&mut self) {
        self.reference = None;
        self.frozen = None;
    }

    pub fn is_running(&self) -> bool {
        self.reference.is_some() && self.frozen.is_none()
    }

    fn compute(&self) -> u64 {
        match self.reference {
            None => 0,
            Some(reference) => {
                let delta = self.clock.now() - reference;
                delta.whole_seconds().max(0) as u64
            }
        }
    }
}

/// Handle to the periodic display ticker. Dropping the handle cancels the
/// task, which covers teardown on abandonment as well as explicit exits.
pub struct TickerHandle {
    token: CancellationToken,
    rx: watch::Receiver<u64>,
}

impl TickerHandle {
    /// Receiver of the latest elapsed-seconds value.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.rx.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Spawn the display ticker for an Active session.
///
/// Each tick publishes `now − reference` computed from the injected clock;
/// the interval only schedules wakeups and contributes nothing to the value.
pub fn spawn_ticker(
    clock: Arc<dyn Clock>,
    reference: OffsetDateTime,
    period: Duration,
) -> TickerHandle {
    let (tx, rx) = watch::channel(0u64);
    let token = CancellationToken::new();
    let task_token = token.clone();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = task_token.cancelled() => break,
                _ = interval.tick() => {
                    let elapsed = (clock.now() - reference).whole_seconds().max(0) as u64;
                    if tx.send(elapsed).is_err() {
                        // Nobody is displaying the value any more.
                        break;
                    }
                }
            }
        }
    });

    TickerHandle { token, rx }
}
