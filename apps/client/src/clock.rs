//! Injected wall-clock abstraction.
//!
//! The session timer recomputes elapsed time from a clock reference rather
//! than accumulating tick deltas, so every consumer of "now" goes through
//! this trait. Production code uses [`SystemClock`]; tests drive a
//! [`ManualClock`] to get deterministic elapsed values without real waits.

use std::sync::{Arc, Mutex};

use time::{Duration, OffsetDateTime};

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Real wall clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Manually driven clock for deterministic tests.
///
/// Clones share the same underlying instant, so a clone handed to a service
/// can be advanced from the test body.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<OffsetDateTime>>,
}

impl ManualClock {
    pub fn new(start: OffsetDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Starts at the unix epoch; convenient when only deltas matter.
    pub fn at_epoch() -> Self {
        Self::new(OffsetDateTime::UNIX_EPOCH)
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn set(&self, to: OffsetDateTime) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> OffsetDateTime {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
