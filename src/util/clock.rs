//! Wall-clock helpers and an injectable clock for time-based billing.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Current time in milliseconds since the Unix epoch.
///
/// Returns 0 if the system clock reads earlier than the epoch.
#[must_use]
pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

/// Source of the current time, in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Current time in milliseconds.
    fn now_ms(&self) -> u128;
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u128 {
        now_ms()
    }
}

/// Manually driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current_ms: Arc<Mutex<u128>>,
}

impl ManualClock {
    /// Create a clock starting at the given millisecond timestamp.
    #[must_use]
    pub fn starting_at(ms: u128) -> Self {
        Self {
            current_ms: Arc::new(Mutex::new(ms)),
        }
    }

    /// Create a clock starting at the current system time.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(now_ms())
    }

    /// Move the clock forward.
    pub fn advance(&self, duration: Duration) {
        *self.current_ms.lock() += duration.as_millis();
    }

    /// Set the clock to an explicit timestamp, possibly in the past.
    pub fn set_ms(&self, ms: u128) {
        *self.current_ms.lock() = ms;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u128 {
        *self.current_ms.lock()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now_ms(&self) -> u128 {
        (**self).now_ms()
    }
}
