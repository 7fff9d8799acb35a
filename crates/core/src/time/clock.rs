//! Clock abstraction for deterministic time in tests

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use daybreak_domain::EpochMillis;

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now_millis(&self) -> EpochMillis;
}

/// Real system clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> EpochMillis {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Implement Clock for Arc<T> where T: Clock for convenient cloning
impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now_millis(&self) -> EpochMillis {
        (**self).now_millis()
    }
}

/// Manually driven clock.
///
/// Time only moves when [`ManualClock::set`] or [`ManualClock::advance`] is
/// called, which makes duration arithmetic exact in tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at `start`.
    pub fn new(start: EpochMillis) -> Self {
        Self { now: AtomicI64::new(start) }
    }

    /// Jump to an absolute time.
    pub fn set(&self, now: EpochMillis) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Move forward by `millis`.
    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }

    /// Move forward by whole seconds.
    pub fn advance_secs(&self, secs: i64) {
        self.advance(secs * 1_000);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> EpochMillis {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_millis(), 1_000);
        clock.advance(250);
        clock.advance_secs(2);
        assert_eq!(clock.now_millis(), 3_250);
        clock.set(10);
        assert_eq!(clock.now_millis(), 10);
    }

    #[test]
    fn arc_clock_delegates() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(7));
        assert_eq!(clock.now_millis(), 7);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
