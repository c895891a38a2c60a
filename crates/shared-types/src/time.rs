//! # Time Source
//!
//! Abstracted clock so timestamps and expiry windows can be tested without
//! waiting on the wall clock.

use crate::entities::{TimestampMs, TimestampSecs};
use std::sync::Arc;

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current time in milliseconds since epoch.
    fn now_millis(&self) -> TimestampMs;

    /// Current time in whole seconds since epoch.
    fn now_secs(&self) -> TimestampSecs {
        self.now_millis() / 1000
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    fn now_millis(&self) -> TimestampMs {
        (**self).now_millis()
    }
}

/// Default time source using system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_millis(&self) -> TimestampMs {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as TimestampMs
    }
}

/// Manually driven clock for tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    time: std::sync::atomic::AtomicU64,
}

#[cfg(any(test, feature = "test-utils"))]
impl ManualTimeSource {
    pub fn new(initial: TimestampMs) -> Self {
        Self {
            time: std::sync::atomic::AtomicU64::new(initial),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.time.fetch_add(ms, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set(&self, time: TimestampMs) {
        self.time.store(time, std::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl TimeSource for ManualTimeSource {
    fn now_millis(&self) -> TimestampMs {
        self.time.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_source() {
        let source = SystemTimeSource;
        // After Jan 1, 2020
        assert!(source.now_millis() > 1_577_836_800_000);
        assert!(source.now_secs() > 1_577_836_800);
    }

    #[test]
    fn test_manual_time_source() {
        let source = ManualTimeSource::new(1_500);
        assert_eq!(source.now_millis(), 1_500);
        assert_eq!(source.now_secs(), 1);

        source.advance(500);
        assert_eq!(source.now_millis(), 2_000);

        source.set(3_000);
        assert_eq!(source.now_secs(), 3);
    }

    #[test]
    fn test_shared_clock_through_arc() {
        let clock = Arc::new(ManualTimeSource::new(10));
        let shared: Arc<dyn TimeSource> = clock.clone();
        clock.advance(5);
        assert_eq!(shared.now_millis(), 15);
    }
}
