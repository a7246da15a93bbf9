//! Source of the current time for timestamps

use time::OffsetDateTime;

/// Provides the time stamped on each message
pub trait Clock: Send + Sync {
    /// Current time
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in the local offset
///
/// Falls back to UTC when the local offset cannot be determined, which the
/// `time` crate reports on multi-threaded Unix processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Clock that always returns the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
