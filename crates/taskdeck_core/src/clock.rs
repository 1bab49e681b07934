//! Time source for task creation timestamps.
//!
//! # Responsibility
//! - Decouple `created_at` stamping from the wall clock.
//!
//! # Invariants
//! - A clock is read once per created task; stored timestamps never change.

use chrono::{DateTime, Utc};

/// Source of "now" for the task manager.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Used for deterministic replays and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Fixed clock at `epoch_ms` Unix milliseconds, or the epoch if out of range.
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self::new(DateTime::from_timestamp_millis(epoch_ms).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
