//! Frozen clock for deterministic timestamps

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Offset, TimeDelta, Utc};

use crate::clock::Clock;

/// A clock that only moves when told to.
///
/// Clones share the same reading, so a test keeps one clone to advance time
/// while the logger reads from another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl ManualClock {
    /// Start the clock at `start`.
    #[must_use]
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Start at `millis` after the Unix epoch, rendered `offset_secs` east of
    /// UTC. Out-of-range values fall back to the epoch and to UTC.
    #[must_use]
    pub fn from_millis(millis: i64, offset_secs: i32) -> Self {
        let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());
        let instant = DateTime::from_timestamp_millis(millis).unwrap_or_default();
        Self::new(instant.with_timezone(&offset))
    }

    /// Move the clock forward (or back, for negative values).
    pub fn advance_millis(&self, millis: i64) {
        self.update(|now| now.checked_add_signed(TimeDelta::milliseconds(millis)));
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        if let Ok(delta) = TimeDelta::from_std(by) {
            self.update(|now| now.checked_add_signed(delta));
        }
    }

    /// Jump to an exact reading.
    pub fn set(&self, to: DateTime<FixedOffset>) {
        self.update(|_| Some(to));
    }

    /// Keep the instant, change the offset it is rendered in.
    pub fn set_offset(&self, offset_secs: i32) {
        if let Some(offset) = FixedOffset::east_opt(offset_secs) {
            self.update(|now| Some(now.with_timezone(&offset)));
        }
    }

    fn update(&self, f: impl FnOnce(DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>>) {
        if let Ok(mut current) = self.current.lock() {
            if let Some(next) = f(*current) {
                *current = next;
            }
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.current.lock() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
