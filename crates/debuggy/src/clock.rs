//! Wall-clock source for emission timestamps.

use chrono::{DateTime, FixedOffset, Local};

/// Supplies the current time, in the offset log lines should be rendered in.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The system clock in the machine's local timezone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().into()
    }
}
