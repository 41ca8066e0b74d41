//! The emission record and the formatter contract.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::error::DebugResult;
use crate::message::render_message;

/// Everything a formatter learns about one emission.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRecord {
    /// Full colon-joined namespace; empty when the handle has none.
    pub namespace: String,
    /// Arguments exactly as passed to `debug`, not yet interpolated.
    pub args: Vec<Value>,
    /// Wall-clock time of the emission, in the clock's local offset.
    pub timestamp: DateTime<FixedOffset>,
    /// Milliseconds since the previous emission from the same logger.
    pub delay_millis: u64,
}

impl EmissionRecord {
    /// Renders the arguments with printf-style interpolation.
    #[must_use]
    pub fn message(&self) -> String {
        render_message(&self.args)
    }
}

/// Rendering helpers handed to every formatter call.
///
/// A custom formatter can reuse the built-in timestamp and delay renderers
/// through this instead of reimplementing them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Helpers;

impl Helpers {
    /// See [`crate::iso_date`].
    #[must_use]
    pub fn iso_date(&self, date: &DateTime<FixedOffset>) -> String {
        crate::format::iso_date(date)
    }

    /// See [`crate::delay`].
    #[must_use]
    pub fn delay(&self, ms: u64) -> String {
        crate::format::delay(ms)
    }
}

/// Turns an [`EmissionRecord`] into output.
///
/// A formatter owns delivery: the emitter never writes anything itself once a
/// formatter is configured. Any `Fn(&EmissionRecord, &Helpers) -> DebugResult`
/// closure is a formatter.
///
/// ```
/// use debuggy_core::{DebugResult, EmissionRecord, Formatter, Helpers};
///
/// struct Silent;
///
/// impl Formatter for Silent {
///     fn format(&self, _record: &EmissionRecord, _helpers: &Helpers) -> DebugResult {
///         Ok(())
///     }
/// }
/// ```
pub trait Formatter: Send + Sync {
    /// Formats and delivers one emission.
    fn format(&self, record: &EmissionRecord, helpers: &Helpers) -> DebugResult;
}

impl<F> Formatter for F
where
    F: Fn(&EmissionRecord, &Helpers) -> DebugResult + Send + Sync,
{
    fn format(&self, record: &EmissionRecord, helpers: &Helpers) -> DebugResult {
        self(record, helpers)
    }
}
