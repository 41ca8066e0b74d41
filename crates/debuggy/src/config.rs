//! Logger configuration.
//!
//! [`LoggerOptions`] is the mutable builder a caller fills in;
//! [`create_logger`](crate::create_logger) freezes it into a [`LoggerConfig`]
//! that every handle of that logger shares read-only.

use std::sync::Arc;

use debuggy_core::Formatter;

use crate::clock::{Clock, SystemClock};
use crate::flags::{EnvFlags, FlagSource};
use crate::formatter::DefaultFormatter;
use crate::sink::{Sink, StderrSink, StdoutSink};

/// Flag consulted when no other name is configured.
pub const DEFAULT_FLAG_NAME: &str = "DEBUG";

/// Options accepted by [`create_logger`](crate::create_logger).
///
/// Every field is optional; anything left unset falls back to its default.
#[derive(Clone, Default)]
pub struct LoggerOptions {
    /// Name of the flag that switches the logger on (default `DEBUG`)
    pub flag_name: Option<String>,
    /// Custom formatter; replaces the built-in line formatter and its sink
    pub formatter: Option<Arc<dyn Formatter>>,
    /// Where flags are looked up (default: process environment)
    pub flag_source: Option<Arc<dyn FlagSource>>,
    /// Where the built-in formatter writes (default: stdout)
    pub sink: Option<Arc<dyn Sink>>,
    /// Timestamp source (default: system clock, local offset)
    pub clock: Option<Arc<dyn Clock>>,
}

impl LoggerOptions {
    /// Create options with all defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `DEBUGGY_FLAG` | flag name | Consult this flag instead of `DEBUG` |
    /// | `DEBUGGY_STDERR` | (non-empty) | Write lines to stderr instead of stdout |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_flags(&EnvFlags)
    }

    /// Same as [`from_env`](Self::from_env), reading from any flag source.
    #[must_use]
    pub fn from_flags(source: &dyn FlagSource) -> Self {
        let mut options = Self::default();

        if let Some(name) = source.lookup("DEBUGGY_FLAG").filter(|n| !n.is_empty()) {
            options.flag_name = Some(name);
        }
        if source.is_set("DEBUGGY_STDERR") {
            options.sink = Some(Arc::new(StderrSink));
        }

        options
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Set the flag name
    #[must_use]
    pub fn flag_name(mut self, name: impl Into<String>) -> Self {
        self.flag_name = Some(name.into());
        self
    }

    /// Use a custom formatter
    #[must_use]
    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Use a shared custom formatter
    #[must_use]
    pub fn shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Set the flag source
    #[must_use]
    pub fn flag_source(mut self, source: impl FlagSource + 'static) -> Self {
        self.flag_source = Some(Arc::new(source));
        self
    }

    /// Set the output sink of the built-in formatter
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Set the clock
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Freeze these options into a config.
    #[must_use]
    pub fn build(self) -> LoggerConfig {
        let custom_formatter = self.formatter.is_some();
        let formatter = self.formatter.unwrap_or_else(|| {
            let sink = self.sink.unwrap_or_else(|| Arc::new(StdoutSink));
            Arc::new(DefaultFormatter::new(sink))
        });

        LoggerConfig {
            flag_name: self.flag_name.unwrap_or_else(|| DEFAULT_FLAG_NAME.to_string()),
            formatter,
            custom_formatter,
            flag_source: self.flag_source.unwrap_or_else(|| Arc::new(EnvFlags)),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        }
    }
}

impl std::fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerOptions")
            .field("flag_name", &self.flag_name)
            .field("has_formatter", &self.formatter.is_some())
            .field("has_flag_source", &self.flag_source.is_some())
            .field("has_sink", &self.sink.is_some())
            .field("has_clock", &self.clock.is_some())
            .finish()
    }
}

/// Immutable configuration shared by every handle of one logger.
pub struct LoggerConfig {
    flag_name: String,
    formatter: Arc<dyn Formatter>,
    custom_formatter: bool,
    flag_source: Arc<dyn FlagSource>,
    clock: Arc<dyn Clock>,
}

impl LoggerConfig {
    /// Name of the flag this logger consults.
    #[must_use]
    pub fn flag_name(&self) -> &str {
        &self.flag_name
    }

    /// The formatter every emission goes through.
    #[must_use]
    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// True if a custom formatter replaced the built-in one.
    #[must_use]
    pub fn has_custom_formatter(&self) -> bool {
        self.custom_formatter
    }

    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Reads the flag now. Never cached.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flag_source.is_set(&self.flag_name)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerOptions::default().build()
    }
}

impl std::fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("flag_name", &self.flag_name)
            .field("custom_formatter", &self.custom_formatter)
            .finish_non_exhaustive()
    }
}
