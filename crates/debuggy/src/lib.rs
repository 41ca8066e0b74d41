//! Namespaced debug logging, silent unless a flag is set.
//!
//! A logger is a tree of [`Namespace`] handles. Every handle can derive a
//! child (`app` → `app:db`) and can emit on its own. Nothing is printed
//! unless the logger's flag (`DEBUG` by default) holds a non-empty value,
//! and the flag is re-read on every call, so toggling it takes effect
//! immediately.
//!
//! Each line carries a local ISO-8601 timestamp, the time since the
//! logger's previous line, the namespace, and a printf-style message:
//!
//! ```text
//! 2024-05-01T09:14:03.512+02:00 +15ms app:db query took 12ms
//! ```
//!
//! # Example
//!
//! ```ignore
//! use debuggy::{Namespace, debug};
//!
//! let log = Namespace::root().child("app");
//! let db = log.child("db");
//!
//! // Prints only when DEBUG is set
//! debug!(db, "query took %dms", 12)?;
//! ```
//!
//! The flag source, output sink, clock and formatter are all replaceable
//! through [`LoggerOptions`]; [`testing`] has in-memory versions of each.

#![forbid(unsafe_code)]

pub mod bridge;
pub mod clock;
pub mod config;
mod emitter;
pub mod flags;
mod formatter;
mod macros;
mod namespace;
pub mod sink;
pub mod testing;

pub use bridge::{DebuggyLog, DebuggyLogBuilder};
pub use clock::{Clock, SystemClock};
pub use config::{DEFAULT_FLAG_NAME, LoggerConfig, LoggerOptions};
pub use emitter::EmissionState;
pub use flags::{EnvFlags, FlagSource};
pub use formatter::DefaultFormatter;
pub use namespace::{Namespace, SEPARATOR, create_logger};
pub use sink::{Sink, StderrSink, StdoutSink, WriterSink};

pub use debuggy_core::{
    DebugError, DebugResult, EmissionRecord, Formatter, Helpers, Value, delay, iso_date,
    render_message, short_duration,
};

#[doc(hidden)]
pub mod __private {
    use debuggy_core::{DebugResult, Value};

    pub fn value<T: serde::Serialize + ?Sized>(value: &T) -> DebugResult<Value> {
        Ok(serde_json::to_value(value)?)
    }

    pub fn args(args: Vec<DebugResult<Value>>) -> DebugResult<Vec<Value>> {
        args.into_iter().collect()
    }
}
