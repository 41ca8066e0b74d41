//! Testing utilities for debuggy loggers
//!
//! Provides in-memory stand-ins for the three capabilities a logger is built
//! from, so tests can drive it without touching the process environment,
//! stdout, or the real clock:
//! - [`CaptureSink`] records every line written
//! - [`MemoryFlags`] is a toggleable flag map
//! - [`ManualClock`] is a frozen clock advanced by hand

mod capture_sink;
mod manual_clock;
mod memory_flags;

pub use capture_sink::CaptureSink;
pub use manual_clock::ManualClock;
pub use memory_flags::MemoryFlags;
