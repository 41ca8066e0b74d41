//! Core types and rendering helpers for debuggy.
//!
//! This crate provides the pieces every debuggy emission passes through:
//! - [`EmissionRecord`], the value handed to a formatter for one emission
//! - the [`Formatter`] contract and its [`Helpers`] capability set
//! - timestamp and delay rendering ([`iso_date`], [`delay`], [`short_duration`])
//! - printf-style message interpolation ([`render_message`])
//! - the [`DebugError`] type
//!
//! The namespace tree, emitter and output sinks live in the `debuggy` crate.

#![forbid(unsafe_code)]

mod error;
mod format;
pub mod logging;
mod message;
mod record;

pub use error::{DebugError, DebugResult};
pub use format::{delay, iso_date, short_duration};
pub use message::{inspect, render_message};
pub use record::{EmissionRecord, Formatter, Helpers};

// Message arguments are plain JSON values
pub use serde_json::Value;
