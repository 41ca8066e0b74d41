//! Internal diagnostics for debuggy.
//!
//! debuggy reports on itself through the standard [`log`] facade, never
//! through its own namespaces. It does not install a log implementation;
//! applications pick their own backend.
//!
//! # Log Targets
//!
//! - `debuggy`: Root target for all debuggy diagnostics
//! - `debuggy::engine`: Lazy engine instantiation
//! - `debuggy::sink`: Output sink failures
//! - `debuggy::bridge`: The `log` facade bridge
//!
//! Example filter: `RUST_LOG=debuggy::engine=trace`

// Re-export log macros for ergonomic use
pub use log::{debug, error, info, trace, warn};

// Re-export log level types for programmatic use
pub use log::{Level, LevelFilter};

/// Log targets used by debuggy components.
pub mod targets {
    /// Root target for all debuggy diagnostics.
    pub const DEBUGGY: &str = "debuggy";

    /// Lazy engine instantiation.
    pub const ENGINE: &str = "debuggy::engine";

    /// Output sink failures.
    pub const SINK: &str = "debuggy::sink";

    /// Records forwarded from the `log` facade.
    pub const BRIDGE: &str = "debuggy::bridge";
}

/// Returns true if the target belongs to debuggy itself.
///
/// The `log` bridge uses this to drop its own diagnostics instead of feeding
/// them back into a namespace.
#[inline]
#[must_use]
pub fn is_internal_target(target: &str) -> bool {
    target == targets::DEBUGGY
        || target
            .strip_prefix(targets::DEBUGGY)
            .is_some_and(|rest| rest.starts_with("::"))
}
