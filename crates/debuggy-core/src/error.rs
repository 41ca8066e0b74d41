//! Error types for emissions.

use std::io;

/// Result type returned by formatters and the emit path.
pub type DebugResult<T = ()> = Result<T, DebugError>;

/// Failure raised while delivering one emission.
///
/// The emitter never swallows these: whatever the formatter returns is handed
/// back to the caller of `debug` unchanged.
#[derive(Debug)]
pub enum DebugError {
    /// The output sink rejected a line.
    Sink(io::Error),
    /// A custom formatter failed.
    Formatter(Box<dyn std::error::Error + Send + Sync>),
    /// An argument could not be converted to a JSON value.
    Serialize(serde_json::Error),
}

impl DebugError {
    /// Wraps an arbitrary error raised by a custom formatter.
    pub fn formatter<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        DebugError::Formatter(err.into())
    }
}

impl std::fmt::Display for DebugError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebugError::Sink(e) => write!(f, "sink error: {e}"),
            DebugError::Formatter(e) => write!(f, "formatter error: {e}"),
            DebugError::Serialize(e) => write!(f, "serialize error: {e}"),
        }
    }
}

impl std::error::Error for DebugError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DebugError::Sink(e) => Some(e),
            DebugError::Formatter(e) => Some(e.as_ref()),
            DebugError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for DebugError {
    fn from(err: io::Error) -> Self {
        DebugError::Sink(err)
    }
}

impl From<serde_json::Error> for DebugError {
    fn from(err: serde_json::Error) -> Self {
        DebugError::Serialize(err)
    }
}
