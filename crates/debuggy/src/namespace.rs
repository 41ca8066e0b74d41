//! The namespace tree.
//!
//! A [`Namespace`] is one node of a logger's tree. Every node can be extended
//! into a child node and can emit on its own; nodes are values, so extending
//! never changes the handle it starts from.
//!
//! # Path rules
//!
//! A node either has a namespace or it does not. The root has none.
//!
//! | Parent | Name | Child |
//! |--------|------|-------|
//! | none | absent | none |
//! | none | `"x"` (even `""`) | `"x"` |
//! | `"p"` | absent | `"p:"` |
//! | `"p"` | `"x"` | `"p:x"` |
//!
//! So `root.child("").child("")` is `":"`, while `root.extend(None)` is still
//! the root namespace.

use std::sync::Arc;

use debuggy_core::{DebugResult, Value};

use crate::config::{LoggerConfig, LoggerOptions};
use crate::emitter::{self, EmissionState};

/// Separator between namespace segments.
pub const SEPARATOR: char = ':';

// One per logger; every handle of the logger points at it.
struct Shared {
    config: LoggerConfig,
    state: EmissionState,
}

/// Creates an independent logger and returns its root handle.
///
/// Loggers never share state: each call gets its own config and its own
/// delay timer.
///
/// ```
/// use debuggy::{create_logger, LoggerOptions};
/// use debuggy::testing::{CaptureSink, MemoryFlags};
///
/// let sink = CaptureSink::new();
/// let root = create_logger(
///     LoggerOptions::new()
///         .flag_source(MemoryFlags::new().with("DEBUG", "1"))
///         .sink(sink.clone()),
/// );
///
/// root.child("http").debug(["listening on %d", "8080"]).unwrap();
/// assert!(sink.contains("http listening on 8080"));
/// ```
#[must_use]
pub fn create_logger(options: LoggerOptions) -> Namespace {
    Namespace {
        path: None,
        shared: Arc::new(Shared {
            config: options.build(),
            state: EmissionState::new(),
        }),
    }
}

/// A handle on one node of a logger's namespace tree.
///
/// Cloning is cheap and clones share the logger.
#[derive(Clone)]
pub struct Namespace {
    path: Option<Arc<str>>,
    shared: Arc<Shared>,
}

impl Namespace {
    /// A fresh logger with default options: flag `DEBUG` from the
    /// environment, lines on stdout.
    #[must_use]
    pub fn root() -> Self {
        create_logger(LoggerOptions::default())
    }

    /// Derives a child node. See the module docs for how absent and empty
    /// names are joined.
    #[must_use]
    pub fn extend(&self, name: Option<&str>) -> Namespace {
        let path = match (&self.path, name) {
            (None, None) => None,
            (None, Some(name)) => Some(Arc::from(name)),
            (Some(parent), name) => {
                let name = name.unwrap_or_default();
                let mut path = String::with_capacity(parent.len() + 1 + name.len());
                path.push_str(parent);
                path.push(SEPARATOR);
                path.push_str(name);
                Some(Arc::from(path))
            }
        };

        Namespace {
            path,
            shared: Arc::clone(&self.shared),
        }
    }

    /// Derives a named child node.
    #[must_use]
    pub fn child(&self, name: &str) -> Namespace {
        self.extend(Some(name))
    }

    /// Full namespace of this node; empty when it has none.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }

    /// False for the root and for nodes derived from it with absent names.
    #[must_use]
    pub fn has_namespace(&self) -> bool {
        self.path.is_some()
    }

    /// Reads the logger's flag now.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.shared.config.is_enabled()
    }

    /// Emits one debug message for this node.
    ///
    /// A no-op while the flag is unset. Otherwise the arguments reach the
    /// formatter un-interpolated; the built-in formatter renders them
    /// printf-style. Formatter and sink errors are returned as-is.
    pub fn debug<I, V>(&self, args: I) -> DebugResult
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        emitter::emit(
            &self.shared.config,
            &self.shared.state,
            self.path(),
            args.into_iter().map(Into::into),
        )
    }

    /// The configuration shared by this logger's handles.
    #[must_use]
    pub fn config(&self) -> &LoggerConfig {
        &self.shared.config
    }

    /// The delay state shared by this logger's handles.
    #[must_use]
    pub fn state(&self) -> &EmissionState {
        &self.shared.state
    }

    /// True if both handles belong to the same logger.
    #[must_use]
    pub fn same_logger(&self, other: &Namespace) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl std::fmt::Debug for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Namespace")
            .field("path", &self.path)
            .field("config", &self.shared.config)
            .finish()
    }
}
