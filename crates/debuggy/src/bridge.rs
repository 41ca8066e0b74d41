//! Bridge from the `log` facade into a debuggy namespace tree.
//!
//! Installing [`DebuggyLog`] routes `log::debug!` and friends through a
//! debuggy logger: the record target becomes the namespace (`::` turns into
//! `:`), and the already-rendered message is printed verbatim. Records only
//! pass while the logger's flag is set.
//!
//! ```ignore
//! use debuggy::bridge::DebuggyLogBuilder;
//! use log::LevelFilter;
//!
//! DebuggyLogBuilder::new()
//!     .level(LevelFilter::Debug)
//!     .prefix("app")
//!     .init()
//!     .expect("logger already set");
//!
//! // DEBUG=1 prints "<date> +0ms app:my_crate:db connected"
//! log::debug!(target: "my_crate::db", "connected");
//! ```

use log::{LevelFilter, Log, Metadata, Record};

use debuggy_core::logging::{is_internal_target, targets, warn};

use crate::config::LoggerOptions;
use crate::namespace::{Namespace, create_logger};

/// `log` implementation that forwards records into a namespace tree.
#[derive(Debug, Clone)]
pub struct DebuggyLog {
    root: Namespace,
    level: LevelFilter,
}

impl DebuggyLog {
    /// Forward records under `root`, at every level.
    #[must_use]
    pub fn new(root: Namespace) -> Self {
        Self {
            root,
            level: LevelFilter::Trace,
        }
    }

    /// Create a logger using the builder pattern.
    #[must_use]
    pub fn builder() -> DebuggyLogBuilder {
        DebuggyLogBuilder::new()
    }

    /// The namespace a record with this target is emitted under.
    #[must_use]
    pub fn namespace_for(&self, target: &str) -> Namespace {
        target
            .split("::")
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |ns, segment| ns.child(segment))
    }

    /// Install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for DebuggyLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && !is_internal_target(metadata.target())
            && self.root.is_enabled()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Already rendered; "%s" keeps any '%' in it from being read as a directive
        let args = ["%s".to_string(), record.args().to_string()];
        // log::Log has no error channel
        if let Err(err) = self.namespace_for(record.target()).debug(args) {
            warn!(
                target: targets::BRIDGE,
                "dropped record from {}: {}",
                record.target(),
                err
            );
        }
    }

    fn flush(&self) {}
}

/// Builder for configuring the `log` bridge.
#[derive(Debug)]
pub struct DebuggyLogBuilder {
    options: LoggerOptions,
    level: LevelFilter,
    prefix: Option<String>,
}

impl Default for DebuggyLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DebuggyLogBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            level: LevelFilter::Trace,
            prefix: None,
        }
    }

    /// Set the options of the underlying debuggy logger.
    #[must_use]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the most verbose level forwarded.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Put every forwarded namespace under this prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Build the logger without installing it.
    #[must_use]
    pub fn build(self) -> DebuggyLog {
        let root = create_logger(self.options);
        let root = match &self.prefix {
            Some(prefix) => root.child(prefix),
            None => root,
        };

        DebuggyLog {
            root,
            level: self.level,
        }
    }

    /// Build and install as the global logger.
    ///
    /// Returns an error if a logger has already been set.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        self.build().init()
    }

    /// Build and install, ignoring errors if already set.
    pub fn try_init(self) {
        let _ = self.init();
    }
}
