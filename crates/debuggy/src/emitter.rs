//! Emission: enablement check, delay bookkeeping and formatter dispatch.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicI64, Ordering};

use debuggy_core::logging::{targets, trace};
use debuggy_core::{DebugResult, EmissionRecord, Helpers, Value};

use crate::config::LoggerConfig;

// No emission recorded yet.
const NEVER: i64 = i64::MIN;

/// Timing state backing one logger.
struct Engine {
    last_emission_millis: AtomicI64,
}

impl Engine {
    fn new() -> Self {
        Self {
            last_emission_millis: AtomicI64::new(NEVER),
        }
    }
}

/// Per-logger mutable state, shared by every handle of that logger.
///
/// The engine behind it is created on the first enabled emission and then
/// reused for the lifetime of the logger; it is never reset.
#[derive(Default)]
pub struct EmissionState {
    engine: OnceLock<Engine>,
}

impl EmissionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True once an enabled emission has happened.
    #[must_use]
    pub fn is_instantiated(&self) -> bool {
        self.engine.get().is_some()
    }

    /// Epoch milliseconds of the most recent emission, if any.
    #[must_use]
    pub fn last_emission_millis(&self) -> Option<i64> {
        self.engine
            .get()
            .map(|engine| engine.last_emission_millis.load(Ordering::SeqCst))
            .filter(|&millis| millis != NEVER)
    }

    fn engine(&self) -> &Engine {
        if let Some(engine) = self.engine.get() {
            return engine;
        }

        let mut created = false;
        let engine = self.engine.get_or_init(|| {
            created = true;
            Engine::new()
        });
        if created {
            trace!(target: targets::ENGINE, "emission engine instantiated");
        }
        engine
    }

    /// Records an emission at `now_millis` and returns the delay since the
    /// previous one: zero for the first emission or if the clock went back.
    fn advance(&self, now_millis: i64) -> u64 {
        let previous = self
            .engine()
            .last_emission_millis
            .swap(now_millis, Ordering::SeqCst);
        if previous == NEVER {
            return 0;
        }
        u64::try_from(now_millis.saturating_sub(previous)).unwrap_or(0)
    }
}

impl std::fmt::Debug for EmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmissionState")
            .field("instantiated", &self.is_instantiated())
            .field("last_emission_millis", &self.last_emission_millis())
            .finish()
    }
}

/// Emits one message for `namespace` if the logger's flag is set.
///
/// Delay state is updated before the formatter runs, so a failing formatter
/// still advances the timer. Formatter errors are returned unchanged.
pub(crate) fn emit<I>(
    config: &LoggerConfig,
    state: &EmissionState,
    namespace: &str,
    args: I,
) -> DebugResult
where
    I: IntoIterator<Item = Value>,
{
    if !config.is_enabled() {
        return Ok(());
    }

    let timestamp = config.clock().now();
    let delay_millis = state.advance(timestamp.timestamp_millis());

    let record = EmissionRecord {
        namespace: namespace.to_string(),
        args: args.into_iter().collect(),
        timestamp,
        delay_millis,
    };

    config.formatter().format(&record, &Helpers)
}
