//! The `debug!` convenience macro.

/// Emits on a [`Namespace`](crate::Namespace) with mixed-type arguments.
///
/// Each argument may be anything `serde::Serialize`; it is converted to a
/// JSON value before reaching the formatter. Arguments are only evaluated
/// while the flag is set. Returns the [`DebugResult`](crate::DebugResult) of
/// the emission, or [`DebugError::Serialize`](crate::DebugError::Serialize)
/// if an argument cannot be converted; nothing is emitted in that case.
///
/// ```
/// use debuggy::{create_logger, debug, LoggerOptions};
/// use debuggy::testing::{CaptureSink, MemoryFlags};
///
/// let sink = CaptureSink::new();
/// let db = create_logger(
///     LoggerOptions::new()
///         .flag_source(MemoryFlags::new().with("DEBUG", "1"))
///         .sink(sink.clone()),
/// )
/// .child("db");
///
/// debug!(db, "query took %dms", 12).unwrap();
/// assert!(sink.contains("db query took 12ms"));
/// ```
#[macro_export]
macro_rules! debug {
    ($ns:expr $(, $arg:expr)* $(,)?) => {{
        let ns = &$ns;
        if ns.is_enabled() {
            match $crate::__private::args(::std::vec![
                $($crate::__private::value(&$arg)),*
            ]) {
                ::std::result::Result::Ok(args) => ns.debug(args),
                ::std::result::Result::Err(err) => ::std::result::Result::Err(err),
            }
        } else {
            ::std::result::Result::Ok(())
        }
    }};
}
