//! The built-in line formatter.

use std::sync::Arc;

use debuggy_core::logging::{targets, warn};
use debuggy_core::{DebugError, DebugResult, EmissionRecord, Formatter, Helpers};

use crate::sink::Sink;

/// Writes `<isoDate> <delay> <namespace> <message>` to a sink, one line per
/// emission. The namespace column and its trailing space are dropped when
/// the namespace is empty.
pub struct DefaultFormatter {
    sink: Arc<dyn Sink>,
}

impl DefaultFormatter {
    #[must_use]
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    /// Renders the line without writing it.
    #[must_use]
    pub fn format_line(record: &EmissionRecord, helpers: &Helpers) -> String {
        let mut line = format!(
            "{} {} ",
            helpers.iso_date(&record.timestamp),
            helpers.delay(record.delay_millis)
        );
        if !record.namespace.is_empty() {
            line.push_str(&record.namespace);
            line.push(' ');
        }
        line.push_str(&record.message());
        line
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, record: &EmissionRecord, helpers: &Helpers) -> DebugResult {
        let line = Self::format_line(record, helpers);
        self.sink.write_line(&line).map_err(|err| {
            warn!(target: targets::SINK, "failed to write debug line: {}", err);
            DebugError::Sink(err)
        })
    }
}

impl std::fmt::Debug for DefaultFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultFormatter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CaptureSink;
    use chrono::{FixedOffset, TimeZone};
    use debuggy_core::Value;

    fn record(namespace: &str, args: Vec<Value>, delay_millis: u64) -> EmissionRecord {
        EmissionRecord {
            namespace: namespace.to_string(),
            args,
            timestamp: FixedOffset::east_opt(-5 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 12, 31, 23, 59, 58)
                .unwrap(),
            delay_millis,
        }
    }

    #[test]
    fn line_with_namespace() {
        let record = record("foo", vec!["bar".into()], 0);
        let line = DefaultFormatter::format_line(&record, &Helpers);
        assert_eq!(line, "2024-12-31T23:59:58.000-05:00 +0ms foo bar");
    }

    #[test]
    fn line_without_namespace_has_no_extra_space() {
        let record = record("", vec!["bar".into()], 61_000);
        let line = DefaultFormatter::format_line(&record, &Helpers);
        assert_eq!(line, "2024-12-31T23:59:58.000-05:00 +1m bar");
    }

    #[test]
    fn line_interpolates_message() {
        let args = vec!["%s=%d".into(), "count".into(), 7.into(), "extra".into()];
        let line = DefaultFormatter::format_line(&record("a:b", args, 1500), &Helpers);
        assert_eq!(line, "2024-12-31T23:59:58.000-05:00 +2s a:b count=7 extra");
    }

    #[test]
    fn format_writes_one_line_to_sink() {
        let sink = CaptureSink::new();
        let formatter = DefaultFormatter::new(Arc::new(sink.clone()));

        formatter.format(&record("ns", vec!["hello".into()], 5), &Helpers).unwrap();

        sink.assert_line_count(1);
        assert_eq!(sink.lines()[0], "2024-12-31T23:59:58.000-05:00 +5ms ns hello");
    }

    #[test]
    fn format_reports_sink_failure() {
        let formatter = DefaultFormatter::new(Arc::new(CaptureSink::failing()));
        let err = formatter
            .format(&record("ns", vec!["lost".into()], 0), &Helpers)
            .unwrap_err();
        assert!(matches!(err, DebugError::Sink(_)));
    }
}
