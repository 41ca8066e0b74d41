//! CaptureSink for asserting on emitted lines

use std::io;
use std::sync::{Arc, Mutex};

use crate::sink::Sink;

/// A sink that keeps every line in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the logger
/// and keep another for assertions.
#[derive(Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
    /// Reject every write instead of recording it
    fail: bool,
}

impl CaptureSink {
    /// Create an empty capture sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink whose writes always fail with `BrokenPipe`
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get all captured lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Get output as a single string
    #[must_use]
    pub fn output_string(&self) -> String {
        self.lines().join("\n")
    }

    /// Number of captured lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if any captured line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    /// True if any captured line matches `pattern`. An invalid pattern
    /// matches nothing.
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        regex::Regex::new(pattern)
            .is_ok_and(|re| self.lines().iter().any(|line| re.is_match(line)))
    }

    /// # Panics
    ///
    /// Panics unless some captured line contains `needle`.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.contains(needle),
            "no captured line contains {needle:?}; captured:\n{}",
            self.output_string()
        );
    }

    /// # Panics
    ///
    /// Panics unless exactly `expected` lines were captured.
    pub fn assert_line_count(&self, expected: usize) {
        assert_eq!(
            self.len(),
            expected,
            "wrong number of captured lines; captured:\n{}",
            self.output_string()
        );
    }
}

impl Sink for CaptureSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "capture sink closed"));
        }
        self.lines
            .lock()
            .map_err(|_| io::Error::other("capture buffer poisoned"))?
            .push(line.to_string());
        Ok(())
    }
}

impl std::fmt::Debug for CaptureSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSink")
            .field("line_count", &self.len())
            .field("failing", &self.fail)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_lines() {
        let sink = CaptureSink::new();
        sink.write_line("Line 1").unwrap();
        sink.write_line("Line 2").unwrap();
        assert_eq!(sink.lines(), ["Line 1", "Line 2"]);
        assert_eq!(sink.output_string(), "Line 1\nLine 2");
    }

    #[test]
    fn test_contains_is_per_line() {
        let sink = CaptureSink::new();
        sink.write_line("+0ms app start").unwrap();
        sink.write_line("+3ms app ready").unwrap();
        assert!(sink.contains("app ready"));
        assert!(!sink.contains("App ready"));
        assert!(!sink.contains("start\n+3ms"));
    }

    #[test]
    fn test_matches_regex() {
        let sink = CaptureSink::new();
        sink.write_line("+15ms app:db query").unwrap();
        assert!(sink.matches(r"\+\d+ms app:db"));
        assert!(!sink.matches(r"\+\d+s app:db"));
        assert!(!sink.matches(r"(unclosed"));

        sink.write_line("+2s app:db done").unwrap();
        assert!(sink.matches(r"^\+\d+s app:db done$"));
    }

    #[test]
    fn test_clone_shares_buffer() {
        let sink = CaptureSink::new();
        let other = sink.clone();
        other.write_line("shared").unwrap();
        sink.assert_contains("shared");
        sink.assert_line_count(1);
    }

    #[test]
    fn test_failing_sink() {
        let sink = CaptureSink::failing();
        let err = sink.write_line("nope").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.is_empty());
    }
}
