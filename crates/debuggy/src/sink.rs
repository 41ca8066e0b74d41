//! Output sinks for the default formatter.

use std::io::{self, Write};
use std::sync::Mutex;

/// Destination for fully formatted log lines.
pub trait Sink: Send + Sync {
    /// Writes one line. The sink adds the line terminator.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes lines to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}

/// Writes lines to standard error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{line}")
    }
}

/// Writes lines to any [`Write`] implementation, one flush per line.
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.inner
            .into_inner()
            .map_err(|_| io::Error::other("writer lock poisoned"))
    }
}

impl<W> std::fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSink").finish_non_exhaustive()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("writer lock poisoned"))?;
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_appends_newlines() {
        let sink = WriterSink::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        let bytes = sink.into_inner().unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn writer_sink_writes_to_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let sink = WriterSink::new(file.reopen().unwrap());
        sink.write_line("to disk").unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "to disk\n");
    }

    #[test]
    fn writer_sink_propagates_write_errors() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = WriterSink::new(Broken).write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn writer_sink_debug() {
        let sink = WriterSink::new(Vec::<u8>::new());
        assert!(format!("{:?}", sink).contains("WriterSink"));
    }
}
