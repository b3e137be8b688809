use std::io::{self, Write};

use super::LineSink;

/// Sink that writes every line to the process's standard output.
///
/// The stdout handle is locked for the duration of one line so the line
/// reaches the stream in a single `write_all`. Lines from different threads
/// may interleave with each other but never within a line.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StdoutSink;

impl StdoutSink {
    /// Creates a new stdout sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LineSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        // `std::endl` semantics: a newline-terminated line is visible immediately.
        if line.ends_with('\n') {
            out.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdout_sink_accepts_lines() {
        let sink = StdoutSink::new();
        sink.write_line("").expect("empty write succeeds");
        sink.flush().expect("flush succeeds");
    }

    #[test]
    fn stdout_sink_is_default() {
        assert_eq!(StdoutSink::default(), StdoutSink::new());
    }
}
