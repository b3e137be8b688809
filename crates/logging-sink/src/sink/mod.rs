use std::io;
use std::sync::Arc;

mod stdout;
mod writer;

pub use stdout::StdoutSink;
pub use writer::WriterSink;

/// Destination for fully composed log lines.
///
/// Implementations must deliver `line` to their stream as one contiguous
/// write. A logger calls [`write_line`](Self::write_line) at most once per log
/// invocation and never with a partial line.
pub trait LineSink: Send + Sync {
    /// Writes one composed line, exactly as given.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flushes any buffered output.
    ///
    /// The default implementation does nothing, which is correct for sinks
    /// that flush on every write.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<S> LineSink for Arc<S>
where
    S: LineSink + ?Sized,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S> LineSink for &S
where
    S: LineSink + ?Sized,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
