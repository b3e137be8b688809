use std::fmt;
use std::io::{self, Write};
use std::mem;
use std::sync::{Mutex, MutexGuard};

use super::LineSink;

/// Sink that owns an arbitrary [`Write`] implementor.
///
/// The writer lives behind a mutex so the sink can be shared between loggers
/// and threads through an `Arc`. Each [`write_line`](LineSink::write_line)
/// holds the lock for exactly one `write_all`.
///
/// # Examples
///
/// Collect output into a [`Vec<u8>`] and read it back:
///
/// ```
/// use logging_sink::{LineSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line("hello")?;
/// assert_eq!(sink.take(), "hello");
/// assert!(sink.contents().is_empty());
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Recover the writer once logging is finished:
///
/// ```
/// use logging_sink::{LineSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line("done\n")?;
/// assert_eq!(sink.into_inner(), b"done\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W> WriterSink<W> {
    /// Wraps `writer` in a new sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Runs `op` with exclusive access to the underlying writer.
    pub fn with_writer<R>(&self, op: impl FnOnce(&mut W) -> R) -> R {
        op(&mut self.lock())
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poison| poison.into_inner())
    }

    fn lock(&self) -> MutexGuard<'_, W> {
        self.writer
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl WriterSink<Vec<u8>> {
    /// Returns everything written so far, decoded lossily as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Returns everything written so far and clears the buffer.
    #[must_use]
    pub fn take(&self) -> String {
        let buffer = mem::take(&mut *self.lock());
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Returns the buffered output split into lines without terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written since creation or the last
    /// [`take`](Self::take).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<W> Default for WriterSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for WriterSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriterSink")
            .field("writer", &*self.lock())
            .finish()
    }
}

impl<W> LineSink for WriterSink<W>
where
    W: Write + Send,
{
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lock().write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.lock().flush()
    }
}
