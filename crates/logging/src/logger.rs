//! crates/logging/src/logger.rs
//! The `Logger` type: per-instance flags over shared filter tables.

use std::fmt;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use logging_sink::{LineSink, StdoutSink};

use crate::flags::{Flag, Flags};
use crate::format::{write_body, write_prefix, write_suffix};
use crate::guard::FlagGuard;
use crate::levels::Severity;
use crate::registry::FilterRegistry;

/// Key addressed by [`Logger::set_filter`] and [`Logger::clear_filter`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// An entry of the severity table.
    Severity(Severity),
    /// An entry of the tag table.
    Tag(String),
}

impl From<Severity> for FilterKey {
    fn from(severity: Severity) -> Self {
        Self::Severity(severity)
    }
}

impl From<&str> for FilterKey {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_owned())
    }
}

impl From<String> for FilterKey {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<&String> for FilterKey {
    fn from(tag: &String) -> Self {
        Self::Tag(tag.clone())
    }
}

/// A tagged logger.
///
/// Each logger owns its tag and its [`Flags`]; the severity and tag filter
/// tables live in a [`FilterRegistry`] shared with every other logger bound to
/// the same registry. Creating a logger registers its tag in that registry
/// without disturbing an existing mark.
///
/// Flags are stored atomically, so a logger shared between threads (such as
/// the default instance) can be reconfigured through `&self`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use logging::{Flag, FilterRegistry, Logger, Severity};
/// use logging_sink::WriterSink;
///
/// let sink = Arc::new(WriterSink::new(Vec::new()));
/// let logger = Logger::builder("X")
///     .flags(Flag::SeverityLabels | Flag::Tag | Flag::Whitespace)
///     .registry(Arc::new(FilterRegistry::new()))
///     .sink(Arc::clone(&sink))
///     .build();
///
/// logger.warning(&[&"hi"]);
/// assert_eq!(sink.take(), "[Warning][X]    hi");
///
/// logger.set_filter(Severity::Warning);
/// logger.warning(&[&"still shown"]);
/// assert_eq!(sink.take(), "[Warning][X]    still shown");
///
/// logger.set_flag(Flag::SeverityFilter);
/// logger.warning(&[&"hidden"]);
/// assert!(sink.is_empty());
/// ```
pub struct Logger {
    tag: String,
    flags: AtomicU32,
    registry: Arc<FilterRegistry>,
    sink: Arc<dyn LineSink>,
}

impl Logger {
    /// Creates a logger on the process-wide registry that writes to stdout.
    pub fn new(tag: impl Into<String>, flags: Flags) -> Self {
        Self::builder(tag).flags(flags).build()
    }

    /// Starts building a logger with [`Flags::DEFAULTS`].
    pub fn builder(tag: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(tag)
    }

    /// The logger's tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The registry whose tables this logger reads and writes.
    #[must_use]
    pub fn registry(&self) -> &Arc<FilterRegistry> {
        &self.registry
    }

    /// The current flag set.
    #[must_use]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_retain(self.flags.load(Ordering::Relaxed))
    }

    /// Reports whether every bit of `flag` is set.
    #[must_use]
    pub fn is_flag_set(&self, flag: impl Into<Flags>) -> bool {
        self.flags().contains(flag)
    }

    /// Sets `flag` on this instance only.
    pub fn set_flag(&self, flag: impl Into<Flags>) {
        self.flags.fetch_or(flag.into().bits(), Ordering::Relaxed);
    }

    /// Clears `flag` on this instance only.
    pub fn clear_flag(&self, flag: impl Into<Flags>) {
        self.flags.fetch_and(!flag.into().bits(), Ordering::Relaxed);
    }

    /// Replaces the whole flag set, returning the previous one.
    pub fn replace_flags(&self, flags: Flags) -> Flags {
        Flags::from_bits_retain(self.flags.swap(flags.bits(), Ordering::Relaxed))
    }

    /// Sets `set` and clears `clear` until the returned guard is dropped.
    ///
    /// ```
    /// use logging::{Flag, Flags, Logger};
    ///
    /// let logger = Logger::new("scoped", Flags::DEFAULTS);
    /// {
    ///     let _plain = logger.scoped_flags(Flags::NONE, Flag::Colors | Flag::Timestamps);
    ///     assert!(!logger.is_flag_set(Flag::Colors));
    /// }
    /// assert_eq!(logger.flags(), Flags::DEFAULTS);
    /// ```
    pub fn scoped_flags(&self, set: impl Into<Flags>, clear: impl Into<Flags>) -> FlagGuard<'_> {
        let (set, clear): (Flags, Flags) = (set.into(), clear.into());
        let previous = self
            .flags
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some(Flags::from_bits_retain(bits).with(set).without(clear).bits())
            })
            .unwrap_or_else(|bits| bits);
        FlagGuard::new(self, Flags::from_bits_retain(previous))
    }

    /// Marks a severity or tag in the shared registry.
    pub fn set_filter(&self, key: impl Into<FilterKey>) {
        match key.into() {
            FilterKey::Severity(severity) => self.registry.set_severity(severity),
            FilterKey::Tag(tag) => self.registry.set_tag(&tag),
        }
    }

    /// Unmarks a severity or tag in the shared registry.
    pub fn clear_filter(&self, key: impl Into<FilterKey>) {
        match key.into() {
            FilterKey::Severity(severity) => self.registry.clear_severity(severity),
            FilterKey::Tag(tag) => self.registry.clear_tag(&tag),
        }
    }

    /// Reports whether a line at `severity` would currently be dropped.
    ///
    /// Each enabled filter suppresses when the whitelist flag differs from the
    /// table's mark; the line is dropped if either filter suppresses it.
    #[must_use]
    pub fn is_suppressed(&self, severity: Severity) -> bool {
        self.suppressed_under(self.flags(), severity)
    }

    /// Builds the fully decorated line for `values` without writing it.
    #[must_use]
    pub fn compose(&self, severity: Severity, values: &[&dyn fmt::Display]) -> String {
        self.compose_under(self.flags(), severity, values)
    }

    /// Logs `values` at `severity`, reporting the sink's write error.
    ///
    /// Returns `Ok(false)` when the line was suppressed by a filter and
    /// `Ok(true)` once it has been handed to the sink.
    pub fn try_log(&self, severity: Severity, values: &[&dyn fmt::Display]) -> io::Result<bool> {
        let flags = self.flags();
        if self.suppressed_under(flags, severity) {
            return Ok(false);
        }
        let line = self.compose_under(flags, severity, values);
        self.sink.write_line(&line)?;
        Ok(true)
    }

    /// Logs `values` at `severity`. Write failures are ignored.
    pub fn log(&self, severity: Severity, values: &[&dyn fmt::Display]) {
        let _ = self.try_log(severity, values);
    }

    /// Logs pre-formatted arguments, as produced by [`format_args!`].
    pub fn log_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.log(severity, &[&args]);
    }

    /// Logs at [`Severity::Trace`].
    pub fn trace(&self, values: &[&dyn fmt::Display]) {
        self.log(Severity::Trace, values);
    }

    /// Logs at [`Severity::Debug`].
    pub fn debug(&self, values: &[&dyn fmt::Display]) {
        self.log(Severity::Debug, values);
    }

    /// Logs at [`Severity::Info`].
    pub fn info(&self, values: &[&dyn fmt::Display]) {
        self.log(Severity::Info, values);
    }

    /// Logs at [`Severity::Warning`].
    pub fn warning(&self, values: &[&dyn fmt::Display]) {
        self.log(Severity::Warning, values);
    }

    /// Logs at [`Severity::Error`].
    pub fn error(&self, values: &[&dyn fmt::Display]) {
        self.log(Severity::Error, values);
    }

    /// Logs at [`Severity::Fatal`]. The process keeps running.
    pub fn fatal(&self, values: &[&dyn fmt::Display]) {
        self.log(Severity::Fatal, values);
    }

    /// Flushes the logger's sink.
    pub fn flush(&self) -> io::Result<()> {
        self.sink.flush()
    }

    fn suppressed_under(&self, flags: Flags, severity: Severity) -> bool {
        let whitelist = flags.contains(Flag::Whitelist);
        if flags.contains(Flag::SeverityFilter)
            && whitelist != self.registry.is_severity_marked(severity)
        {
            return true;
        }
        flags.contains(Flag::TagFilter) && whitelist != self.registry.is_tag_marked(&self.tag)
    }

    fn compose_under(
        &self,
        flags: Flags,
        severity: Severity,
        values: &[&dyn fmt::Display],
    ) -> String {
        let mut line = String::with_capacity(64);
        write_prefix(&mut line, flags, severity, &self.tag);
        write_body(&mut line, values);
        write_suffix(&mut line, flags);
        line
    }
}

impl Clone for Logger {
    /// Clones share the registry and sink but get an independent copy of the
    /// current flags.
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            flags: AtomicU32::new(self.flags().bits()),
            registry: Arc::clone(&self.registry),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("flags", &self.flags())
            .finish_non_exhaustive()
    }
}

/// Builder for [`Logger`] values that need a non-default registry or sink.
#[must_use]
pub struct LoggerBuilder {
    tag: String,
    flags: Flags,
    registry: Option<Arc<FilterRegistry>>,
    sink: Option<Arc<dyn LineSink>>,
}

impl LoggerBuilder {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            flags: Flags::DEFAULTS,
            registry: None,
            sink: None,
        }
    }

    /// Sets the initial flags.
    pub fn flags(mut self, flags: impl Into<Flags>) -> Self {
        self.flags = flags.into();
        self
    }

    /// Binds the logger to `registry` instead of the process-wide one.
    pub fn registry(mut self, registry: Arc<FilterRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sends output to `sink` instead of stdout.
    pub fn sink(mut self, sink: impl LineSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Sends output to an already shared sink.
    pub fn shared_sink(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Creates the logger and registers its tag.
    pub fn build(self) -> Logger {
        let registry = self.registry.unwrap_or_else(FilterRegistry::global);
        registry.register_tag(&self.tag);
        Logger {
            tag: self.tag,
            flags: AtomicU32::new(self.flags.bits()),
            registry,
            sink: self.sink.unwrap_or_else(|| Arc::new(StdoutSink::new())),
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("tag", &self.tag)
            .field("flags", &self.flags)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
