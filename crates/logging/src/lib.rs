#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a small process-wide logging facility: level-tagged lines,
//! optional ANSI colours and timestamps, and two shared filter tables (by
//! severity and by tag) that every logger consults.
//!
//! # Design
//!
//! - [`Logger`] owns a tag and a [`Flags`] bit-set. Flags decide which
//!   decorations are printed and which filters are consulted.
//! - [`FilterRegistry`] holds the severity and tag tables. Loggers built with
//!   [`Logger::new`] share [`FilterRegistry::global`]; tests and embedders can
//!   bind loggers to an isolated registry instead.
//! - Output goes to a [`LineSink`](logging_sink::LineSink), stdout unless
//!   configured otherwise.
//! - [`main_logger`] is the default instance tagged `"LIMA"`, used by the
//!   `log_*!` macros when no logger is named.
//!
//! A line is composed as colour, `[HH:MM:SS]`, `[Severity]`, `[tag]`, four
//! spaces, the message values back to back, colour reset and newline, each
//! part present only when its flag is set.
//!
//! # Invariants
//!
//! - Every tag used to build a logger has an entry in its registry's tag
//!   table for the registry's lifetime.
//! - Filter marks are never changed by polarity: [`Flag::Whitelist`] only
//!   changes how the reading logger interprets them.
//! - A line is either written whole in one sink call or not at all.
//!
//! # Errors
//!
//! Logging never fails. [`Logger::try_log`] exposes the sink's
//! [`std::io::Error`] for callers that care; every other entry point ignores
//! it. Parsing severities and flag tokens reports [`SeverityParseError`] and
//! [`FlagParseError`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use logging::{Flag, FilterRegistry, Logger, Severity, log_info};
//! use logging_sink::WriterSink;
//!
//! let sink = Arc::new(WriterSink::new(Vec::new()));
//! let logger = Logger::builder("net")
//!     .flags(Flag::SeverityLabels | Flag::Tag | Flag::TagFilter | Flag::EndOfLine)
//!     .registry(Arc::new(FilterRegistry::new()))
//!     .sink(Arc::clone(&sink))
//!     .build();
//!
//! log_info!(logger: logger; "connected to ", "10.0.0.1", ":", 8080);
//! logger.set_filter("net");
//! log_info!(logger: logger; "muted");
//!
//! assert_eq!(sink.take(), "[Info][net]connected to 10.0.0.1:8080\n");
//! ```

mod config;
mod default;
mod flags;
mod format;
mod guard;
mod levels;
mod logger;
mod macros;
mod registry;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::LoggerConfig;
pub use default::{
    DEFAULT_TAG, clear_filter, clear_flag, log, main_logger, set_filter, set_flag,
};
pub use flags::{Flag, FlagParseError, Flags};
pub use format::{WHITESPACE, timestamp};
pub use guard::FlagGuard;
pub use levels::{COLOR_RESET, Severity, SeverityParseError};
pub use logger::{FilterKey, Logger, LoggerBuilder};
pub use registry::FilterRegistry;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LimaLayer, init_tracing};
