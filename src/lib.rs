#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `lima` is a lightweight logging facility for embedding in other programs:
//! level-tagged, optionally colourised lines on standard output, filtered by
//! severity and by logger tag.
//!
//! This crate re-exports the workspace's public surface:
//!
//! - [`logging`] provides [`Logger`], [`Flags`], [`FilterRegistry`], the
//!   default instance and the `log_*!` macros.
//! - [`logging_sink`] provides the output sinks ([`StdoutSink`],
//!   [`WriterSink`]).
//!
//! # Examples
//!
//! ```
//! use lima::{Flag, Severity, log_info, log_warning};
//!
//! log_info!("starting worker ", 3);
//!
//! lima::set_filter(Severity::Debug);
//! lima::clear_flag(Flag::Colors);
//! log_warning!("colour disabled for the default logger");
//! lima::set_flag(Flag::Colors);
//! lima::clear_filter(Severity::Debug);
//! ```

pub use logging::{
    COLOR_RESET, DEFAULT_TAG, FilterKey, FilterRegistry, Flag, FlagGuard, FlagParseError, Flags,
    Logger, LoggerBuilder, LoggerConfig, Severity, SeverityParseError, WHITESPACE, clear_filter,
    clear_flag, log, log_at, log_debug, log_error, log_fatal, log_info, log_trace, log_warning,
    main_logger, set_filter, set_flag, timestamp,
};
#[cfg(feature = "tracing")]
pub use logging::{LimaLayer, init_tracing};
pub use logging_sink::{LineSink, StdoutSink, WriterSink};

pub use logging;
pub use logging_sink;
