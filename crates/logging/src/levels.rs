//! crates/logging/src/levels.rs
//! Severity levels with their display labels and ANSI colours.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// ANSI sequence that restores the terminal's default attributes.
pub const COLOR_RESET: &str = "\x1b[0m";

/// Urgency of a log line, ordered from least to most urgent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Fine-grained tracing output.
    Trace,
    /// Developer diagnostics.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that does not stop the program.
    Warning,
    /// An operation failed.
    Error,
    /// The program cannot continue.
    Fatal,
}

impl Severity {
    /// Every severity in increasing order of urgency.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Fatal,
    ];

    /// Number of severities, used to size the severity filter table.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of the severity in [`Severity::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Plain display label, e.g. `"Warning"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "Trace",
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
        }
    }

    /// ANSI escape sequence used when colour output is enabled.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Trace => COLOR_RESET,
            Self::Debug => "\x1b[32m",
            Self::Info => "\x1b[34m",
            Self::Warning => "\x1b[33m",
            Self::Error => "\x1b[31m",
            Self::Fatal => "\x1b[37;41m",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a [`Severity`] from an unrecognised string.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown severity `{input}`; expected trace, debug, info, warning, error or fatal")]
pub struct SeverityParseError {
    input: String,
}

impl SeverityParseError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let matched = Self::ALL
            .into_iter()
            .find(|severity| trimmed.eq_ignore_ascii_case(severity.label()));
        if let Some(severity) = matched {
            return Ok(severity);
        }

        if trimmed.eq_ignore_ascii_case("warn") {
            return Ok(Self::Warning);
        }
        if trimmed.eq_ignore_ascii_case("err") {
            return Ok(Self::Error);
        }

        Err(SeverityParseError {
            input: s.to_owned(),
        })
    }
}
