//! crates/logging/src/config.rs
//! Declarative logger configuration.

use std::sync::Arc;

use crate::default::DEFAULT_TAG;
use crate::flags::{FlagParseError, Flags};
use crate::levels::Severity;
use crate::logger::Logger;
use crate::registry::FilterRegistry;

/// Everything needed to construct a [`Logger`] and seed its filters.
///
/// With the `serde` feature the flags serialize as a token list such as
/// `"timestamps,labels,newline"`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Tag of the logger.
    pub tag: String,
    /// Initial flags.
    pub flags: Flags,
    /// Severities to mark in the registry when the logger is built.
    pub filtered_severities: Vec<Severity>,
    /// Tags to mark in the registry when the logger is built.
    pub filtered_tags: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_owned(),
            flags: Flags::DEFAULTS,
            filtered_severities: Vec::new(),
            filtered_tags: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Creates a configuration for `tag` with default flags and no filters.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Applies a flag token list (see [`Flags::apply_tokens`]) to the
    /// configured flags.
    pub fn with_flag_tokens(mut self, tokens: &str) -> Result<Self, FlagParseError> {
        self.flags = self.flags.apply_tokens(tokens)?;
        Ok(self)
    }

    /// Adds a severity to mark when the logger is built.
    pub fn filter_severity(mut self, severity: Severity) -> Self {
        self.filtered_severities.push(severity);
        self
    }

    /// Adds a tag to mark when the logger is built.
    pub fn filter_tag(mut self, tag: impl Into<String>) -> Self {
        self.filtered_tags.push(tag.into());
        self
    }

    /// Builds the logger on the process-wide registry and applies the
    /// configured filter marks to it.
    pub fn build(&self) -> Logger {
        self.build_with(FilterRegistry::global())
    }

    /// Builds the logger on `registry` and applies the configured filter
    /// marks to it.
    pub fn build_with(&self, registry: Arc<FilterRegistry>) -> Logger {
        let logger = Logger::builder(self.tag.as_str())
            .flags(self.flags)
            .registry(registry)
            .build();
        self.apply_filters(&logger);
        logger
    }

    /// Marks the configured severities and tags in `logger`'s registry.
    pub fn apply_filters(&self, logger: &Logger) {
        for severity in &self.filtered_severities {
            logger.set_filter(*severity);
        }
        for tag in &self.filtered_tags {
            logger.set_filter(tag);
        }
    }
}
