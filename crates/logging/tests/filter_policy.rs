//! Integration tests for the severity and tag filter policy.
//!
//! These tests verify blacklist and whitelist polarity, sharing of the tag
//! table between loggers, and OR-combination of the two filters.

use std::sync::Arc;

use logging::{FilterRegistry, Flag, Flags, Logger, Severity};
use logging_sink::WriterSink;
use proptest::prelude::*;

struct Capture {
    registry: Arc<FilterRegistry>,
    sink: Arc<WriterSink<Vec<u8>>>,
}

impl Capture {
    fn new() -> Self {
        Self {
            registry: Arc::new(FilterRegistry::new()),
            sink: Arc::new(WriterSink::new(Vec::new())),
        }
    }

    fn logger(&self, tag: &str, flags: impl Into<Flags>) -> Logger {
        Logger::builder(tag)
            .flags(flags)
            .registry(Arc::clone(&self.registry))
            .sink(Arc::clone(&self.sink))
            .build()
    }
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn any_tag() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_-]{0,11}"
}

// ============================================================================
// Severity Filter
// ============================================================================

proptest! {
    /// A marked severity is dropped in blacklist mode and passed in whitelist mode.
    #[test]
    fn marked_severity_follows_polarity(severity in any_severity()) {
        let capture = Capture::new();
        let black = capture.logger("black", Flag::SeverityFilter);
        let white = capture.logger("white", Flag::SeverityFilter | Flag::Whitelist);
        black.set_filter(severity);

        black.log(severity, &[&"b"]);
        prop_assert!(capture.sink.is_empty());

        white.log(severity, &[&"w"]);
        prop_assert_eq!(capture.sink.take(), "w");
    }

    /// Unmarked severities are passed in blacklist mode and dropped in whitelist mode.
    #[test]
    fn unmarked_severity_follows_polarity(marked in any_severity(), logged in any_severity()) {
        prop_assume!(marked != logged);
        let capture = Capture::new();
        let black = capture.logger("black", Flag::SeverityFilter);
        let white = capture.logger("white", Flag::SeverityFilter | Flag::Whitelist);
        black.set_filter(marked);

        prop_assert!(!black.is_suppressed(logged));
        prop_assert!(white.is_suppressed(logged));
    }

    /// The tag filter mirrors the severity filter, keyed by the logger's own tag.
    #[test]
    fn tag_filter_follows_polarity(tag in any_tag(), severity in any_severity()) {
        let capture = Capture::new();
        let black = capture.logger(&tag, Flag::TagFilter);
        let white = capture.logger(&tag, Flag::TagFilter | Flag::Whitelist);

        prop_assert!(!black.is_suppressed(severity));
        prop_assert!(white.is_suppressed(severity));

        black.set_filter(tag.as_str());
        prop_assert!(black.is_suppressed(severity));
        prop_assert!(!white.is_suppressed(severity));
    }

    /// Either filter alone is enough to drop a line.
    #[test]
    fn filters_combine_with_or(
        severity in any_severity(),
        severity_marked in any::<bool>(),
        tag_marked in any::<bool>(),
        whitelist in any::<bool>(),
    ) {
        let capture = Capture::new();
        let mut flags = Flag::SeverityFilter | Flag::TagFilter;
        if whitelist {
            flags |= Flag::Whitelist;
        }
        let logger = capture.logger("combo", flags);
        if severity_marked {
            logger.set_filter(severity);
        }
        if tag_marked {
            logger.set_filter("combo");
        }

        let expected = whitelist != severity_marked || whitelist != tag_marked;
        prop_assert_eq!(logger.is_suppressed(severity), expected);

        logger.log(severity, &[&"x"]);
        prop_assert_eq!(capture.sink.is_empty(), expected);
    }
}

/// Clearing a severity filter lets the level through again.
#[test]
fn clear_filter_restores_severity() {
    let capture = Capture::new();
    let logger = capture.logger("X", Flag::SeverityFilter | Flag::EndOfLine);
    logger.set_filter(Severity::Info);
    logger.set_filter(Severity::Info);
    logger.info(&[&"dropped"]);
    logger.clear_filter(Severity::Info);
    logger.info(&[&"kept"]);
    assert_eq!(capture.sink.take(), "kept\n");
}

// ============================================================================
// Shared Tag Table
// ============================================================================

/// Two loggers with the same tag share one entry in the tag table.
#[test]
fn same_tag_loggers_share_one_entry() {
    let capture = Capture::new();
    let first = capture.logger("db", Flag::TagFilter);
    let second = capture.logger("db", Flag::TagFilter);
    assert_eq!(capture.registry.tags(), vec![("db".to_owned(), false)]);

    first.set_filter("db");
    assert!(second.is_suppressed(Severity::Error));

    second.clear_filter("db");
    assert!(!first.is_suppressed(Severity::Error));
}

/// A mark set before any logger uses the tag survives logger construction.
#[test]
fn preset_tag_mark_survives_construction() {
    let capture = Capture::new();
    capture.registry.set_tag("late");
    let logger = capture.logger("late", Flag::TagFilter);
    assert!(capture.registry.is_tag_marked("late"));
    assert!(logger.is_suppressed(Severity::Info));
}

/// Filtering a tag through one logger affects other tags not at all.
#[test]
fn tag_marks_are_per_tag() {
    let capture = Capture::new();
    let net = capture.logger("net", Flag::TagFilter);
    let disk = capture.logger("disk", Flag::TagFilter);
    net.set_filter("net");
    assert!(net.is_suppressed(Severity::Info));
    assert!(!disk.is_suppressed(Severity::Info));
}

/// Separate registries never see each other's marks.
#[test]
fn registries_are_isolated() {
    let left = Capture::new();
    let right = Capture::new();
    let a = left.logger("shared-name", Flag::TagFilter);
    let b = right.logger("shared-name", Flag::TagFilter);
    a.set_filter("shared-name");
    assert!(a.is_suppressed(Severity::Info));
    assert!(!b.is_suppressed(Severity::Info));
}

// ============================================================================
// Filter Enable Flags
// ============================================================================

/// Marks are ignored while the corresponding enable flag is clear.
#[test]
fn filters_only_apply_when_enabled() {
    let capture = Capture::new();
    let logger = capture.logger("X", Flags::NONE);
    logger.set_filter(Severity::Warning);
    logger.set_filter("X");
    assert!(!logger.is_suppressed(Severity::Warning));

    logger.set_flag(Flag::SeverityFilter);
    assert!(logger.is_suppressed(Severity::Warning));
    assert!(!logger.is_suppressed(Severity::Error));

    logger.clear_flag(Flag::SeverityFilter);
    logger.set_flag(Flag::TagFilter);
    assert!(logger.is_suppressed(Severity::Error));
}

/// Whitelist polarity does not modify the shared tables.
#[test]
fn whitelist_flag_does_not_touch_tables() {
    let capture = Capture::new();
    let logger = capture.logger("X", Flag::SeverityFilter);
    logger.set_filter(Severity::Debug);
    logger.set_flag(Flag::Whitelist);
    logger.clear_flag(Flag::Whitelist);
    assert_eq!(capture.registry.marked_severities(), vec![Severity::Debug]);
    assert_eq!(capture.registry.tags(), vec![("X".to_owned(), false)]);
}

/// A whitelist over empty tables passes nothing; there is no empty-table exemption.
#[test]
fn empty_whitelist_suppresses_everything() {
    let capture = Capture::new();
    let logger = capture.logger("X", Flag::SeverityFilter | Flag::Whitelist | Flag::EndOfLine);
    for severity in Severity::ALL {
        assert!(logger.is_suppressed(severity));
    }
    logger.fatal(&[&"dropped"]);
    assert!(capture.sink.is_empty());
}
