//! crates/logging/src/format.rs
//! Prefix, body and suffix composition for a single log line.

use std::fmt::{self, Write as _};

use time::OffsetDateTime;
use time::macros::format_description;

use crate::flags::{Flag, Flags};
use crate::levels::{COLOR_RESET, Severity};

/// Indentation inserted between the prefix and the message body.
pub const WHITESPACE: &str = "    ";

/// Returns the current local wall-clock time as `[HH:MM:SS]`.
///
/// The `time` crate refuses to read the local UTC offset once a unix process
/// is multi-threaded; UTC is used in that case.
#[must_use]
pub fn timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_timestamp(now)
}

pub(crate) fn format_timestamp(moment: OffsetDateTime) -> String {
    let clock = format_description!("[hour]:[minute]:[second]");
    moment
        .format(clock)
        .map(|text| format!("[{text}]"))
        .unwrap_or_else(|_| "[00:00:00]".to_owned())
}

/// Appends the decorations that precede the message body.
///
/// The order is fixed: colour, timestamp, severity label, tag, whitespace.
pub(crate) fn write_prefix(line: &mut String, flags: Flags, severity: Severity, tag: &str) {
    if flags.contains(Flag::Colors) {
        line.push_str(severity.color());
    }
    if flags.contains(Flag::Timestamps) {
        line.push_str(&timestamp());
    }
    if flags.contains(Flag::SeverityLabels) {
        let _ = write!(line, "[{severity}]");
    }
    if flags.contains(Flag::Tag) {
        let _ = write!(line, "[{tag}]");
    }
    if flags.contains(Flag::Whitespace) {
        line.push_str(WHITESPACE);
    }
}

/// Appends every value's `Display` output with no separator.
pub(crate) fn write_body(line: &mut String, values: &[&dyn fmt::Display]) {
    for value in values {
        let _ = write!(line, "{value}");
    }
}

/// Appends the decorations that follow the message body.
pub(crate) fn write_suffix(line: &mut String, flags: Flags) {
    if flags.contains(Flag::Colors) {
        line.push_str(COLOR_RESET);
    }
    if flags.contains(Flag::EndOfLine) {
        line.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn prefix(flags: Flags, severity: Severity, tag: &str) -> String {
        let mut line = String::new();
        write_prefix(&mut line, flags, severity, tag);
        line
    }

    fn suffix(flags: Flags) -> String {
        let mut line = String::new();
        write_suffix(&mut line, flags);
        line
    }

    #[test]
    fn timestamp_is_zero_padded_24_hour() {
        let moment = datetime!(2024-03-09 07:05:03 UTC);
        assert_eq!(format_timestamp(moment), "[07:05:03]");

        let evening = datetime!(2024-03-09 23:59:58 UTC);
        assert_eq!(format_timestamp(evening), "[23:59:58]");
    }

    #[test]
    fn live_timestamp_has_clock_shape() {
        let stamp = timestamp();
        let bytes = stamp.as_bytes();
        assert_eq!(bytes.len(), 10);
        assert_eq!(bytes[0], b'[');
        assert_eq!(bytes[3], b':');
        assert_eq!(bytes[6], b':');
        assert_eq!(bytes[9], b']');
    }

    #[test]
    fn empty_flags_produce_no_decorations() {
        assert!(prefix(Flags::NONE, Severity::Error, "X").is_empty());
        assert!(suffix(Flags::NONE).is_empty());
    }

    #[test]
    fn prefix_order_is_label_tag_whitespace() {
        let flags = Flag::Whitespace | Flag::Tag | Flag::SeverityLabels;
        assert_eq!(prefix(flags, Severity::Warning, "X"), "[Warning][X]    ");
    }

    #[test]
    fn colour_comes_first_and_reset_precedes_newline() {
        let flags = Flag::Colors | Flag::SeverityLabels | Flag::EndOfLine;
        assert_eq!(prefix(flags, Severity::Error, "X"), "\x1b[31m[Error]");
        assert_eq!(suffix(flags), "\x1b[0m\n");
    }

    #[test]
    fn timestamp_sits_between_colour_and_label() {
        let flags = Flag::Colors | Flag::Timestamps | Flag::SeverityLabels;
        let line = prefix(flags, Severity::Debug, "X");
        assert!(line.starts_with("\x1b[32m["));
        assert!(line.ends_with("][Debug]"));
        assert_eq!(line.len(), "\x1b[32m".len() + 10 + "[Debug]".len());
    }

    #[test]
    fn body_concatenates_without_separator() {
        let mut line = String::new();
        write_body(&mut line, &[&"a", &1, &"b", &2.5, &'c']);
        assert_eq!(line, "a1b2.5c");
    }

    #[test]
    fn empty_body_is_empty() {
        let mut line = String::new();
        write_body(&mut line, &[]);
        assert!(line.is_empty());
    }
}
