//! crates/logging/src/default.rs
//! The process-wide default logger and free functions that act on it.

use std::fmt;
use std::sync::OnceLock;

use crate::flags::Flags;
use crate::levels::Severity;
use crate::logger::{FilterKey, Logger};

/// Tag of the default logger.
pub const DEFAULT_TAG: &str = "LIMA";

static MAIN_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the default logger, creating it on first use.
///
/// The default logger is tagged [`DEFAULT_TAG`], starts with
/// [`Flags::DEFAULTS`], reads the process-wide
/// [`FilterRegistry`](crate::FilterRegistry) and writes to stdout. It is never
/// torn down.
pub fn main_logger() -> &'static Logger {
    MAIN_LOGGER.get_or_init(|| Logger::new(DEFAULT_TAG, Flags::DEFAULTS))
}

/// Logs `values` at `severity` through the default logger.
pub fn log(severity: Severity, values: &[&dyn fmt::Display]) {
    main_logger().log(severity, values);
}

/// Sets `flag` on the default logger.
pub fn set_flag(flag: impl Into<Flags>) {
    main_logger().set_flag(flag);
}

/// Clears `flag` on the default logger.
pub fn clear_flag(flag: impl Into<Flags>) {
    main_logger().clear_flag(flag);
}

/// Marks a severity or tag in the process-wide registry.
pub fn set_filter(key: impl Into<FilterKey>) {
    main_logger().set_filter(key);
}

/// Unmarks a severity or tag in the process-wide registry.
pub fn clear_filter(key: impl Into<FilterKey>) {
    main_logger().clear_filter(key);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{Flag, FilterRegistry};

    #[test]
    fn main_logger_is_a_singleton_on_the_global_registry() {
        let first = main_logger();
        let second = main_logger();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.tag(), DEFAULT_TAG);
        assert!(Arc::ptr_eq(first.registry(), &FilterRegistry::global()));
        assert!(FilterRegistry::global().contains_tag(DEFAULT_TAG));
    }

    #[test]
    fn free_functions_toggle_default_flags() {
        set_flag(Flag::Whitelist);
        assert!(main_logger().is_flag_set(Flag::Whitelist));
        clear_flag(Flag::Whitelist);
        assert!(!main_logger().is_flag_set(Flag::Whitelist));
        assert!(main_logger().is_flag_set(Flag::EndOfLine));
    }

    #[test]
    fn free_functions_update_global_tag_table() {
        let tag = "default-tests-unique-tag";
        set_filter(tag);
        assert!(FilterRegistry::global().is_tag_marked(tag));
        clear_filter(tag);
        assert!(!FilterRegistry::global().is_tag_marked(tag));
    }
}
