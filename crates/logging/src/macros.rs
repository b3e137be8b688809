//! crates/logging/src/macros.rs
//! Call-site macros for the six severities.
//!
//! Every macro takes a comma-separated list of [`Display`](std::fmt::Display)
//! values that are printed back to back. Without a `logger:` prefix the
//! [default logger](crate::main_logger) is used; `logger: expr;` selects an
//! explicit instance.

/// Logs at an explicit severity.
///
/// ```
/// use logging::{Flags, Logger, Severity, log_at};
///
/// let logger = Logger::new("demo", Flags::NONE);
/// log_at!(logger: logger; Severity::Info, "answer=", 42);
/// log_at!(Severity::Debug, "through the default logger");
/// ```
#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr; $severity:expr $(, $value:expr)* $(,)?) => {
        ($logger).log(
            $severity,
            &[$(&$value as &dyn ::core::fmt::Display),*],
        )
    };
    ($severity:expr $(, $value:expr)* $(,)?) => {
        $crate::main_logger().log(
            $severity,
            &[$(&$value as &dyn ::core::fmt::Display),*],
        )
    };
}

/// Logs at [`Severity::Trace`](crate::Severity::Trace).
#[macro_export]
macro_rules! log_trace {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log_at!(logger: $logger; $crate::Severity::Trace $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_at!($crate::Severity::Trace $(, $value)*)
    };
}

/// Logs at [`Severity::Debug`](crate::Severity::Debug).
#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log_at!(logger: $logger; $crate::Severity::Debug $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_at!($crate::Severity::Debug $(, $value)*)
    };
}

/// Logs at [`Severity::Info`](crate::Severity::Info).
///
/// ```
/// use logging::log_info;
///
/// let files = 3;
/// log_info!("copied ", files, " files");
/// ```
#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log_at!(logger: $logger; $crate::Severity::Info $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_at!($crate::Severity::Info $(, $value)*)
    };
}

/// Logs at [`Severity::Warning`](crate::Severity::Warning).
#[macro_export]
macro_rules! log_warning {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log_at!(logger: $logger; $crate::Severity::Warning $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_at!($crate::Severity::Warning $(, $value)*)
    };
}

/// Logs at [`Severity::Error`](crate::Severity::Error).
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log_at!(logger: $logger; $crate::Severity::Error $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_at!($crate::Severity::Error $(, $value)*)
    };
}

/// Logs at [`Severity::Fatal`](crate::Severity::Fatal). Does not abort.
#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr; $($value:expr),* $(,)?) => {
        $crate::log_at!(logger: $logger; $crate::Severity::Fatal $(, $value)*)
    };
    ($($value:expr),* $(,)?) => {
        $crate::log_at!($crate::Severity::Fatal $(, $value)*)
    };
}
