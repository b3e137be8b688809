//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` ecosystem into a lima [`Logger`].
//!
//! [`LimaLayer`] is a `tracing-subscriber` layer that renders each event
//! through a logger, so libraries instrumented with `tracing` macros share the
//! logger's prefixes, colours and filters.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{Flags, Logger, init_tracing};
//!
//! init_tracing(Logger::new("app", Flags::DEFAULTS));
//! tracing::warn!(path = "/tmp", "disk almost full");
//! // [12:00:00][Warning][app]    disk almost full path=/tmp
//! ```
//!
//! `tracing` has no fatal level; [`Severity::Fatal`] is only reachable through
//! the logger's own API.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::levels::Severity;
use crate::logger::Logger;

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        if level == Level::TRACE {
            Self::Trace
        } else if level == Level::DEBUG {
            Self::Debug
        } else if level == Level::INFO {
            Self::Info
        } else if level == Level::WARN {
            Self::Warning
        } else {
            Self::Error
        }
    }
}

/// A tracing layer that writes every event through a [`Logger`].
///
/// The event's `message` field becomes the body; remaining fields are
/// appended as ` name=value`. Tag filtering uses the wrapped logger's tag, not
/// the event target.
#[derive(Debug)]
pub struct LimaLayer {
    logger: Logger,
}

impl LimaLayer {
    /// Creates a layer that logs through `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The logger events are routed to.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }
}

impl<S> Layer<S> for LimaLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = Severity::from(*event.metadata().level());
        if self.logger.is_suppressed(severity) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.logger
            .log(severity, &[&visitor.message, &visitor.fields]);
    }
}

/// Installs a [`LimaLayer`] around `logger` as the global default subscriber.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing(logger: Logger) -> bool {
    tracing_subscriber::registry()
        .with(LimaLayer::new(logger))
        .try_init()
        .is_ok()
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logging_sink::WriterSink;
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::{Flag, FilterRegistry};

    fn layer_with_sink(flags: impl Into<crate::Flags>) -> (LimaLayer, Arc<WriterSink<Vec<u8>>>) {
        let sink = Arc::new(WriterSink::new(Vec::new()));
        let logger = Logger::builder("bridge")
            .flags(flags)
            .registry(Arc::new(FilterRegistry::new()))
            .sink(Arc::clone(&sink))
            .build();
        (LimaLayer::new(logger), sink)
    }

    #[test]
    fn levels_map_to_severities() {
        assert_eq!(Severity::from(Level::TRACE), Severity::Trace);
        assert_eq!(Severity::from(Level::DEBUG), Severity::Debug);
        assert_eq!(Severity::from(Level::INFO), Severity::Info);
        assert_eq!(Severity::from(Level::WARN), Severity::Warning);
        assert_eq!(Severity::from(Level::ERROR), Severity::Error);
    }

    #[test]
    fn events_are_rendered_through_the_logger() {
        let (layer, sink) = layer_with_sink(Flag::SeverityLabels | Flag::Tag | Flag::EndOfLine);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("disk almost full");
            tracing::info!(count = 3, path = "/tmp", "copied");
        });

        assert_eq!(
            sink.lines(),
            vec![
                "[Warning][bridge]disk almost full",
                "[Info][bridge]copied count=3 path=/tmp",
            ]
        );
    }

    #[test]
    fn logger_filters_apply_to_events() {
        let (layer, sink) = layer_with_sink(Flag::SeverityFilter | Flag::EndOfLine);
        layer.logger().set_filter(Severity::Debug);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::error!("shown");
        });

        assert_eq!(sink.take(), "shown\n");
    }
}
