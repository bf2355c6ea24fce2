//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the single-sink pipeline.
//!
//! Lets an embedding application keep its standard `tracing` macros while
//! honoring the one-sink design: events are mapped onto the severity
//! vocabulary and routed through the same admitted-record path as the native
//! entry points. Event levels map TRACE→Trace, DEBUG→Debug, INFO→Info,
//! WARN→Warning, ERROR→Error; the callsite's file and line are carried into
//! the record when the metadata provides them.
//!
//! Note that events arrive at runtime, so the static severity mask does not
//! elide them; only the runtime gate applies.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use crate::context::Logger;
use crate::severity::Severity;

/// A tracing-subscriber layer that writes events through a [`Logger`].
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let logger = Arc::new(Logger::new(LogConfig::new())?);
/// let subscriber = tracing_subscriber::registry().with(OcLogLayer::new(logger));
/// tracing::subscriber::set_global_default(subscriber)?;
///
/// tracing::warn!("routed through the configured sink");
/// ```
pub struct OcLogLayer {
    logger: Arc<Logger>,
}

impl OcLogLayer {
    /// Creates a layer writing through the given context.
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

fn severity_for(level: &Level) -> Severity {
    if *level == Level::TRACE {
        Severity::Trace
    } else if *level == Level::DEBUG {
        Severity::Debug
    } else if *level == Level::INFO {
        Severity::Info
    } else if *level == Level::WARN {
        Severity::Warning
    } else {
        Severity::Error
    }
}

/// Collects the conventional `message` field; other fields are ignored
/// rather than flattened, since the record format is line-oriented.
#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        }
    }
}

impl<S> Layer<S> for OcLogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = severity_for(metadata.level());
        if !self.logger.admit(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let file = metadata.file().unwrap_or("<unknown>");
        let line = metadata.line().unwrap_or(0);
        self.logger
            .log(severity, file, line, format_args!("{}", visitor.message));
    }
}
