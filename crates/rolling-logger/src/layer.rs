use chrono::Utc;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::buffer::{LogBuffer, LogRecord};

/// Destination for formatted records besides the ring buffer.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, record: &LogRecord);
}

impl<F> LogSink for F
where
    F: Fn(&LogRecord) + Send + Sync + 'static,
{
    fn write(&self, record: &LogRecord) {
        self(record)
    }
}

pub struct RollingLayer<S> {
    buffer: LogBuffer,
    sink: S,
}

impl<S: LogSink> RollingLayer<S> {
    pub fn new(buffer: LogBuffer, sink: S) -> Self {
        Self { buffer, sink }
    }
}

/// Collects `message` plus any structured fields as ` key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl MessageVisitor {
    fn finish(self) -> String {
        self.message + &self.fields
    }
}

impl<S, Sub> Layer<Sub> for RollingLayer<S>
where
    S: LogSink,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let record = LogRecord {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.finish(),
        };

        self.sink.write(&record);
        self.buffer.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::level_filters::LevelFilter;
    use tracing::Level;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_layer_captures_message_and_fields() {
        let buffer = LogBuffer::new(8);
        let subscriber = tracing_subscriber::registry()
            .with(RollingLayer::new(buffer.clone(), |_: &LogRecord| {}));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "catalog", fixture = "assets", count = 3, "fixture loaded");
        });

        let records = buffer.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::INFO);
        assert_eq!(records[0].target, "catalog");
        assert_eq!(records[0].message, "fixture loaded fixture=assets count=3");
    }

    #[test]
    fn test_sink_sees_every_record() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink_seen = seen.clone();
        let sink = move |record: &LogRecord| {
            sink_seen.lock().unwrap().push(record.message.clone());
        };

        let buffer = LogBuffer::new(8);
        let subscriber = tracing_subscriber::registry().with(RollingLayer::new(buffer, sink));
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("first");
            tracing::error!("second");
        });

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_level_filter_drops_debug() {
        let buffer = LogBuffer::new(8);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(RollingLayer::new(buffer.clone(), |_: &LogRecord| {}));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
        });

        let messages: Vec<String> = buffer.snapshot().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["shown"]);
    }
}
