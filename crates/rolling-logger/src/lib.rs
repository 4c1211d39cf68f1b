//! Rolling Logger
//!
//! A `tracing` layer with a circular buffer of recent records. Each event is
//! formatted once, handed to a [`LogSink`] (the browser console in the app)
//! and kept in a [`LogBuffer`] so the UI can show what happened lately.

mod buffer;
mod layer;

pub use buffer::{LogBuffer, LogRecord};
pub use layer::{LogSink, RollingLayer};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Install the global subscriber. Returns the buffer so callers can read it
/// back; fails if a global subscriber is already set.
pub fn init<S: LogSink>(
    capacity: usize,
    level: LevelFilter,
    sink: S,
) -> Result<LogBuffer, tracing::subscriber::SetGlobalDefaultError> {
    let buffer = LogBuffer::new(capacity);
    let subscriber = tracing_subscriber::registry()
        .with(level)
        .with(RollingLayer::new(buffer.clone(), sink));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(buffer)
}

/// Parse `"trace" | "debug" | "info" | "warn" | "error" | "off"`,
/// falling back to INFO.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN "), LevelFilter::WARN);
        assert_eq!(parse_level("off"), LevelFilter::OFF);
        assert_eq!(parse_level("chatty"), LevelFilter::INFO);
    }
}
