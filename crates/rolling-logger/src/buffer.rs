use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;

/// One formatted event
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared ring of the most recent records. Cloning shares the same ring.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    records: Arc<Mutex<VecDeque<LogRecord>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogRecord>> {
        // a panic while holding the lock leaves the ring usable
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append, evicting the oldest record when full
    pub fn push(&self, record: LogRecord) {
        let mut records = self.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    /// Newest first, at most `limit`
    pub fn recent(&self, limit: usize) -> Vec<LogRecord> {
        self.lock().iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_push_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push(record("a"));
        buffer.push(record("b"));
        buffer.push(record("c"));

        let messages: Vec<String> = buffer.snapshot().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let buffer = LogBuffer::new(10);
        for m in ["one", "two", "three"] {
            buffer.push(record(m));
        }
        let recent: Vec<String> = buffer.recent(2).into_iter().map(|r| r.message).collect();
        assert_eq!(recent, vec!["three", "two"]);
    }

    #[test]
    fn test_clones_share_storage() {
        let buffer = LogBuffer::new(4);
        let other = buffer.clone();
        other.push(record("shared"));
        assert_eq!(buffer.len(), 1);
        buffer.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let buffer = LogBuffer::new(0);
        assert_eq!(buffer.capacity(), 1);
        buffer.push(record("x"));
        buffer.push(record("y"));
        assert_eq!(buffer.snapshot()[0].message, "y");
    }

    #[test]
    fn test_display_format() {
        let mut r = record("hello");
        r.target = "studio_ui::app".to_string();
        let line = r.to_string();
        assert!(line.ends_with("INFO [studio_ui::app] hello"));
    }
}
