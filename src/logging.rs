//! Logging Setup
//!
//! Routes `tracing` events to the browser console and keeps the recent ones
//! for the diagnostics panel in Settings.

use rolling_logger::{LogBuffer, LogRecord};
use tracing::Level;
use wasm_bindgen::JsValue;

use crate::config::AppConfig;

fn console_sink(record: &LogRecord) {
    let line = JsValue::from_str(&record.to_string());
    if record.level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if record.level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else if record.level == Level::INFO {
        web_sys::console::info_1(&line);
    } else {
        web_sys::console::debug_1(&line);
    }
}

/// Install the global subscriber. If one is already installed the app still
/// gets a (detached) buffer so the diagnostics panel has something to read.
pub fn init(config: &AppConfig) -> LogBuffer {
    let level = rolling_logger::parse_level(&config.log_level);
    match rolling_logger::init(config.log_capacity, level, console_sink) {
        Ok(buffer) => buffer,
        Err(e) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("logger already installed: {}", e)));
            LogBuffer::new(config.log_capacity)
        }
    }
}
