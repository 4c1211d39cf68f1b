//! Clipboard Commands
//!
//! `navigator.clipboard.writeText` looked up dynamically, so browsers (or
//! insecure origins) without the async clipboard report `Unavailable`
//! instead of throwing.

use js_sys::{Function, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard is not available in this browser")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Copy text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let navigator = window.navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| ClipboardError::Unavailable)?
        .dyn_into::<Function>()
        .map_err(|_| ClipboardError::Unavailable)?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| ClipboardError::Rejected(describe(&e)))?
        .dyn_into::<Promise>()
        .map_err(|e| ClipboardError::Rejected(describe(&e)))?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe(&e)))
}
