//! Browser Commands
//!
//! Thin async wrappers over browser APIs that can fail.

mod clipboard;

pub use clipboard::*;
