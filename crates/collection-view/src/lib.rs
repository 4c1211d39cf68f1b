//! Collection View
//!
//! Client-side browsing for small, static lists: a search term, a category
//! filter and a grid/list toggle over an immutable source list.
//!
//! The filtering itself lives in [`filter`] and is plain Rust; [`hook`] wires
//! it into Leptos signals for the pages.

pub mod filter;
pub mod hook;

pub use filter::{
    apply, empty_reason, find_duplicate_key, matches, Browsable, CategoryFilter, EmptyReason,
    FilterState, ViewMode,
};
pub use hook::{use_collection_view, CollectionView};
