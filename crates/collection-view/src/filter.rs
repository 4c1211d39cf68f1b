//! Filter State and Matching
//!
//! Pure functions over `&[T]`. Nothing here allocates new items or reorders
//! the source list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An entry that can be shown on a list page.
pub trait Browsable {
    /// Discriminator used by the category tabs
    type Category: Copy + Eq;

    /// Unique key within one source list
    fn key(&self) -> &str;

    fn category(&self) -> Self::Category;

    /// Text fields the search box looks at (primary, secondary, tags...)
    fn search_fields(&self) -> Vec<&str>;
}

/// Grid tiles or full-width rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Category tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn admits(&self, category: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Which placeholder to show when nothing is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// A search term is active and filtered everything out
    NoMatches,
    /// No search term; the list (or the selected tab) is simply empty
    NothingYet,
}

/// User-controlled view configuration for one list page.
///
/// Every transition is a plain field overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C> {
    pub search_term: String,
    pub category: CategoryFilter<C>,
    pub view_mode: ViewMode,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: CategoryFilter::All,
            view_mode: ViewMode::Grid,
        }
    }
}

impl<C> FilterState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter<C>) {
        self.category = category;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    /// Back to `("", All, Grid)`
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.is_empty()
    }
}

/// Case-insensitive substring match against any of the item's search fields.
fn text_matches<T: Browsable>(item: &T, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Both the category and the search term must accept the item.
pub fn matches<T: Browsable>(item: &T, filter: &FilterState<T::Category>) -> bool {
    filter.category.admits(&item.category())
        && text_matches(item, &filter.search_term.to_lowercase())
}

/// Visible subset of `items`, in source order.
pub fn apply<'a, T: Browsable>(items: &'a [T], filter: &FilterState<T::Category>) -> Vec<&'a T> {
    let needle = filter.search_term.to_lowercase();
    items
        .iter()
        .filter(|item| filter.category.admits(&item.category()) && text_matches(*item, &needle))
        .collect()
}

pub fn empty_reason<C>(filter: &FilterState<C>) -> EmptyReason {
    if filter.is_searching() {
        EmptyReason::NoMatches
    } else {
        EmptyReason::NothingYet
    }
}

/// First key that appears twice, if any
pub fn find_duplicate_key<T: Browsable>(items: &[T]) -> Option<&str> {
    let mut seen = HashSet::new();
    items.iter().map(|item| item.key()).find(|key| !seen.insert(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Image,
        Video,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: &'static str,
        name: &'static str,
        note: &'static str,
        kind: Kind,
        tags: Vec<&'static str>,
    }

    impl Browsable for Entry {
        type Category = Kind;

        fn key(&self) -> &str {
            self.id
        }

        fn category(&self) -> Kind {
            self.kind
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name, self.note];
            fields.extend(self.tags.iter().copied());
            fields
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry {
                id: "1",
                name: "AI Generated Logo",
                note: "",
                kind: Kind::Image,
                tags: vec!["logo", "ai-generated", "brand"],
            },
            Entry {
                id: "2",
                name: "Product Demo Video",
                note: "",
                kind: Kind::Video,
                tags: vec!["video", "demo", "product"],
            },
            Entry {
                id: "3",
                name: "Brand Colors Palette",
                note: "Primary swatches",
                kind: Kind::Image,
                tags: vec!["colors", "brand", "palette"],
            },
        ]
    }

    fn ids(result: &[&Entry]) -> Vec<&'static str> {
        result.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_default_filter_returns_source_unchanged() {
        let items = sample();
        let filter = FilterState::new();
        let result = apply(&items, &filter);
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_tags() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("logo");
        let result = apply(&items, &filter);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_secondary_text() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("SWATCH");
        assert_eq!(ids(&apply(&items, &filter)), vec!["3"]);

        filter.set_search("Demo");
        assert_eq!(ids(&apply(&items, &filter)), vec!["2"]);
    }

    #[test]
    fn test_no_match_is_empty_with_search_reason() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("zzz-nothing");
        assert!(apply(&items, &filter).is_empty());
        assert_eq!(empty_reason(&filter), EmptyReason::NoMatches);
    }

    #[test]
    fn test_empty_tab_without_search_reason() {
        let items: Vec<Entry> = sample().into_iter().filter(|e| e.kind == Kind::Image).collect();
        let mut filter = FilterState::new();
        filter.set_category(CategoryFilter::Only(Kind::Video));
        assert!(apply(&items, &filter).is_empty());
        assert_eq!(empty_reason(&filter), EmptyReason::NothingYet);
    }

    #[test]
    fn test_category_and_search_compose() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("brand");
        assert_eq!(ids(&apply(&items, &filter)), vec!["1", "3"]);

        filter.set_category(CategoryFilter::Only(Kind::Video));
        assert!(apply(&items, &filter).is_empty());

        // narrowing the category never brings back a search miss
        filter.set_search("video");
        filter.set_category(CategoryFilter::Only(Kind::Image));
        assert!(apply(&items, &filter).is_empty());
    }

    #[test]
    fn test_every_result_matches_both_conditions() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("a");
        filter.set_category(CategoryFilter::Only(Kind::Image));
        for entry in apply(&items, &filter) {
            assert!(matches(entry, &filter));
            assert_eq!(entry.kind, Kind::Image);
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("o");
        let once: Vec<Entry> = apply(&items, &filter).into_iter().cloned().collect();
        let twice: Vec<Entry> = apply(&once, &filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_view_mode_does_not_change_result() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search("brand");
        let grid = ids(&apply(&items, &filter));
        filter.toggle_view_mode();
        assert_eq!(filter.view_mode, ViewMode::List);
        let list = ids(&apply(&items, &filter));
        assert_eq!(grid, list);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filter: FilterState<Kind> = FilterState::new();
        filter.set_search("x");
        filter.set_category(CategoryFilter::Only(Kind::Video));
        filter.set_view_mode(ViewMode::List);
        filter.reset();
        assert_eq!(filter, FilterState::default());
        assert!(!filter.is_searching());
    }

    #[test]
    fn test_whitespace_term_is_not_trimmed() {
        let items = sample();
        let mut filter = FilterState::new();
        filter.set_search(" ");
        // every sample name contains a space
        assert_eq!(apply(&items, &filter).len(), 3);
        filter.set_search("  ");
        assert!(apply(&items, &filter).is_empty());
    }

    #[test]
    fn test_find_duplicate_key() {
        let mut items = sample();
        assert_eq!(find_duplicate_key(&items), None);
        let mut dup = items[0].clone();
        dup.name = "Copy";
        items.push(dup);
        assert_eq!(find_duplicate_key(&items), Some("1"));
    }

    #[test]
    fn test_view_mode_toggle_round_trip() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled().as_str(), "grid");
    }
}
