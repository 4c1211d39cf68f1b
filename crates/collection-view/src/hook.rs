//! Leptos binding for the collection filter.

use leptos::prelude::*;

use crate::filter::{self, Browsable, CategoryFilter, EmptyReason, FilterState, ViewMode};

/// Reactive handle returned by [`use_collection_view`].
///
/// `visible` is recomputed whenever the filter state changes; the source
/// list itself never changes after mount. Filter state is only reachable
/// through the setters below.
pub struct CollectionView<T>
where
    T: Browsable + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    state: RwSignal<FilterState<T::Category>>,
    pub visible: Memo<Vec<T>>,
}

// Manual impls: derive would demand `T: Copy`.
impl<T> Clone for CollectionView<T>
where
    T: Browsable + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CollectionView<T>
where
    T: Browsable + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
}

/// Set up filter state for a list page. State starts at `("", All, Grid)`
/// and is dropped with the owning component.
pub fn use_collection_view<T>(items: Vec<T>) -> CollectionView<T>
where
    T: Browsable + Clone + PartialEq + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    let source = StoredValue::new(items);
    let state = RwSignal::new(FilterState::<T::Category>::new());
    let visible = Memo::new(move |_| {
        state.with(|filter| {
            source.with_value(|items| filter::apply(items, filter).into_iter().cloned().collect())
        })
    });

    CollectionView { state, visible }
}

impl<T> CollectionView<T>
where
    T: Browsable + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    pub fn search_term(&self) -> String {
        self.state.with(|f| f.search_term.clone())
    }

    pub fn set_search(&self, term: String) {
        self.state.update(|f| f.set_search(term));
    }

    pub fn category(&self) -> CategoryFilter<T::Category> {
        self.state.with(|f| f.category)
    }

    pub fn set_category(&self, category: CategoryFilter<T::Category>) {
        self.state.update(|f| f.set_category(category));
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.with(|f| f.view_mode)
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.state.update(|f| f.set_view_mode(mode));
    }

    pub fn empty_reason(&self) -> EmptyReason {
        self.state.with(filter::empty_reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Clip {
        id: &'static str,
        title: &'static str,
        kind: u8,
        tags: Vec<&'static str>,
    }

    impl Browsable for Clip {
        type Category = u8;

        fn key(&self) -> &str {
            self.id
        }

        fn category(&self) -> u8 {
            self.kind
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.title];
            fields.extend(self.tags.iter().copied());
            fields
        }
    }

    fn clips() -> Vec<Clip> {
        vec![
            Clip { id: "1", title: "AI Generated Logo", kind: 1, tags: vec!["logo", "brand"] },
            Clip { id: "2", title: "Product Demo Video", kind: 2, tags: vec!["demo"] },
            Clip { id: "3", title: "Brand Colors Palette", kind: 1, tags: vec!["colors"] },
        ]
    }

    fn visible_ids(view: &CollectionView<Clip>) -> Vec<&'static str> {
        view.visible.get_untracked().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_visible_starts_as_source_order() {
        Owner::new().with(|| {
            let view = use_collection_view(clips());
            assert_eq!(visible_ids(&view), vec!["1", "2", "3"]);
            assert_eq!(view.view_mode(), ViewMode::Grid);
            assert_eq!(view.category(), CategoryFilter::All);
        });
    }

    #[test]
    fn test_setters_recompute_visible() {
        Owner::new().with(|| {
            let view = use_collection_view(clips());

            view.set_search("LOGO".to_string());
            assert_eq!(visible_ids(&view), vec!["1"]);

            view.set_view_mode(ViewMode::List);
            assert_eq!(view.view_mode(), ViewMode::List);
            assert_eq!(visible_ids(&view), vec!["1"]);

            view.set_category(CategoryFilter::Only(2));
            assert!(view.visible.get_untracked().is_empty());
            assert_eq!(view.empty_reason(), EmptyReason::NoMatches);

            view.set_search(String::new());
            assert_eq!(visible_ids(&view), vec!["2"]);
            assert_eq!(view.search_term(), "");
        });
    }

    #[test]
    fn test_empty_tab_without_search_is_nothing_yet() {
        Owner::new().with(|| {
            let view = use_collection_view(clips());
            view.set_category(CategoryFilter::Only(9));
            assert!(view.visible.get_untracked().is_empty());
            assert_eq!(view.empty_reason(), EmptyReason::NothingYet);
        });
    }
}
