//! Collection Results Component
//!
//! Renders the visible items of a collection view with the card renderer in
//! grid mode or the row renderer in list mode. When nothing is visible the
//! children (an `EmptyState`) are shown instead.

use collection_view::{Browsable, CollectionView, ViewMode};
use leptos::prelude::*;

#[component]
pub fn CollectionResults<T>(
    collection: CollectionView<T>,
    #[prop(into)] card: Callback<T, AnyView>,
    #[prop(into)] row: Callback<T, AnyView>,
    children: ChildrenFn,
) -> impl IntoView
where
    T: Browsable + Clone + PartialEq + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    let results = move || {
        let items = collection.visible.get();
        if items.is_empty() {
            return children();
        }
        match collection.view_mode() {
            ViewMode::Grid => view! {
                <div class="collection-grid">
                    {items.into_iter().map(|item| card.run(item)).collect_view()}
                </div>
            }
            .into_any(),
            ViewMode::List => view! {
                <div class="collection-list">
                    {items.into_iter().map(|item| row.run(item)).collect_view()}
                </div>
            }
            .into_any(),
        }
    };

    view! { {results} }
}
