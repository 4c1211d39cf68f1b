//! Category Tabs Component
//!
//! One button per category plus "All", driving a collection view's
//! category filter.

use collection_view::{Browsable, CategoryFilter, CollectionView};
use leptos::prelude::*;

/// Tab strip for a collection view
///
/// `tabs` pairs each filter with its label, in display order.
#[component]
pub fn CategoryTabs<T>(
    collection: CollectionView<T>,
    tabs: &'static [(CategoryFilter<T::Category>, &'static str)],
) -> impl IntoView
where
    T: Browsable + Clone + PartialEq + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    view! {
        <div class="tabs-list">
            {tabs.iter().map(|(filter, label)| {
                let filter = *filter;
                let is_selected = move || collection.category() == filter;
                view! {
                    <button
                        class=move || if is_selected() { "tab-trigger active" } else { "tab-trigger" }
                        on:click=move |_| collection.set_category(filter)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
