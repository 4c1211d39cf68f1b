//! Search Input Component
//!
//! Text box bound to a collection view's search term.

use collection_view::{Browsable, CollectionView};
use leptos::prelude::*;

#[component]
pub fn SearchInput<T>(
    collection: CollectionView<T>,
    #[prop(into)] placeholder: String,
) -> impl IntoView
where
    T: Browsable + Clone + PartialEq + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    view! {
        <div class="search-box">
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || collection.search_term()
                on:input=move |ev| collection.set_search(event_target_value(&ev))
            />
        </div>
    }
}
