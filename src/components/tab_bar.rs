//! Tab Bar Component
//!
//! Generic tab strip over a page-local key type.

use leptos::prelude::*;

#[component]
pub fn TabBar<K>(tabs: &'static [(K, &'static str)], active: RwSignal<K>) -> impl IntoView
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    view! {
        <div class="tabs-list">
            {tabs.iter().map(|(key, label)| {
                let key = *key;
                view! {
                    <button
                        class=move || if active.get() == key { "tab-trigger active" } else { "tab-trigger" }
                        on:click=move |_| active.set(key)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
