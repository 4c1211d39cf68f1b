//! View Mode Toggle Component
//!
//! Grid / list switch. Only changes how results are drawn, never which.

use collection_view::{Browsable, CollectionView, ViewMode};
use leptos::prelude::*;

const MODES: &[(ViewMode, &str, &str)] = &[
    (ViewMode::Grid, "▦", "Grid view"),
    (ViewMode::List, "☰", "List view"),
];

#[component]
pub fn ViewModeToggle<T>(collection: CollectionView<T>) -> impl IntoView
where
    T: Browsable + Clone + PartialEq + Send + Sync + 'static,
    T::Category: Send + Sync + 'static,
{
    view! {
        <div class="view-toggle">
            {MODES.iter().map(|(mode, icon, title)| {
                let mode = *mode;
                view! {
                    <button
                        class=move || {
                            if collection.view_mode() == mode { "icon-btn active" } else { "icon-btn" }
                        }
                        title=*title
                        data-mode=mode.as_str()
                        on:click=move |_| collection.set_view_mode(mode)
                    >
                        {*icon}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
