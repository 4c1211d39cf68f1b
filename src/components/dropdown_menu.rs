//! Dropdown Menu Component
//!
//! Small "⋯" menu used on cards and rows. The entries are supplied by the
//! caller; clicking any of them closes the menu.

use leptos::prelude::*;

/// Inline actions menu
///
/// # Arguments
/// * `trigger_class` - CSS class for the trigger button (defaults to "icon-btn ghost")
/// * `children` - Menu entries, usually `<button class="dropdown-item">`
#[component]
pub fn DropdownMenu(
    #[prop(into, optional)] trigger_class: Option<String>,
    #[prop(into, default = "⋯".to_string())] trigger: String,
    children: Children,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let trigger_class = trigger_class.unwrap_or_else(|| "icon-btn ghost".to_string());

    view! {
        <div class="dropdown" on:mouseleave=move |_| set_open.set(false)>
            <button
                class=trigger_class
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.update(|o| *o = !*o);
                }
            >
                {trigger}
            </button>
            <div
                class=move || if open.get() { "dropdown-content open" } else { "dropdown-content" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_open.set(false);
                }
            >
                {children()}
            </div>
        </div>
    }
}
