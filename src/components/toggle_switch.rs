//! Toggle Switch Component

use leptos::prelude::*;

/// On/off switch. The new value is handed to `on_toggle`; the caller owns
/// the state.
#[component]
pub fn ToggleSwitch(
    #[prop(into)] id: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <button
            id=id
            role="switch"
            class=move || if checked.get() { "switch on" } else { "switch" }
            aria-checked=move || if checked.get() { "true" } else { "false" }
            on:click=move |_| on_toggle.run(!checked.get_untracked())
        >
            <span class="switch-thumb"></span>
        </button>
    }
}
