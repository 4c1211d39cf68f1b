//! Select Field Component
//!
//! Labelled `<select>` over a fixed list of `(value, label)` options.

use leptos::prelude::*;

#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label}</label>
            <select
                id=id
                class="select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options.iter().map(|(opt, text)| {
                    let opt = *opt;
                    view! {
                        <option value=opt selected=move || value.get() == opt>{*text}</option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
