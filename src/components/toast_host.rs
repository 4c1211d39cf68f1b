//! Toast Host Component
//!
//! Fixed stack in the corner of the viewport that renders the live toasts.

use leptos::prelude::*;

use crate::context::use_toast;

#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = use_toast();

    view! {
        <div class="toast-stack">
            <For
                each=move || toast.toasts.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() role="status">
                            <span class="toast-message">{t.message}</span>
                            <button class="toast-close" on:click=move |_| toast.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
