use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        tracing::warn!(path = %location.pathname.get_untracked(), "no route matched");
    });

    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p class="muted">"Oops! Page not found"</p>
            <a href="/dashboard" class="btn primary">"Return to Dashboard"</a>
        </div>
    }
}
