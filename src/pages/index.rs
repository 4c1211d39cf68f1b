use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_app_context;

/// `/` has nothing of its own; everyone starts at sign in.
#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="splash">
            <div class="spinner"></div>
            <p class="muted">{format!("Loading {}...", ctx.config.app_name)}</p>
        </div>
        <Redirect path="/auth" />
    }
}
