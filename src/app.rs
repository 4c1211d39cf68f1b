//! Studio UI App
//!
//! Root component: context providers, theme sync and client-side routing.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use reactive_stores::Store;
use rolling_logger::LogBuffer;

use crate::catalog::Catalog;
use crate::components::ToastHost;
use crate::config::AppConfig;
use crate::context::{AppContext, ToastContext};
use crate::pages::{
    AiToolsPage, AssetsPage, AuthPage, BrandKitPage, DashboardPage, IndexPage, NotFoundPage,
    ProfilePage, ProjectsPage, SettingsPage, StoryboardPage,
};
use crate::store::{AppState, AppStateStoreFields};

/// Mirror the theme preference onto `<body data-theme=...>`.
fn apply_theme(theme: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if let Err(e) = body.set_attribute("data-theme", theme) {
        tracing::warn!(?e, "could not apply theme");
    }
}

#[component]
pub fn App(config: AppConfig, catalog: Catalog, logs: LogBuffer) -> impl IntoView {
    let toasts = ToastContext::new(config.toast_duration_ms);
    let store = Store::new(AppState::default());

    provide_context(AppContext::new(config, catalog, logs));
    provide_context(toasts);
    provide_context(store);

    Effect::new(move |_| {
        let theme = store.preferences().with(|p| p.theme.clone());
        tracing::debug!(%theme, "theme changed");
        apply_theme(&theme);
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=StaticSegment("") view=IndexPage />
                <Route path=StaticSegment("auth") view=AuthPage />
                <Route path=StaticSegment("dashboard") view=DashboardPage />
                <Route path=StaticSegment("ai-tools") view=AiToolsPage />
                <Route path=StaticSegment("projects") view=ProjectsPage />
                <Route path=StaticSegment("assets") view=AssetsPage />
                <Route path=StaticSegment("brand-kit") view=BrandKitPage />
                <Route path=StaticSegment("storyboard") view=StoryboardPage />
                <Route path=StaticSegment("settings") view=SettingsPage />
                <Route path=StaticSegment("profile") view=ProfilePage />
            </Routes>
        </Router>
        <ToastHost />
    }
}

/// Shown instead of the router when the bundled data is unusable.
#[component]
pub fn LoadError(message: String) -> impl IntoView {
    view! {
        <div class="load-error">
            <h1>"Something went wrong"</h1>
            <p class="muted">"The application data could not be loaded."</p>
            <pre class="mono small">{message}</pre>
        </div>
    }
}
