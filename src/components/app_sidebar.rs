//! App Sidebar Component
//!
//! Collapsible navigation with the main sections on top and account pages
//! at the bottom.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::context::use_app_context;
use crate::store::{store_toggle_sidebar, use_app_store, AppStateStoreFields};

#[derive(Clone, Copy)]
struct NavEntry {
    title: &'static str,
    href: &'static str,
    icon: &'static str,
}

const MAIN_NAV: &[NavEntry] = &[
    NavEntry { title: "Dashboard", href: "/dashboard", icon: "▦" },
    NavEntry { title: "AI Tools", href: "/ai-tools", icon: "✨" },
    NavEntry { title: "Projects", href: "/projects", icon: "📁" },
    NavEntry { title: "Assets", href: "/assets", icon: "🖼️" },
    NavEntry { title: "Brand Kit", href: "/brand-kit", icon: "🎨" },
    NavEntry { title: "Storyboard", href: "/storyboard", icon: "🎬" },
];

const BOTTOM_NAV: &[NavEntry] = &[
    NavEntry { title: "Settings", href: "/settings", icon: "⚙️" },
    NavEntry { title: "Profile", href: "/profile", icon: "👤" },
];

#[component]
fn NavLink(entry: NavEntry, collapsed: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == entry.href;

    view! {
        <a
            href=entry.href
            class=move || if is_active() { "nav-link active" } else { "nav-link" }
            title=entry.title
        >
            <span class="nav-icon">{entry.icon}</span>
            <Show when=move || !collapsed.get()>
                <span class="nav-label">{entry.title}</span>
            </Show>
        </a>
    }
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let collapsed = Signal::derive(move || store.sidebar_collapsed().get());

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-logo">
                <a href="/dashboard">
                    <img src="/logo.svg" alt=ctx.config.app_name.clone() />
                </a>
            </div>

            <nav class="sidebar-nav">
                <Show when=move || !collapsed.get()>
                    <div class="sidebar-group-label">"Main"</div>
                </Show>
                {MAIN_NAV.iter().map(|entry| view! { <NavLink entry=*entry collapsed /> }).collect_view()}
            </nav>

            <nav class="sidebar-nav bottom">
                {BOTTOM_NAV.iter().map(|entry| view! { <NavLink entry=*entry collapsed /> }).collect_view()}
            </nav>

            <button
                class="sidebar-toggle"
                title=move || if collapsed.get() { "Expand sidebar" } else { "Collapse sidebar" }
                on:click=move |_| store_toggle_sidebar(&store)
            >
                {move || if collapsed.get() { "»" } else { "«" }}
            </button>
        </aside>
    }
}
