//! Top Bar Component
//!
//! Global search box, notification bell and the profile menu.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::{use_app_context, use_toast};
use crate::store::{display_name, store_sign_out, use_app_store, AppStateStoreFields};

/// Badge count until notifications have a source
const UNREAD_NOTIFICATIONS: u32 = 3;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let toast = use_toast();
    let navigate = use_navigate();

    let (search_query, set_search_query) = signal(String::new());
    let (menu_open, set_menu_open) = signal(false);

    let profile = ctx.catalog.profile.clone();
    let fallback_name = profile.name.clone();
    let user_name = move || {
        store
            .session()
            .with(|s| s.as_ref().map(|s| s.display_name.clone()))
            .unwrap_or_else(|| fallback_name.clone())
    };
    let plan = format!("{} Plan", profile.plan);

    let go_profile = {
        let navigate = navigate.clone();
        move |_| {
            set_menu_open.set(false);
            navigate("/profile", Default::default());
        }
    };
    let go_settings = {
        let navigate = navigate.clone();
        move |_| {
            set_menu_open.set(false);
            navigate("/settings", Default::default());
        }
    };

    let sign_out = move |_| {
        let name = store.session().with(|s| display_name(s.as_ref(), "user"));
        store_sign_out(&store);
        set_menu_open.set(false);
        tracing::info!(user = %name, "signed out");
        toast.success("Signed out successfully");
        navigate("/auth", Default::default());
    };

    view! {
        <header class="top-bar">
            <div class="search-box global">
                <span class="search-icon">"🔍"</span>
                <input
                    type="search"
                    placeholder="Search projects, assets, or ask AI..."
                    prop:value=move || search_query.get()
                    on:input=move |ev| set_search_query.set(event_target_value(&ev))
                />
            </div>

            <div class="top-bar-actions">
                <button
                    class="icon-btn notifications"
                    title="Notifications"
                    on:click=move |_| toast.info(format!("You have {} unread notifications", UNREAD_NOTIFICATIONS))
                >
                    "🔔"
                    <span class="badge counter">{UNREAD_NOTIFICATIONS}</span>
                </button>

                <div class="profile-menu">
                    <button
                        class="profile-trigger"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_menu_open.update(|open| *open = !*open);
                        }
                    >
                        <span class="avatar small">"👤"</span>
                        <span class="profile-text">
                            <span class="profile-name">{user_name}</span>
                            <span class="profile-plan">{plan}</span>
                        </span>
                        <span class="chevron">"▾"</span>
                    </button>

                    <div class=move || {
                        if menu_open.get() { "dropdown-content align-end open" } else { "dropdown-content align-end" }
                    }>
                        <button class="dropdown-item" on:click=go_profile>"👤 Profile"</button>
                        <button class="dropdown-item" on:click=go_settings>"⚙️ Settings"</button>
                        <button class="dropdown-item" on:click=move |_| set_menu_open.set(false)>
                            "💳 Billing"
                        </button>
                        <hr class="dropdown-separator" />
                        <button class="dropdown-item destructive" on:click=sign_out>
                            "↪ Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}
