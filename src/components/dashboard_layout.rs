//! Dashboard Layout Component
//!
//! Sidebar, top bar and the scrolling content column every signed-in page
//! is rendered into.

use leptos::prelude::*;

use super::{AppSidebar, TopBar};

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="dashboard-shell">
            <AppSidebar />
            <div class="dashboard-main">
                <TopBar />
                <main class="dashboard-content">{children()}</main>
            </div>
        </div>
    }
}
