//! Dashboard Page
//!
//! Greeting, stat cards, recent activity and AI suggestions.

use leptos::prelude::*;

use crate::components::DashboardLayout;
use crate::context::use_app_context;
use crate::models::ActivityStatus;
use crate::store::{display_name, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let data = ctx.catalog.dashboard.clone();
    let fallback = ctx.catalog.profile.name.clone();

    let greeting = move || {
        let name = store.session().with(|s| display_name(s.as_ref(), &fallback));
        format!("Welcome back, {}!", name)
    };

    view! {
        <DashboardLayout>
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>{greeting}</h1>
                        <p class="muted">"Let's create something amazing today."</p>
                    </div>
                </div>

                <div class="stat-grid">
                    {data.stats.into_iter().map(|stat| view! {
                        <div class="card stat-card">
                            <div>
                                <p class="muted small">{stat.title}</p>
                                <p class="stat-value">{stat.value}</p>
                                <p class="stat-change">{stat.change}</p>
                            </div>
                            <div class="stat-icon">{stat.icon}</div>
                        </div>
                    }).collect_view()}
                </div>

                <div class="two-column">
                    <section class="card">
                        <h2 class="card-title">"🕒 Recent Activities"</h2>
                        <ul class="activity-list">
                            {data.activities.into_iter().map(|entry| {
                                let dot = match entry.status {
                                    ActivityStatus::Completed => "status-dot done",
                                    ActivityStatus::Processing => "status-dot busy",
                                };
                                view! {
                                    <li class="activity-item">
                                        <span class=dot></span>
                                        <div>
                                            <p>{entry.action}</p>
                                            <p class="muted small">{entry.time}</p>
                                        </div>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                        <button class="btn outline block">"View All Activities"</button>
                    </section>

                    <section class="card">
                        <h2 class="card-title">"✨ AI Creative Suggestions"</h2>
                        <ul class="suggestion-list">
                            {data.suggestions.into_iter().map(|s| view! {
                                <li class="suggestion-item">
                                    <span class="suggestion-icon">{s.icon}</span>
                                    <div>
                                        <div class="suggestion-head">
                                            <h4>{s.title}</h4>
                                            <span class="badge outline">{s.category}</span>
                                        </div>
                                        <p class="muted small">{s.description}</p>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                        <button class="btn primary block">"Explore More AI Ideas"</button>
                    </section>
                </div>
            </div>
        </DashboardLayout>
    }
}
