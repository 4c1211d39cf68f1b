//! Profile Page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{DashboardLayout, ProgressBar, TabBar};
use crate::context::{use_app_context, use_toast};
use crate::format::{short_date, thousands};
use crate::models::{Achievement, ProfileActivity, UsageStats};
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Overview,
    Activity,
    Achievements,
    Statistics,
}

const PROFILE_TABS: &[(ProfileTab, &str)] = &[
    (ProfileTab::Overview, "Overview"),
    (ProfileTab::Activity, "Activity"),
    (ProfileTab::Achievements, "Achievements"),
    (ProfileTab::Statistics, "Statistics"),
];

/// Monthly targets the usage bars are measured against
const PROJECT_GOAL: f64 = 20.0;
const ASSET_GOAL: f64 = 100.0;
const GENERATION_GOAL: f64 = 200.0;

/// Items shown in the overview's short lists
const OVERVIEW_ITEMS: usize = 3;

fn activity_item(activity: ProfileActivity) -> impl IntoView {
    view! {
        <div class="activity-item bordered">
            <div class="activity-icon">{activity.kind.icon()}</div>
            <div class="row-body">
                <h3>{activity.title}</h3>
                <p class="muted small">{short_date(activity.date)}</p>
            </div>
            <span class="badge outline">{activity.status}</span>
        </div>
    }
}

fn achievement_card(achievement: Achievement) -> impl IntoView {
    let class = if achievement.unlocked { "card achievement" } else { "card achievement locked" };
    let footer = if achievement.unlocked {
        let date = achievement.date.map(short_date).unwrap_or_default();
        format!("✔ Unlocked {}", date).trim_end().to_string()
    } else {
        "🔒 Locked".to_string()
    };

    view! {
        <div class=class>
            <div class="achievement-icon">{achievement.icon}</div>
            <h3>{achievement.title}</h3>
            <p class="muted small">{achievement.description}</p>
            <span class="badge outline">{footer}</span>
        </div>
    }
}

#[component]
fn OverviewTab(stats: UsageStats, activities: Vec<ProfileActivity>, achievements: Vec<Achievement>) -> impl IntoView {
    let recent: Vec<_> = activities.into_iter().take(OVERVIEW_ITEMS).collect();
    let unlocked: Vec<_> = achievements
        .into_iter()
        .filter(|a| a.unlocked)
        .take(OVERVIEW_ITEMS)
        .collect();

    view! {
        <div class="profile-grid">
            <div class="profile-main">
                <section class="card">
                    <h2 class="card-title">"📈 Quick Stats"</h2>
                    <div class="quick-stats">
                        <div><div class="stat-value accent">{stats.projects_created}</div><div class="muted small">"Projects Created"</div></div>
                        <div><div class="stat-value accent">{stats.assets_uploaded}</div><div class="muted small">"Assets Uploaded"</div></div>
                        <div><div class="stat-value accent">{stats.ai_generations}</div><div class="muted small">"AI Generations"</div></div>
                        <div><div class="stat-value accent">{format!("{} GB", stats.storage_used_gb)}</div><div class="muted small">"Storage Used"</div></div>
                    </div>
                </section>

                <section class="card">
                    <h2 class="card-title">"Recent Activity"</h2>
                    <div class="activity-list">
                        {recent.into_iter().map(activity_item).collect_view()}
                    </div>
                </section>
            </div>

            <div class="profile-side">
                <section class="card">
                    <h2 class="card-title">"👑 Plan & Usage"</h2>
                    <ProgressBar
                        label="Storage"
                        value=stats.storage_used_gb
                        goal=stats.storage_total_gb
                        caption=format!("{} GB / {} GB", stats.storage_used_gb, stats.storage_total_gb)
                    />
                    <ProgressBar
                        label="AI Credits"
                        value=f64::from(stats.ai_credits_used)
                        goal=f64::from(stats.ai_credits_total)
                        caption=format!("{} / {}", thousands(stats.ai_credits_used), thousands(stats.ai_credits_total))
                    />
                    <button class="btn outline block">"Upgrade Plan"</button>
                </section>

                <section class="card">
                    <h2 class="card-title">"🏆 Recent Achievements"</h2>
                    {unlocked.into_iter().map(|a| view! {
                        <div class="achievement-row">
                            <span class="achievement-icon">{a.icon}</span>
                            <div>
                                <div class="strong small">{a.title}</div>
                                <div class="muted small">{a.description}</div>
                            </div>
                        </div>
                    }).collect_view()}
                </section>
            </div>
        </div>
    }
}

#[component]
fn StatisticsTab(stats: UsageStats, joined: String, plan: String) -> impl IntoView {
    view! {
        <div class="card-grid two">
            <section class="card">
                <h2 class="card-title">"Usage Statistics"</h2>
                <ProgressBar
                    label="Projects Created"
                    value=f64::from(stats.projects_created)
                    goal=PROJECT_GOAL
                    caption=stats.projects_created.to_string()
                />
                <ProgressBar
                    label="Assets Uploaded"
                    value=f64::from(stats.assets_uploaded)
                    goal=ASSET_GOAL
                    caption=stats.assets_uploaded.to_string()
                />
                <ProgressBar
                    label="AI Generations"
                    value=f64::from(stats.ai_generations)
                    goal=GENERATION_GOAL
                    caption=stats.ai_generations.to_string()
                />
            </section>

            <section class="card">
                <h2 class="card-title">"Account Details"</h2>
                <div class="detail-grid">
                    <div><span class="muted">"Member Since:"</span><div class="strong">{joined}</div></div>
                    <div><span class="muted">"Plan:"</span><div class="strong">{plan}</div></div>
                    <div>
                        <span class="muted">"Credits Used:"</span>
                        <div class="strong">
                            {format!("{} / {}", thousands(stats.ai_credits_used), thousands(stats.ai_credits_total))}
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let toast = use_toast();
    let navigate = use_navigate();
    let profile = ctx.catalog.profile.clone();

    let tab = RwSignal::new(ProfileTab::Overview);
    let (editing, set_editing) = signal(false);
    let headline = RwSignal::new(profile.headline.clone());

    let name = {
        let fallback = profile.name.clone();
        move || {
            store
                .session()
                .with(|s| s.as_ref().map(|s| s.display_name.clone()))
                .unwrap_or_else(|| fallback.clone())
        }
    };
    let initials = profile.initials();

    let toggle_edit = move |_| {
        if editing.get_untracked() {
            tracing::info!(headline = %headline.get_untracked(), "profile updated");
            toast.success("Profile updated");
        }
        set_editing.update(|e| *e = !*e);
    };

    let content = {
        let profile = profile.clone();
        move || {
            let stats = profile.stats;
            match tab.get() {
                ProfileTab::Overview => view! {
                    <OverviewTab
                        stats
                        activities=profile.activities.clone()
                        achievements=profile.achievements.clone()
                    />
                }
                .into_any(),
                ProfileTab::Activity => view! {
                    <section class="card">
                        <h2 class="card-title">"Activity History"</h2>
                        <div class="activity-list">
                            {profile.activities.clone().into_iter().map(activity_item).collect_view()}
                        </div>
                    </section>
                }
                .into_any(),
                ProfileTab::Achievements => view! {
                    <div class="card-grid four">
                        {profile.achievements.clone().into_iter().map(achievement_card).collect_view()}
                    </div>
                }
                .into_any(),
                ProfileTab::Statistics => view! {
                    <StatisticsTab stats joined=profile.joined.clone() plan=profile.plan.clone() />
                }
                .into_any(),
            }
        }
    };

    view! {
        <DashboardLayout>
            <div class="page">
                <section class="card profile-header">
                    <div class="avatar large">{initials}</div>
                    <div class="profile-summary">
                        <h1>{name}</h1>
                        <Show
                            when=move || editing.get()
                            fallback=move || view! { <p class="muted">{move || headline.get()}</p> }
                        >
                            <input
                                class="inline-input"
                                prop:value=move || headline.get()
                                on:input=move |ev| headline.set(event_target_value(&ev))
                            />
                        </Show>
                        <div class="meta-row">
                            <span>{format!("📍 {}", profile.location)}</span>
                            <span>{format!("🌐 {}", profile.website)}</span>
                            <span>{format!("🏢 {}", profile.company)}</span>
                            <span>{format!("📅 Joined {}", profile.joined)}</span>
                        </div>
                        <span class="badge accent">{format!("👑 {} Plan", profile.plan)}</span>
                    </div>
                    <div class="header-actions">
                        <button class="btn outline" on:click=move |_| navigate("/settings", Default::default())>
                            "⚙️ Settings"
                        </button>
                        <button class="btn primary" on:click=toggle_edit>
                            {move || if editing.get() { "💾 Save Profile" } else { "✎ Edit Profile" }}
                        </button>
                    </div>
                </section>

                <TabBar tabs=PROFILE_TABS active=tab />
                <div class="tab-content">{content}</div>
            </div>
        </DashboardLayout>
    }
}
