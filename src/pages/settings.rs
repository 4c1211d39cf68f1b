//! Settings Page
//!
//! Six tabs. Switches and selects write straight into the global store;
//! the profile form is local and "Save Changes" only confirms with a toast.

use leptos::prelude::*;

use crate::components::{DashboardLayout, ProgressBar, SelectField, TabBar, ToggleSwitch};
use crate::context::{use_app_context, use_toast};
use crate::format::percent;
use crate::store::{use_app_store, AppStateStoreFields, AppStore, Preferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Notifications,
    Appearance,
    Privacy,
    Ai,
    Data,
}

const SETTINGS_TABS: &[(SettingsTab, &str)] = &[
    (SettingsTab::General, "👤 General"),
    (SettingsTab::Notifications, "🔔 Notifications"),
    (SettingsTab::Appearance, "🎨 Appearance"),
    (SettingsTab::Privacy, "🛡️ Privacy"),
    (SettingsTab::Ai, "✨ AI"),
    (SettingsTab::Data, "💾 Data"),
];

const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
];

const TIMEZONES: &[(&str, &str)] = &[
    ("UTC-5", "Eastern Time (UTC-5)"),
    ("UTC-6", "Central Time (UTC-6)"),
    ("UTC-7", "Mountain Time (UTC-7)"),
    ("UTC-8", "Pacific Time (UTC-8)"),
];

const THEMES: &[(&str, &str)] = &[("light", "Light"), ("dark", "Dark"), ("system", "System")];

const DENSITIES: &[(&str, &str)] = &[
    ("compact", "Compact"),
    ("comfortable", "Comfortable"),
    ("spacious", "Spacious"),
];

const AI_STYLES: &[(&str, &str)] = &[
    ("conservative", "Conservative"),
    ("balanced", "Balanced"),
    ("creative", "Creative"),
    ("experimental", "Experimental"),
];

const AI_MODELS: &[(&str, &str)] = &[
    ("stable", "Stable (v2.1)"),
    ("latest", "Latest (v3.0)"),
    ("beta", "Beta (v3.1)"),
];

/// Log lines shown in the diagnostics panel
const DIAGNOSTIC_ROWS: usize = 25;

/// Select bound to one string field of the stored preferences
fn preference_select(
    store: AppStore,
    id: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    read: fn(&Preferences) -> &String,
    write: fn(&mut Preferences, String),
) -> impl IntoView {
    let value = Signal::derive(move || store.preferences().with(|p| read(p).clone()));
    let on_change = Callback::new(move |v: String| {
        tracing::debug!(field = id, value = %v, "preference changed");
        store.preferences().update(|p| write(p, v));
    });

    view! { <SelectField id label options value on_change /> }
}

#[component]
fn SettingRow(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="setting-row">
            <div>
                <label for=id>{label}</label>
                <p class="muted small">{description}</p>
            </div>
            <ToggleSwitch id checked on_toggle />
        </div>
    }
}

#[component]
fn GeneralTab() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let toast = use_toast();

    let session = store.session().get_untracked();
    let full_name = session
        .as_ref()
        .map(|s| s.display_name.clone())
        .unwrap_or_else(|| ctx.catalog.profile.name.clone());
    let mut parts = full_name.splitn(2, ' ');
    let first_name = RwSignal::new(parts.next().unwrap_or_default().to_string());
    let last_name = RwSignal::new(parts.next().unwrap_or_default().to_string());
    let email = RwSignal::new(
        session
            .map(|s| s.email)
            .unwrap_or_else(|| "john.doe@example.com".to_string()),
    );
    let company = RwSignal::new(ctx.catalog.profile.company.clone());
    let bio = RwSignal::new(String::new());

    let save = move |_| {
        tracing::info!(
            first_name = %first_name.get_untracked(),
            last_name = %last_name.get_untracked(),
            "profile settings saved"
        );
        toast.success("Settings saved successfully!");
    };

    let text_input = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-field">
                <label for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Profile Information"</h2>
            <p class="muted small">"Update your personal information and profile details"</p>
            <div class="form-grid two">
                {text_input("firstName", "First Name", "text", first_name)}
                {text_input("lastName", "Last Name", "text", last_name)}
            </div>
            {text_input("email", "Email Address", "email", email)}
            {text_input("company", "Company", "text", company)}
            <div class="form-field">
                <label for="bio">"Bio"</label>
                <textarea
                    id="bio"
                    placeholder="Tell us about yourself..."
                    prop:value=move || bio.get()
                    on:input=move |ev| bio.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button class="btn primary" on:click=save>"💾 Save Changes"</button>
        </section>

        <section class="card">
            <h2 class="card-title">"Account Preferences"</h2>
            <div class="form-grid two">
                {preference_select(store, "language", "Language", LANGUAGES, |p| &p.language, |p, v| p.language = v)}
                {preference_select(store, "timezone", "Timezone", TIMEZONES, |p| &p.timezone, |p, v| p.timezone = v)}
            </div>
            <SettingRow
                id="autoSave"
                label="Auto-save projects"
                description="Automatically save your work every 30 seconds"
                checked=Signal::derive(move || store.preferences().with(|p| p.auto_save))
                on_toggle=move |on: bool| store.preferences().update(|p| p.auto_save = on)
            />
        </section>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <h2 class="card-title">"Notification Preferences"</h2>
            <p class="muted small">"Choose how you want to be notified about updates and activities"</p>
            <SettingRow
                id="notify-email"
                label="Email Notifications"
                description="Receive notifications via email"
                checked=Signal::derive(move || store.notifications().with(|n| n.email))
                on_toggle=move |on: bool| store.notifications().update(|n| n.email = on)
            />
            <SettingRow
                id="notify-push"
                label="Push Notifications"
                description="Receive browser push notifications"
                checked=Signal::derive(move || store.notifications().with(|n| n.push))
                on_toggle=move |on: bool| store.notifications().update(|n| n.push = on)
            />
            <SettingRow
                id="notify-marketing"
                label="Marketing Updates"
                description="Receive updates about new features and promotions"
                checked=Signal::derive(move || store.notifications().with(|n| n.marketing))
                on_toggle=move |on: bool| store.notifications().update(|n| n.marketing = on)
            />
            <SettingRow
                id="notify-updates"
                label="Product Updates"
                description="Get notified about important product updates"
                checked=Signal::derive(move || store.notifications().with(|n| n.updates))
                on_toggle=move |on: bool| store.notifications().update(|n| n.updates = on)
            />
        </section>
    }
}

#[component]
fn AppearanceTab() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <h2 class="card-title">"Theme & Display"</h2>
            <p class="muted small">"Customize how the application looks and feels"</p>
            {preference_select(store, "theme", "Theme", THEMES, |p| &p.theme, |p, v| p.theme = v)}
            {preference_select(store, "density", "Display Density", DENSITIES, |p| &p.density, |p, v| p.density = v)}
        </section>
    }
}

#[component]
fn PrivacyTab() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <h2 class="card-title">"Privacy & Security"</h2>
            <p class="muted small">"Control your privacy settings and data sharing preferences"</p>
            <SettingRow
                id="analytics"
                label="Analytics & Usage Data"
                description="Help improve our service by sharing usage data"
                checked=Signal::derive(move || store.privacy().with(|p| p.analytics))
                on_toggle=move |on: bool| store.privacy().update(|p| p.analytics = on)
            />
            <SettingRow
                id="error-reporting"
                label="Error Reporting"
                description="Automatically report errors to help us fix issues"
                checked=Signal::derive(move || store.privacy().with(|p| p.error_reporting))
                on_toggle=move |on: bool| store.privacy().update(|p| p.error_reporting = on)
            />
            <div class="button-stack">
                <button class="btn outline">"Change Password"</button>
                <button class="btn outline">"Enable Two-Factor Authentication"</button>
            </div>
        </section>
    }
}

#[component]
fn AiTab() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section class="card">
            <h2 class="card-title">"AI Preferences"</h2>
            <p class="muted small">"Configure how AI tools work for you"</p>
            <SettingRow
                id="ai-suggestions"
                label="AI Suggestions"
                description="Show AI-powered creative suggestions"
                checked=Signal::derive(move || store.preferences().with(|p| p.ai_suggestions))
                on_toggle=move |on: bool| store.preferences().update(|p| p.ai_suggestions = on)
            />
            {preference_select(store, "aiStyle", "Preferred AI Style", AI_STYLES, |p| &p.ai_style, |p, v| p.ai_style = v)}
            {preference_select(store, "aiModel", "AI Model Version", AI_MODELS, |p| &p.ai_model, |p, v| p.ai_model = v)}
        </section>
    }
}

#[component]
fn DataTab() -> impl IntoView {
    let ctx = use_app_context();
    let stats = ctx.catalog.profile.stats;
    let logs = ctx.logs.clone();
    let (refresh, set_refresh) = signal(0u32);

    let records = {
        let logs = logs.clone();
        move || {
            refresh.track();
            logs.recent(DIAGNOSTIC_ROWS)
        }
    };
    let held = move || {
        refresh.track();
        format!("{} of {} records held", logs.len(), logs.capacity())
    };
    let clear_logs = {
        let logs = ctx.logs.clone();
        move |_| {
            logs.clear();
            set_refresh.update(|n| *n += 1);
        }
    };

    view! {
        <section class="card">
            <h2 class="card-title">"Data Management"</h2>
            <p class="muted small">"Export, import, or delete your data"</p>

            <div class="data-block">
                <h3>"Export Data"</h3>
                <p class="muted small">"Download all your data including projects, assets, and settings"</p>
                <button class="btn outline">"⬇ Export My Data"</button>
            </div>

            <div class="data-block">
                <h3>"Storage Usage"</h3>
                <p class="muted small">
                    {format!(
                        "You're using {} GB of {} GB available storage",
                        stats.storage_used_gb, stats.storage_total_gb
                    )}
                </p>
                <ProgressBar
                    label="Storage"
                    value=stats.storage_used_gb
                    goal=stats.storage_total_gb
                    caption=format!("{}% used", percent(stats.storage_used_gb, stats.storage_total_gb))
                />
            </div>

            <div class="data-block danger">
                <h3>"Danger Zone"</h3>
                <p class="muted small">"These actions are permanent and cannot be undone"</p>
                <div class="button-row">
                    <button class="btn destructive">"🗑 Delete All Projects"</button>
                    <button class="btn destructive">"🗑 Delete Account"</button>
                </div>
            </div>
        </section>

        <section class="card">
            <div class="card-head">
                <div>
                    <h2 class="card-title">"Diagnostics"</h2>
                    <p class="muted small">{held}</p>
                </div>
                <div class="button-row">
                    <button class="btn outline small" on:click=move |_| set_refresh.update(|n| *n += 1)>
                        "↻ Refresh"
                    </button>
                    <button class="btn outline small" on:click=clear_logs>"Clear"</button>
                </div>
            </div>
            <ul class="log-list mono">
                {move || {
                    records()
                        .into_iter()
                        .map(|record| {
                            let class = format!("log-line level-{}", record.level.to_string().to_lowercase());
                            view! { <li class=class>{record.to_string()}</li> }
                        })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let tab = RwSignal::new(SettingsTab::General);

    view! {
        <DashboardLayout>
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>"⚙️ Settings"</h1>
                        <p class="muted">"Manage your account and application preferences"</p>
                    </div>
                </div>

                <TabBar tabs=SETTINGS_TABS active=tab />
                <div class="tab-content">
                    {move || match tab.get() {
                        SettingsTab::General => view! { <GeneralTab /> }.into_any(),
                        SettingsTab::Notifications => view! { <NotificationsTab /> }.into_any(),
                        SettingsTab::Appearance => view! { <AppearanceTab /> }.into_any(),
                        SettingsTab::Privacy => view! { <PrivacyTab /> }.into_any(),
                        SettingsTab::Ai => view! { <AiTab /> }.into_any(),
                        SettingsTab::Data => view! { <DataTab /> }.into_any(),
                    }}
                </div>
            </div>
        </DashboardLayout>
    }
}
