//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Lives for the
//! page lifetime only; a reload resets everything.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::Session;

#[derive(Clone, Debug, PartialEq)]
pub struct Preferences {
    pub theme: String,
    pub density: String,
    pub language: String,
    pub timezone: String,
    pub auto_save: bool,
    pub ai_suggestions: bool,
    pub ai_style: String,
    pub ai_model: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            density: "comfortable".to_string(),
            language: "en".to_string(),
            timezone: "UTC-5".to_string(),
            auto_save: true,
            ai_suggestions: true,
            ai_style: "balanced".to_string(),
            ai_model: "latest".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub marketing: bool,
    pub updates: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: false,
            marketing: true,
            updates: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrivacyPrefs {
    pub analytics: bool,
    pub error_reporting: bool,
}

impl Default for PrivacyPrefs {
    fn default() -> Self {
        Self {
            analytics: true,
            error_reporting: true,
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in user, if any
    pub session: Option<Session>,
    pub sidebar_collapsed: bool,
    pub preferences: Preferences,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacyPrefs,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &AppStore, session: Session) {
    store.session().set(Some(session));
}

pub fn store_sign_out(store: &AppStore) {
    store.session().set(None);
}

pub fn store_toggle_sidebar(store: &AppStore) {
    store.sidebar_collapsed().update(|collapsed| *collapsed = !*collapsed);
}

/// Name for greetings; falls back to the profile fixture's name.
pub fn display_name(session: Option<&Session>, fallback: &str) -> String {
    session
        .map(|s| s.first_name().to_string())
        .unwrap_or_else(|| fallback.split_whitespace().next().unwrap_or(fallback).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_defaults_match_settings_page() {
        let state = AppState::default();
        assert!(state.session.is_none());
        assert_eq!(state.preferences.theme, "dark");
        assert!(!state.notifications.push);
        assert!(state.privacy.analytics);
    }

    #[test]
    fn test_display_name() {
        let session = Session {
            email: "sam@x.io".to_string(),
            display_name: "Sam Rivera".to_string(),
            started_at: Utc::now(),
        };
        assert_eq!(display_name(Some(&session), "John Doe"), "Sam");
        assert_eq!(display_name(None, "John Doe"), "John");
    }
}
