//! Studio UI Entry Point

mod app;
mod auth;
mod catalog;
mod commands;
mod components;
mod config;
mod context;
mod format;
mod logging;
mod models;
mod pages;
mod store;

use app::{App, LoadError};
use catalog::Catalog;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = AppConfig::bundled();
    let logs = logging::init(&config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default config");
    }
    tracing::info!(app = %config.app_name, level = %config.log_level, "starting");

    match Catalog::load() {
        Ok(catalog) => mount_to_body(move || view! { <App config catalog logs /> }),
        Err(e) => {
            tracing::error!(error = %e, "fixture catalog failed to load");
            let message = e.to_string();
            mount_to_body(move || view! { <LoadError message /> })
        }
    }
}
