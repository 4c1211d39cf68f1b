//! Progress Bar Component

use leptos::prelude::*;

use crate::format::{bar_width, percent};

/// Labelled bar filled to `value / goal`, capped at 100%.
#[component]
pub fn ProgressBar(
    #[prop(into)] label: String,
    value: f64,
    goal: f64,
    #[prop(into, optional)] caption: Option<String>,
) -> impl IntoView {
    let pct = percent(value, goal);

    view! {
        <div class="progress-row">
            <div class="progress-header">
                <span>{label}</span>
                <span class="muted">{caption.unwrap_or_else(|| format!("{}%", pct))}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=bar_width(pct)></div>
            </div>
        </div>
    }
}
