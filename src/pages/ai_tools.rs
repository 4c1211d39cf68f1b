use leptos::prelude::*;

use crate::components::DashboardLayout;
use crate::context::use_app_context;

/// Tool catalogue. "Launch" buttons are placeholders; tools that are not
/// out yet get a disabled "Soon" button.
#[component]
pub fn AiToolsPage() -> impl IntoView {
    let ctx = use_app_context();
    let tools = ctx.catalog.ai_tools.clone();

    view! {
        <DashboardLayout>
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>"AI Creative Tools"</h1>
                        <p class="muted">"Supercharge your creativity with AI-powered design tools."</p>
                    </div>
                </div>

                <div class="tool-grid">
                    {tools.into_iter().map(|tool| {
                        let launchable = tool.status.is_launchable();
                        view! {
                            <div class="card tool-card">
                                <div class="tool-card-head">
                                    <div class=format!("tool-icon gradient-{}", tool.gradient)>{tool.icon}</div>
                                    <span class=tool.status.badge_class()>{tool.status.label()}</span>
                                </div>
                                <h3>{tool.title}</h3>
                                <p class="muted small">{tool.description}</p>
                                <div class="tool-card-foot">
                                    <span class="badge outline">{tool.category}</span>
                                    <button class="btn primary small" disabled=!launchable>
                                        {if launchable { "Launch" } else { "Soon" }}
                                    </button>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="card spotlight">
                    <div class="spotlight-icon">"🎬"</div>
                    <div class="spotlight-body">
                        <h3>"New: AI Storyboard Generator"</h3>
                        <p class="muted">"Transform your scripts into visual storyboards automatically."</p>
                    </div>
                    <a href="/storyboard" class="btn primary">"Try Now"</a>
                </div>
            </div>
        </DashboardLayout>
    }
}
