//! Projects Page

use collection_view::{use_collection_view, CategoryFilter};
use leptos::prelude::*;

use crate::components::{
    empty_hint, CategoryTabs, CollectionResults, DashboardLayout, DropdownMenu, EmptyState,
    SearchInput, ViewModeToggle,
};
use crate::context::use_app_context;
use crate::format::short_date;
use crate::models::{Project, ProjectStatus};

const PROJECT_TABS: &[(CategoryFilter<ProjectStatus>, &str)] = &[
    (CategoryFilter::All, "All"),
    (CategoryFilter::Only(ProjectStatus::InProgress), "In Progress"),
    (CategoryFilter::Only(ProjectStatus::Completed), "Completed"),
    (CategoryFilter::Only(ProjectStatus::Draft), "Draft"),
];

#[component]
fn ProjectActions() -> impl IntoView {
    view! {
        <DropdownMenu trigger="⋮">
            <button class="dropdown-item">"Edit"</button>
            <button class="dropdown-item">"Duplicate"</button>
            <button class="dropdown-item">"Share"</button>
            <button class="dropdown-item destructive">"Delete"</button>
        </DropdownMenu>
    }
}

fn project_card(project: Project) -> AnyView {
    view! {
        <div class="card project-card">
            <div class="thumb wide">
                <img src=project.thumbnail.clone() alt=project.title.clone() />
                <span class=format!("{} thumb-badge right", project.status.badge_class())>
                    {project.status.label()}
                </span>
            </div>
            <div class="card-head">
                <h3 class="card-title truncate">{project.title.clone()}</h3>
                <ProjectActions />
            </div>
            <p class="muted small clamp-2">{project.description.clone()}</p>
            <div class="meta-row">
                <span>{format!("👤 {}", project.author)}</span>
                <span>{format!("📅 {}", short_date(project.created_at))}</span>
            </div>
            <span class="badge outline">{project.kind.label()}</span>
        </div>
    }
    .into_any()
}

fn project_row(project: Project) -> AnyView {
    view! {
        <div class="card project-row">
            <div class="thumb small">
                <img src=project.thumbnail.clone() alt=project.title.clone() />
            </div>
            <div class="row-body">
                <div class="card-head">
                    <h3 class="card-title truncate">{project.title.clone()}</h3>
                    <ProjectActions />
                </div>
                <p class="muted small clamp-1">{project.description.clone()}</p>
                <div class="meta-row">
                    <span class=project.status.badge_class()>{project.status.label()}</span>
                    <span>{format!("👤 {}", project.author)}</span>
                    <span>{format!("📅 {}", short_date(project.created_at))}</span>
                    <span class="badge outline">{project.kind.label()}</span>
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let projects = use_collection_view(ctx.catalog.projects.clone());
    let hint = Signal::derive(move || {
        empty_hint(projects.empty_reason(), "Create your first project to get started")
    });

    view! {
        <DashboardLayout>
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>"📂 Projects"</h1>
                        <p class="muted">"Manage your creative projects"</p>
                    </div>
                    <button class="btn primary">"＋ New Project"</button>
                </div>

                <div class="toolbar">
                    <SearchInput collection=projects placeholder="Search projects..." />
                    <ViewModeToggle collection=projects />
                </div>

                <CategoryTabs collection=projects tabs=PROJECT_TABS />

                <CollectionResults collection=projects card=project_card row=project_row>
                    <EmptyState icon="📂" title="No projects found" message=hint>
                        <button class="btn primary">"＋ Create Project"</button>
                    </EmptyState>
                </CollectionResults>
            </div>
        </DashboardLayout>
    }
}
