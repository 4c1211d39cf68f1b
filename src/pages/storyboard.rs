//! Storyboard Page
//!
//! List of storyboards with the usual search/status/view controls. Choosing
//! "Edit" on a card swaps the list for that storyboard's detail view; the
//! list's filter state survives the round trip.

use collection_view::{use_collection_view, CategoryFilter};
use leptos::prelude::*;

use crate::components::{
    empty_hint, empty_title, CategoryTabs, CollectionResults, DashboardLayout, DropdownMenu,
    EmptyState, SearchInput, ViewModeToggle,
};
use crate::context::use_app_context;
use crate::format::short_date;
use crate::models::{Scene, Storyboard, StoryboardStatus};

const STORYBOARD_TABS: &[(CategoryFilter<StoryboardStatus>, &str)] = &[
    (CategoryFilter::All, "All"),
    (CategoryFilter::Only(StoryboardStatus::Draft), "Draft"),
    (CategoryFilter::Only(StoryboardStatus::InReview), "In Review"),
    (CategoryFilter::Only(StoryboardStatus::Approved), "Approved"),
];

/// Scene thumbnails previewed on a card
const PREVIEW_SCENES: usize = 3;

#[component]
fn StoryboardActions(id: String, on_edit: WriteSignal<Option<String>>) -> impl IntoView {
    view! {
        <DropdownMenu trigger="✎">
            <button class="dropdown-item" on:click=move |_| on_edit.set(Some(id.clone()))>
                "✎ Edit"
            </button>
            <button class="dropdown-item">"▶ Preview"</button>
            <button class="dropdown-item">"⤴ Share"</button>
            <button class="dropdown-item">"⬇ Export"</button>
            <button class="dropdown-item destructive">"🗑 Delete"</button>
        </DropdownMenu>
    }
}

fn storyboard_card(board: Storyboard, on_edit: WriteSignal<Option<String>>) -> AnyView {
    let scene_count = board.scenes.len();
    let previews: Vec<Scene> = board.scenes.iter().take(PREVIEW_SCENES).cloned().collect();

    view! {
        <div class="card storyboard-card">
            <div class="card-head">
                <div>
                    <h3 class="card-title">{board.title.clone()}</h3>
                    <p class="muted small">{board.description.clone()}</p>
                </div>
                <StoryboardActions id=board.id.clone() on_edit />
            </div>
            <div class="meta-row">
                <span class=board.status.badge_class()>{board.status.label()}</span>
                <span>{format!("🕒 {}", board.total_duration)}</span>
                <span>{format!("👤 {}", board.author)}</span>
            </div>
            <div class="scene-strip">
                {if previews.is_empty() {
                    view! { <div class="scene-thumb empty">"No scenes yet"</div> }.into_any()
                } else {
                    previews.into_iter().map(|scene| view! {
                        <div class="scene-thumb">
                            <img src=scene.thumbnail alt=scene.title />
                        </div>
                    }).collect_view().into_any()
                }}
            </div>
            <p class="muted small">
                {format!("{} scenes • Created {}", scene_count, short_date(board.created_at))}
            </p>
        </div>
    }
    .into_any()
}

fn storyboard_row(board: Storyboard, on_edit: WriteSignal<Option<String>>) -> AnyView {
    view! {
        <div class="card storyboard-row">
            <div class="row-body">
                <h3 class="card-title">{board.title.clone()}</h3>
                <p class="muted small clamp-1">{board.description.clone()}</p>
                <div class="meta-row">
                    <span class=board.status.badge_class()>{board.status.label()}</span>
                    <span>{format!("🕒 {}", board.total_duration)}</span>
                    <span>{format!("👤 {}", board.author)}</span>
                    <span>{format!("{} scenes", board.scenes.len())}</span>
                    <span>{short_date(board.created_at)}</span>
                </div>
            </div>
            <StoryboardActions id=board.id.clone() on_edit />
        </div>
    }
    .into_any()
}

#[component]
fn SceneCard(scene: Scene, index: usize) -> impl IntoView {
    let notes = (!scene.notes.is_empty()).then(|| format!("Notes: {}", scene.notes));

    view! {
        <div class="card scene-card">
            <div class="thumb scene">
                <img src=scene.thumbnail alt=scene.title.clone() />
                <span class="duration-chip">{scene.duration}</span>
            </div>
            <div class="row-body">
                <div class="card-head">
                    <div>
                        <h4>{format!("Scene {}: {}", index + 1, scene.title)}</h4>
                        <p class="muted small">{scene.description}</p>
                    </div>
                    <button class="icon-btn ghost small">"✎"</button>
                </div>
                {notes.map(|text| view! { <p class="muted small italic">{text}</p> })}
            </div>
        </div>
    }
}

#[component]
fn StoryboardDetail(board: Storyboard, on_back: Callback<()>) -> impl IntoView {
    let scenes = board.scenes.clone();

    view! {
        <div class="page">
            <div class="page-header">
                <div class="header-with-back">
                    <button class="btn ghost small" on:click=move |_| on_back.run(())>"← Back"</button>
                    <div>
                        <h1>{board.title.clone()}</h1>
                        <p class="muted">{board.description.clone()}</p>
                    </div>
                </div>
                <div class="header-actions">
                    <button class="btn outline">"▶ Preview"</button>
                    <button class="btn primary">"⬇ Export"</button>
                </div>
            </div>

            <div class="card details-card">
                <span class=board.status.badge_class()>{board.status.label()}</span>
                <div class="detail-item">
                    <span class="muted">"Total Duration:"</span>
                    <strong>{board.total_duration.clone()}</strong>
                </div>
                <div class="detail-item">
                    <span class="muted">"Scenes:"</span>
                    <strong>{board.scenes.len()}</strong>
                </div>
                <div class="detail-item">
                    <span class="muted">"Created:"</span>
                    <strong>{short_date(board.created_at)}</strong>
                </div>
            </div>

            <div class="section-header">
                <h2>"Scenes"</h2>
                <button class="btn outline">"＋ Add Scene"</button>
            </div>

            {if scenes.is_empty() {
                view! {
                    <EmptyState
                        icon="🎬"
                        title="No scenes yet"
                        message="Start building your storyboard by adding your first scene".to_string()
                    >
                        <button class="btn primary">"＋ Add First Scene"</button>
                    </EmptyState>
                }
                .into_any()
            } else {
                view! {
                    <div class="scene-list">
                        {scenes.into_iter().enumerate().map(|(index, scene)| view! {
                            <SceneCard scene index />
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
pub fn StoryboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = ctx.catalog.clone();
    let boards = use_collection_view(catalog.storyboards.clone());
    let (selected, set_selected) = signal(None::<String>);
    let title = Signal::derive(move || empty_title(boards.empty_reason(), "storyboards"));
    let hint = Signal::derive(move || {
        empty_hint(
            boards.empty_reason(),
            "Create your first storyboard to start planning your video content",
        )
    });

    let selected_board = move || {
        selected.get().and_then(|id| {
            catalog.storyboards.iter().find(|b| b.id == id).cloned()
        })
    };
    let back = Callback::new(move |_: ()| set_selected.set(None));

    Effect::new(move |_| {
        if let Some(id) = selected.get() {
            tracing::debug!(storyboard = %id, "opened storyboard detail");
        }
    });

    view! {
        <DashboardLayout>
            {move || match selected_board() {
                Some(board) => view! { <StoryboardDetail board on_back=back /> }.into_any(),
                None => view! {
                    <div class="page">
                        <div class="page-header">
                            <div>
                                <h1>"🎬 Storyboards"</h1>
                                <p class="muted">"Create and manage your video storyboards"</p>
                            </div>
                            <button class="btn primary">"＋ New Storyboard"</button>
                        </div>

                        <div class="toolbar">
                            <SearchInput collection=boards placeholder="Search storyboards..." />
                            <ViewModeToggle collection=boards />
                        </div>

                        <CategoryTabs collection=boards tabs=STORYBOARD_TABS />

                        <CollectionResults
                            collection=boards
                            card=move |b: Storyboard| storyboard_card(b, set_selected)
                            row=move |b: Storyboard| storyboard_row(b, set_selected)
                        >
                            <EmptyState icon="🎬" title=title message=hint>
                                <button class="btn primary">"＋ Create Storyboard"</button>
                            </EmptyState>
                        </CollectionResults>
                    </div>
                }
                .into_any(),
            }}
        </DashboardLayout>
    }
}
