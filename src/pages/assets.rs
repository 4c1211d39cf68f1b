//! Assets Page
//!
//! Media library: search by name, format or tag, filter by media type,
//! grid or list layout.

use collection_view::{use_collection_view, CategoryFilter};
use leptos::prelude::*;

use crate::components::{
    empty_hint, CategoryTabs, CollectionResults, DashboardLayout, DropdownMenu, EmptyState,
    SearchInput, ViewModeToggle,
};
use crate::context::use_app_context;
use crate::format::{short_date, visible_tags};
use crate::models::{Asset, AssetKind};

const ASSET_TABS: &[(CategoryFilter<AssetKind>, &str)] = &[
    (CategoryFilter::All, "All"),
    (CategoryFilter::Only(AssetKind::Image), "Images"),
    (CategoryFilter::Only(AssetKind::Video), "Videos"),
    (CategoryFilter::Only(AssetKind::Audio), "Audio"),
    (CategoryFilter::Only(AssetKind::Document), "Documents"),
];

/// Tags shown on a grid card before collapsing into "+N"
const CARD_TAG_LIMIT: usize = 2;

#[component]
fn AssetActions(#[prop(into, optional)] trigger_class: Option<String>) -> impl IntoView {
    view! {
        <DropdownMenu trigger="⤴" trigger_class=trigger_class.unwrap_or_else(|| "icon-btn ghost".into())>
            <button class="dropdown-item">"⬇ Download"</button>
            <button class="dropdown-item">"⤴ Share"</button>
            <button class="dropdown-item destructive">"🗑 Delete"</button>
        </DropdownMenu>
    }
}

fn asset_card(asset: Asset) -> AnyView {
    let (shown, hidden) = visible_tags(&asset.tags, CARD_TAG_LIMIT);
    let shown = shown.to_vec();

    view! {
        <div class="card asset-card">
            <div class="thumb square">
                <img src=asset.thumbnail.clone() alt=asset.name.clone() />
                <span class="badge secondary thumb-badge">{asset.format.clone()}</span>
                <div class="thumb-actions">
                    <AssetActions trigger_class="icon-btn secondary" />
                </div>
            </div>
            <h3 class="card-title truncate">{asset.name.clone()}</h3>
            <div class="meta-row">
                <span>{format!("{} {}", asset.kind.icon(), asset.size)}</span>
                <span>{short_date(asset.created_at)}</span>
            </div>
            <div class="tag-row">
                {shown.into_iter().map(|tag| view! { <span class="badge outline">{tag}</span> }).collect_view()}
                {(hidden > 0).then(|| view! { <span class="badge outline">{format!("+{}", hidden)}</span> })}
            </div>
        </div>
    }
    .into_any()
}

fn asset_row(asset: Asset) -> AnyView {
    view! {
        <div class="card asset-row">
            <div class="thumb small">
                <img src=asset.thumbnail.clone() alt=asset.name.clone() />
            </div>
            <div class="row-body">
                <h3 class="card-title truncate">{asset.name.clone()}</h3>
                <div class="meta-row">
                    <span>{format!("{} {}", asset.kind.icon(), asset.format)}</span>
                    <span>{asset.size.clone()}</span>
                    <span>{short_date(asset.created_at)}</span>
                </div>
                <div class="tag-row">
                    {asset.tags.into_iter().map(|tag| view! { <span class="badge outline">{tag}</span> }).collect_view()}
                </div>
            </div>
            <AssetActions />
        </div>
    }
    .into_any()
}

#[component]
pub fn AssetsPage() -> impl IntoView {
    let ctx = use_app_context();
    let assets = use_collection_view(ctx.catalog.assets.clone());
    let hint = Signal::derive(move || {
        empty_hint(assets.empty_reason(), "Upload your first asset to get started")
    });

    view! {
        <DashboardLayout>
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>"🖼️ Assets"</h1>
                        <p class="muted">"Manage your creative assets and media"</p>
                    </div>
                    <button class="btn primary">"⬆ Upload Assets"</button>
                </div>

                <div class="toolbar">
                    <SearchInput collection=assets placeholder="Search assets..." />
                    <div class="toolbar-actions">
                        <button class="btn outline small">"⚲ Filter"</button>
                        <ViewModeToggle collection=assets />
                    </div>
                </div>

                <CategoryTabs collection=assets tabs=ASSET_TABS />

                <CollectionResults collection=assets card=asset_card row=asset_row>
                    <EmptyState icon="🖼️" title="No assets found" message=hint>
                        <button class="btn primary">"⬆ Upload Assets"</button>
                    </EmptyState>
                </CollectionResults>
            </div>
        </DashboardLayout>
    }
}
