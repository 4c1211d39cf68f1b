//! Brand Kit Page
//!
//! Palettes, typography and brand assets. Swatches copy their hex value to
//! the clipboard; the palette button copies the whole palette.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{DashboardLayout, TabBar};
use crate::context::{use_app_context, use_toast, ToastContext};
use crate::models::{BrandAsset, BrandAssetKind, ColorPalette, Typography};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrandTab {
    Colors,
    Typography,
    Assets,
}

const BRAND_TABS: &[(BrandTab, &str)] = &[
    (BrandTab::Colors, "🎨 Colors"),
    (BrandTab::Typography, "🔤 Typography"),
    (BrandTab::Assets, "🖼️ Assets"),
];

/// What the palette copy button puts on the clipboard
fn palette_clipboard_text(palette: &ColorPalette) -> String {
    palette.colors.join(", ")
}

fn copy_to_clipboard(toast: ToastContext, text: String) {
    spawn_local(async move {
        match commands::copy_text(&text).await {
            Ok(()) => {
                tracing::debug!(%text, "copied to clipboard");
                toast.success("Copied to clipboard!");
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                toast.error("Couldn't copy to clipboard");
            }
        }
    });
}

#[component]
fn ColorCard(palette: ColorPalette) -> impl IntoView {
    let toast = use_toast();
    let all_colors = palette_clipboard_text(&palette);
    let swatches = palette.colors.clone();
    let codes = palette.colors.clone();

    view! {
        <div class="card palette-card">
            <div class="card-head">
                <h3 class="card-title">{palette.name.clone()}</h3>
                <button
                    class="btn outline small"
                    title="Copy palette"
                    on:click=move |_| copy_to_clipboard(toast, all_colors.clone())
                >
                    "⧉"
                </button>
            </div>
            <p class="muted small">{palette.usage.clone()}</p>
            <div class="swatch-row">
                {swatches.into_iter().map(|color| {
                    let style = format!("background-color: {}", color);
                    let title = format!("Click to copy {}", color);
                    view! {
                        <div
                            class="swatch"
                            style=style
                            title=title
                            on:click=move |_| copy_to_clipboard(toast, color.clone())
                        ></div>
                    }
                }).collect_view()}
            </div>
            <div class="color-codes">
                {codes.into_iter().map(|color| {
                    let label = color.clone();
                    view! {
                        <div class="color-code mono" on:click=move |_| copy_to_clipboard(toast, color.clone())>
                            {label}
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn TypographyCard(typography: Typography) -> impl IntoView {
    let family = typography.font_family.clone();
    let sample = move |size: u32, weight: u32| {
        format!("font-family: {}; font-size: {}px; font-weight: {}", family, size, weight)
    };

    view! {
        <div class="card typography-card">
            <div class="card-head">
                <h3 class="card-title" style=format!("font-family: {}", typography.font_family)>
                    {typography.name.clone()}
                </h3>
                <button class="btn outline small" title="Download">"⬇"</button>
            </div>
            <p class="muted small">{typography.usage.clone()}</p>
            <div class="small strong">{format!("Font Family: {}", typography.font_family)}</div>
            <div class="tag-row">
                {typography.weights.iter().map(|w| view! { <span class="badge outline">{w.clone()}</span> }).collect_view()}
            </div>
            <div class="type-samples">
                <div style=sample(24, 700)>"The quick brown fox"</div>
                <div style=sample(16, 400)>"The quick brown fox jumps over the lazy dog"</div>
                <div style=sample(14, 400)>
                    "ABCDEFGHIJKLMNOPQRSTUVWXYZ abcdefghijklmnopqrstuvwxyz 1234567890"
                </div>
            </div>
        </div>
    }
}

#[component]
fn BrandAssetCard(asset: BrandAsset) -> impl IntoView {
    let kind = match asset.kind {
        BrandAssetKind::Logo => "Logo",
        BrandAssetKind::Icon => "Icon",
        BrandAssetKind::Pattern => "Pattern",
    };

    view! {
        <div class="card brand-asset-card">
            <div class="thumb square">
                <img src=asset.thumbnail.clone() alt=asset.name.clone() />
                <div class="thumb-actions">
                    <button class="icon-btn secondary" title="Download">"⬇"</button>
                </div>
            </div>
            <h3 class="card-title">{asset.name.clone()}</h3>
            <div class="meta-row">
                <span class="badge secondary">{kind}</span>
                <span class="tag-row">
                    {asset.formats.iter().map(|f| view! { <span class="badge outline">{f.clone()}</span> }).collect_view()}
                </span>
            </div>
        </div>
    }
}

#[component]
fn SectionHeader(title: &'static str, subtitle: &'static str, action: &'static str) -> impl IntoView {
    view! {
        <div class="section-header">
            <div>
                <h2>{title}</h2>
                <p class="muted">{subtitle}</p>
            </div>
            <button class="btn outline">{action}</button>
        </div>
    }
}

#[component]
pub fn BrandKitPage() -> impl IntoView {
    let ctx = use_app_context();
    let catalog = ctx.catalog.clone();
    let tab = RwSignal::new(BrandTab::Colors);

    let content = move || {
        let kit = &catalog.brand_kit;
        match tab.get() {
            BrandTab::Colors => view! {
                <SectionHeader
                    title="Color Palettes"
                    subtitle="Brand colors and their usage guidelines"
                    action="✨ Generate Palette"
                />
                <div class="card-grid three">
                    {kit.palettes.iter().cloned().map(|palette| view! { <ColorCard palette /> }).collect_view()}
                </div>
            }
            .into_any(),
            BrandTab::Typography => view! {
                <SectionHeader
                    title="Typography"
                    subtitle="Font families and text styling guidelines"
                    action="＋ Add Font"
                />
                <div class="card-grid two">
                    {kit.typography.iter().cloned().map(|typography| view! { <TypographyCard typography /> }).collect_view()}
                </div>
            }
            .into_any(),
            BrandTab::Assets => view! {
                <SectionHeader
                    title="Brand Assets"
                    subtitle="Logos, icons, and brand elements"
                    action="⬆ Upload Asset"
                />
                <div class="card-grid four">
                    {kit.assets.iter().cloned().map(|asset| view! { <BrandAssetCard asset /> }).collect_view()}
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <DashboardLayout>
            <div class="page">
                <div class="page-header">
                    <div>
                        <h1>"🎨 Brand Kit"</h1>
                        <p class="muted">"Your complete brand identity toolkit"</p>
                    </div>
                    <div class="header-actions">
                        <button class="btn outline">"✨ AI Generate"</button>
                        <button class="btn primary">"＋ Add Element"</button>
                    </div>
                </div>

                <TabBar tabs=BRAND_TABS active=tab />
                <div class="tab-content">{content}</div>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_copy_joins_hex_codes() {
        let palette = ColorPalette {
            id: "1".to_string(),
            name: "Primary".to_string(),
            colors: vec!["#8B5CF6".to_string(), "#06B6D4".to_string()],
            usage: "Buttons".to_string(),
        };
        assert_eq!(palette_clipboard_text(&palette), "#8B5CF6, #06B6D4");
    }
}
