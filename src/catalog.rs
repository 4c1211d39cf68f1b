//! Fixture Catalog
//!
//! All page data ships inside the binary as JSON. The catalog parses it once
//! at startup and is shared read-only through context.

use collection_view::{find_duplicate_key, Browsable};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{AiTool, Asset, BrandKit, DashboardData, ProfileData, Project, Storyboard};

const ASSETS_JSON: &str = include_str!("../fixtures/assets.json");
const PROJECTS_JSON: &str = include_str!("../fixtures/projects.json");
const STORYBOARDS_JSON: &str = include_str!("../fixtures/storyboards.json");
const BRAND_KIT_JSON: &str = include_str!("../fixtures/brand_kit.json");
const AI_TOOLS_JSON: &str = include_str!("../fixtures/ai_tools.json");
const DASHBOARD_JSON: &str = include_str!("../fixtures/dashboard.json");
const PROFILE_JSON: &str = include_str!("../fixtures/profile.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("fixture `{fixture}` is malformed: {source}")]
    Parse {
        fixture: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture `{fixture}` repeats id `{key}`")]
    DuplicateKey { fixture: &'static str, key: String },
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub assets: Vec<Asset>,
    pub projects: Vec<Project>,
    pub storyboards: Vec<Storyboard>,
    pub brand_kit: BrandKit,
    pub ai_tools: Vec<AiTool>,
    pub dashboard: DashboardData,
    pub profile: ProfileData,
}

fn parse<T: DeserializeOwned>(fixture: &'static str, json: &str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Parse { fixture, source })
}

/// Parse a list page fixture and reject repeated ids.
fn parse_list<T>(fixture: &'static str, json: &str) -> Result<Vec<T>, CatalogError>
where
    T: DeserializeOwned + Browsable,
{
    let items: Vec<T> = parse(fixture, json)?;
    if let Some(key) = find_duplicate_key(&items) {
        return Err(CatalogError::DuplicateKey {
            fixture,
            key: key.to_string(),
        });
    }
    Ok(items)
}

impl Catalog {
    /// Load the bundled fixtures
    pub fn load() -> Result<Self, CatalogError> {
        let catalog = Self {
            assets: parse_list("assets", ASSETS_JSON)?,
            projects: parse_list("projects", PROJECTS_JSON)?,
            storyboards: parse_list("storyboards", STORYBOARDS_JSON)?,
            brand_kit: parse("brand_kit", BRAND_KIT_JSON)?,
            ai_tools: parse("ai_tools", AI_TOOLS_JSON)?,
            dashboard: parse("dashboard", DASHBOARD_JSON)?,
            profile: parse("profile", PROFILE_JSON)?,
        };
        tracing::info!(
            assets = catalog.assets.len(),
            projects = catalog.projects.len(),
            storyboards = catalog.storyboards.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetKind, StoryboardStatus};

    #[test]
    fn test_bundled_fixtures_load() {
        let catalog = Catalog::load().expect("bundled fixtures should parse");
        assert_eq!(catalog.assets.len(), 3);
        assert_eq!(catalog.assets[0].name, "AI Generated Logo");
        assert_eq!(catalog.assets[1].kind, AssetKind::Video);
        assert_eq!(catalog.projects.len(), 3);
        assert_eq!(catalog.storyboards[0].status, StoryboardStatus::InReview);
        assert_eq!(catalog.storyboards[0].scenes.len(), 3);
        assert!(catalog.storyboards[1].scenes.is_empty());
        assert_eq!(catalog.brand_kit.palettes.len(), 3);
        assert_eq!(catalog.ai_tools.len(), 6);
        assert_eq!(catalog.dashboard.stats.len(), 4);
        assert_eq!(catalog.profile.achievements.iter().filter(|a| a.unlocked).count(), 2);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id":"1","name":"A","kind":"image","size":"1 KB","format":"PNG","created_at":"2024-01-01","thumbnail":"/a.svg","tags":[]},
            {"id":"1","name":"B","kind":"video","size":"1 KB","format":"MP4","created_at":"2024-01-02","thumbnail":"/b.svg"}
        ]"#;
        let err = parse_list::<Asset>("assets", json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { key, .. } if key == "1"));
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let json = r#"[{"id":"1","name":"A","kind":"image","size":"1 KB","format":"PNG","created_at":"yesterday","thumbnail":"/a.svg"}]"#;
        let err = parse_list::<Asset>("assets", json).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { fixture: "assets", .. }));
        assert!(err.to_string().starts_with("fixture `assets` is malformed"));
    }
}
