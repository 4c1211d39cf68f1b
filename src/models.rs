//! Frontend Models
//!
//! Shapes of the fixture data shown on each page.

use chrono::NaiveDate;
use collection_view::Browsable;
use serde::{Deserialize, Serialize};

// ========================
// Assets
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
    Document,
}

impl AssetKind {
    pub fn icon(&self) -> &'static str {
        match self {
            AssetKind::Image => "🖼️",
            AssetKind::Video => "🎥",
            AssetKind::Audio => "🎵",
            AssetKind::Document => "📄",
        }
    }
}

/// Uploaded media file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    pub size: String,
    pub format: String,
    pub created_at: NaiveDate,
    pub thumbnail: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Browsable for Asset {
    type Category = AssetKind;

    fn key(&self) -> &str {
        &self.id
    }

    fn category(&self) -> AssetKind {
        self.kind
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.format.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

// ========================
// Projects
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Draft,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Draft => "Draft",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "badge status-active",
            ProjectStatus::Completed => "badge status-done",
            ProjectStatus::Draft => "badge status-muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Video,
    Design,
    Brand,
    Storyboard,
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Video => "Video",
            ProjectKind::Design => "Design",
            ProjectKind::Brand => "Brand",
            ProjectKind::Storyboard => "Storyboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub created_at: NaiveDate,
    pub author: String,
    pub kind: ProjectKind,
    pub thumbnail: String,
}

impl Browsable for Project {
    type Category = ProjectStatus;

    fn key(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ProjectStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.author.as_str()]
    }
}

// ========================
// Storyboards
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryboardStatus {
    Draft,
    InReview,
    Approved,
}

impl StoryboardStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StoryboardStatus::Draft => "Draft",
            StoryboardStatus::InReview => "In Review",
            StoryboardStatus::Approved => "Approved",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StoryboardStatus::Draft => "badge status-muted",
            StoryboardStatus::InReview => "badge status-active",
            StoryboardStatus::Approved => "badge status-done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub thumbnail: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDate,
    pub author: String,
    pub status: StoryboardStatus,
    pub total_duration: String,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

impl Browsable for Storyboard {
    type Category = StoryboardStatus;

    fn key(&self) -> &str {
        &self.id
    }

    fn category(&self) -> StoryboardStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.author.as_str()]
    }
}

// ========================
// Brand kit
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<String>,
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub id: String,
    pub name: String,
    pub font_family: String,
    pub usage: String,
    pub weights: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandAssetKind {
    Logo,
    Icon,
    Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAsset {
    pub id: String,
    pub name: String,
    pub kind: BrandAssetKind,
    pub thumbnail: String,
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrandKit {
    pub palettes: Vec<ColorPalette>,
    pub typography: Vec<Typography>,
    pub assets: Vec<BrandAsset>,
}

// ========================
// AI tools
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolStatus {
    Available,
    Beta,
    ComingSoon,
}

impl ToolStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ToolStatus::Available => "Available",
            ToolStatus::Beta => "Beta",
            ToolStatus::ComingSoon => "Coming Soon",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ToolStatus::Available => "badge status-active",
            ToolStatus::Beta => "badge status-beta",
            ToolStatus::ComingSoon => "badge status-muted",
        }
    }

    pub fn is_launchable(&self) -> bool {
        !matches!(self, ToolStatus::ComingSoon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTool {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub category: String,
    pub status: ToolStatus,
    pub gradient: String,
}

// ========================
// Dashboard
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub change: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Processing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub time: String,
    pub status: ActivityStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub category: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: Vec<StatCard>,
    pub activities: Vec<ActivityEntry>,
    pub suggestions: Vec<Suggestion>,
}

// ========================
// Profile
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Project,
    Asset,
    Brand,
    Storyboard,
}

impl ActivityKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Project => "📁",
            ActivityKind::Asset => "🖼️",
            ActivityKind::Brand => "🎨",
            ActivityKind::Storyboard => "🎬",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileActivity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub date: NaiveDate,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageStats {
    pub projects_created: u32,
    pub assets_uploaded: u32,
    pub ai_generations: u32,
    pub storage_used_gb: f64,
    pub storage_total_gb: f64,
    pub ai_credits_used: u32,
    pub ai_credits_total: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub website: String,
    pub company: String,
    pub joined: String,
    pub plan: String,
    pub stats: UsageStats,
    pub achievements: Vec<Achievement>,
    pub activities: Vec<ProfileActivity>,
}

impl ProfileData {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_view::{apply, CategoryFilter, FilterState};

    fn project(id: &str, title: &str, description: &str, status: ProjectStatus) -> Project {
        Project {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            status,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            author: "Mike Chen".to_string(),
            kind: ProjectKind::Design,
            thumbnail: "/placeholder.svg".to_string(),
        }
    }

    #[test]
    fn test_project_search_covers_description_and_status_tab() {
        let projects = vec![
            project("1", "Campaign", "fashion identity", ProjectStatus::InProgress),
            project("2", "Launch", "fashion video", ProjectStatus::Completed),
        ];
        let mut filter = FilterState::new();
        filter.set_search("FASHION");
        assert_eq!(apply(&projects, &filter).len(), 2);

        filter.set_category(CategoryFilter::Only(ProjectStatus::Completed));
        let result = apply(&projects, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn test_status_serde_is_kebab_case() {
        let status: ProjectStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        let status: StoryboardStatus = serde_json::from_str("\"in-review\"").unwrap();
        assert_eq!(status.label(), "In Review");
        let status: ToolStatus = serde_json::from_str("\"coming-soon\"").unwrap();
        assert!(!status.is_launchable());
    }

    #[test]
    fn test_initials() {
        let profile = ProfileData {
            name: "John Doe".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.initials(), "JD");
    }
}
