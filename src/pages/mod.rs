//! Pages
//!
//! One component per route.

mod ai_tools;
mod assets;
mod auth;
mod brand_kit;
mod dashboard;
mod index;
mod not_found;
mod profile;
mod projects;
mod settings;
mod storyboard;

pub use ai_tools::AiToolsPage;
pub use assets::AssetsPage;
pub use auth::AuthPage;
pub use brand_kit::BrandKitPage;
pub use dashboard::DashboardPage;
pub use index::IndexPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use projects::ProjectsPage;
pub use settings::SettingsPage;
pub use storyboard::StoryboardPage;
