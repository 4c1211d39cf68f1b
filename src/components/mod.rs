//! UI Components
//!
//! Reusable Leptos components.

mod app_sidebar;
mod top_bar;
mod dashboard_layout;
mod dropdown_menu;
mod search_input;
mod category_tabs;
mod view_mode_toggle;
mod collection_results;
mod empty_state;
mod tab_bar;
mod toggle_switch;
mod select_field;
mod progress_bar;
mod toast_host;

pub use app_sidebar::AppSidebar;
pub use top_bar::TopBar;
pub use dashboard_layout::DashboardLayout;
pub use dropdown_menu::DropdownMenu;
pub use search_input::SearchInput;
pub use category_tabs::CategoryTabs;
pub use view_mode_toggle::ViewModeToggle;
pub use collection_results::CollectionResults;
pub use empty_state::{empty_hint, empty_title, EmptyState};
pub use tab_bar::TabBar;
pub use toggle_switch::ToggleSwitch;
pub use select_field::SelectField;
pub use progress_bar::ProgressBar;
pub use toast_host::ToastHost;
