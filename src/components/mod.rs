//! UI Components
//!
//! Reusable Leptos components.

mod filter_panel;
mod show_more_toggle;
mod tab_bar;

pub use filter_panel::FilterPanel;
pub use show_more_toggle::ShowMoreToggle;
pub use tab_bar::SectionTabBar;
