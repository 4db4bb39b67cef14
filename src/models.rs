//! Search Page Models
//!
//! Data structures matching the catalog embedded by the host page.

use serde::{Deserialize, Serialize};

/// Which top-level section of the search page is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTab {
    #[default]
    Products,
    Collections,
}

impl SearchTab {
    /// Stable key used for container ids (`<key>-filters`, `<key>-section`)
    pub fn key(self) -> &'static str {
        match self {
            SearchTab::Products => "products",
            SearchTab::Collections => "collections",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchTab::Products => "Products",
            SearchTab::Collections => "Collections",
        }
    }
}

/// One checklist entry in a filter group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub id: u32,
    pub label: String,
    /// Overflow entry, hidden while the group is collapsed
    #[serde(default)]
    pub extra: bool,
}

/// A named group of checklist entries with a search input
/// and optional overflow entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: String,
    pub title: String,
    pub entries: Vec<FilterEntry>,
    /// Live search text, recomputed on every input event
    #[serde(default)]
    pub query: String,
    /// Whether overflow entries are currently shown
    #[serde(default)]
    pub expanded: bool,
}

impl FilterGroup {
    pub fn has_extras(&self) -> bool {
        self.entries.iter().any(|entry| entry.extra)
    }
}

/// Catalog embedded by the host page in a `<script id="search-data">` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCatalog {
    #[serde(default)]
    pub default_tab: SearchTab,
    pub groups: Vec<FilterGroup>,
}
