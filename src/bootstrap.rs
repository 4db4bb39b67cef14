//! Catalog Bootstrap
//!
//! Loads the filter catalog the host page embeds as a JSON script block.
//! The page must be fully parsed before this runs; a missing or malformed
//! block is reported to the caller, which falls back to the demo catalog.

use crate::models::{FilterEntry, FilterGroup, SearchCatalog, SearchTab};

/// Id of the JSON block the host page embeds
pub const SEARCH_DATA_ID: &str = "search-data";

/// Read and parse the catalog embedded in the current document
pub fn embedded_catalog() -> Result<SearchCatalog, String> {
    let document = web_sys::window()
        .ok_or_else(|| "no window available".to_string())?
        .document()
        .ok_or_else(|| "no document available".to_string())?;
    let node = document
        .get_element_by_id(SEARCH_DATA_ID)
        .ok_or_else(|| format!("missing #{} element", SEARCH_DATA_ID))?;
    parse_catalog(&node.text_content().unwrap_or_default())
}

pub fn parse_catalog(raw: &str) -> Result<SearchCatalog, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid search catalog JSON: {}", err))
}

/// Built-in catalog used when the host page embeds none.
///
/// Mirrors the shop's filter data: product colors up front with materials and
/// head sizes as overflow, plus the curated collections.
pub fn demo_catalog() -> SearchCatalog {
    SearchCatalog {
        default_tab: SearchTab::Products,
        groups: vec![
            group(
                SearchTab::Products,
                "Product Filters",
                &[
                    "Black", "Brown", "Beige", "Navy", "Red",
                    "Straw", "Wool", "Felt", "Leather",
                    "56 cm", "58 cm", "60 cm",
                    "Custom size available",
                ],
                5,
            ),
            group(
                SearchTab::Collections,
                "Collections",
                &[
                    "Fedoras", "Panamas", "Berets", "Flat Caps",
                    "Summer Straw", "Winter Wool", "Wedding Season",
                ],
                4,
            ),
        ],
    }
}

fn group(tab: SearchTab, title: &str, labels: &[&str], shown: usize) -> FilterGroup {
    FilterGroup {
        key: tab.key().to_string(),
        title: title.to_string(),
        entries: labels
            .iter()
            .enumerate()
            .map(|(i, label)| FilterEntry {
                id: i as u32 + 1,
                label: (*label).to_string(),
                extra: i >= shown,
            })
            .collect(),
        query: String::new(),
        expanded: false,
    }
}
