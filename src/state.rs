//! Search Page State
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The three page
//! operations (tab switching, expansion toggling, live filtering) live here;
//! an unknown group key is a silent no-op for the latter two.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FilterGroup, SearchCatalog, SearchTab};

/// Whole-page state: which section is shown plus every filter group
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SearchState {
    /// Currently selected section
    pub active_tab: SearchTab,
    /// Filter groups, one per section
    pub groups: Vec<FilterGroup>,
}

impl SearchState {
    pub fn from_catalog(catalog: SearchCatalog) -> Self {
        Self {
            active_tab: catalog.default_tab,
            groups: catalog.groups,
        }
    }
}

/// Whether a section is shown. Sections derive from the one active tab, so
/// exactly one of them is visible at any time.
pub fn section_visible(active_tab: SearchTab, tab: SearchTab) -> bool {
    active_tab == tab
}

/// Look up a filter group by key
pub fn find_group<'a>(groups: &'a [FilterGroup], group_key: &str) -> Option<&'a FilterGroup> {
    groups.iter().find(|group| group.key == group_key)
}

/// Flip a group's expansion flag; all overflow entries show/hide together
pub fn toggle_show_more(groups: &mut [FilterGroup], group_key: &str) {
    if let Some(group) = group_mut(groups, group_key) {
        group.expanded = !group.expanded;
    }
}

/// Store the live query for a group
pub fn filter_items(groups: &mut [FilterGroup], query: &str, group_key: &str) {
    if let Some(group) = group_mut(groups, group_key) {
        group.query = query.to_string();
    }
}

fn group_mut<'a>(groups: &'a mut [FilterGroup], group_key: &str) -> Option<&'a mut FilterGroup> {
    groups.iter_mut().find(|group| group.key == group_key)
}

/// Type alias for the store
pub type SearchStore = Store<SearchState>;

/// Get the search store from context
pub fn use_search_store() -> SearchStore {
    expect_context::<SearchStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select a section tab; invoking with the already-active tab changes nothing
pub fn store_switch_tab(store: &SearchStore, tab: SearchTab) {
    *store.active_tab().write() = tab;
}

/// Flip a group's expansion state in the store
pub fn store_toggle_show_more(store: &SearchStore, group_key: &str) {
    let groups_field = store.groups();
    let mut groups = groups_field.write();
    toggle_show_more(groups.as_mut_slice(), group_key);
}

/// Update a group's live query in the store
pub fn store_filter_items(store: &SearchStore, query: &str, group_key: &str) {
    let groups_field = store.groups();
    let mut groups = groups_field.write();
    filter_items(groups.as_mut_slice(), query, group_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{entry_visible, visible_count};
    use crate::models::{FilterEntry, FilterGroup};

    fn make_group(key: &str, labels: &[(&str, bool)]) -> FilterGroup {
        FilterGroup {
            key: key.to_string(),
            title: key.to_string(),
            entries: labels
                .iter()
                .enumerate()
                .map(|(i, (label, extra))| FilterEntry {
                    id: i as u32 + 1,
                    label: label.to_string(),
                    extra: *extra,
                })
                .collect(),
            query: String::new(),
            expanded: false,
        }
    }

    fn make_groups() -> Vec<FilterGroup> {
        vec![
            make_group(
                "products",
                &[
                    ("Black", false),
                    ("Navy", false),
                    ("Wool", true),
                    ("Felt", true),
                    ("Straw", true),
                ],
            ),
            make_group("collections", &[("Fedoras", false), ("Panamas", true)]),
        ]
    }

    #[test]
    fn active_section_follows_the_last_switch_and_is_exclusive() {
        let mut state = SearchState {
            active_tab: SearchTab::Products,
            groups: make_groups(),
        };

        for tab in [
            SearchTab::Collections,
            SearchTab::Products,
            SearchTab::Products,
            SearchTab::Collections,
        ] {
            state.active_tab = tab;
            let products = section_visible(state.active_tab, SearchTab::Products);
            let collections = section_visible(state.active_tab, SearchTab::Collections);
            assert_ne!(products, collections);
            assert_eq!(products, tab == SearchTab::Products);
        }
    }

    #[test]
    fn switching_to_the_active_tab_is_idempotent() {
        let mut state = SearchState {
            active_tab: SearchTab::Collections,
            groups: make_groups(),
        };
        let before = state.clone();
        state.active_tab = SearchTab::Collections;
        assert_eq!(state, before);
    }

    #[test]
    fn toggle_flips_all_extras_together() {
        let mut groups = make_groups();

        toggle_show_more(&mut groups, "products");
        let group = find_group(&groups, "products").unwrap();
        assert!(group.expanded);
        assert_eq!(visible_count(group), 5);

        toggle_show_more(&mut groups, "products");
        let group = find_group(&groups, "products").unwrap();
        assert!(!group.expanded);
        assert_eq!(visible_count(group), 2);
    }

    #[test]
    fn toggle_leaves_other_groups_alone() {
        let mut groups = make_groups();
        toggle_show_more(&mut groups, "products");
        assert!(!find_group(&groups, "collections").unwrap().expanded);
    }

    #[test]
    fn filter_query_is_stored_per_group() {
        let mut groups = make_groups();
        filter_items(&mut groups, "navy", "products");
        assert_eq!(find_group(&groups, "products").unwrap().query, "navy");
        assert_eq!(find_group(&groups, "collections").unwrap().query, "");

        let group = find_group(&groups, "products").unwrap();
        let shown: Vec<&str> = group
            .entries
            .iter()
            .filter(|entry| entry_visible(entry, group))
            .map(|entry| entry.label.as_str())
            .collect();
        assert_eq!(shown, vec!["Navy"]);
    }

    #[test]
    fn clearing_the_query_restores_all_entries() {
        let mut groups = make_groups();
        filter_items(&mut groups, "navy", "products");
        filter_items(&mut groups, "", "products");
        let group = find_group(&groups, "products").unwrap();
        assert_eq!(visible_count(group), 2); // extras still collapsed
    }

    #[test]
    fn unknown_group_is_a_no_op() {
        let mut groups = make_groups();
        let before = groups.clone();
        toggle_show_more(&mut groups, "sizes");
        filter_items(&mut groups, "wool", "sizes");
        assert_eq!(groups, before);
        assert!(find_group(&groups, "sizes").is_none());
    }
}
