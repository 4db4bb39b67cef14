//! Section Tab Bar Component
//!
//! Tabs for switching between the products and collections sections.

use leptos::prelude::*;

use crate::models::SearchTab;
use crate::state::{store_switch_tab, use_search_store, SearchStateStoreFields};

const SEARCH_TABS: &[SearchTab] = &[SearchTab::Products, SearchTab::Collections];

/// Section Tab Bar component
#[component]
pub fn SectionTabBar() -> impl IntoView {
    let store = use_search_store();

    view! {
        <div class="search-tab-bar">
            {SEARCH_TABS.iter().map(|tab| {
                let tab = *tab;
                let is_active = move || store.active_tab().get() == tab;

                view! {
                    <button
                        id=format!("{}-tab", tab.key())
                        class=move || {
                            if is_active() { "search-tab active" } else { "search-tab" }
                        }
                        on:click=move |_| store_switch_tab(&store, tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
