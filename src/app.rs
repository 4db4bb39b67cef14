//! Storefront Search App
//!
//! Top-level component: bootstraps the catalog, provides the store, and
//! renders the tab bar with the two mutually exclusive sections. Sections
//! stay mounted while hidden so group state survives tab switches.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap;
use crate::components::{FilterPanel, SectionTabBar};
use crate::models::SearchTab;
use crate::state::{section_visible, SearchState, SearchStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let catalog = bootstrap::embedded_catalog().unwrap_or_else(|err| {
        web_sys::console::error_1(
            &format!("[App] {}; falling back to demo catalog", err).into(),
        );
        bootstrap::demo_catalog()
    });
    web_sys::console::log_1(
        &format!("[App] catalog loaded: {} filter groups", catalog.groups.len()).into(),
    );

    let store = Store::new(SearchState::from_catalog(catalog));
    provide_context(store);

    let section_display = move |tab: SearchTab| {
        move || {
            if section_visible(store.active_tab().get(), tab) {
                "block"
            } else {
                "none"
            }
        }
    };

    view! {
        <div class="search-page">
            <h1>"Search the Shop"</h1>

            <SectionTabBar />

            <section
                id="products-section"
                style:display=section_display(SearchTab::Products)
            >
                <FilterPanel group_key=SearchTab::Products.key() />
            </section>

            <section
                id="collections-section"
                style:display=section_display(SearchTab::Collections)
            >
                <FilterPanel group_key=SearchTab::Collections.key() />
            </section>
        </div>
    }
}
