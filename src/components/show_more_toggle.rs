//! Show More Toggle Component
//!
//! Link flipping a filter group's overflow entries. The label derives from
//! the group's tracked expansion boolean, never from the displayed text.

use leptos::prelude::*;

use crate::filter::show_more_label;
use crate::state::{find_group, store_toggle_show_more, use_search_store, SearchStateStoreFields};

/// Show More / Show Less toggle for one filter group
#[component]
pub fn ShowMoreToggle(group_key: &'static str) -> impl IntoView {
    let store = use_search_store();

    let expanded = move || {
        find_group(store.groups().read().as_slice(), group_key)
            .map(|group| group.expanded)
            .unwrap_or(false)
    };

    view! {
        <button
            type="button"
            class="show-more-link"
            on:click=move |_| store_toggle_show_more(&store, group_key)
        >
            {move || show_more_label(expanded())}
        </button>
    }
}
