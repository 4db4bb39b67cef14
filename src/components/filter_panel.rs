//! Filter Panel Component
//!
//! One filter group: live search input, checklist entries, match count, and
//! the Show More toggle when the group has overflow entries. Each entry gets
//! a single combined visibility decision (query match AND expansion state).

use leptos::prelude::*;

use crate::components::ShowMoreToggle;
use crate::filter::{entry_visible, visible_count};
use crate::models::FilterGroup;
use crate::state::{find_group, store_filter_items, use_search_store, SearchStateStoreFields};

/// Filter panel for one group, looked up by key on every change
#[component]
pub fn FilterPanel(group_key: &'static str) -> impl IntoView {
    let store = use_search_store();

    let group = move || -> Option<FilterGroup> {
        find_group(store.groups().read().as_slice(), group_key).cloned()
    };

    let title = move || group().map(|g| g.title).unwrap_or_default();
    let query = move || group().map(|g| g.query).unwrap_or_default();
    let match_count = move || {
        group()
            .map(|g| format!("{} of {} filters", visible_count(&g), g.entries.len()))
            .unwrap_or_default()
    };

    view! {
        <div class="filter-group" id=format!("{}-filters", group_key)>
            <h3 class="filter-group-title">{title}</h3>

            <input
                type="text"
                class="filter-search"
                placeholder="Search filters..."
                autocomplete="off"
                prop:value=query
                on:input=move |ev| {
                    store_filter_items(&store, &event_target_value(&ev), group_key);
                }
            />

            {move || {
                let Some(group) = group() else {
                    return view! { <div></div> }.into_any();
                };

                view! {
                    <div class="filter-checklist">
                        {group.entries.iter().map(|entry| {
                            let visible = entry_visible(entry, &group);
                            view! {
                                <label
                                    class="form-check"
                                    class:extra-item=entry.extra
                                    style:display=if visible { "" } else { "none" }
                                >
                                    <input type="checkbox" value=entry.label.clone() />
                                    <span class="form-check-label">{entry.label.clone()}</span>
                                </label>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}

            <p class="match-count">{match_count}</p>

            <Show when=move || group().map(|g| g.has_extras()).unwrap_or(false)>
                <ShowMoreToggle group_key=group_key />
            </Show>
        </div>
    }
}
