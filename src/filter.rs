//! Filter Visibility Logic
//!
//! Pure functions deciding what each checklist entry shows as. Every entry
//! gets exactly one combined visibility decision: the text filter and the
//! group's expansion state compose by intersection.

use crate::models::{FilterEntry, FilterGroup};

/// Case-insensitive substring match; an empty needle matches everything
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Combined visibility decision for a single entry
///
/// An entry displays only if its label contains the group's query AND it is
/// not an overflow entry hidden by a collapsed group.
pub fn entry_visible(entry: &FilterEntry, group: &FilterGroup) -> bool {
    contains_ci(&entry.label, &group.query) && (!entry.extra || group.expanded)
}

/// Number of entries currently visible in a group
pub fn visible_count(group: &FilterGroup) -> usize {
    group
        .entries
        .iter()
        .filter(|entry| entry_visible(entry, group))
        .count()
}

/// Toggle-link label, derived from the tracked expansion boolean
pub fn show_more_label(expanded: bool) -> &'static str {
    if expanded {
        "Show Less ▲"
    } else {
        "Show More ▼"
    }
}
