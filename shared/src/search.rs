//! Case-insensitive menu search.

use crate::model::MenuRecord;

/// lazily yields the records whose name contains `query`, ignoring case
///
/// an empty query matches everything. recomputed per keystroke by the
/// search view, so this does no caching.
pub fn filter_menus<'a>(
    menus: &'a [MenuRecord],
    query: &str,
) -> impl Iterator<Item = &'a MenuRecord> + 'a {
    let needle = query.to_lowercase();
    menus
        .iter()
        .filter(move |menu| menu.name.to_lowercase().contains(&needle))
}
