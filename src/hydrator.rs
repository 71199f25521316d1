use std::collections::HashSet;

use crate::entities::{Place, SavedPlace};

/// Catalog entries whose title appears among `saved`, in catalog order.
///
/// Duplicate titles in `saved` collapse; saved titles with no catalog
/// entry are dropped.
pub fn hydrate(catalog: &[Place], saved: &[SavedPlace]) -> Vec<Place> {
    let titles: HashSet<&str> = saved.iter().map(|s| s.title.as_str()).collect();

    catalog
        .iter()
        .filter(|place| titles.contains(place.title.as_str()))
        .cloned()
        .collect()
}
