use crate::alternatives::AlternativeCatalog;

/// Collects substitutes for every catalog keyword found in the lower-cased
/// item name, in catalog order. Overlapping keywords may repeat entries.
pub fn suggest(item_name: &str, catalog: &AlternativeCatalog) -> Vec<String> {
    let name = item_name.to_lowercase();
    catalog
        .iter()
        .filter(|(keyword, _)| name.contains(keyword))
        .flat_map(|(_, subs)| subs.iter().cloned())
        .collect()
}
