use storage::{DataSourceKind, ItemRow, TabularStore};

/// A row that matched a query, tagged with the table it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedRow<'a> {
    pub source: DataSourceKind,
    pub row: &'a ItemRow,
}

/// Scans recipes, then products, returning every row whose name or
/// ingredients contain `query` case-insensitively. Source order is kept and
/// rows are never deduplicated across tables. The empty query matches all rows.
pub fn search<'a>(store: &'a TabularStore, query: &str) -> Vec<MatchedRow<'a>> {
    let needle = query.to_lowercase();
    DataSourceKind::ALL
        .into_iter()
        .filter(|kind| kind.is_searchable())
        .flat_map(|kind| {
            store
                .items(kind)
                .iter()
                .map(move |row| MatchedRow { source: kind, row })
        })
        .filter(|m| matches(m.row, &needle))
        .collect()
}

fn matches(row: &ItemRow, needle: &str) -> bool {
    row.name.to_lowercase().contains(needle) || row.ingredients.to_lowercase().contains(needle)
}
