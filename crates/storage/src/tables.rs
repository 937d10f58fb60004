use crate::models::{DataSourceKind, ItemRow, NutritionRow, RawItemRow};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("table file not found: {0}")]
    MissingFile(PathBuf),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result of loading one table. A failed load still yields an empty table to
/// query against; the reason is kept so callers can tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Loaded(Vec<T>),
    Failed { reason: String },
}

impl<T> LoadOutcome<T> {
    pub fn rows(&self) -> &[T] {
        match self {
            LoadOutcome::Loaded(rows) => rows,
            LoadOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Failed { reason } => Some(reason),
        }
    }

    fn from_result(kind: DataSourceKind, result: Result<Vec<T>, TableError>) -> Self {
        match result {
            Ok(rows) => {
                info!(table = %kind, rows = rows.len(), "table loaded");
                LoadOutcome::Loaded(rows)
            }
            Err(e) => {
                warn!(table = %kind, error = %e, "table failed to load, using empty table");
                LoadOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePaths {
    pub recipes: PathBuf,
    pub products: PathBuf,
    pub nutrition: PathBuf,
}

impl TablePaths {
    pub fn path(&self, kind: DataSourceKind) -> &Path {
        match kind {
            DataSourceKind::Recipe => &self.recipes,
            DataSourceKind::Product => &self.products,
            DataSourceKind::Nutrition => &self.nutrition,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableStatus {
    pub kind: DataSourceKind,
    pub loaded: bool,
    pub rows: usize,
    pub error: Option<String>,
}

/// The three reference tables. Immutable once built.
#[derive(Debug, Clone)]
pub struct TabularStore {
    recipes: LoadOutcome<ItemRow>,
    products: LoadOutcome<ItemRow>,
    nutrition: LoadOutcome<NutritionRow>,
}

impl TabularStore {
    /// Loads every table independently; one bad file never blocks the others.
    pub fn open(paths: &TablePaths) -> Self {
        Self {
            recipes: Self::load_items(DataSourceKind::Recipe, &paths.recipes),
            products: Self::load_items(DataSourceKind::Product, &paths.products),
            nutrition: LoadOutcome::from_result(
                DataSourceKind::Nutrition,
                read_csv::<NutritionRow>(&paths.nutrition),
            ),
        }
    }

    pub fn from_rows(
        recipes: Vec<ItemRow>,
        products: Vec<ItemRow>,
        nutrition: Vec<NutritionRow>,
    ) -> Self {
        Self {
            recipes: LoadOutcome::Loaded(recipes),
            products: LoadOutcome::Loaded(products),
            nutrition: LoadOutcome::Loaded(nutrition),
        }
    }

    pub fn load_items(kind: DataSourceKind, path: &Path) -> LoadOutcome<ItemRow> {
        let rows = read_csv::<RawItemRow>(path)
            .map(|raw| raw.into_iter().map(ItemRow::from).collect::<Vec<_>>());
        LoadOutcome::from_result(kind, rows)
    }

    /// Recipe or product rows; the nutrition table has no item rows.
    pub fn items(&self, kind: DataSourceKind) -> &[ItemRow] {
        match kind {
            DataSourceKind::Recipe => self.recipes.rows(),
            DataSourceKind::Product => self.products.rows(),
            DataSourceKind::Nutrition => &[],
        }
    }

    pub fn nutrition(&self) -> &[NutritionRow] {
        self.nutrition.rows()
    }

    pub fn len(&self, kind: DataSourceKind) -> usize {
        match kind {
            DataSourceKind::Nutrition => self.nutrition.rows().len(),
            _ => self.items(kind).len(),
        }
    }

    pub fn status(&self, kind: DataSourceKind) -> TableStatus {
        let error = match kind {
            DataSourceKind::Recipe => self.recipes.failure_reason(),
            DataSourceKind::Product => self.products.failure_reason(),
            DataSourceKind::Nutrition => self.nutrition.failure_reason(),
        };
        TableStatus {
            kind,
            loaded: error.is_none(),
            rows: self.len(kind),
            error: error.map(str::to_string),
        }
    }

    pub fn outcome_summary(&self) -> Vec<TableStatus> {
        DataSourceKind::ALL
            .iter()
            .map(|kind| self.status(*kind))
            .collect()
    }
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TableError> {
    if !path.exists() {
        return Err(TableError::MissingFile(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(file);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: T = record.map_err(|source| TableError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn paths_in(dir: &Path) -> TablePaths {
        TablePaths {
            recipes: dir.join("recipes.csv"),
            products: dir.join("products.csv"),
            nutrition: dir.join("nutrition.csv"),
        }
    }

    #[test]
    fn missing_file_degrades_to_empty_table() {
        let temp = tempfile::tempdir().unwrap();
        let paths = paths_in(temp.path());
        fs::write(&paths.recipes, "name,ingredients\nTagine,lamb\n").unwrap();

        let store = TabularStore::open(&paths);
        assert_eq!(store.items(DataSourceKind::Recipe).len(), 1);
        assert!(store.items(DataSourceKind::Product).is_empty());

        let status = store.status(DataSourceKind::Product);
        assert!(!status.loaded);
        assert!(status.error.unwrap().contains("not found"));
    }

    #[test]
    fn missing_ingredients_cell_becomes_placeholder() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("products.csv");
        fs::write(
            &path,
            "name,ingredients,brand\nMystery Snack,,\nBread,wheat flour,Local Bakery\n",
        )
        .unwrap();

        let outcome = TabularStore::load_items(DataSourceKind::Product, &path);
        let rows = outcome.rows();
        assert_eq!(rows[0].ingredients, crate::models::MISSING_TEXT);
        assert_eq!(rows[0].brand, None);
        assert_eq!(rows[1].brand.as_deref(), Some("Local Bakery"));
    }

    #[test]
    fn table_without_name_column_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("recipes.csv");
        fs::write(&path, "title,ingredients\nTagine,lamb\n").unwrap();

        let outcome = TabularStore::load_items(DataSourceKind::Recipe, &path);
        assert!(!outcome.is_loaded());
        assert!(outcome.rows().is_empty());
    }

    #[test]
    fn nutrition_rows_are_not_items() {
        let store = TabularStore::from_rows(
            vec![],
            vec![],
            vec![NutritionRow {
                ingredient: "wheat".into(),
                gluten_content: "high".into(),
                alternative: "rice".into(),
            }],
        );
        assert!(store.items(DataSourceKind::Nutrition).is_empty());
        assert_eq!(store.len(DataSourceKind::Nutrition), 1);
    }
}
