//! Writes deterministic placeholder tables for any table file that is absent.

use crate::models::DataSourceKind;
use crate::tables::TablePaths;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const RECIPES: &[&[&str]] = &[
    &["name", "ingredients", "gluten_status"],
    &["Tagine", "lamb", "False"],
    &["Couscous", "wheat semolina", "True"],
    &["Harira", "flour", "True"],
    &["Pastilla", "wheat flour", "True"],
    &["Zaalouk", "eggplant", "False"],
];

const PRODUCTS: &[&[&str]] = &[
    &["name", "ingredients", "brand", "gluten_status"],
    &["Sardines à l'huile", "sardines salt oil", "Conserver", "False"],
    &["Moroccan Bread", "wheat flour", "Local Bakery", "True"],
    &["Rice Cookies", "rice flour sugar", "Meknes Sweets", "False"],
];

const NUTRITION: &[&[&str]] = &[
    &["ingredient", "gluten_content", "alternative"],
    &["wheat", "high", "rice"],
    &["barley", "high", "millet"],
    &["rye", "high", "corn"],
    &["couscous", "high", "quinoa"],
];

fn seed_rows(kind: DataSourceKind) -> &'static [&'static [&'static str]] {
    match kind {
        DataSourceKind::Recipe => RECIPES,
        DataSourceKind::Product => PRODUCTS,
        DataSourceKind::Nutrition => NUTRITION,
    }
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub created: Vec<PathBuf>,
    pub failed: Vec<(DataSourceKind, String)>,
}

/// Creates each missing table file with its seed rows. Existing files are left
/// untouched. A table that cannot be written is reported and skipped; the
/// others are still seeded.
pub fn ensure_seed_files(paths: &TablePaths) -> SeedReport {
    let mut report = SeedReport::default();
    for kind in DataSourceKind::ALL {
        let path = paths.path(kind);
        if path.exists() {
            continue;
        }
        match write_table(path, seed_rows(kind))
            .with_context(|| format!("Failed to seed {} table at {:?}", kind, path))
        {
            Ok(()) => {
                info!(table = %kind, path = %path.display(), "seeded missing table");
                report.created.push(path.to_path_buf());
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(table = %kind, error = %reason, "could not seed table");
                report.failed.push((kind, reason));
            }
        }
    }
    report
}

fn write_table(path: &Path, rows: &[&[&str]]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.write_record(*row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TabularStore;

    #[test]
    fn seeds_only_missing_tables() {
        let temp = tempfile::tempdir().unwrap();
        let paths = TablePaths {
            recipes: temp.path().join("data/moroccan_recipes.csv"),
            products: temp.path().join("data/moroccan_products.csv"),
            nutrition: temp.path().join("data/nutritional_ref.csv"),
        };
        fs::create_dir_all(temp.path().join("data")).unwrap();
        fs::write(&paths.products, "name,ingredients\nOnly One,rice\n").unwrap();

        let report = ensure_seed_files(&paths);
        assert_eq!(report.created, vec![paths.recipes.clone(), paths.nutrition.clone()]);
        assert!(report.failed.is_empty());

        let store = TabularStore::open(&paths);
        assert_eq!(store.len(DataSourceKind::Recipe), 5);
        assert_eq!(store.len(DataSourceKind::Product), 1);
        assert_eq!(store.len(DataSourceKind::Nutrition), 4);
        assert_eq!(store.items(DataSourceKind::Recipe)[1].name, "Couscous");

        assert!(ensure_seed_files(&paths).created.is_empty());
    }

    #[test]
    fn unwritable_table_does_not_stop_the_others() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let paths = TablePaths {
            recipes: temp.path().join("recipes.csv"),
            products: blocker.join("products.csv"),
            nutrition: temp.path().join("nutrition.csv"),
        };

        let report = ensure_seed_files(&paths);
        assert_eq!(report.created, vec![paths.recipes.clone(), paths.nutrition.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, DataSourceKind::Product);
    }
}
