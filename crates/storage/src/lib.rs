//! Storage layer: flat-file tables and seed helpers.
//!
//! Holds the typed row models, the CSV table loader and the bootstrap that
//! writes placeholder tables when they are absent.

pub mod models;
pub mod seed;
pub mod tables;

pub use models::{DataSourceKind, ItemRow, NutritionRow};
pub use seed::SeedReport;
pub use tables::{LoadOutcome, TableError, TablePaths, TableStatus, TabularStore};
