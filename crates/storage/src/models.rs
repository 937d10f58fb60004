use serde::{Deserialize, Serialize};
use std::fmt;

/// Text stored for a missing or empty cell.
pub const MISSING_TEXT: &str = "";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    Recipe,
    Product,
    Nutrition,
}

impl DataSourceKind {
    pub const ALL: [DataSourceKind; 3] = [
        DataSourceKind::Recipe,
        DataSourceKind::Product,
        DataSourceKind::Nutrition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DataSourceKind::Recipe => "recipes",
            DataSourceKind::Product => "products",
            DataSourceKind::Nutrition => "nutrition",
        }
    }

    /// Bilingual heading used by the table browser.
    pub fn label(self) -> &'static str {
        match self {
            DataSourceKind::Recipe => "قاعدة بيانات الوصفات / Recipe database",
            DataSourceKind::Product => "كتالوج المنتجات / Product catalog",
            DataSourceKind::Nutrition => "المراجع الغذائية / Nutritional reference",
        }
    }

    /// Whether queries scan this table. Only item tables are searched.
    pub fn is_searchable(self) -> bool {
        !matches!(self, DataSourceKind::Nutrition)
    }
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A recipe or product row. The declared `gluten_status` column is carried
/// for browsing only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub ingredients: String,
    pub brand: Option<String>,
    pub gluten_status: Option<String>,
}

impl ItemRow {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
            brand: None,
            gluten_status: None,
        }
    }
}

/// Row shape as it appears on disk; every cell except `name` may be absent.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItemRow {
    name: String,
    #[serde(default)]
    ingredients: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    gluten_status: Option<String>,
}

impl From<RawItemRow> for ItemRow {
    fn from(raw: RawItemRow) -> Self {
        Self {
            name: raw.name,
            ingredients: raw
                .ingredients
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| MISSING_TEXT.to_string()),
            brand: raw.brand.filter(|s| !s.is_empty()),
            gluten_status: raw.gluten_status.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionRow {
    pub ingredient: String,
    #[serde(default)]
    pub gluten_content: String,
    #[serde(default)]
    pub alternative: String,
}
