use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use storage::DataSourceKind;

/// Confidence attached to every result until a scoring model exists.
pub const DEFAULT_CONFIDENCE: f32 = 0.8;

/// Outcome of classifying and annotating one matched row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub item_name: String,
    pub source: DataSourceKind,
    pub contains_gluten: bool,
    pub gluten_sources: Vec<String>,
    pub alternative_suggestions: Vec<String>,
    pub confidence_score: f32,
    /// Never populated: the nutrition table is not joined against matches.
    #[serde(default)]
    pub nutritional_details: BTreeMap<String, String>,
}

/// Export document written next to a composed response.
#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub original_response: String,
    pub reshaped_response: String,
    pub results: Vec<ExportedResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedResult {
    pub item_name: String,
    pub contains_gluten: bool,
    pub gluten_sources: Vec<String>,
    pub alternatives: Vec<String>,
}

impl From<&AnalysisResult> for ExportedResult {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            item_name: result.item_name.clone(),
            contains_gluten: result.contains_gluten,
            gluten_sources: result.gluten_sources.clone(),
            alternatives: result.alternative_suggestions.clone(),
        }
    }
}
