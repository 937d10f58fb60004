use anyhow::{Context, Result};
use gluten_core::config::{self, AppConfig};
use gluten_core::{AnalysisResult, GlutenAssistant};
use std::path::{Path, PathBuf};
use storage::{seed, DataSourceKind, TableStatus};
use tracing::info;

pub enum QueryOutcome {
    /// Nothing to search for; the caller shows a warning.
    Blank,
    Answered {
        results: Vec<AnalysisResult>,
        response: String,
    },
}

pub fn answer(assistant: &GlutenAssistant, text: &str) -> QueryOutcome {
    if crate::input::is_blank(text) {
        return QueryOutcome::Blank;
    }
    let results = assistant.analyze(text);
    info!("Found {} result(s).", results.len());
    let response = assistant.respond(&results);
    QueryOutcome::Answered { results, response }
}

pub struct InitSummary {
    pub config_path: PathBuf,
    pub config_written: bool,
    pub seeded: Vec<PathBuf>,
    pub seed_failures: Vec<(DataSourceKind, String)>,
}

/// Writes the default config if missing and seeds whichever tables it names
/// that do not exist yet.
pub fn init(config_path: &Path) -> Result<InitSummary> {
    let config_written = config::write_default(config_path)?;
    let path_str = config_path
        .to_str()
        .context("config path is not valid UTF-8")?;
    let cfg: AppConfig = config::load(Some(path_str))?;
    let report = seed::ensure_seed_files(&cfg.table_paths());
    Ok(InitSummary {
        config_path: config_path.to_path_buf(),
        config_written,
        seeded: report.created,
        seed_failures: report.failed,
    })
}

pub fn status(assistant: &GlutenAssistant) -> Vec<TableStatus> {
    assistant.store().outcome_summary()
}

/// Rows of one table rendered for the browsing view, one line per row.
pub fn browse_lines(assistant: &GlutenAssistant, kind: DataSourceKind) -> Vec<String> {
    let store = assistant.store();
    match kind {
        DataSourceKind::Nutrition => store
            .nutrition()
            .iter()
            .map(|r| format!("{} | {} | {}", r.ingredient, r.gluten_content, r.alternative))
            .collect(),
        _ => store
            .items(kind)
            .iter()
            .map(|r| {
                let mut cols = vec![r.name.as_str(), r.ingredients.as_str()];
                cols.extend(r.brand.as_deref());
                cols.extend(r.gluten_status.as_deref());
                cols.join(" | ")
            })
            .collect(),
    }
}

pub fn browse_json(assistant: &GlutenAssistant, kind: DataSourceKind) -> Result<serde_json::Value> {
    let store = assistant.store();
    let rows = match kind {
        DataSourceKind::Nutrition => serde_json::to_value(store.nutrition())?,
        _ => serde_json::to_value(store.items(kind))?,
    };
    Ok(serde_json::json!({
        "table": kind.name(),
        "label": kind.label(),
        "rows": rows,
    }))
}
