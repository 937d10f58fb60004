use crate::alternatives::AlternativeCatalog;
use crate::config::AppConfig;
use crate::export::Exporter;
use crate::lexicon::GlutenLexicon;
use crate::models::{AnalysisResult, DEFAULT_CONFIDENCE};
use crate::response::{ExportingFormatter, Passthrough, PlainFormatter, ResponseFormatter};
use crate::search::MatchedRow;
use crate::{classifier, search, suggester};
use std::collections::BTreeMap;
use storage::seed;
use storage::TabularStore;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterMode {
    Plain,
    Export,
}

impl FormatterMode {
    pub fn select(export: bool) -> Self {
        if export {
            FormatterMode::Export
        } else {
            FormatterMode::Plain
        }
    }
}

/// Query engine over read-only reference data. Shareable across threads; no
/// call mutates it.
pub struct GlutenAssistant {
    store: TabularStore,
    lexicon: GlutenLexicon,
    catalog: AlternativeCatalog,
    formatter: Box<dyn ResponseFormatter>,
}

impl GlutenAssistant {
    pub fn new(
        store: TabularStore,
        lexicon: GlutenLexicon,
        catalog: AlternativeCatalog,
        formatter: Box<dyn ResponseFormatter>,
    ) -> Self {
        Self {
            store,
            lexicon,
            catalog,
            formatter,
        }
    }

    /// Seeds absent tables, loads them and builds the lexicon and catalog.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::from_config_with_mode(config, FormatterMode::select(config.export))
    }

    pub fn from_config_with_mode(config: &AppConfig, mode: FormatterMode) -> anyhow::Result<Self> {
        if let Some(model) = &config.embedding_model {
            debug!(model = %model, "embedding model configured but not used for retrieval");
        }

        let paths = config.table_paths();
        let seeded = seed::ensure_seed_files(&paths);
        if !seeded.created.is_empty() {
            info!("Seeded {} missing table(s).", seeded.created.len());
        }
        let store = TabularStore::open(&paths);

        let formatter: Box<dyn ResponseFormatter> = match mode {
            FormatterMode::Plain => Box::new(PlainFormatter),
            FormatterMode::Export => Box::new(ExportingFormatter::new(
                Box::new(Passthrough),
                Exporter::new(&config.output_dir),
            )),
        };

        Ok(Self::new(
            store,
            GlutenLexicon::with_extra(&config.extra_gluten_tokens),
            AlternativeCatalog::with_extra(&config.extra_alternatives),
            formatter,
        ))
    }

    pub fn store(&self) -> &TabularStore {
        &self.store
    }

    pub fn lexicon(&self) -> &GlutenLexicon {
        &self.lexicon
    }

    /// Matches `query` against recipes and products and analyzes each hit.
    pub fn analyze(&self, query: &str) -> Vec<AnalysisResult> {
        let matches = search::search(&self.store, query);
        debug!(query, matches = matches.len(), "query matched");
        matches.into_iter().map(|m| self.analyze_row(m)).collect()
    }

    pub fn analyze_row(&self, matched: MatchedRow<'_>) -> AnalysisResult {
        let classification = classifier::classify(&matched.row.ingredients, &self.lexicon);
        AnalysisResult {
            item_name: matched.row.name.clone(),
            source: matched.source,
            contains_gluten: classification.contains_gluten,
            gluten_sources: classification.sources,
            alternative_suggestions: suggester::suggest(&matched.row.name, &self.catalog),
            confidence_score: DEFAULT_CONFIDENCE,
            nutritional_details: BTreeMap::new(),
        }
    }

    pub fn respond(&self, results: &[AnalysisResult]) -> String {
        self.formatter.format(results)
    }
}
