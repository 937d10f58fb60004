//! Report rendering.
//!
//! `compose` is pure templating over fixed bilingual labels. A
//! [`ResponseFormatter`] is chosen when the assistant is built: the plain one
//! returns the composed text, the exporting one also shapes it for display
//! and writes the export files.

use crate::export::Exporter;
use crate::models::{AnalysisResult, ExportDocument};
use std::fmt::Write;
use tracing::{info, warn};

pub const NO_INFORMATION: &str = "معلومات غير متوفرة / No information available";
pub const HEADER: &str = "نتائج البحث / Search results:";
pub const CONTAINS_GLUTEN: &str = "يحتوي على الغلوتين / Contains gluten";
pub const GLUTEN_FREE: &str = "خالٍ من الغلوتين / Gluten-free";
const SOURCES_HEADING: &str = "مصادر الغلوتين / Gluten sources:";
const ALTERNATIVES_HEADING: &str = "بدائل مقترحة / Suggested alternatives:";

pub fn status_label(contains_gluten: bool) -> &'static str {
    if contains_gluten {
        CONTAINS_GLUTEN
    } else {
        GLUTEN_FREE
    }
}

pub fn compose(results: &[AnalysisResult]) -> String {
    if results.is_empty() {
        return NO_INFORMATION.to_string();
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", HEADER);
    for result in results {
        let _ = writeln!(
            out,
            "- {}: {}",
            result.item_name,
            status_label(result.contains_gluten)
        );
        write_block(&mut out, SOURCES_HEADING, &result.gluten_sources);
        write_block(&mut out, ALTERNATIVES_HEADING, &result.alternative_suggestions);
    }
    out
}

fn write_block(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {}", heading);
    for item in items {
        let _ = writeln!(out, "    * {}", item);
    }
}

/// Adjusts composed text for display, e.g. right-to-left reshaping.
pub trait DisplayShaper: Send + Sync {
    fn shape(&self, text: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl DisplayShaper for Passthrough {
    fn shape(&self, text: &str) -> String {
        text.to_string()
    }
}

pub trait ResponseFormatter: Send + Sync {
    fn format(&self, results: &[AnalysisResult]) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainFormatter;

impl ResponseFormatter for PlainFormatter {
    fn format(&self, results: &[AnalysisResult]) -> String {
        compose(results)
    }
}

/// Shapes the composed text and writes JSON and text exports. Export
/// failures are logged and never fail the response.
pub struct ExportingFormatter {
    shaper: Box<dyn DisplayShaper>,
    exporter: Exporter,
}

impl ExportingFormatter {
    pub fn new(shaper: Box<dyn DisplayShaper>, exporter: Exporter) -> Self {
        Self { shaper, exporter }
    }
}

impl ResponseFormatter for ExportingFormatter {
    fn format(&self, results: &[AnalysisResult]) -> String {
        let original = compose(results);
        let reshaped = self.shaper.shape(&original);

        let doc = ExportDocument {
            original_response: original,
            reshaped_response: reshaped.clone(),
            results: results.iter().map(Into::into).collect(),
        };
        match self.exporter.save_json(&doc) {
            Ok(path) => info!(path = %path.display(), "results saved"),
            Err(e) => warn!(error = %e, "failed to save JSON export"),
        }
        match self.exporter.save_text(&reshaped) {
            Ok(path) => info!(path = %path.display(), "response saved"),
            Err(e) => warn!(error = %e, "failed to save text export"),
        }
        reshaped
    }
}
