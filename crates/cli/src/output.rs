use crate::commands::{InitSummary, QueryOutcome};
use anyhow::Result;
use gluten_core::AnalysisResult;
use serde_json::{json, Value};
use storage::{DataSourceKind, TableStatus};

pub fn print_answer(
    outcome: &QueryOutcome,
    query: &str,
    json: bool,
    details: bool,
    blank_warning: &str,
) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&answer_json(outcome, query, blank_warning))?
        );
        return Ok(());
    }
    match outcome {
        QueryOutcome::Blank => eprintln!("{}", blank_warning),
        QueryOutcome::Answered { results, response } => {
            println!("{}", response.trim_end());
            if details {
                for line in detail_lines(results) {
                    println!("{}", line);
                }
            }
        }
    }
    Ok(())
}

/// JSON document printed for `search` and `scan` under `--json`.
pub fn answer_json(outcome: &QueryOutcome, query: &str, blank_warning: &str) -> Value {
    match outcome {
        QueryOutcome::Blank => json!({
            "status": "warning",
            "message": blank_warning,
        }),
        QueryOutcome::Answered { results, response } => json!({
            "status": "ok",
            "query": query,
            "results": results,
            "response": response,
        }),
    }
}

/// Expanded per-item view shown under the report.
pub fn detail_lines(results: &[AnalysisResult]) -> Vec<String> {
    let mut lines = Vec::new();
    if results.is_empty() {
        return lines;
    }
    lines.push(String::new());
    lines.push("تفاصيل إضافية / Details:".to_string());
    for r in results {
        lines.push(format!("{} [{}]", r.item_name, r.source));
        lines.push(format!(
            "  يحتوي على الغلوتين / Contains gluten: {}",
            if r.contains_gluten { "نعم / yes" } else { "لا / no" }
        ));
        if !r.gluten_sources.is_empty() {
            lines.push(format!(
                "  مصادر الغلوتين / Gluten sources: {}",
                r.gluten_sources.join(", ")
            ));
        }
        if !r.alternative_suggestions.is_empty() {
            lines.push(format!(
                "  بدائل مقترحة / Alternatives: {}",
                r.alternative_suggestions.join(", ")
            ));
        }
    }
    lines
}

pub fn print_status(statuses: &[TableStatus], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(statuses)?);
        return Ok(());
    }
    for s in statuses {
        match &s.error {
            None => println!("{}: {} entries", s.kind, s.rows),
            Some(e) => println!("{}: {} entries (load failed: {})", s.kind, s.rows, e),
        }
    }
    Ok(())
}

pub fn print_browse(kind: DataSourceKind, lines: &[String]) {
    println!("{}", kind.label());
    if lines.is_empty() {
        println!("(empty)");
    }
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_init(summary: &InitSummary, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "status": "ok",
                "config": summary.config_path,
                "config_written": summary.config_written,
                "seeded": summary.seeded,
                "seed_failures": summary
                    .seed_failures
                    .iter()
                    .map(|(kind, reason)| json!({ "table": kind, "error": reason }))
                    .collect::<Vec<_>>(),
            }))?
        );
    } else {
        if summary.config_written {
            println!("wrote config {}", summary.config_path.display());
        } else {
            println!("config {} already present", summary.config_path.display());
        }
        println!("seeded {} table(s)", summary.seeded.len());
        for (kind, reason) in &summary.seed_failures {
            println!("{}: not seeded ({})", kind, reason);
        }
    }
    Ok(())
}
