use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

pub const BLANK_QUERY_WARNING: &str =
    "أدخل اسم المنتج أو المكون / Please enter a product or ingredient name.";
pub const BLANK_SCAN_WARNING: &str =
    "لم يتم التعرف على أي نص. يرجى التأكد من جودة الصورة. / No text was recognised; check the image quality.";

/// Empty or whitespace-only text is never searched: an empty query would
/// match every row.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Reads text produced by an upstream extractor (e.g. OCR) from a file, or
/// from stdin when no file is given.
pub fn read_extracted_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read extracted text from {:?}", path)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read extracted text from stdin")?;
            Ok(buf)
        }
    }
}
