use crate::models::ExportDocument;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const JSON_FILE_NAME: &str = "gluten_analysis_results.json";
pub const TEXT_FILE_NAME: &str = "gluten_analysis_results.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes UTF-8 exports into a single output directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn save_json(&self, doc: &ExportDocument) -> Result<PathBuf, ExportError> {
        // serde_json keeps non-ASCII text as-is.
        let body = serde_json::to_string_pretty(doc)?;
        self.write(JSON_FILE_NAME, &body)
    }

    pub fn save_text(&self, text: &str) -> Result<PathBuf, ExportError> {
        self.write(TEXT_FILE_NAME, text)
    }

    fn write(&self, file_name: &str, body: &str) -> Result<PathBuf, ExportError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ExportError::Io { path, source }
        };
        fs::create_dir_all(&self.output_dir).map_err(io_err(&self.output_dir))?;
        let path = self.output_dir.join(file_name);
        fs::write(&path, body).map_err(io_err(&path))?;
        Ok(path)
    }
}
