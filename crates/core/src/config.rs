use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storage::TablePaths;

/// Config file looked up when no explicit path is given. The extension is
/// resolved by the `config` crate (`.json`, `.toml`, `.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "moroccan_gluten_config";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub recipe_database_path: String,
    pub product_catalog_path: String,
    pub nutritional_database_path: String,
    /// Accepted for compatibility with existing config files; never used.
    #[serde(default)]
    pub embedding_model: Option<String>,
    #[serde(default)]
    pub translation_model: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub export: bool,
    #[serde(default)]
    pub extra_gluten_tokens: Vec<String>,
    #[serde(default)]
    pub extra_alternatives: Vec<AlternativeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeEntry {
    pub keyword: String,
    pub substitutes: Vec<String>,
}

fn default_output_dir() -> String {
    "output".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipe_database_path: "data/moroccan_recipes.csv".to_string(),
            product_catalog_path: "data/moroccan_products.csv".to_string(),
            nutritional_database_path: "data/nutritional_ref.csv".to_string(),
            embedding_model: None,
            translation_model: None,
            output_dir: default_output_dir(),
            export: false,
            extra_gluten_tokens: Vec::new(),
            extra_alternatives: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn table_paths(&self) -> TablePaths {
        TablePaths {
            recipes: PathBuf::from(&self.recipe_database_path),
            products: PathBuf::from(&self.product_catalog_path),
            nutrition: PathBuf::from(&self.nutritional_database_path),
        }
    }

    /// Rebases relative table and output paths onto `base`.
    pub fn rooted_at(mut self, base: &Path) -> Self {
        let rebase = |p: &mut String| {
            if Path::new(p.as_str()).is_relative() {
                *p = base.join(p.as_str()).to_string_lossy().into_owned();
            }
        };
        rebase(&mut self.recipe_database_path);
        rebase(&mut self.product_catalog_path);
        rebase(&mut self.nutritional_database_path);
        rebase(&mut self.output_dir);
        self
    }
}

/// Loads the configuration. A missing or invalid file is an error: without
/// it no table paths are known.
pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let name = path.unwrap_or(DEFAULT_CONFIG_NAME);
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name))
        .build()
        .with_context(|| format!("Failed to read config {:?}", name))?;
    settings
        .try_deserialize()
        .with_context(|| format!("Invalid config {:?}", name))
}

/// Writes the default configuration unless the file already exists. The
/// format follows the file extension (`.json`, `.toml`, `.yaml` or `.yml`),
/// matching what [`load`] accepts. Returns true when a file was written.
pub fn write_default(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let body = render(&AppConfig::default(), path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, body).with_context(|| format!("Failed to write config {:?}", path))?;
    Ok(true)
}

fn render(cfg: &AppConfig, path: &Path) -> anyhow::Result<String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let body = match ext.as_deref() {
        Some("json") => serde_json::to_string_pretty(cfg)?,
        Some("toml") => toml::to_string(cfg)?,
        Some("yaml") | Some("yml") => serde_yaml::to_string(cfg)?,
        _ => anyhow::bail!(
            "Unsupported config extension for {:?}; use .json, .toml, .yaml or .yml",
            path
        ),
    };
    Ok(body)
}
