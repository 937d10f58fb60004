use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use cli::commands;
use cli::input::{self, BLANK_QUERY_WARNING, BLANK_SCAN_WARNING};
use cli::output;
use gluten_core::config::{self, AppConfig, DEFAULT_CONFIG_NAME};
use gluten_core::pipeline::{FormatterMode, GlutenAssistant};
use std::path::PathBuf;
use storage::DataSourceKind;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            let path = cli
                .config
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(format!("{}.json", DEFAULT_CONFIG_NAME)));
            let summary = commands::init(&path)?;
            output::print_init(&summary, cli.json)
        }
        Commands::Search {
            query,
            export,
            details,
        } => {
            let assistant = build_assistant(cli.config.as_deref(), export)?;
            let outcome = commands::answer(&assistant, &query);
            output::print_answer(&outcome, &query, cli.json, details, BLANK_QUERY_WARNING)
        }
        Commands::Scan {
            file,
            export,
            details,
        } => {
            let text = input::read_extracted_text(file.as_deref())?;
            info!("Read {} characters of extracted text.", text.chars().count());
            let assistant = build_assistant(cli.config.as_deref(), export)?;
            let outcome = commands::answer(&assistant, &text);
            output::print_answer(&outcome, &text, cli.json, details, BLANK_SCAN_WARNING)
        }
        Commands::Browse { table } => {
            let assistant = build_assistant(cli.config.as_deref(), false)?;
            let kind = DataSourceKind::from(table);
            if cli.json {
                let value = commands::browse_json(&assistant, kind)?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                output::print_browse(kind, &commands::browse_lines(&assistant, kind));
            }
            Ok(())
        }
        Commands::Status => {
            let assistant = build_assistant(cli.config.as_deref(), false)?;
            output::print_status(&commands::status(&assistant), cli.json)
        }
    }
}

fn build_assistant(config_path: Option<&str>, export: bool) -> Result<GlutenAssistant> {
    let cfg: AppConfig = config::load(config_path)?;
    let mode = FormatterMode::select(export || cfg.export);
    let assistant = GlutenAssistant::from_config_with_mode(&cfg, mode)?;
    info!("Gluten assistant initialized.");
    Ok(assistant)
}

#[derive(Parser)]
#[command(name = "gluten-assistant")]
#[command(about = "Gluten content lookup for recipes and products", long_about = None)]
struct Cli {
    /// Path to config file (JSON, TOML or YAML)
    #[arg(short, long)]
    config: Option<String>,

    /// Output JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default config and seed missing tables
    Init,
    /// Look up an item or ingredient by name
    Search {
        /// Product, recipe or ingredient text
        query: String,
        /// Also write JSON and text exports to the output directory
        #[arg(long, default_value_t = false)]
        export: bool,
        /// Show per-item details under the report
        #[arg(long, default_value_t = false)]
        details: bool,
    },
    /// Analyze text extracted from a product image
    Scan {
        /// File holding the extracted text; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Also write JSON and text exports to the output directory
        #[arg(long, default_value_t = false)]
        export: bool,
        /// Show per-item details under the report
        #[arg(long, default_value_t = false)]
        details: bool,
    },
    /// Print the rows of one reference table
    Browse {
        #[arg(value_enum)]
        table: TableArg,
    },
    /// Show load status and entry count per table
    Status,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TableArg {
    Recipes,
    Products,
    Nutrition,
}

impl From<TableArg> for DataSourceKind {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Recipes => DataSourceKind::Recipe,
            TableArg::Products => DataSourceKind::Product,
            TableArg::Nutrition => DataSourceKind::Nutrition,
        }
    }
}
