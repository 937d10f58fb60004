//! Core library: retrieval, gluten classification, substitutes and reports.

pub mod alternatives;
pub mod classifier;
pub mod config;
pub mod export;
pub mod lexicon;
pub mod models;
pub mod pipeline;
pub mod response;
pub mod search;
pub mod suggester;

pub use models::AnalysisResult;
pub use pipeline::GlutenAssistant;
