use cli::commands::{self, QueryOutcome};
use gluten_core::config::AppConfig;
use gluten_core::pipeline::{FormatterMode, GlutenAssistant};
use gluten_core::response::{self, NO_INFORMATION};
use gluten_core::{classifier, search};
use std::fs;
use std::path::Path;
use storage::DataSourceKind;
use tempfile::tempdir;

fn seeded_assistant(root: &Path, mode: FormatterMode) -> GlutenAssistant {
    let cfg = AppConfig::default().rooted_at(root);
    GlutenAssistant::from_config_with_mode(&cfg, mode).unwrap()
}

#[test]
fn couscous_contains_gluten_with_alternatives() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let results = assistant.analyze("couscous");
    assert_eq!(results.len(), 1);
    let couscous = &results[0];
    assert_eq!(couscous.item_name, "Couscous");
    assert_eq!(couscous.source, DataSourceKind::Recipe);
    assert!(couscous.contains_gluten);
    assert_eq!(couscous.gluten_sources, vec!["wheat", "semolina"]);
    for alt in ["quinoa", "rice", "corn couscous"] {
        assert!(couscous.alternative_suggestions.iter().any(|a| a == alt));
    }
    assert!(couscous.nutritional_details.is_empty());
    assert!((couscous.confidence_score - 0.8).abs() < f32::EPSILON);
}

#[test]
fn tagine_is_gluten_free_without_alternatives() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let results = assistant.analyze("tagine");
    assert_eq!(results.len(), 1);
    assert!(!results[0].contains_gluten);
    assert!(results[0].gluten_sources.is_empty());
    assert!(results[0].alternative_suggestions.is_empty());
}

#[test]
fn unmatched_query_renders_no_information() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let results = assistant.analyze("sushi");
    assert!(results.is_empty());
    assert_eq!(assistant.respond(&results), NO_INFORMATION);
}

#[test]
fn missing_ingredients_row_is_gluten_free() {
    let temp = tempdir().unwrap();
    let cfg = AppConfig::default().rooted_at(temp.path());
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(
        &cfg.product_catalog_path,
        "name,ingredients,brand,gluten_status\nMystery Bar,,Nobody,True\n",
    )
    .unwrap();
    let assistant = GlutenAssistant::from_config_with_mode(&cfg, FormatterMode::Plain).unwrap();

    let results = assistant.analyze("mystery");
    assert_eq!(results.len(), 1);
    // The declared flag says True; classification only trusts ingredient text.
    assert!(!results[0].contains_gluten);
}

#[test]
fn wheat_query_spans_recipes_then_products() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let results = assistant.analyze("wheat");
    let names: Vec<_> = results.iter().map(|r| r.item_name.as_str()).collect();
    assert_eq!(names, vec!["Couscous", "Pastilla", "Moroccan Bread"]);
    assert_eq!(results[2].source, DataSourceKind::Product);
    assert_eq!(
        results[2].alternative_suggestions,
        vec!["corn bread", "rice bread"]
    );
}

#[test]
fn empty_query_matches_every_item_but_cli_refuses_it() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let store = assistant.store();
    let everything = search::search(store, "");
    assert_eq!(
        everything.len(),
        store.len(DataSourceKind::Recipe) + store.len(DataSourceKind::Product)
    );

    assert!(matches!(
        commands::answer(&assistant, "   \n"),
        QueryOutcome::Blank
    ));
}

#[test]
fn classification_invariants_hold_for_every_row() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    for m in search::search(assistant.store(), "") {
        let out = classifier::classify(&m.row.ingredients, assistant.lexicon());
        assert_eq!(out.contains_gluten, !out.sources.is_empty());
        let tokens: Vec<&str> = m.row.ingredients.split_whitespace().collect();
        for source in &out.sources {
            assert!(tokens.contains(&source.as_str()));
            assert!(assistant.lexicon().contains(source));
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let first = assistant.analyze("flour");
    let second = assistant.analyze("flour");
    assert_eq!(first, second);
    assert_eq!(assistant.respond(&first), response::compose(&second));
}

#[test]
fn broken_table_degrades_without_blocking_others() {
    let temp = tempdir().unwrap();
    let cfg = AppConfig::default().rooted_at(temp.path());
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(&cfg.recipe_database_path, "title\nnot a recipe table\n").unwrap();
    let assistant = GlutenAssistant::from_config_with_mode(&cfg, FormatterMode::Plain).unwrap();

    let statuses = commands::status(&assistant);
    assert!(!statuses[0].loaded);
    assert_eq!(statuses[1].rows, 3);
    assert_eq!(statuses[2].rows, 4);

    let results = assistant.analyze("bread");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item_name, "Moroccan Bread");
}

#[test]
fn unwritable_product_table_leaves_the_others_seeded() {
    let temp = tempdir().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "a regular file").unwrap();
    let mut cfg = AppConfig::default().rooted_at(temp.path());
    cfg.product_catalog_path = blocker.join("products.csv").to_string_lossy().into_owned();

    let assistant = GlutenAssistant::from_config_with_mode(&cfg, FormatterMode::Plain).unwrap();

    let statuses = commands::status(&assistant);
    assert_eq!(statuses[0].rows, 5);
    assert!(!statuses[1].loaded);
    assert_eq!(statuses[1].rows, 0);
    assert_eq!(statuses[2].rows, 4);

    let results = assistant.analyze("couscous");
    assert_eq!(results.len(), 1);
    assert!(results[0].contains_gluten);
}

#[test]
fn init_reports_tables_it_could_not_seed() {
    let temp = tempdir().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "a regular file").unwrap();
    let config_path = temp.path().join("gluten.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "recipe_database_path": temp.path().join("d/recipes.csv"),
            "product_catalog_path": blocker.join("products.csv"),
            "nutritional_database_path": temp.path().join("d/nutrition.csv"),
        })
        .to_string(),
    )
    .unwrap();

    let summary = commands::init(&config_path).unwrap();
    assert_eq!(summary.seeded.len(), 2);
    assert_eq!(summary.seed_failures.len(), 1);
    assert_eq!(summary.seed_failures[0].0, DataSourceKind::Product);
}

#[test]
fn export_mode_writes_output_files() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Export);

    let outcome = commands::answer(&assistant, "couscous");
    let QueryOutcome::Answered { results, response } = outcome else {
        panic!("expected an answer");
    };
    assert_eq!(results.len(), 1);
    assert!(response.contains("Couscous"));

    let json = fs::read_to_string(temp.path().join("output/gluten_analysis_results.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["results"][0]["contains_gluten"], true);
    assert_eq!(doc["results"][0]["gluten_sources"][1], "semolina");
    assert!(temp.path().join("output/gluten_analysis_results.txt").exists());
}

#[test]
fn init_writes_config_and_seed_tables() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("gluten.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "recipe_database_path": temp.path().join("d/recipes.csv"),
            "product_catalog_path": temp.path().join("d/products.csv"),
            "nutritional_database_path": temp.path().join("d/nutrition.csv"),
        })
        .to_string(),
    )
    .unwrap();

    let summary = commands::init(&config_path).unwrap();
    assert!(!summary.config_written);
    assert_eq!(summary.seeded.len(), 3);
    assert!(summary.seed_failures.is_empty());

    let again = commands::init(&config_path).unwrap();
    assert!(again.seeded.is_empty());
}

#[test]
fn browse_lists_nutrition_reference() {
    let temp = tempdir().unwrap();
    let assistant = seeded_assistant(temp.path(), FormatterMode::Plain);

    let lines = commands::browse_lines(&assistant, DataSourceKind::Nutrition);
    assert_eq!(lines[0], "wheat | high | rice");
    assert_eq!(lines.len(), 4);

    let products = commands::browse_lines(&assistant, DataSourceKind::Product);
    assert_eq!(products[1], "Moroccan Bread | wheat flour | Local Bakery | True");

    let value = commands::browse_json(&assistant, DataSourceKind::Recipe).unwrap();
    assert_eq!(value["table"], "recipes");
    assert_eq!(value["rows"].as_array().unwrap().len(), 5);
}
