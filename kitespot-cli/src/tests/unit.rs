//! Focused unit tests covering recommend configuration, input loading and output.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::recommend::{
    CatalogSource, RecommendArgs, RecommendConfig, config_from_layers_for_test, load_catalog,
    load_preferences, run_recommend_with,
};
use crate::regions::run_regions_with;
use camino::Utf8PathBuf;
use kitespot_core::test_support::{FixedRecommender, REFERENCE_SPOT_ID};
use kitespot_core::{PreferencesValidationError, SpotCatalog, SpotWithMatchScore};
use kitespot_scorer::RecommendationScorer;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

fn args(
    preferences: Option<&str>,
    catalog: Option<&str>,
    catalog_db: Option<&str>,
) -> RecommendArgs {
    RecommendArgs {
        preferences_path: preferences.map(Utf8PathBuf::from),
        catalog: catalog.map(Utf8PathBuf::from),
        catalog_db: catalog_db.map(Utf8PathBuf::from),
    }
}

#[rstest]
fn converting_without_preferences_reports_the_positional() {
    let input = args(None, Some("catalog.json"), None);
    let err = RecommendConfig::try_from(input).expect_err("missing preferences should error");
    match err {
        CliError::MissingPositional { field, env } => {
            assert_eq!(field, ARG_PREFERENCES);
            assert_eq!(env, ENV_PREFERENCES);
        }
        other => panic!("expected MissingPositional, found {other:?}"),
    }
}

#[rstest]
fn converting_without_a_catalog_reports_the_flag() {
    let input = args(Some("prefs.json"), None, None);
    let err = RecommendConfig::try_from(input).expect_err("missing catalog should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_CATALOG);
            assert_eq!(env, ENV_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_with_both_catalogs_errors() {
    let input = args(Some("prefs.json"), Some("catalog.json"), Some("spots.db"));
    let err = RecommendConfig::try_from(input).expect_err("conflict should error");
    match err {
        CliError::ConflictingArguments { first, second } => {
            assert_eq!(first, ARG_CATALOG);
            assert_eq!(second, ARG_CATALOG_DB);
        }
        other => panic!("expected ConflictingArguments, found {other:?}"),
    }
}

#[rstest]
fn converting_selects_the_database_source() {
    let input = args(Some("prefs.json"), None, Some("spots.db"));
    let config = RecommendConfig::try_from(input).expect("config should build");
    assert_eq!(
        config.catalog,
        CatalogSource::Database(Utf8PathBuf::from("spots.db"))
    );
}

#[rstest]
fn validate_sources_reports_missing_files() {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        preferences_path: workspace.path("missing.json"),
        catalog: CatalogSource::Snapshot(workspace.path("catalog.json")),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_PREFERENCES),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let preferences_path = workspace.write_reference_preferences();
    let directory = workspace.path("catalog-dir");
    std::fs::create_dir(directory.as_std_path()).expect("create directory");
    let config = RecommendConfig {
        preferences_path,
        catalog: CatalogSource::Snapshot(directory),
    };
    let err = config.validate_sources().expect_err("expected failure");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_CATALOG),
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "preferences_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "preferences_path": "from-file.json",
            "catalog": "file-catalog.json",
        }),
        None,
    );
    composer.push_environment(json!({ "preferences_path": "from-env.json" }));
    composer.push_cli(json!({ "catalog": "cli-catalog.json" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.preferences_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(
        config.catalog,
        CatalogSource::Snapshot(Utf8PathBuf::from("cli-catalog.json"))
    );
}

#[rstest]
fn load_preferences_reports_open_errors() {
    let workspace = Workspace::new();
    let path = workspace.path("absent.json");
    let err = load_preferences(&path).expect_err("missing file should error");
    match err {
        CliError::OpenPreferences { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenPreferences, found {other:?}"),
    }
}

#[rstest]
fn load_preferences_reports_parse_errors() {
    let workspace = Workspace::new();
    let path = workspace.path("broken.json");
    write_utf8(&path, b"{ \"month\": ");
    let err = load_preferences(&path).expect_err("broken JSON should error");
    assert!(matches!(err, CliError::ParsePreferences { .. }));
}

#[rstest]
fn load_catalog_reads_a_snapshot() {
    let workspace = Workspace::new();
    let path = workspace.write_reference_snapshot();
    let catalog = load_catalog(&CatalogSource::Snapshot(path)).expect("snapshot loads");
    assert_eq!(catalog.len(), 1);
    assert!(catalog.wind_condition(REFERENCE_SPOT_ID, 7).is_some());
}

#[rstest]
fn load_catalog_reports_snapshot_parse_errors() {
    let workspace = Workspace::new();
    let path = workspace.path("catalog.json");
    write_utf8(&path, b"[]");
    let err = load_catalog(&CatalogSource::Snapshot(path)).expect_err("wrong shape");
    assert!(matches!(err, CliError::ParseCatalog { .. }));
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn database_and_snapshot_load_identical_catalogs() {
    use rusqlite::Connection;

    let workspace = Workspace::new();
    let path = workspace.path("spots.db");
    let connection = Connection::open(path.as_std_path()).expect("create database");
    connection
        .execute_batch(
            "CREATE TABLE spots (
                id INTEGER PRIMARY KEY, name TEXT NOT NULL, country TEXT NOT NULL,
                difficulty_level TEXT, wave_size TEXT, avg_school_cost REAL,
                avg_accommodation_cost REAL, culture TEXT, food_options TEXT
             );
             CREATE TABLE kite_schools (spot_id INTEGER NOT NULL, name TEXT NOT NULL);
             CREATE TABLE wind_conditions (
                spot_id INTEGER NOT NULL, month INTEGER NOT NULL, wind_speed REAL NOT NULL,
                wind_quality TEXT NOT NULL, air_temp REAL, water_temp REAL
             );
             INSERT INTO spots VALUES
                (1, 'Cabarete', 'Dominican Republic', 'All levels', NULL, 70, 90, NULL, NULL);
             INSERT INTO kite_schools VALUES
                (1, 'Laurel Eastman Kiteboarding'), (1, 'Kite Club Cabarete');
             INSERT INTO wind_conditions VALUES (1, 7, 24, 'Excellent', 27, NULL);",
        )
        .expect("seed database");
    drop(connection);

    let from_database = load_catalog(&CatalogSource::Database(path)).expect("database loads");
    let from_snapshot = load_catalog(&CatalogSource::Snapshot(
        workspace.write_reference_snapshot(),
    ))
    .expect("snapshot loads");
    assert_eq!(from_database, from_snapshot);
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn load_catalog_maps_database_errors() {
    let workspace = Workspace::new();
    let path = workspace.path("not-a-db.db");
    write_utf8(&path, b"plain text is not a database");
    let err = load_catalog(&CatalogSource::Database(path)).expect_err("invalid database");
    assert!(matches!(err, CliError::OpenCatalogDatabase(_)));
}

#[rstest]
fn recommend_prints_pretty_json_with_trailing_newline() {
    let workspace = Workspace::new();
    let input = RecommendArgs {
        preferences_path: Some(workspace.write_reference_preferences()),
        catalog: Some(workspace.write_reference_snapshot()),
        catalog_db: None,
    };
    let mut output = Vec::new();

    run_recommend_with(input, &RecommendationScorer::new(), &mut output)
        .expect("recommend succeeds");

    let text = String::from_utf8(output).expect("utf-8 output");
    assert!(text.ends_with("]\n"));
    let ranked: Vec<SpotWithMatchScore> = serde_json::from_str(&text).expect("JSON output");
    let ids: Vec<u64> = ranked.iter().map(|entry| entry.spot.id).collect();
    assert_eq!(ids, vec![REFERENCE_SPOT_ID]);
}

#[rstest]
fn recommend_validates_before_scoring() {
    let workspace = Workspace::new();
    let preferences_path = workspace.path("preferences.json");
    write_utf8(
        &preferences_path,
        br#"{"windSpeedMin": 10, "windSpeedMax": 20, "temperature": "balmy",
            "difficulty": "all", "budget": "moderate", "preferredRegion": "any",
            "hasKiteSchools": false, "preferWaves": false, "foodOptions": false,
            "culture": false, "month": 7}"#,
    );
    let input = RecommendArgs {
        preferences_path: Some(preferences_path),
        catalog: Some(workspace.write_reference_snapshot()),
        catalog_db: None,
    };
    let mut output = Vec::new();

    let err = run_recommend_with(input, &FixedRecommender::default(), &mut output)
        .expect_err("unknown temperature should fail");
    match err {
        CliError::InvalidPreferences { source, .. } => assert_eq!(
            source,
            PreferencesValidationError::UnknownTemperature {
                value: "balmy".to_owned()
            }
        ),
        other => panic!("expected InvalidPreferences, found {other:?}"),
    }
    assert!(output.is_empty());
}

#[rstest]
fn regions_lists_every_region() {
    let mut output = Vec::new();
    run_regions_with(&mut output).expect("regions succeed");

    let table: serde_json::Value = serde_json::from_slice(&output).expect("JSON output");
    let keys: Vec<&str> = table
        .as_array()
        .expect("array output")
        .iter()
        .filter_map(|entry| entry.get("key").and_then(serde_json::Value::as_str))
        .collect();
    assert_eq!(
        keys,
        vec![
            "caribbean",
            "north-america",
            "south-america",
            "europe",
            "africa",
            "asia",
            "oceania"
        ]
    );
}

#[rstest]
fn error_messages_name_flags_and_variables() {
    let err = CliError::MissingArgument {
        field: ARG_CATALOG,
        env: ENV_CATALOG,
    };
    assert_eq!(
        err.to_string(),
        "missing catalog (set --catalog or KITESPOT_CMDS_RECOMMEND_CATALOG)"
    );
}

#[rstest]
fn missing_preferences_message_names_the_positional() {
    let err = CliError::MissingPositional {
        field: ARG_PREFERENCES,
        env: ENV_PREFERENCES,
    };
    let message = err.to_string();
    assert_eq!(
        message,
        "missing preferences (pass the <preferences> argument or set \
         KITESPOT_CMDS_RECOMMEND_PREFERENCES_PATH)"
    );
    assert!(!message.contains("--preferences"));
}
