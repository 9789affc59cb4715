//! `recommend` command implementation.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use kitespot_core::{
    CatalogSnapshot, InMemoryCatalog, Recommender, SpotWithMatchScore, UserPreferences,
};
use kitespot_scorer::RecommendationScorer;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_CATALOG, ARG_CATALOG_DB, ARG_PREFERENCES, CliError, ENV_CATALOG, ENV_PREFERENCES};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank kitesurf spots for the month and preferences in a JSON \
                 file. Spots come from either a JSON catalog snapshot or a \
                 SQLite database. Paths can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Recommend spots for a preferences file"
)]
#[ortho_config(prefix = "KITESPOT")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the visitor's preferences.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) preferences_path: Option<Utf8PathBuf>,
    /// Path to a JSON catalog snapshot.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a SQLite spot database.
    #[arg(long = ARG_CATALOG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog_db: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Where spots are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    Snapshot(Utf8PathBuf),
    Database(Utf8PathBuf),
}

impl CatalogSource {
    const fn field(&self) -> &'static str {
        match self {
            Self::Snapshot(_) => ARG_CATALOG,
            Self::Database(_) => ARG_CATALOG_DB,
        }
    }

    fn path(&self) -> &Utf8Path {
        match self {
            Self::Snapshot(path) | Self::Database(path) => path,
        }
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) preferences_path: Utf8PathBuf,
    pub(crate) catalog: CatalogSource,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.preferences_path, ARG_PREFERENCES)?;
        Self::require_existing(self.catalog.path(), self.catalog.field())?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let preferences_path = args.preferences_path.ok_or(CliError::MissingPositional {
            field: ARG_PREFERENCES,
            env: ENV_PREFERENCES,
        })?;
        let catalog = match (args.catalog, args.catalog_db) {
            (Some(path), None) => CatalogSource::Snapshot(path),
            (None, Some(path)) => CatalogSource::Database(path),
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_CATALOG,
                    second: ARG_CATALOG_DB,
                });
            }
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_CATALOG,
                    env: ENV_CATALOG,
                });
            }
        };
        Ok(Self {
            preferences_path,
            catalog,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &RecommendationScorer::new(), &mut stdout)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    recommender: &dyn Recommender,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, recommender)?;
    write_recommendations(writer, &recommendations)
}

fn execute_recommend(
    args: RecommendArgs,
    recommender: &dyn Recommender,
) -> Result<Vec<SpotWithMatchScore>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let preferences = load_preferences(&config.preferences_path)?;
    preferences
        .validate()
        .map_err(|source| CliError::InvalidPreferences {
            path: config.preferences_path.clone(),
            source,
        })?;
    let catalog = load_catalog(&config.catalog)?;
    log::debug!(
        "scoring {} spots for month {}",
        catalog.len(),
        preferences.month
    );
    Ok(recommender.recommend(&preferences, &catalog))
}

/// Loads JSON-encoded [`UserPreferences`] from disk.
pub(crate) fn load_preferences(path: &Utf8Path) -> Result<UserPreferences, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPreferences {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParsePreferences {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn load_catalog(source: &CatalogSource) -> Result<InMemoryCatalog, CliError> {
    match source {
        CatalogSource::Snapshot(path) => load_snapshot(path),
        CatalogSource::Database(path) => load_database(path),
    }
}

fn load_snapshot(path: &Utf8Path) -> Result<InMemoryCatalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: CatalogSnapshot =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseCatalog {
                path: path.to_path_buf(),
                source,
            }
        })?;
    Ok(InMemoryCatalog::from(snapshot))
}

#[cfg(feature = "store-sqlite")]
fn load_database(path: &Utf8Path) -> Result<InMemoryCatalog, CliError> {
    let catalog = kitespot_core::SqliteSpotCatalog::open(path.as_std_path())?;
    Ok(catalog.into_inner())
}

#[cfg(not(feature = "store-sqlite"))]
const fn load_database(_path: &Utf8Path) -> Result<InMemoryCatalog, CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "reading --catalog-db",
    })
}

/// Pretty-print `value` as JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_recommendations(
    writer: &mut dyn Write,
    recommendations: &[SpotWithMatchScore],
) -> Result<(), CliError> {
    write_json(writer, recommendations)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
