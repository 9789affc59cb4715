//! Error types emitted by the kitespot CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use kitespot_core::PreferencesValidationError;
use thiserror::Error;

/// Errors emitted by the kitespot CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The log subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    InitLogging(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag or argument name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A required positional argument is missing after configuration merging.
    #[error("missing {field} (pass the <{field}> argument or set {env})")]
    MissingPositional {
        /// Argument name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// Two mutually exclusive options were both set.
    #[error("--{first} and --{second} cannot be used together")]
    ConflictingArguments {
        /// First option name.
        first: &'static str,
        /// Second option name.
        second: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature name.
        feature: &'static str,
        /// Operation that needed it.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag or argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag or argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag or argument name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening the preferences file failed.
    #[error("failed to open preferences at {path:?}: {source}")]
    OpenPreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Preferences JSON could not be decoded.
    #[error("failed to parse preferences JSON at {path:?}: {source}")]
    ParsePreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The preferences payload failed validation.
    #[error("preferences in {path:?} failed validation: {source}")]
    InvalidPreferences {
        /// Preferences path.
        path: Utf8PathBuf,
        /// First failed check.
        #[source]
        source: PreferencesValidationError,
    },
    /// Opening the catalog snapshot failed.
    #[error("failed to open catalog snapshot at {path:?}: {source}")]
    OpenCatalog {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Catalog snapshot JSON could not be decoded.
    #[error("failed to parse catalog snapshot JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// Loading the SQLite catalog failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenCatalogDatabase(#[from] kitespot_core::SqliteSpotCatalogError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
