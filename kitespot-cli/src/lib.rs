//! Command-line interface for the kitespot recommendation engine.
//!
//! `kitespot recommend` ranks catalog spots against a preferences file and
//! prints the result as JSON; `kitespot regions` prints the region table.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod error;
mod fs;
mod recommend;
mod regions;

pub use error::CliError;

use recommend::RecommendArgs;

pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_CATALOG_DB: &str = "catalog-db";
pub(crate) const ENV_PREFERENCES: &str = "KITESPOT_CMDS_RECOMMEND_PREFERENCES_PATH";
pub(crate) const ENV_CATALOG: &str = "KITESPOT_CMDS_RECOMMEND_CATALOG";

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "KITESPOT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the kitespot CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading
/// or output fails.
pub fn run() -> Result<(), CliError> {
    init_logging()?;
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::Regions => regions::run_regions(),
    }
}

/// Install a stderr formatter filtered by [`LOG_ENV`].
fn init_logging() -> Result<(), CliError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(CliError::InitLogging)
}

#[derive(Debug, Parser)]
#[command(
    name = "kitespot",
    about = "Recommend kitesurf spots for a month and a set of preferences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank catalog spots against a preferences file.
    Recommend(RecommendArgs),
    /// Print the countries grouped under each region key.
    Regions,
}

#[cfg(test)]
mod tests;
