//! `regions` command implementation.

use std::io::Write;

use kitespot_core::Region;
use serde::Serialize;

use crate::CliError;
use crate::recommend::write_json;

/// One row of the region table as printed by `kitespot regions`.
#[derive(Debug, Serialize)]
pub(crate) struct RegionEntry {
    pub(crate) key: &'static str,
    pub(crate) countries: &'static [&'static str],
}

pub(crate) fn region_table() -> Vec<RegionEntry> {
    Region::ALL
        .iter()
        .map(|region| RegionEntry {
            key: region.key(),
            countries: region.countries(),
        })
        .collect()
}

pub(crate) fn run_regions() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_regions_with(&mut stdout)
}

pub(crate) fn run_regions_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &region_table())
}
