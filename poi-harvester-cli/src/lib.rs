//! Command-line interface for the POI harvester.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod categories;
mod error;
mod harvest;
mod logging;

pub use error::CliError;

use categories::CategoriesArgs;
use harvest::HarvestArgs;

const ARG_LOCATION: &str = "location";
const ARG_BBOX: &str = "bbox";
const ARG_RADIUS: &str = "radius";
const ARG_KEYS: &str = "keys";
const ARG_POI_TYPES: &str = "poi-types";
const ARG_OSM_TYPES: &str = "osm-types";
const ARG_FORMAT: &str = "format";
const ARG_OUTPUT: &str = "output";
const ARG_TABLE_NAME: &str = "table-name";
const ARG_COLUMN_MAP: &str = "column-map";
const ARG_ALL_KEYS: &str = "all-keys";
const ARG_QUIET: &str = "quiet";
const ARG_ENDPOINT: &str = "endpoint";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_CATEGORIES_FILE: &str = "categories-file";

/// Run the POI harvester CLI with the current process arguments and
/// environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, or when
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Harvest(args) => harvest::run_harvest(args),
        Command::Categories(args) => categories::run_categories(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "poi-harvester",
    about = "Fetch points of interest from OpenStreetMap via the Overpass API",
    after_help = "Examples:\n  \
                  poi-harvester harvest --location Berlin --radius 1.5 --poi-types pharmacy\n  \
                  poi-harvester harvest --location 63571 --radius 2 --poi-types bakery --format sql --table-name bakeries\n  \
                  poi-harvester harvest --bbox 50.0 8.0 50.1 8.1 --poi-types restaurant cafe --format json",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Query an area and export the matching POIs to a file.
    Harvest(HarvestArgs),
    /// List the available POI categories.
    Categories(CategoriesArgs),
}

#[cfg(test)]
mod tests;
