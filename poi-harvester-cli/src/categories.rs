//! `categories` command and registry loading shared with `harvest`.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use poi_harvester_core::CategoryRegistry;
use serde::{Deserialize, Serialize};

use crate::{ARG_CATEGORIES_FILE, CliError, logging};

/// CLI arguments for the `categories` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the available POI categories grouped by theme")]
#[ortho_config(prefix = "POI_HARVESTER")]
pub(crate) struct CategoriesArgs {
    /// JSON category definitions replacing the built-in table.
    #[arg(long = ARG_CATEGORIES_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) categories_file: Option<Utf8PathBuf>,
}

pub(super) fn run_categories(args: CategoriesArgs) -> Result<(), CliError> {
    logging::init_logging(false);
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let registry = load_registry(merged.categories_file.as_deref())?;
    let mut stdout = std::io::stdout().lock();
    write_listing(&mut stdout, &registry)
}

/// Built-in registry, or the one defined in `path`.
pub(crate) fn load_registry(path: Option<&Utf8Path>) -> Result<CategoryRegistry, CliError> {
    let Some(path) = path else {
        return Ok(CategoryRegistry::builtin());
    };
    let text =
        poi_harvester_fs::read_to_string(path).map_err(|source| CliError::ReadCategories {
            path: path.to_path_buf(),
            source,
        })?;
    let registry =
        CategoryRegistry::from_json_str(&text).map_err(|source| CliError::ParseCategories {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded {} categories from {path}", registry.len());
    Ok(registry)
}

/// Print every category under its theme heading.
pub(crate) fn write_listing(
    writer: &mut dyn Write,
    registry: &CategoryRegistry,
) -> Result<(), CliError> {
    let mut listing = String::from("Available POI types by category:\n");
    listing.push_str(&"=".repeat(40));
    listing.push('\n');
    for (group, members) in registry.grouped() {
        listing.push_str(&format!("\n{group}:\n"));
        for category in members {
            let tags: Vec<String> = category.tags().iter().map(ToString::to_string).collect();
            listing.push_str(&format!("  {:<20} ({})\n", category.id(), tags.join(", ")));
        }
    }
    writer
        .write_all(listing.as_bytes())
        .map_err(CliError::WriteOutput)
}
