//! Harvest command implementation for the POI harvester CLI.

use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Parser;
use log::{debug, info, warn};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use poi_harvester_core::{
    BoundingBox, ColumnMapping, ElementSource, ExportFormat, FieldSelection, Geocoder,
    HarvestPlan, ObjectKind, PipelineError, QueryBuilder, generate_filename, harvest,
};
use poi_harvester_data::overpass::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use poi_harvester_data::{
    ExportOptions, NominatimConfig, NominatimGeocoder, OverpassClient, OverpassClientConfig,
    export,
};
use serde::{Deserialize, Serialize};

use crate::categories::load_registry;
use crate::{
    ARG_ALL_KEYS, ARG_BBOX, ARG_CATEGORIES_FILE, ARG_COLUMN_MAP, ARG_ENDPOINT, ARG_FORMAT,
    ARG_KEYS, ARG_LOCATION, ARG_OSM_TYPES, ARG_OUTPUT, ARG_POI_TYPES, ARG_QUIET, ARG_RADIUS,
    ARG_TABLE_NAME, ARG_TIMEOUT_SECS, CliError, logging,
};

const DEFAULT_RADIUS_KM: f64 = 1.0;
const DEFAULT_POI_TYPE: &str = "restaurant";
const DEFAULT_OBJECT_KINDS: [ObjectKind; 2] = [ObjectKind::Node, ObjectKind::Way];

/// CLI arguments for the `harvest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Resolve a search area from a place name and radius or an \
                 explicit bounding box, query the Overpass API for the \
                 selected POI categories and export the results as CSV, SQL \
                 or JSON. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Fetch POIs for an area and export them to a file"
)]
#[ortho_config(prefix = "POI_HARVESTER")]
pub(crate) struct HarvestArgs {
    /// Place name or postal code, e.g. "Berlin" or "63571".
    #[arg(long = ARG_LOCATION, value_name = "place", conflicts_with = ARG_BBOX)]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Bounding box as south, west, north, east in degrees.
    #[arg(
        long = ARG_BBOX,
        num_args = 4,
        value_names = ["S", "W", "N", "E"],
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) bbox: Option<Vec<f64>>,
    /// Search radius in km around --location (default: 1.0).
    #[arg(long = ARG_RADIUS, value_name = "km")]
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    /// OSM tag keys to export (default: name).
    #[arg(long = ARG_KEYS, value_name = "key", num_args = 1..)]
    #[serde(default)]
    pub(crate) keys: Option<Vec<String>>,
    /// POI categories to fetch (default: restaurant).
    #[arg(long = ARG_POI_TYPES, value_name = "id", num_args = 1..)]
    #[serde(default)]
    pub(crate) poi_types: Option<Vec<String>>,
    /// OSM object types to query (default: node way).
    #[arg(long = ARG_OSM_TYPES, value_name = "kind", num_args = 1..)]
    #[serde(default)]
    pub(crate) osm_types: Option<Vec<ObjectKind>>,
    /// Export format: csv, sql or json (default: csv).
    #[arg(long = ARG_FORMAT, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<ExportFormat>,
    /// Output file path (generated from the request when omitted).
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// SQL table name (default: poi_data).
    #[arg(long = ARG_TABLE_NAME, value_name = "name")]
    #[serde(default)]
    pub(crate) table_name: Option<String>,
    /// SQL column renames, e.g. "name=poi_name website=url".
    #[arg(long = ARG_COLUMN_MAP, value_name = "mapping")]
    #[serde(default)]
    pub(crate) column_map: Option<String>,
    /// Export every tag key present in the data instead of --keys.
    #[arg(long = ARG_ALL_KEYS)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) all_keys: bool,
    /// Only log errors.
    #[arg(long = ARG_QUIET, short = 'q')]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) quiet: bool,
    /// Overpass interpreter URL.
    #[arg(long = ARG_ENDPOINT, value_name = "url")]
    #[serde(default)]
    pub(crate) endpoint: Option<String>,
    /// Per-request timeout in seconds (default: 30).
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// JSON category definitions replacing the built-in table.
    #[arg(long = ARG_CATEGORIES_FILE, value_name = "path")]
    #[serde(default)]
    pub(crate) categories_file: Option<Utf8PathBuf>,
}

impl HarvestArgs {
    pub(crate) fn into_config(self) -> Result<HarvestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HarvestConfig::try_from(merged)
    }
}

/// Where to search.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchArea {
    /// Geocoded place name; the box spans the radius around it.
    Place(String),
    /// Explicit bounds.
    Bounds(BoundingBox),
}

/// Resolved `harvest` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct HarvestConfig {
    pub(crate) area: SearchArea,
    pub(crate) radius_km: f64,
    pub(crate) categories: Vec<String>,
    pub(crate) object_kinds: Vec<ObjectKind>,
    pub(crate) fields: FieldSelection,
    pub(crate) format: ExportFormat,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) table_name: String,
    /// Raw mapping text; parsed once logging is installed.
    pub(crate) column_map: String,
    pub(crate) quiet: bool,
    pub(crate) endpoint: String,
    pub(crate) timeout: Duration,
    pub(crate) categories_file: Option<Utf8PathBuf>,
}

impl TryFrom<HarvestArgs> for HarvestConfig {
    type Error = CliError;

    fn try_from(args: HarvestArgs) -> Result<Self, Self::Error> {
        let area = match (args.location, args.bbox) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_LOCATION,
                    second: ARG_BBOX,
                });
            }
            (None, None) => {
                return Err(CliError::MissingSearchArea {
                    location: ARG_LOCATION,
                    bbox: ARG_BBOX,
                });
            }
            (Some(place), None) => SearchArea::Place(place),
            (None, Some(bounds)) => match bounds.as_slice() {
                &[south, west, north, east] => {
                    SearchArea::Bounds(BoundingBox::new(south, west, north, east)?)
                }
                other => {
                    return Err(CliError::BoundingBoxArity { count: other.len() });
                }
            },
        };

        let fields = if args.all_keys {
            FieldSelection::All
        } else {
            args.keys
                .map_or_else(FieldSelection::default, FieldSelection::Explicit)
        };

        Ok(Self {
            area,
            radius_km: args.radius.unwrap_or(DEFAULT_RADIUS_KM),
            categories: args
                .poi_types
                .unwrap_or_else(|| vec![DEFAULT_POI_TYPE.to_owned()]),
            object_kinds: args
                .osm_types
                .unwrap_or_else(|| DEFAULT_OBJECT_KINDS.to_vec()),
            fields,
            format: args.format.unwrap_or_default(),
            output: args.output,
            table_name: args
                .table_name
                .unwrap_or_else(|| ExportOptions::default().table_name),
            column_map: args.column_map.unwrap_or_default(),
            quiet: args.quiet,
            endpoint: args.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            timeout: Duration::from_secs(args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
            categories_file: args.categories_file,
        })
    }
}

/// Builds the network adapters for the current harvest invocation.
pub(super) trait HarvestServicesBuilder {
    fn geocoder(&self, config: &HarvestConfig) -> Result<Box<dyn Geocoder>, CliError>;
    fn element_source(&self, config: &HarvestConfig) -> Result<Box<dyn ElementSource>, CliError>;
}

pub(super) struct DefaultHarvestServicesBuilder;

impl HarvestServicesBuilder for DefaultHarvestServicesBuilder {
    fn geocoder(&self, config: &HarvestConfig) -> Result<Box<dyn Geocoder>, CliError> {
        let geocoder =
            NominatimGeocoder::with_config(NominatimConfig::default().with_timeout(config.timeout))
                .map_err(|source| CliError::BuildClient {
                    service: "Nominatim",
                    source,
                })?;
        Ok(Box::new(geocoder))
    }

    fn element_source(&self, config: &HarvestConfig) -> Result<Box<dyn ElementSource>, CliError> {
        let client = OverpassClient::with_config(
            OverpassClientConfig::new(config.endpoint.clone()).with_timeout(config.timeout),
        )
        .map_err(|source| CliError::BuildClient {
            service: "Overpass",
            source,
        })?;
        Ok(Box::new(client))
    }
}

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HarvestReport {
    pub(crate) path: Utf8PathBuf,
    pub(crate) records: usize,
}

pub(super) fn run_harvest(args: HarvestArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    logging::init_logging(config.quiet);
    let report = run_harvest_with(&config, &DefaultHarvestServicesBuilder)?;
    info!(
        "Successfully exported {} POIs to {}",
        report.records, report.path
    );
    Ok(())
}

pub(super) fn run_harvest_with(
    config: &HarvestConfig,
    builder: &dyn HarvestServicesBuilder,
) -> Result<HarvestReport, CliError> {
    let registry = load_registry(config.categories_file.as_deref())?;
    let selection = registry.validate(&config.categories);
    if selection.valid.is_empty() {
        // Checked before geocoding so an unusable request makes no network calls.
        warn!("invalid POI types ignored: {}", selection.invalid.join(", "));
        return Err(PipelineError::NoValidCategories.into());
    }

    let (bbox, label) = resolve_area(config, builder)?;
    let source = builder.element_source(config)?;
    let plan = HarvestPlan {
        bbox,
        categories: config.categories.clone(),
        object_kinds: config.object_kinds.clone(),
        fields: config.fields.clone(),
    };
    let harvested = harvest(&QueryBuilder::new(&registry), source.as_ref(), &plan)?;

    let path = output_path(config, &label, &harvested.categories);
    let options = export_options(config);
    if !export(
        config.format,
        &harvested.records,
        &harvested.fields,
        &path,
        &options,
    ) {
        return Err(PipelineError::ExportFailed {
            destination: path.to_string(),
        }
        .into());
    }

    Ok(HarvestReport {
        path,
        records: harvested.records.len(),
    })
}

/// Bounding box to query and the location token for generated filenames.
fn resolve_area(
    config: &HarvestConfig,
    builder: &dyn HarvestServicesBuilder,
) -> Result<(BoundingBox, String), CliError> {
    match &config.area {
        SearchArea::Bounds(bbox) => Ok((*bbox, bbox.filename_label())),
        SearchArea::Place(place) => {
            let geocoder = builder.geocoder(config)?;
            let center = geocoder
                .geocode(place)
                .map_err(|source| CliError::Geocode {
                    location: place.clone(),
                    source,
                })?;
            debug!("{place} resolved to lat {} lon {}", center.y, center.x);
            Ok((BoundingBox::around(center, config.radius_km)?, place.clone()))
        }
    }
}

/// `--output`, or a name derived from the request.
pub(crate) fn output_path(
    config: &HarvestConfig,
    label: &str,
    categories: &[String],
) -> Utf8PathBuf {
    config.output.clone().unwrap_or_else(|| {
        Utf8PathBuf::from(generate_filename(
            label,
            config.radius_km,
            categories,
            config.format,
        ))
    })
}

/// Table name and column renames; the mapping only matters for SQL.
fn export_options(config: &HarvestConfig) -> ExportOptions {
    let column_mapping = if config.format == ExportFormat::Sql {
        let (mapping, rejected) = ColumnMapping::parse(&config.column_map);
        for error in rejected {
            warn!("ignoring column mapping entry: {error}");
        }
        mapping
    } else {
        ColumnMapping::default()
    };
    ExportOptions {
        table_name: config.table_name.clone(),
        column_mapping,
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<HarvestConfig, CliError> {
    let merged = HarvestArgs::merge_from_layers(layers).map_err(CliError::from)?;
    HarvestConfig::try_from(merged)
}
