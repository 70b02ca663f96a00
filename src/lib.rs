//! Facade crate for the POI harvester.
//!
//! This crate re-exports the core domain types and, behind the `adapters`
//! feature, the Overpass, Nominatim and file export adapters.

#![forbid(unsafe_code)]

pub use poi_harvester_core::{
    BoundingBox, BoundingBoxError, Category, CategoryRegistry, CategoryRegistryError,
    ColumnMapping, ElementSource, ExportFormat, FetchError, FieldSelection, FieldSet,
    GeocodeError, Geocoder, Harvest, HarvestPlan, ObjectKind, OverpassQuery, PipelineError,
    PoiRecord, QueryBuilder, RawElement, Tags, generate_filename, harvest, normalize,
    parse_column_mapping,
};

#[cfg(feature = "adapters")]
pub use poi_harvester_data::{
    ExportError, ExportOptions, NominatimGeocoder, OverpassClient, OverpassClientConfig, export,
    try_export,
};
