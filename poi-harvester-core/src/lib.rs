//! Core domain types for the POI harvester.
//!
//! Responsibilities:
//! - Hold the category registry and the bounding box model.
//! - Compose Overpass QL queries and normalize the elements they return.
//! - Decide which tag keys are exported and under which column names.
//! - Define the network seams ([`ElementSource`], [`Geocoder`]) and run the
//!   harvest stages against them.
//!
//! Boundaries:
//! - No network or file I/O; adapters live in `poi-harvester-data`.
//!
//! Invariants:
//! - Registries are immutable once built.
//! - Records always carry both coordinates.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod bbox;
pub mod category;
pub mod fetch;
pub mod fields;
pub mod filename;
pub mod format;
pub mod geocode;
pub mod mapping;
pub mod object_kind;
pub mod pipeline;
pub mod query;
pub mod record;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use bbox::{BoundingBox, BoundingBoxError};
pub use category::{
    Category, CategoryRegistry, CategoryRegistryError, CategorySelection, TagPair, ThemeGroup,
};
pub use fetch::{ElementSource, FetchError};
pub use fields::{FieldSelection, FieldSet};
pub use filename::{FILENAME_PREFIX, generate_filename};
pub use format::{ExportFormat, ParseExportFormatError};
pub use geocode::{GeocodeError, Geocoder};
pub use mapping::{ColumnMapping, ColumnMappingError};
pub use object_kind::{ObjectKind, ParseObjectKindError};
pub use pipeline::{Harvest, HarvestPlan, PipelineError, harvest};
pub use query::{DEFAULT_SERVER_TIMEOUT_SECS, OverpassQuery, QueryBuilder, QueryOptions};
pub use record::{Centroid, PoiRecord, RawElement, Tags, normalize};

/// Parse a whitespace-separated `key=column` string, discarding rejects.
///
/// Use [`ColumnMapping::parse`] to inspect rejected tokens.
#[must_use]
pub fn parse_column_mapping(raw: &str) -> ColumnMapping {
    ColumnMapping::parse(raw).0
}
