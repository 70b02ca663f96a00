//! Network and file adapters for the POI harvester.
//!
//! Responsibilities:
//! - Execute Overpass queries over HTTP ([`overpass`]).
//! - Resolve place names through Nominatim ([`geocoding`]).
//! - Render records as CSV, SQL or JSON files ([`export`]).
//!
//! Boundaries:
//! - Do not encode domain rules (live in `poi-harvester-core`).
//! - Expose synchronous APIs; async HTTP is driven on an owned runtime.
//!
//! Invariants:
//! - One request per call, bounded by the configured timeout.
//! - No global mutable state.

pub mod export;
pub mod geocoding;
pub mod overpass;
mod runtime;

pub use export::{ExportError, ExportOptions, export, try_export, write_records};
pub use geocoding::{NominatimConfig, NominatimGeocoder};
pub use overpass::{OverpassClient, OverpassClientConfig};
pub use runtime::ClientBuildError;
