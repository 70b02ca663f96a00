//! Error types emitted by the POI harvester CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use poi_harvester_core::{
    BoundingBoxError, CategoryRegistryError, GeocodeError, PipelineError,
};
use poi_harvester_data::ClientBuildError;
use thiserror::Error;

/// Errors emitted by the POI harvester CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// Neither a place name nor a bounding box was given.
    #[error("missing search area (set --{location} or --{bbox})")]
    MissingSearchArea {
        location: &'static str,
        bbox: &'static str,
    },
    /// Two mutually exclusive options were both set.
    #[error("--{first} and --{second} cannot be combined")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// `--bbox` did not carry exactly four numbers.
    #[error("--bbox expects 4 values (south west north east), got {count}")]
    BoundingBoxArity { count: usize },
    /// The bounding box or radius is geographically invalid.
    #[error("invalid search area: {0}")]
    InvalidSearchArea(#[from] BoundingBoxError),
    /// A category registry file could not be read.
    #[error("failed to read categories file {path:?}: {source}")]
    ReadCategories {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A category registry file was read but is not a valid registry.
    #[error("invalid categories file {path:?}: {source}")]
    ParseCategories {
        path: Utf8PathBuf,
        #[source]
        source: CategoryRegistryError,
    },
    /// Constructing an HTTP adapter failed.
    #[error("failed to build {service} client: {source}")]
    BuildClient {
        service: &'static str,
        #[source]
        source: ClientBuildError,
    },
    /// The place name could not be resolved.
    #[error("failed to geocode location '{location}': {source}")]
    Geocode {
        location: String,
        #[source]
        source: GeocodeError,
    },
    /// The harvest itself failed.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    /// Writing the category listing failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
