//! Overpass API adapter.
//!
//! [`OverpassClient`] implements [`poi_harvester_core::ElementSource`] by
//! POSTing the composed query to an interpreter endpoint and decoding the
//! `[out:json]` body.
//!
//! # Example
//!
//! ```no_run
//! use poi_harvester_core::{BoundingBox, CategoryRegistry, ElementSource, ObjectKind, QueryBuilder};
//! use poi_harvester_data::overpass::{OverpassClient, OverpassClientConfig};
//! use std::time::Duration;
//!
//! let registry = CategoryRegistry::builtin();
//! let bbox = BoundingBox::new(52.5, 13.3, 52.6, 13.4)?;
//! let query = QueryBuilder::new(&registry).build(&bbox, &["pharmacy"], &[ObjectKind::Node]);
//!
//! let client = OverpassClient::with_config(
//!     OverpassClientConfig::default().with_timeout(Duration::from_secs(60)),
//! )?;
//! let elements = client.try_fetch(&query)?;
//! println!("{} elements", elements.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
mod response;

pub use client::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, OverpassClient,
    OverpassClientConfig,
};
