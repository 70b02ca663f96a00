//! Test doubles for the network seams.
//!
//! Available to this crate's tests and, through the `test-support` feature,
//! to downstream crates.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;

use crate::{ElementSource, FetchError, GeocodeError, Geocoder, OverpassQuery, RawElement};

/// `ElementSource` returning a canned outcome and recording queries.
#[derive(Debug)]
pub struct StubElementSource {
    outcome: Result<Vec<RawElement>, FetchError>,
    queries: Mutex<Vec<String>>,
}

impl StubElementSource {
    /// Answer every query with `elements`.
    #[must_use]
    pub fn with_elements(elements: Vec<RawElement>) -> Self {
        Self {
            outcome: Ok(elements),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Fail every query with `error`.
    #[must_use]
    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Err(error),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Query texts received so far.
    #[must_use]
    pub fn queries(&self) -> Vec<String> {
        self.queries
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

impl ElementSource for StubElementSource {
    fn try_fetch(&self, query: &OverpassQuery) -> Result<Vec<RawElement>, FetchError> {
        if let Ok(mut seen) = self.queries.lock() {
            seen.push(query.as_str().to_owned());
        }
        self.outcome.clone()
    }
}

/// `Geocoder` resolving every place to one point, or to nothing.
#[derive(Debug, Default)]
pub struct StubGeocoder {
    hit: Option<Coord<f64>>,
    calls: AtomicUsize,
}

impl StubGeocoder {
    /// Resolve every lookup to `latitude`, `longitude`.
    #[must_use]
    pub const fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            hit: Some(Coord {
                x: longitude,
                y: latitude,
            }),
            calls: AtomicUsize::new(0),
        }
    }

    /// Report every lookup as not found.
    #[must_use]
    pub const fn nowhere() -> Self {
        Self {
            hit: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups performed.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Geocoder for StubGeocoder {
    fn geocode(&self, place: &str) -> Result<Coord<f64>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.hit.ok_or_else(|| GeocodeError::NotFound {
            query: place.to_owned(),
        })
    }
}
