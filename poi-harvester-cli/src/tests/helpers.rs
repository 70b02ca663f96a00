//! Test doubles and fixtures for driving the harvest command offline.

use std::sync::Arc;

use camino::Utf8PathBuf;
use geo::Coord;
use poi_harvester_core::test_support::{StubElementSource, StubGeocoder};
use poi_harvester_core::{
    ElementSource, FetchError, GeocodeError, Geocoder, OverpassQuery, RawElement, Tags,
};
use tempfile::TempDir;

use super::*;
use crate::harvest::{HarvestConfig, HarvestServicesBuilder};

/// Services backed by the core stubs, shared so tests can inspect them.
pub(super) struct StubServices {
    pub(super) geocoder: Arc<StubGeocoder>,
    pub(super) source: Arc<StubElementSource>,
}

impl StubServices {
    pub(super) fn new(geocoder: StubGeocoder, source: StubElementSource) -> Self {
        Self {
            geocoder: Arc::new(geocoder),
            source: Arc::new(source),
        }
    }
}

impl std::fmt::Debug for StubServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubServices")
            .field("geocoder_calls", &self.geocoder.calls())
            .field("queries", &self.source.queries())
            .finish()
    }
}

impl HarvestServicesBuilder for StubServices {
    fn geocoder(&self, _config: &HarvestConfig) -> Result<Box<dyn Geocoder>, CliError> {
        let geocoder = Arc::clone(&self.geocoder);
        Ok(Box::new(
            move |place: &str| -> Result<Coord<f64>, GeocodeError> { geocoder.geocode(place) },
        ))
    }

    fn element_source(
        &self,
        _config: &HarvestConfig,
    ) -> Result<Box<dyn ElementSource>, CliError> {
        let source = Arc::clone(&self.source);
        Ok(Box::new(
            move |query: &OverpassQuery| -> Result<Vec<RawElement>, FetchError> {
                source.try_fetch(query)
            },
        ))
    }
}

/// Two pharmacies near Berlin Mitte; the second has no coordinates of its own.
pub(super) fn pharmacy_elements() -> Vec<RawElement> {
    vec![
        RawElement {
            id: Some(1),
            kind: Some("node".to_owned()),
            lat: Some(52.52),
            lon: Some(13.40),
            tags: Some(Tags::from([
                ("amenity".to_owned(), "pharmacy".to_owned()),
                ("name".to_owned(), "Apotheke am Markt".to_owned()),
            ])),
            ..RawElement::default()
        },
        RawElement {
            id: Some(2),
            kind: Some("way".to_owned()),
            center: Some(poi_harvester_core::Centroid {
                lat: Some(52.521),
                lon: Some(13.401),
            }),
            tags: Some(Tags::from([
                ("amenity".to_owned(), "pharmacy".to_owned()),
                ("name".to_owned(), "Hof-Apotheke".to_owned()),
                ("website".to_owned(), "https://hof.example".to_owned()),
            ])),
            ..RawElement::default()
        },
    ]
}

/// Temporary directory with a UTF-8 root.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace").field("root", &self.root).finish()
    }
}
