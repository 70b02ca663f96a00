//! Geocoding adapters implementing [`poi_harvester_core::Geocoder`].

mod nominatim;

pub use nominatim::{DEFAULT_SEARCH_URL, NominatimConfig, NominatimGeocoder};
