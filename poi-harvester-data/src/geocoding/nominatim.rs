//! Nominatim search API geocoder.

use std::time::Duration;

use geo::Coord;
use log::debug;
use poi_harvester_core::{GeocodeError, Geocoder};
use serde::Deserialize;
use url::Url;

use crate::overpass::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::runtime::{BlockingHttp, ClientBuildError};

/// Public Nominatim search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Configuration for [`NominatimGeocoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominatimConfig {
    /// Search endpoint URL.
    pub search_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent string; Nominatim's usage policy requires one.
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl NominatimConfig {
    /// Default configuration pointed at `search_url`.
    #[must_use]
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
            ..Self::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One search hit. Nominatim reports coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// [`Geocoder`] backed by the Nominatim `/search` endpoint.
#[derive(Debug)]
pub struct NominatimGeocoder {
    http: BlockingHttp,
    config: NominatimConfig,
}

impl NominatimGeocoder {
    /// Geocoder for the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_config(NominatimConfig::default())
    }

    /// Geocoder with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ClientBuildError> {
        let http = BlockingHttp::new(&config.user_agent, config.timeout)?;
        Ok(Self { http, config })
    }

    /// Build `{search_url}?q=..&format=json&limit=1`.
    fn search_url(&self, place: &str) -> Result<Url, GeocodeError> {
        Url::parse_with_params(
            &self.config.search_url,
            &[("q", place), ("format", "json"), ("limit", "1")],
        )
        .map_err(|err| GeocodeError::Transport {
            message: format!("invalid search URL {}: {err}", self.config.search_url),
        })
    }

    async fn search(&self, place: &str) -> Result<Coord<f64>, GeocodeError> {
        let url = self.search_url(place)?;
        debug!("geocoding {place:?} via {url}");
        let body = self
            .http
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err))?
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;
        parse_first_hit(place, &body)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> GeocodeError {
        if error.is_timeout() {
            GeocodeError::Timeout {
                timeout: self.config.timeout,
            }
        } else {
            GeocodeError::Transport {
                message: error.to_string(),
            }
        }
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, place: &str) -> Result<Coord<f64>, GeocodeError> {
        self.http.block_on(self.search(place))
    }
}

/// Decode a `format=json` search body and take the first hit.
fn parse_first_hit(place: &str, body: &str) -> Result<Coord<f64>, GeocodeError> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|err| GeocodeError::Malformed {
            message: err.to_string(),
        })?;
    let hit = hits.into_iter().next().ok_or_else(|| GeocodeError::NotFound {
        query: place.to_owned(),
    })?;
    let parse = |raw: &str, axis: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|err| GeocodeError::Malformed {
                message: format!("{axis} `{raw}`: {err}"),
            })
    };
    Ok(Coord {
        x: parse(&hit.lon, "longitude")?,
        y: parse(&hit.lat, "latitude")?,
    })
}
