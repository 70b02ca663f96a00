//! Raw Overpass elements and the normalized records derived from them.

use std::collections::BTreeMap;

use geo::Coord;

/// OpenStreetMap-style tags.
pub type Tags = BTreeMap<String, String>;

/// Centroid reported for ways and relations under `out center;`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Centroid {
    /// Latitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Longitude in degrees.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
}

/// An element as returned by the Overpass interpreter.
///
/// Every field is optional; presence is checked during normalization rather
/// than at decode time.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RawElement {
    /// Source identifier; never exported.
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: Option<u64>,
    /// Source primitive (`node`, `way`, `relation`); never exported.
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub kind: Option<String>,
    /// Direct latitude, present on nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lat: Option<f64>,
    /// Direct longitude, present on nodes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lon: Option<f64>,
    /// Centroid, present on ways and relations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub center: Option<Centroid>,
    /// Free-form tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Option<Tags>,
}

impl RawElement {
    /// Resolve the element position as `x = longitude`, `y = latitude`.
    ///
    /// Direct coordinates win when both are present; otherwise both centroid
    /// coordinates must be present.
    #[must_use]
    pub fn position(&self) -> Option<Coord<f64>> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(Coord { x: lon, y: lat }),
            _ => self.center.and_then(|center| match (center.lat, center.lon) {
                (Some(lat), Some(lon)) => Some(Coord { x: lon, y: lat }),
                _ => None,
            }),
        }
    }
}

/// A normalized point of interest.
///
/// # Examples
/// ```
/// use poi_harvester_core::{PoiRecord, Tags};
///
/// let record = PoiRecord::new(52.5, 13.4, Tags::from([("name".into(), "Café".into())]));
/// assert_eq!(record.latitude(), 52.5);
/// assert_eq!(record.tag("name"), "Café");
/// assert_eq!(record.tag("website"), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PoiRecord {
    /// WGS84 position with `x = longitude` and `y = latitude`.
    pub location: Coord<f64>,
    /// Tags copied verbatim from the source element.
    pub tags: Tags,
}

impl PoiRecord {
    /// Construct a record from latitude, longitude and tags.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, tags: Tags) -> Self {
        Self {
            location: Coord {
                x: longitude,
                y: latitude,
            },
            tags,
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Tag value, or `""` when the key is absent.
    #[must_use]
    pub fn tag(&self, key: &str) -> &str {
        self.tags.get(key).map_or("", String::as_str)
    }
}

/// Convert raw elements into records, dropping those without a position.
///
/// Order is preserved and the output is never longer than the input.
#[must_use]
pub fn normalize(elements: Vec<RawElement>) -> Vec<PoiRecord> {
    elements
        .into_iter()
        .filter_map(|element| {
            let location = element.position()?;
            Some(PoiRecord {
                location,
                tags: element.tags.unwrap_or_default(),
            })
        })
        .collect()
}
