//! Rectangular areas of interest expressed in WGS84 degrees.

use std::fmt;

use geo::Coord;
use thiserror::Error;

/// Kilometres per degree used for the radius approximation.
const KM_PER_DEGREE: f64 = 111.0;

/// Errors returned when constructing a [`BoundingBox`].
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum BoundingBoxError {
    /// A bound was NaN or infinite.
    #[error("bounding box coordinates must be finite")]
    NonFinite,
    /// A latitude lay outside `[-90, 90]`.
    #[error("latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Offending latitude.
        value: f64,
    },
    /// A longitude lay outside `[-180, 180]`.
    #[error("longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Offending longitude.
        value: f64,
    },
    /// South was not below north, or west was not below east.
    #[error("bounding box ({south},{west},{north},{east}) is inverted or empty")]
    Inverted {
        /// Southern bound.
        south: f64,
        /// Western bound.
        west: f64,
        /// Northern bound.
        north: f64,
        /// Eastern bound.
        east: f64,
    },
    /// A radius was zero, negative or not finite.
    #[error("radius must be a positive number of kilometres, got {radius_km}")]
    InvalidRadius {
        /// Offending radius.
        radius_km: f64,
    },
}

/// A `(south, west, north, east)` box in degrees.
///
/// Construction rejects inverted boxes so every query embeds a box the
/// Overpass interpreter can satisfy.
///
/// # Examples
/// ```
/// use poi_harvester_core::BoundingBox;
///
/// let bbox = BoundingBox::new(52.5, 13.3, 52.6, 13.4)?;
/// assert_eq!(bbox.to_string(), "52.5,13.3,52.6,13.4");
/// # Ok::<(), poi_harvester_core::BoundingBoxError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    south: f64,
    west: f64,
    north: f64,
    east: f64,
}

impl BoundingBox {
    /// Validate and construct a box from its four bounds.
    ///
    /// # Errors
    ///
    /// Returns [`BoundingBoxError`] when a bound is not finite, lies outside
    /// the WGS84 range, or when the box is inverted or has zero extent.
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Result<Self, BoundingBoxError> {
        if ![south, west, north, east].iter().all(|v| v.is_finite()) {
            return Err(BoundingBoxError::NonFinite);
        }
        for value in [south, north] {
            if !(-90.0..=90.0).contains(&value) {
                return Err(BoundingBoxError::LatitudeOutOfRange { value });
            }
        }
        for value in [west, east] {
            if !(-180.0..=180.0).contains(&value) {
                return Err(BoundingBoxError::LongitudeOutOfRange { value });
            }
        }
        if south >= north || west >= east {
            return Err(BoundingBoxError::Inverted {
                south,
                west,
                north,
                east,
            });
        }
        Ok(Self {
            south,
            west,
            north,
            east,
        })
    }

    /// Square box around `center` extending `radius_km` on every side.
    ///
    /// The radius is converted with a flat 111 km per degree on both axes,
    /// matching the rough approximation operators expect from the tool.
    /// Bounds are clamped to the WGS84 range.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use poi_harvester_core::BoundingBox;
    ///
    /// let bbox = BoundingBox::around(Coord { x: 13.4, y: 52.5 }, 11.1)?;
    /// assert!((bbox.north() - 52.6).abs() < 1e-9);
    /// assert!((bbox.west() - 13.3).abs() < 1e-9);
    /// # Ok::<(), poi_harvester_core::BoundingBoxError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BoundingBoxError::InvalidRadius`] for non-positive radii and
    /// the errors of [`Self::new`] for an invalid centre.
    #[expect(
        clippy::float_arithmetic,
        reason = "radius-to-degree conversion requires float maths"
    )]
    pub fn around(center: Coord<f64>, radius_km: f64) -> Result<Self, BoundingBoxError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(BoundingBoxError::InvalidRadius { radius_km });
        }
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(BoundingBoxError::NonFinite);
        }
        let delta = radius_km / KM_PER_DEGREE;
        Self::new(
            (center.y - delta).max(-90.0),
            (center.x - delta).max(-180.0),
            (center.y + delta).min(90.0),
            (center.x + delta).min(180.0),
        )
    }

    /// Southern bound.
    #[must_use]
    pub const fn south(&self) -> f64 {
        self.south
    }

    /// Western bound.
    #[must_use]
    pub const fn west(&self) -> f64 {
        self.west
    }

    /// Northern bound.
    #[must_use]
    pub const fn north(&self) -> f64 {
        self.north
    }

    /// Eastern bound.
    #[must_use]
    pub const fn east(&self) -> f64 {
        self.east
    }

    /// The bounds as a `(south, west, north, east)` tuple.
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.south, self.west, self.north, self.east)
    }

    /// Token used in generated filenames: `s-w-n-e`.
    ///
    /// Whole degrees keep their decimal point (`50.0`), so a box typed as
    /// `50.0 8.0 50.1 8.1` labels its file the same way the bounds were
    /// written.
    #[must_use]
    pub fn filename_label(&self) -> String {
        format!(
            "{:?}-{:?}-{:?}-{:?}",
            self.south, self.west, self.north, self.east
        )
    }
}

impl fmt::Display for BoundingBox {
    /// Renders the Overpass bbox filter body `s,w,n,e`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}
