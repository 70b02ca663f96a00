//! Place name resolution.

use std::time::Duration;

use geo::Coord;
use thiserror::Error;

/// Errors from [`Geocoder::geocode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The service answered but knew no such place.
    #[error("location `{query}` not found")]
    NotFound {
        /// Place name as supplied.
        query: String,
    },
    /// The service did not answer within the client timeout.
    #[error("geocoding request timed out after {timeout:?}")]
    Timeout {
        /// Client-side timeout that elapsed.
        timeout: Duration,
    },
    /// Connection failure or non-success HTTP status.
    #[error("geocoding request failed: {message}")]
    Transport {
        /// Underlying error description.
        message: String,
    },
    /// The body could not be decoded into coordinates.
    #[error("malformed geocoding response: {message}")]
    Malformed {
        /// Decoder error description.
        message: String,
    },
}

/// Resolve a free-form place name to a point with `x = longitude`,
/// `y = latitude`.
///
/// Implementations return the single best match.
pub trait Geocoder: Send + Sync {
    /// Look up `place`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::NotFound`] when nothing matches, and the other
    /// variants for transport or decoding failures.
    fn geocode(&self, place: &str) -> Result<Coord<f64>, GeocodeError>;
}

impl<F> Geocoder for F
where
    F: Fn(&str) -> Result<Coord<f64>, GeocodeError> + Send + Sync,
{
    fn geocode(&self, place: &str) -> Result<Coord<f64>, GeocodeError> {
        self(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn closures_act_as_geocoders() {
        let geocoder = |place: &str| -> Result<Coord<f64>, GeocodeError> {
            if place == "Berlin" {
                Ok(Coord { x: 13.4, y: 52.5 })
            } else {
                Err(GeocodeError::NotFound {
                    query: place.to_owned(),
                })
            }
        };
        assert_eq!(geocoder.geocode("Berlin"), Ok(Coord { x: 13.4, y: 52.5 }));
        assert!(matches!(
            geocoder.geocode("Atlantis"),
            Err(GeocodeError::NotFound { query }) if query == "Atlantis"
        ));
    }
}
