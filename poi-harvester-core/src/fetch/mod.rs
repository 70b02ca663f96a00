//! Retrieval of raw elements for a composed query.
//!
//! [`ElementSource`] is the seam between the pipeline and the network. The
//! HTTP implementation lives in `poi-harvester-data`; tests substitute
//! closures or the stubs in `test_support`.

mod error;

pub use error::FetchError;

use log::error;

use crate::{OverpassQuery, RawElement};

/// Produce raw elements for a query.
///
/// Implementors provide [`ElementSource::try_fetch`]. The provided
/// [`ElementSource::fetch`] collapses every failure into an empty result
/// after logging it, which is the contract the harvest pipeline relies on.
///
/// # Examples
/// ```
/// use poi_harvester_core::{ElementSource, FetchError, OverpassQuery, RawElement};
///
/// let source = |_: &OverpassQuery| -> Result<Vec<RawElement>, FetchError> {
///     Err(FetchError::MalformedResponse { message: "not json".into() })
/// };
/// assert!(source.fetch(&OverpassQuery::empty()).is_empty());
/// ```
pub trait ElementSource: Send + Sync {
    /// Fetch elements, surfacing the failure cause.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the query is empty, the endpoint times
    /// out or fails, or the response cannot be decoded.
    fn try_fetch(&self, query: &OverpassQuery) -> Result<Vec<RawElement>, FetchError>;

    /// Fetch elements, logging any failure and returning an empty list.
    fn fetch(&self, query: &OverpassQuery) -> Vec<RawElement> {
        self.try_fetch(query).unwrap_or_else(|err| {
            error!("error fetching data: {err}");
            Vec::new()
        })
    }
}

impl<F> ElementSource for F
where
    F: Fn(&OverpassQuery) -> Result<Vec<RawElement>, FetchError> + Send + Sync,
{
    fn try_fetch(&self, query: &OverpassQuery) -> Result<Vec<RawElement>, FetchError> {
        self(query)
    }
}
