//! Errors raised while retrieving elements from an Overpass endpoint.

use std::time::Duration;

use thiserror::Error;

/// Failure modes of [`ElementSource::try_fetch`](crate::ElementSource::try_fetch).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The empty query sentinel was submitted.
    #[error("query has no clauses; nothing to fetch")]
    EmptyQuery,
    /// The endpoint did not answer within the client timeout.
    #[error("request to {endpoint} timed out after {timeout:?}")]
    Timeout {
        /// Endpoint that was contacted.
        endpoint: String,
        /// Timeout or caller deadline that elapsed.
        timeout: Duration,
    },
    /// Connection failure or non-success HTTP status.
    #[error("request to {endpoint} failed: {message}")]
    Transport {
        /// Endpoint that was contacted.
        endpoint: String,
        /// Underlying error description.
        message: String,
        /// HTTP status when the server answered.
        status: Option<u16>,
    },
    /// The body was not an Overpass JSON document.
    #[error("malformed Overpass response: {message}")]
    MalformedResponse {
        /// Decoder error description.
        message: String,
    },
}
