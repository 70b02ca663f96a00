//! Overpass interpreter JSON response decoding.

use log::warn;
use poi_harvester_core::{FetchError, RawElement};
use serde::Deserialize;

/// Top-level `[out:json]` document.
///
/// Only `elements` and `remark` are read; `version`, `generator` and
/// `osm3s` are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct InterpreterResponse {
    #[serde(default)]
    pub(crate) elements: Option<Vec<RawElement>>,
    /// Runtime error or warning the interpreter embeds in a 200 response.
    #[serde(default)]
    pub(crate) remark: Option<String>,
}

/// Decode an interpreter body into raw elements.
///
/// A `remark` is logged as a warning and does not fail the call.
pub(crate) fn parse_elements(body: &str) -> Result<Vec<RawElement>, FetchError> {
    let response: InterpreterResponse =
        serde_json::from_str(body).map_err(|err| FetchError::MalformedResponse {
            message: err.to_string(),
        })?;
    if let Some(remark) = response.remark.as_deref() {
        warn!("Overpass remark: {remark}");
    }
    response
        .elements
        .ok_or_else(|| FetchError::MalformedResponse {
            message: "response has no `elements` array".to_owned(),
        })
}
