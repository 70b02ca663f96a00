//! Orchestration of the harvest stages.
//!
//! [`harvest`] runs category validation, query composition, fetching,
//! normalization and field projection in order. Exporting is left to the
//! caller so the core stays free of file I/O; a failed export is reported
//! back through [`PipelineError::ExportFailed`].

use log::{info, warn};
use thiserror::Error;

use crate::{
    BoundingBox, ElementSource, FieldSelection, FieldSet, ObjectKind, OverpassQuery, PoiRecord,
    QueryBuilder, normalize,
};

/// Errors that end a harvest run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// None of the requested categories is registered.
    #[error("no valid POI types specified")]
    NoValidCategories,
    /// The query was empty or the fetch produced no elements.
    #[error("no data retrieved")]
    NoData,
    /// The exporter reported failure.
    #[error("export to {destination} failed")]
    ExportFailed {
        /// Destination that could not be written.
        destination: String,
    },
}

/// What to harvest.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestPlan {
    /// Area to search.
    pub bbox: BoundingBox,
    /// Category identifiers in caller order; unknown ones are dropped.
    pub categories: Vec<String>,
    /// Object kinds to match.
    pub object_kinds: Vec<ObjectKind>,
    /// How export fields are chosen.
    pub fields: FieldSelection,
}

/// Result of a successful harvest, ready for export.
#[derive(Debug, Clone, PartialEq)]
pub struct Harvest {
    /// Query that was executed.
    pub query: OverpassQuery,
    /// Categories that survived validation, in caller order.
    pub categories: Vec<String>,
    /// Normalized records. May be empty when every element lacked a position.
    pub records: Vec<PoiRecord>,
    /// Fields to export.
    pub fields: FieldSet,
}

/// Run the harvest stages for `plan`.
///
/// Unknown categories are logged and dropped. The source is not consulted
/// when the composed query is the empty sentinel.
///
/// # Errors
///
/// Returns [`PipelineError::NoValidCategories`] when nothing in
/// `plan.categories` is registered, and [`PipelineError::NoData`] when the
/// query is empty or the source yields no elements.
///
/// # Examples
/// ```
/// use poi_harvester_core::{
///     harvest, BoundingBox, CategoryRegistry, FetchError, FieldSelection, HarvestPlan,
///     ObjectKind, OverpassQuery, PipelineError, QueryBuilder, RawElement,
/// };
///
/// let registry = CategoryRegistry::builtin();
/// let builder = QueryBuilder::new(&registry);
/// let source = |_: &OverpassQuery| -> Result<Vec<RawElement>, FetchError> { Ok(Vec::new()) };
/// let plan = HarvestPlan {
///     bbox: BoundingBox::new(52.5, 13.3, 52.6, 13.4)?,
///     categories: vec!["cafe".into()],
///     object_kinds: vec![ObjectKind::Node],
///     fields: FieldSelection::default(),
/// };
/// assert_eq!(harvest(&builder, &source, &plan), Err(PipelineError::NoData));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn harvest(
    builder: &QueryBuilder<'_>,
    source: &dyn ElementSource,
    plan: &HarvestPlan,
) -> Result<Harvest, PipelineError> {
    let selection = builder.registry().validate(&plan.categories);
    if !selection.invalid.is_empty() {
        warn!("invalid POI types ignored: {}", selection.invalid.join(", "));
    }
    if selection.valid.is_empty() {
        return Err(PipelineError::NoValidCategories);
    }

    let query = builder.build(&plan.bbox, &selection.valid, &plan.object_kinds);
    if query.is_empty() {
        return Err(PipelineError::NoData);
    }

    let elements = source.fetch(&query);
    if elements.is_empty() {
        return Err(PipelineError::NoData);
    }
    info!("retrieved {} elements", elements.len());

    let records = normalize(elements);
    let fields = FieldSet::project(&records, &plan.fields);
    Ok(Harvest {
        query,
        categories: selection.valid,
        records,
        fields,
    })
}
