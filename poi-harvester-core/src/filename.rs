//! Default output file names.

use crate::ExportFormat;

/// Prefix shared by every generated file name.
pub const FILENAME_PREFIX: &str = "poi-harvester";

/// Build `poi-harvester_{location}_{radius}_{categories}.{ext}`.
///
/// Spaces, commas and hyphens are removed from `location`. A whole-number
/// radius drops its fractional part. Category identifiers are joined with
/// `-` after turning their own underscores into hyphens. Explicit bounding
/// box runs pass [`BoundingBox::filename_label`](crate::BoundingBox::filename_label)
/// as the location, which loses its separators like any other hyphen.
///
/// # Examples
/// ```
/// use poi_harvester_core::{generate_filename, ExportFormat};
///
/// let name = generate_filename("New York", 1.0, &["cafe", "fast_food"], ExportFormat::Csv);
/// assert_eq!(name, "poi-harvester_NewYork_1_cafe-fast-food.csv");
/// ```
#[must_use]
pub fn generate_filename<S: AsRef<str>>(
    location: &str,
    radius_km: f64,
    categories: &[S],
    format: ExportFormat,
) -> String {
    let place: String = location
        .chars()
        .filter(|c| !matches!(c, ' ' | ',' | '-'))
        .collect();
    format!(
        "{FILENAME_PREFIX}_{place}_{}_{}.{}",
        radius_label(radius_km),
        category_label(categories),
        format.extension()
    )
}

fn radius_label(radius_km: f64) -> String {
    // f64 Display already omits ".0" for whole numbers.
    radius_km.to_string()
}

fn category_label<S: AsRef<str>>(categories: &[S]) -> String {
    categories
        .iter()
        .map(|id| id.as_ref().replace('_', "-"))
        .collect::<Vec<_>>()
        .join("-")
}
