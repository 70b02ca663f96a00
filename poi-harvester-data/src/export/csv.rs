//! CSV exporter.

use std::io::Write;

use poi_harvester_core::{FieldSet, PoiRecord};

use super::{COORDINATE_COLUMNS, ExportError, check_coordinate_clash};

/// Write a header of `latitude`, `longitude` and the field set, then one row
/// per record. Missing tags become empty cells.
///
/// # Errors
///
/// Returns [`ExportError::DuplicateColumn`] when a field is named like a
/// coordinate column and [`ExportError::Csv`] when the writer fails.
pub fn write_csv<W: Write>(
    writer: W,
    records: &[PoiRecord],
    fields: &FieldSet,
) -> Result<(), ExportError> {
    check_coordinate_clash(fields)?;
    let mut out = ::csv::Writer::from_writer(writer);

    let mut header = COORDINATE_COLUMNS.to_vec();
    header.extend(fields.iter().map(String::as_str));
    out.write_record(&header)?;

    for record in records {
        let mut row = vec![record.latitude().to_string(), record.longitude().to_string()];
        row.extend(fields.iter().map(|key| record.tag(key).to_owned()));
        out.write_record(&row)?;
    }
    out.flush().map_err(::csv::Error::from)?;
    Ok(())
}
