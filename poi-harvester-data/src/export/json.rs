//! JSON exporter.

use std::io::Write;

use poi_harvester_core::{FieldSet, PoiRecord};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{COORDINATE_COLUMNS, ExportError, check_coordinate_clash};

/// One exported object; members follow field-set order.
struct Row<'a> {
    record: &'a PoiRecord,
    fields: &'a FieldSet,
}

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 2))?;
        let [latitude, longitude] = COORDINATE_COLUMNS;
        map.serialize_entry(latitude, &self.record.latitude())?;
        map.serialize_entry(longitude, &self.record.longitude())?;
        for key in self.fields {
            map.serialize_entry(key, self.record.tag(key))?;
        }
        map.end()
    }
}

struct Rows<'a> {
    records: &'a [PoiRecord],
    fields: &'a FieldSet,
}

impl Serialize for Rows<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
        for record in self.records {
            seq.serialize_element(&Row {
                record,
                fields: self.fields,
            })?;
        }
        seq.end()
    }
}

/// Write a pretty-printed array with one object per record.
///
/// # Errors
///
/// Returns [`ExportError::DuplicateColumn`] when a field is named like a
/// coordinate column and [`ExportError::Json`] when serialization fails.
pub fn write_json<W: Write>(
    mut writer: W,
    records: &[PoiRecord],
    fields: &FieldSet,
) -> Result<(), ExportError> {
    check_coordinate_clash(fields)?;
    serde_json::to_writer_pretty(&mut writer, &Rows { records, fields })?;
    writer
        .write_all(b"\n")
        .map_err(serde_json::Error::io)?;
    Ok(())
}
