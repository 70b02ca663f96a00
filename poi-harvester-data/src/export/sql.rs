//! SQL script exporter.
//!
//! Produces a `CREATE TABLE IF NOT EXISTS` statement followed by one
//! `INSERT` per record. Identifiers are checked against a conservative
//! character set and always double-quoted; text literals double any
//! embedded single quote.

use std::collections::HashSet;
use std::io::Write;

use poi_harvester_core::{FieldSet, PoiRecord};

use super::{COORDINATE_COLUMNS, ExportError, ExportOptions};

/// Table used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "poi_data";

/// Longest identifier accepted, matching PostgreSQL's `NAMEDATALEN - 1`.
pub const MAX_IDENTIFIER_LEN: usize = 63;

/// Write the table definition and inserts for `records`.
///
/// Coordinates are `REAL` columns named `latitude` and `longitude`; every
/// field becomes a `TEXT` column named through `options.column_mapping`.
///
/// # Errors
///
/// Returns [`ExportError::InvalidIdentifier`] for an unsafe table or column
/// name, [`ExportError::DuplicateColumn`] when two fields share a column,
/// and [`ExportError::Io`] when writing fails.
pub fn write_sql<W: Write>(
    mut writer: W,
    records: &[PoiRecord],
    fields: &FieldSet,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let table = quote_identifier(&options.table_name)?;
    let columns = column_list(fields, options)?;

    let mut script = format!("CREATE TABLE IF NOT EXISTS {table} (\n");
    let definitions: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let kind = if index < 2 { "REAL" } else { "TEXT" };
            format!("    {column} {kind}")
        })
        .collect();
    script.push_str(&definitions.join(",\n"));
    script.push_str("\n);\n\n");

    let column_sql = columns.join(", ");
    for record in records {
        let mut values = vec![
            record.latitude().to_string(),
            record.longitude().to_string(),
        ];
        values.extend(fields.iter().map(|key| quote_literal(record.tag(key))));
        script.push_str(&format!(
            "INSERT INTO {table} ({column_sql}) VALUES ({});\n",
            values.join(", ")
        ));
    }

    writer
        .write_all(script.as_bytes())
        .map_err(|source| ExportError::Io {
            path: "<sql writer>".to_owned(),
            source,
        })
}

/// Quoted column names: coordinates first, then mapped fields.
fn column_list(fields: &FieldSet, options: &ExportOptions) -> Result<Vec<String>, ExportError> {
    let mut seen = HashSet::new();
    let names = COORDINATE_COLUMNS
        .into_iter()
        .chain(fields.iter().map(|key| options.column_mapping.column_for(key)));
    let mut columns = Vec::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ExportError::DuplicateColumn {
                column: name.to_owned(),
            });
        }
        columns.push(quote_identifier(name)?);
    }
    Ok(columns)
}

fn is_safe_identifier(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_IDENTIFIER_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-'))
}

fn quote_identifier(name: &str) -> Result<String, ExportError> {
    if is_safe_identifier(name) {
        Ok(format!("\"{name}\""))
    } else {
        Err(ExportError::InvalidIdentifier {
            identifier: name.to_owned(),
        })
    }
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
