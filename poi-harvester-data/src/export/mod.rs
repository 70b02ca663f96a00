//! File exporters for normalized records.
//!
//! Every format is rendered in memory first and written with a single call,
//! so a validation failure (for example an unsafe SQL identifier) never
//! leaves a truncated file behind.
//!
//! [`export`] is the boolean contract used by the CLI: failures are logged
//! and reported as `false`. [`try_export`] and the `write_*` functions expose
//! the typed [`ExportError`].

mod csv;
mod json;
mod sql;

use std::io::{self, Write};

use camino::Utf8Path;
use log::{debug, error};
use poi_harvester_core::{ColumnMapping, ExportFormat, FieldSet, PoiRecord};
use thiserror::Error;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::sql::{DEFAULT_TABLE_NAME, MAX_IDENTIFIER_LEN, write_sql};

/// Errors raised while rendering or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be created or written.
    #[error("failed to write {path}: {source}")]
    Io {
        /// Destination path.
        path: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The CSV writer failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] ::csv::Error),
    /// The JSON serializer failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A table or column name falls outside the safe identifier set.
    #[error(
        "invalid SQL identifier `{identifier}` (use 1-63 ASCII letters, digits, `_`, `:` or `-`)"
    )]
    InvalidIdentifier {
        /// Rejected identifier.
        identifier: String,
    },
    /// Two fields were mapped onto the same column.
    #[error("column `{column}` is produced by more than one field")]
    DuplicateColumn {
        /// Repeated column name.
        column: String,
    },
}

/// Columns every format writes ahead of the selected fields.
pub const COORDINATE_COLUMNS: [&str; 2] = ["latitude", "longitude"];

/// Reject a field that would repeat a coordinate column.
fn check_coordinate_clash(fields: &FieldSet) -> Result<(), ExportError> {
    match fields
        .iter()
        .find(|key| COORDINATE_COLUMNS.contains(&key.as_str()))
    {
        Some(key) => Err(ExportError::DuplicateColumn {
            column: key.clone(),
        }),
        None => Ok(()),
    }
}

/// Options that only some formats use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// SQL table name.
    pub table_name: String,
    /// SQL column renames.
    pub column_mapping: ColumnMapping,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_owned(),
            column_mapping: ColumnMapping::default(),
        }
    }
}

/// Render `records` in `format` into `writer`.
///
/// # Errors
///
/// Returns [`ExportError`] when encoding fails, when a field repeats a
/// coordinate column or, for SQL, when an identifier is unsafe or duplicated.
pub fn write_records<W: Write>(
    format: ExportFormat,
    writer: W,
    records: &[PoiRecord],
    fields: &FieldSet,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => write_csv(writer, records, fields),
        ExportFormat::Json => write_json(writer, records, fields),
        ExportFormat::Sql => write_sql(writer, records, fields, options),
    }
}

/// Export to `path`, surfacing the failure cause.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`ExportError`] when rendering fails or the file cannot be
/// written. Nothing is written when rendering fails.
pub fn try_export(
    format: ExportFormat,
    records: &[PoiRecord],
    fields: &FieldSet,
    path: &Utf8Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let mut rendered = Vec::new();
    write_records(format, &mut rendered, records, fields, options)?;
    let io_error = |source: io::Error| ExportError::Io {
        path: path.to_string(),
        source,
    };
    let mut file = poi_harvester_fs::create_file(path).map_err(io_error)?;
    file.write_all(&rendered).map_err(io_error)?;
    file.flush().map_err(io_error)?;
    debug!("wrote {} bytes to {path}", rendered.len());
    Ok(())
}

/// Export to `path`, logging any failure.
///
/// Returns `true` when the file was written.
pub fn export(
    format: ExportFormat,
    records: &[PoiRecord],
    fields: &FieldSet,
    path: &Utf8Path,
    options: &ExportOptions,
) -> bool {
    match try_export(format, records, fields, path, options) {
        Ok(()) => true,
        Err(err) => {
            error!("{format} export failed: {err}");
            false
        }
    }
}
