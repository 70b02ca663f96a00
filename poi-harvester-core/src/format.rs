//! Output formats understood by the exporters.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Target file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ExportFormat {
    /// Comma-separated table.
    #[default]
    Csv,
    /// `CREATE TABLE` plus `INSERT` statements.
    Sql,
    /// Array of JSON objects.
    Json,
}

impl ExportFormat {
    /// Every format in canonical order.
    pub const ALL: [Self; 3] = [Self::Csv, Self::Sql, Self::Json];

    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Sql => "sql",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when parsing an unknown [`ExportFormat`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown export format `{0}` (expected csv, sql or json)")]
pub struct ParseExportFormatError(pub String);

impl FromStr for ExportFormat {
    type Err = ParseExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == s)
            .ok_or_else(|| ParseExportFormatError(s.to_owned()))
    }
}
