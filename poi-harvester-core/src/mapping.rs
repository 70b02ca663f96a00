//! Renaming of tag keys to output column names.

use std::collections::HashMap;

use thiserror::Error;

/// Rejected `key=column` token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColumnMappingError {
    /// Token has no `=`.
    #[error("column mapping `{token}` is missing `=`")]
    MissingSeparator {
        /// Offending token.
        token: String,
    },
    /// Nothing before the `=`.
    #[error("column mapping `{token}` has an empty key")]
    EmptyKey {
        /// Offending token.
        token: String,
    },
    /// Nothing after the `=`.
    #[error("column mapping `{token}` has an empty column name")]
    EmptyColumn {
        /// Offending token.
        token: String,
    },
}

/// Tag key to column name mapping. Keys without an entry keep their name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping(HashMap<String, String>);

impl ColumnMapping {
    /// Parse whitespace-separated `key=column` tokens.
    ///
    /// Each token splits at its first `=`, so columns may contain further
    /// `=` characters. Malformed tokens are returned alongside the mapping
    /// and otherwise ignored. A repeated key keeps its last column.
    ///
    /// # Examples
    /// ```
    /// use poi_harvester_core::ColumnMapping;
    ///
    /// let (mapping, rejected) = ColumnMapping::parse("name=poi_name bogus opening_hours=hours");
    /// assert_eq!(mapping.column_for("name"), "poi_name");
    /// assert_eq!(mapping.column_for("website"), "website");
    /// assert_eq!(rejected.len(), 1);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> (Self, Vec<ColumnMappingError>) {
        let mut mapping = HashMap::new();
        let mut rejected = Vec::new();
        for token in raw.split_whitespace() {
            match parse_token(token) {
                Ok((key, column)) => {
                    mapping.insert(key.to_owned(), column.to_owned());
                }
                Err(err) => rejected.push(err),
            }
        }
        (Self(mapping), rejected)
    }

    /// Output column for `key`.
    #[must_use]
    pub fn column_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.0.get(key).map_or(key, String::as_str)
    }

    /// Number of explicit renames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every key keeps its own name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ColumnMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, column)| (key.into(), column.into()))
                .collect(),
        )
    }
}

fn parse_token(token: &str) -> Result<(&str, &str), ColumnMappingError> {
    let Some((key, column)) = token.split_once('=') else {
        return Err(ColumnMappingError::MissingSeparator {
            token: token.to_owned(),
        });
    };
    if key.is_empty() {
        return Err(ColumnMappingError::EmptyKey {
            token: token.to_owned(),
        });
    }
    if column.is_empty() {
        return Err(ColumnMappingError::EmptyColumn {
            token: token.to_owned(),
        });
    }
    Ok((key, column))
}
