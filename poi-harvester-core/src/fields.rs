//! Field projection: which tag keys become export columns.

use std::collections::{BTreeSet, HashSet};

use log::info;

use crate::PoiRecord;

/// How the exported field set is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelection {
    /// Exactly these keys, in this order.
    Explicit(Vec<String>),
    /// Every key observed across the records, sorted.
    All,
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self::Explicit(vec!["name".to_owned()])
    }
}

/// Ordered, duplicate-free list of tag keys to export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet(Vec<String>);

impl FieldSet {
    /// Determine the field set for `records`.
    ///
    /// Explicit keys are kept in caller order whether or not any record
    /// carries them; repeated keys keep their first position. With
    /// [`FieldSelection::All`] the lexicographically sorted union of every
    /// tag key is returned. Records themselves are never filtered.
    ///
    /// # Examples
    /// ```
    /// use poi_harvester_core::{FieldSelection, FieldSet, PoiRecord, Tags};
    ///
    /// let records = vec![
    ///     PoiRecord::new(0.0, 0.0, Tags::from([
    ///         ("name".into(), "A".into()),
    ///         ("cuisine".into(), "thai".into()),
    ///     ])),
    ///     PoiRecord::new(0.0, 0.0, Tags::from([("name".into(), "B".into())])),
    /// ];
    /// let fields = FieldSet::project(&records, &FieldSelection::All);
    /// assert_eq!(fields.as_slice(), ["cuisine", "name"]);
    /// ```
    #[must_use]
    pub fn project(records: &[PoiRecord], selection: &FieldSelection) -> Self {
        match selection {
            FieldSelection::Explicit(keys) => Self::from_keys(keys.iter().cloned()),
            FieldSelection::All => {
                let observed: BTreeSet<&str> = records
                    .iter()
                    .flat_map(|record| record.tags.keys().map(String::as_str))
                    .collect();
                info!("exporting all {} keys found in data", observed.len());
                Self(observed.into_iter().map(str::to_owned).collect())
            }
        }
    }

    /// Build a field set from keys, dropping repeats.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        Self(
            keys.into_iter()
                .map(Into::into)
                .filter(|key| seen.insert(key.clone()))
                .collect(),
        )
    }

    /// Keys in export order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate keys in export order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no tag keys are exported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tags;
    use rstest::{fixture, rstest};

    fn record(keys: &[&str]) -> PoiRecord {
        let tags: Tags = keys
            .iter()
            .map(|key| ((*key).to_owned(), format!("{key}-value")))
            .collect();
        PoiRecord::new(0.0, 0.0, tags)
    }

    #[fixture]
    fn records() -> Vec<PoiRecord> {
        vec![
            record(&["name", "cuisine"]),
            record(&["name"]),
            record(&["website", "amenity"]),
        ]
    }

    #[rstest]
    fn all_returns_sorted_union(records: Vec<PoiRecord>) {
        let fields = FieldSet::project(&records, &FieldSelection::All);
        assert_eq!(fields.as_slice(), ["amenity", "cuisine", "name", "website"]);
    }

    #[rstest]
    fn explicit_keeps_caller_order_and_unknown_keys(records: Vec<PoiRecord>) {
        let selection = FieldSelection::Explicit(vec![
            "website".into(),
            "phone".into(),
            "name".into(),
        ]);
        let fields = FieldSet::project(&records, &selection);
        assert_eq!(fields.as_slice(), ["website", "phone", "name"]);
    }

    #[rstest]
    fn explicit_drops_repeated_keys() {
        let selection = FieldSelection::Explicit(vec!["name".into(), "name".into(), "a".into()]);
        let fields = FieldSet::project(&[], &selection);
        assert_eq!(fields.as_slice(), ["name", "a"]);
    }

    #[rstest]
    fn all_on_untagged_records_is_empty() {
        let fields = FieldSet::project(&[record(&[])], &FieldSelection::All);
        assert!(fields.is_empty());
    }

    #[rstest]
    fn default_selection_exports_name() {
        let fields = FieldSet::project(&[], &FieldSelection::default());
        assert_eq!(fields.as_slice(), ["name"]);
    }
}
