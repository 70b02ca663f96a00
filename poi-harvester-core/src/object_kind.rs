//! OpenStreetMap primitive kinds a query may match.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the three OSM primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ObjectKind {
    /// A single point feature.
    Node,
    /// A polyline or closed area.
    Way,
    /// A grouping of other primitives.
    Relation,
}

impl ObjectKind {
    /// Every kind in canonical order.
    pub const ALL: [Self; 3] = [Self::Node, Self::Way, Self::Relation];

    /// Overpass QL statement keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`ObjectKind`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown OSM object type `{0}` (expected node, way or relation)")]
pub struct ParseObjectKindError(pub String);

impl FromStr for ObjectKind {
    type Err = ParseObjectKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseObjectKindError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("node", ObjectKind::Node)]
    #[case("way", ObjectKind::Way)]
    #[case("relation", ObjectKind::Relation)]
    fn parses_keywords(#[case] raw: &str, #[case] expected: ObjectKind) {
        assert_eq!(raw.parse::<ObjectKind>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("Node")]
    #[case("area")]
    fn rejects_other_words(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<ObjectKind>(),
            Err(ParseObjectKindError(raw.to_owned()))
        );
    }
}
