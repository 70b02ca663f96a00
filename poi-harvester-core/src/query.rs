//! Overpass QL query composition.
//!
//! A query is a single union block with one clause per
//! `(category tag pair) x (object kind)` combination, each restricted to the
//! bounding box. Results are requested with `out center;` so ways and
//! relations report a centroid.

use std::borrow::Cow;
use std::fmt;

use log::debug;

use crate::{BoundingBox, CategoryRegistry, ObjectKind, TagPair};

/// Default `[timeout:N]` budget handed to the Overpass interpreter.
pub const DEFAULT_SERVER_TIMEOUT_SECS: u32 = 25;

/// Tunables for [`QueryBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Seconds the interpreter may spend evaluating the query.
    pub server_timeout_secs: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            server_timeout_secs: DEFAULT_SERVER_TIMEOUT_SECS,
        }
    }
}

/// A composed Overpass QL query.
///
/// The empty query is a sentinel meaning "nothing to ask for"; callers check
/// [`OverpassQuery::is_empty`] and skip the network round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverpassQuery {
    text: String,
    clauses: usize,
}

impl OverpassQuery {
    /// The empty sentinel.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
            clauses: 0,
        }
    }

    /// Whether this is the empty sentinel.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses == 0
    }

    /// Number of filter clauses in the union block.
    #[must_use]
    pub const fn clause_count(&self) -> usize {
        self.clauses
    }

    /// Query text as sent to the interpreter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Builds [`OverpassQuery`] values from registry categories.
///
/// # Examples
/// ```
/// use poi_harvester_core::{BoundingBox, CategoryRegistry, ObjectKind, QueryBuilder};
///
/// let registry = CategoryRegistry::builtin();
/// let bbox = BoundingBox::new(52.5, 13.3, 52.6, 13.4)?;
/// let query = QueryBuilder::new(&registry).build(&bbox, &["pharmacy"], &[ObjectKind::Node]);
/// assert!(query.as_str().contains(r#"node["amenity"="pharmacy"](52.5,13.3,52.6,13.4);"#));
/// # Ok::<(), poi_harvester_core::BoundingBoxError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    registry: &'a CategoryRegistry,
    options: QueryOptions,
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder with default options.
    #[must_use]
    pub fn new(registry: &'a CategoryRegistry) -> Self {
        Self {
            registry,
            options: QueryOptions::default(),
        }
    }

    /// Replace the builder options.
    #[must_use]
    pub const fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Registry used to resolve category identifiers.
    #[must_use]
    pub const fn registry(&self) -> &'a CategoryRegistry {
        self.registry
    }

    /// Compose the query for `categories` x `kinds` inside `bbox`.
    ///
    /// Categories and kinds are visited in caller order. Unknown categories
    /// are skipped; when nothing resolves the empty sentinel is returned.
    #[must_use]
    pub fn build<S: AsRef<str>>(
        &self,
        bbox: &BoundingBox,
        categories: &[S],
        kinds: &[ObjectKind],
    ) -> OverpassQuery {
        let mut clauses = Vec::new();
        for id in categories {
            let Ok(pairs) = self.registry.resolve(id.as_ref()) else {
                debug!("skipping unregistered category {}", id.as_ref());
                continue;
            };
            for pair in pairs {
                clauses.extend(kinds.iter().map(|kind| clause(*kind, pair, bbox)));
            }
        }

        if clauses.is_empty() {
            return OverpassQuery::empty();
        }

        let text = format!(
            "\n[out:json][timeout:{}];\n(\n  {}\n);\nout center;\n",
            self.options.server_timeout_secs,
            clauses.join("\n  ")
        );
        OverpassQuery {
            text,
            clauses: clauses.len(),
        }
    }
}

fn clause(kind: ObjectKind, pair: &TagPair, bbox: &BoundingBox) -> String {
    format!(
        r#"{kind}["{}"="{}"]({bbox});"#,
        escape(&pair.key),
        escape(&pair.value)
    )
}

/// Escape a value for use inside a double-quoted Overpass QL string.
fn escape(raw: &str) -> Cow<'_, str> {
    if raw.contains(['"', '\\']) {
        Cow::Owned(raw.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> CategoryRegistry {
        CategoryRegistry::builtin()
    }

    #[fixture]
    fn bbox() -> BoundingBox {
        BoundingBox::new(52.5, 13.3, 52.6, 13.4).expect("valid box")
    }

    #[rstest]
    fn single_clause_query_matches_exact_text(registry: CategoryRegistry, bbox: BoundingBox) {
        let query = QueryBuilder::new(&registry).build(&bbox, &["pharmacy"], &[ObjectKind::Node]);
        assert_eq!(
            query.as_str(),
            "\n[out:json][timeout:25];\n(\n  node[\"amenity\"=\"pharmacy\"](52.5,13.3,52.6,13.4);\n);\nout center;\n"
        );
        assert_eq!(query.clause_count(), 1);
    }

    #[rstest]
    fn clauses_follow_caller_order(registry: CategoryRegistry, bbox: BoundingBox) {
        let query = QueryBuilder::new(&registry).build(
            &bbox,
            &["bakery", "cafe"],
            &[ObjectKind::Way, ObjectKind::Node],
        );
        let lines: Vec<&str> = query
            .as_str()
            .lines()
            .map(str::trim)
            .filter(|line| line.ends_with(");") && line.contains('['))
            .collect();
        assert_eq!(
            lines,
            [
                r#"way["shop"="bakery"](52.5,13.3,52.6,13.4);"#,
                r#"node["shop"="bakery"](52.5,13.3,52.6,13.4);"#,
                r#"way["amenity"="cafe"](52.5,13.3,52.6,13.4);"#,
                r#"node["amenity"="cafe"](52.5,13.3,52.6,13.4);"#,
            ]
        );
    }

    #[rstest]
    fn unknown_categories_are_skipped(registry: CategoryRegistry, bbox: BoundingBox) {
        let query = QueryBuilder::new(&registry).build(
            &bbox,
            &["unicorn", "cafe"],
            &[ObjectKind::Node],
        );
        assert_eq!(query.clause_count(), 1);
        assert!(!query.as_str().contains("unicorn"));
    }

    #[rstest]
    fn nothing_resolvable_yields_sentinel(registry: CategoryRegistry, bbox: BoundingBox) {
        let query = QueryBuilder::new(&registry).build(&bbox, &["unicorn"], &ObjectKind::ALL);
        assert!(query.is_empty());
        assert_eq!(query, OverpassQuery::empty());
        assert_eq!(query.as_str(), "");
    }

    #[rstest]
    fn no_kinds_yields_sentinel(registry: CategoryRegistry, bbox: BoundingBox) {
        let query = QueryBuilder::new(&registry).build(&bbox, &["cafe"], &[]);
        assert!(query.is_empty());
    }

    #[rstest]
    fn server_timeout_is_configurable(registry: CategoryRegistry, bbox: BoundingBox) {
        let query = QueryBuilder::new(&registry)
            .with_options(QueryOptions {
                server_timeout_secs: 90,
            })
            .build(&bbox, &["cafe"], &[ObjectKind::Node]);
        assert!(query.as_str().starts_with("\n[out:json][timeout:90];\n"));
    }

    #[rstest]
    fn quotes_in_tags_are_escaped(bbox: BoundingBox) {
        let registry = CategoryRegistry::from_entries([(
            "odd",
            vec![TagPair::new("name", r#"Bob's "Bar""#)],
        )])
        .expect("valid registry");
        let query = QueryBuilder::new(&registry).build(&bbox, &["odd"], &[ObjectKind::Node]);
        assert!(query.as_str().contains(r#"node["name"="Bob's \"Bar\""]"#));
    }
}
