//! Category registry mapping user-facing POI identifiers onto OSM tags.
//!
//! The registry is an immutable value. [`CategoryRegistry::builtin`] builds
//! it from the compiled-in table; [`CategoryRegistry::from_entries`] and
//! [`CategoryRegistry::from_json_str`] are the explicit load steps for custom
//! category sets.

mod table;

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use table::BUILTIN_CATEGORIES;

/// A single OpenStreetMap `key=value` selector.
///
/// # Examples
/// ```
/// use poi_harvester_core::TagPair;
///
/// let pair = TagPair::new("amenity", "cafe");
/// assert_eq!(pair.to_string(), "amenity=cafe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagPair {
    /// Attribute key, e.g. `amenity`.
    pub key: String,
    /// Attribute value, e.g. `cafe`.
    pub value: String,
}

impl TagPair {
    /// Construct a tag pair from any string-like key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.key.is_empty() || self.value.is_empty()
    }
}

impl fmt::Display for TagPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Thematic group used when presenting categories to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeGroup {
    /// Public facilities and everyday services.
    Amenities,
    /// Recreation and entertainment.
    Leisure,
    /// Retail outlets.
    Shops,
    /// Attractions and accommodation.
    Tourism,
    /// Stops and stations.
    Transport,
}

impl ThemeGroup {
    /// Every group in presentation order.
    pub const ALL: [Self; 5] = [
        Self::Amenities,
        Self::Leisure,
        Self::Shops,
        Self::Tourism,
        Self::Transport,
    ];

    /// Human readable heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Amenities => "Amenities",
            Self::Leisure => "Leisure",
            Self::Shops => "Shops",
            Self::Tourism => "Tourism",
            Self::Transport => "Transport",
        }
    }

    /// Classify a category by the key of its first tag pair.
    ///
    /// Keys outside the known families fall back to [`ThemeGroup::Amenities`].
    #[must_use]
    pub fn for_key(key: &str) -> Self {
        match key {
            "leisure" => Self::Leisure,
            "shop" => Self::Shops,
            "tourism" => Self::Tourism,
            "highway" | "railway" => Self::Transport,
            _ => Self::Amenities,
        }
    }
}

impl fmt::Display for ThemeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named POI category and the tag pairs that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    tags: Vec<TagPair>,
}

impl Category {
    /// Case-sensitive identifier, e.g. `post-office`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ordered, non-empty tag pairs.
    #[must_use]
    pub fn tags(&self) -> &[TagPair] {
        &self.tags
    }

    /// Thematic group derived from the first tag key.
    #[must_use]
    pub fn group(&self) -> ThemeGroup {
        self.tags
            .first()
            .map_or(ThemeGroup::Amenities, |pair| ThemeGroup::for_key(&pair.key))
    }
}

/// Errors raised while loading or querying a [`CategoryRegistry`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryRegistryError {
    /// The identifier is not registered.
    #[error("unknown POI category `{id}`")]
    UnknownCategory {
        /// Identifier that failed to resolve.
        id: String,
    },
    /// A definition carried an empty identifier.
    #[error("category identifier must not be empty")]
    EmptyIdentifier,
    /// A definition carried no tag pairs.
    #[error("category `{id}` must map to at least one tag pair")]
    MissingTags {
        /// Offending identifier.
        id: String,
    },
    /// A definition carried an empty key or value.
    #[error("category `{id}` contains an empty tag key or value")]
    EmptyTag {
        /// Offending identifier.
        id: String,
    },
    /// The same identifier was defined twice.
    #[error("category `{id}` is defined more than once")]
    Duplicate {
        /// Offending identifier.
        id: String,
    },
    /// A JSON definition document could not be decoded.
    #[error("failed to parse category definitions: {message}")]
    Parse {
        /// Decoder message.
        message: String,
    },
}

/// Outcome of [`CategoryRegistry::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    /// Registered identifiers, in caller order.
    pub valid: Vec<String>,
    /// Unregistered identifiers, in caller order.
    pub invalid: Vec<String>,
}

/// Immutable lookup table from category identifier to tag pairs.
///
/// # Examples
/// ```
/// use poi_harvester_core::{CategoryRegistry, TagPair};
///
/// let registry = CategoryRegistry::builtin();
/// let tags = registry.resolve("pharmacy")?;
/// assert_eq!(tags, &[TagPair::new("amenity", "pharmacy")]);
/// # Ok::<(), poi_harvester_core::CategoryRegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Build the registry from the compiled-in category table.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (id, pairs) in BUILTIN_CATEGORIES {
            let tags = pairs
                .iter()
                .map(|(key, value)| TagPair::new(*key, *value))
                .collect();
            registry.push((*id).to_owned(), tags);
        }
        registry
    }

    /// Build a registry from explicit definitions, validating each entry.
    ///
    /// Registration order is preserved for [`Self::list_all`].
    ///
    /// # Errors
    ///
    /// Returns an error when an identifier is empty or repeated, or when a
    /// definition has no tag pairs or contains an empty key or value.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, CategoryRegistryError>
    where
        I: IntoIterator<Item = (S, Vec<TagPair>)>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for (raw_id, tags) in entries {
            let id = raw_id.into();
            if id.is_empty() {
                return Err(CategoryRegistryError::EmptyIdentifier);
            }
            if tags.is_empty() {
                return Err(CategoryRegistryError::MissingTags { id });
            }
            if tags.iter().any(TagPair::is_blank) {
                return Err(CategoryRegistryError::EmptyTag { id });
            }
            if registry.index.contains_key(&id) {
                return Err(CategoryRegistryError::Duplicate { id });
            }
            registry.push(id, tags);
        }
        Ok(registry)
    }

    /// Load definitions from a JSON array of `{"id": .., "tags": [[k, v], ..]}`.
    ///
    /// # Examples
    /// ```
    /// use poi_harvester_core::CategoryRegistry;
    ///
    /// let registry = CategoryRegistry::from_json_str(
    ///     r#"[{"id": "ice-cream", "tags": [["amenity", "ice_cream"]]}]"#,
    /// )?;
    /// assert!(registry.contains("ice-cream"));
    /// # Ok::<(), poi_harvester_core::CategoryRegistryError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRegistryError::Parse`] for malformed JSON and the
    /// validation errors of [`Self::from_entries`] otherwise.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, CategoryRegistryError> {
        let definitions: Vec<CategoryDefinition> =
            serde_json::from_str(json).map_err(|err| CategoryRegistryError::Parse {
                message: err.to_string(),
            })?;
        Self::from_entries(definitions.into_iter().map(|definition| {
            let tags = definition
                .tags
                .into_iter()
                .map(|(key, value)| TagPair::new(key, value))
                .collect();
            (definition.id, tags)
        }))
    }

    fn push(&mut self, id: String, tags: Vec<TagPair>) {
        self.index.insert(id.clone(), self.categories.len());
        self.categories.push(Category { id, tags });
    }

    /// Resolve a category identifier to its tag pairs.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryRegistryError::UnknownCategory`] when `id` is not
    /// registered.
    pub fn resolve(&self, id: &str) -> Result<&[TagPair], CategoryRegistryError> {
        self.get(id)
            .map(Category::tags)
            .ok_or_else(|| CategoryRegistryError::UnknownCategory { id: id.to_owned() })
    }

    /// Look up a category by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index
            .get(id)
            .and_then(|&position| self.categories.get(position))
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every category in registration order.
    #[must_use]
    pub fn list_all(&self) -> &[Category] {
        &self.categories
    }

    /// Number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories grouped by [`ThemeGroup`] for discovery output.
    ///
    /// Groups follow [`ThemeGroup::ALL`]; identifiers are sorted within a
    /// group and empty groups are omitted.
    #[must_use]
    pub fn grouped(&self) -> Vec<(ThemeGroup, Vec<&Category>)> {
        ThemeGroup::ALL
            .iter()
            .filter_map(|&group| {
                let mut members: Vec<&Category> = self
                    .categories
                    .iter()
                    .filter(|category| category.group() == group)
                    .collect();
                if members.is_empty() {
                    return None;
                }
                members.sort_by(|lhs, rhs| lhs.id.cmp(&rhs.id));
                Some((group, members))
            })
            .collect()
    }

    /// Partition caller-supplied identifiers into registered and unknown ones.
    #[must_use]
    pub fn validate<S: AsRef<str>>(&self, ids: &[S]) -> CategorySelection {
        let mut selection = CategorySelection::default();
        for id in ids {
            let id = id.as_ref();
            if self.contains(id) {
                selection.valid.push(id.to_owned());
            } else {
                selection.invalid.push(id.to_owned());
            }
        }
        selection
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CategoryDefinition {
    id: String,
    tags: Vec<(String, String)>,
}
