//! Invariants of the built-in category table.

use std::collections::HashSet;

use poi_harvester_core::{CategoryRegistry, ThemeGroup};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> CategoryRegistry {
    CategoryRegistry::builtin()
}

#[rstest]
fn builtin_table_has_unique_identifiers(registry: CategoryRegistry) {
    let ids: HashSet<&str> = registry.list_all().iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), registry.len());
    assert_eq!(registry.len(), 79);
}

#[rstest]
fn every_category_has_non_empty_pairs(registry: CategoryRegistry) {
    for category in registry.list_all() {
        assert!(!category.tags().is_empty(), "{} has no tags", category.id());
        for pair in category.tags() {
            assert!(!pair.key.is_empty() && !pair.value.is_empty(), "{}", category.id());
        }
    }
}

#[rstest]
#[case("pharmacy", "amenity", "pharmacy")]
#[case("drinking-water", "amenity", "drinking_water")]
#[case("bus-stop", "highway", "bus_stop")]
#[case("hotel", "tourism", "hotel")]
fn resolves_known_identifiers(
    registry: CategoryRegistry,
    #[case] id: &str,
    #[case] key: &str,
    #[case] value: &str,
) {
    let pairs = registry.resolve(id).expect("category is registered");
    let first = pairs.first().expect("at least one pair");
    assert_eq!((first.key.as_str(), first.value.as_str()), (key, value));
}

#[rstest]
fn identifiers_are_case_sensitive(registry: CategoryRegistry) {
    assert!(registry.resolve("Pharmacy").is_err());
}

#[rstest]
fn groups_follow_first_tag_key(registry: CategoryRegistry) {
    let grouped = registry.grouped();
    let order: Vec<ThemeGroup> = grouped.iter().map(|(group, _)| *group).collect();
    assert_eq!(order, ThemeGroup::ALL);
    for (group, categories) in grouped {
        for category in categories {
            assert_eq!(category.group(), group, "{}", category.id());
        }
    }
}
