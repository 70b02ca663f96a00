//! Behavioural tests for the harvest pipeline against canned responses.

use poi_harvester_core::{
    BoundingBox, Centroid, CategoryRegistry, FetchError, FieldSelection, Harvest, HarvestPlan,
    ObjectKind, OverpassQuery, PipelineError, QueryBuilder, RawElement, Tags, harvest,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

type Outcome = Option<Result<Harvest, PipelineError>>;

#[fixture]
fn elements() -> RefCell<Vec<RawElement>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn outcome() -> RefCell<Outcome> {
    RefCell::new(None)
}

fn named(name: &str) -> Option<Tags> {
    Some(Tags::from([
        ("name".to_owned(), name.to_owned()),
        ("amenity".to_owned(), "pharmacy".to_owned()),
    ]))
}

fn run(elements: &RefCell<Vec<RawElement>>, outcome: &RefCell<Outcome>, ids: &[&str], kinds: &[ObjectKind]) {
    let registry = CategoryRegistry::builtin();
    let canned = elements.borrow().clone();
    let source = move |_: &OverpassQuery| -> Result<Vec<RawElement>, FetchError> { Ok(canned.clone()) };
    let plan = HarvestPlan {
        bbox: BoundingBox::new(52.5, 13.3, 52.6, 13.4).expect("valid box"),
        categories: ids.iter().map(|id| (*id).to_owned()).collect(),
        object_kinds: kinds.to_vec(),
        fields: FieldSelection::default(),
    };
    *outcome.borrow_mut() = Some(harvest(&QueryBuilder::new(&registry), &source, &plan));
}

#[given("an Overpass response with a node, a way centroid and an unpositioned relation")]
fn mixed_response(#[from(elements)] elements: &RefCell<Vec<RawElement>>) {
    *elements.borrow_mut() = vec![
        RawElement {
            id: Some(1),
            kind: Some("node".into()),
            lat: Some(52.51),
            lon: Some(13.31),
            tags: named("Apotheke am Platz"),
            ..RawElement::default()
        },
        RawElement {
            id: Some(2),
            kind: Some("way".into()),
            center: Some(Centroid {
                lat: Some(52.55),
                lon: Some(13.35),
            }),
            tags: named("Hof-Apotheke"),
            ..RawElement::default()
        },
        RawElement {
            id: Some(3),
            kind: Some("relation".into()),
            tags: named("Nowhere"),
            ..RawElement::default()
        },
    ];
}

#[given("an empty Overpass response")]
fn empty_response(#[from(elements)] elements: &RefCell<Vec<RawElement>>) {
    elements.borrow_mut().clear();
}

#[when("I harvest pharmacy nodes and ways in the Berlin box")]
fn harvest_pharmacies(
    #[from(elements)] elements: &RefCell<Vec<RawElement>>,
    #[from(outcome)] outcome: &RefCell<Outcome>,
) {
    run(elements, outcome, &["pharmacy"], &[ObjectKind::Node, ObjectKind::Way]);
}

#[when("I harvest unicorn nodes in the Berlin box")]
fn harvest_unicorns(
    #[from(elements)] elements: &RefCell<Vec<RawElement>>,
    #[from(outcome)] outcome: &RefCell<Outcome>,
) {
    run(elements, outcome, &["unicorn"], &[ObjectKind::Node]);
}

#[then("two records are produced")]
fn two_records(#[from(outcome)] outcome: &RefCell<Outcome>) {
    let borrow = outcome.borrow();
    let harvested = borrow
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .expect("harvest should succeed");
    assert_eq!(harvested.records.len(), 2);
    let names: Vec<&str> = harvested.records.iter().map(|r| r.tag("name")).collect();
    assert_eq!(names, ["Apotheke am Platz", "Hof-Apotheke"]);
}

#[then("the query asks for pharmacy nodes inside the box")]
fn query_text(#[from(outcome)] outcome: &RefCell<Outcome>) {
    let borrow = outcome.borrow();
    let harvested = borrow
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .expect("harvest should succeed");
    assert!(
        harvested
            .query
            .as_str()
            .contains(r#"node["amenity"="pharmacy"](52.5,13.3,52.6,13.4);"#)
    );
    assert_eq!(harvested.query.clause_count(), 2);
}

#[then("the harvest fails because no category is valid")]
fn no_valid_categories(#[from(outcome)] outcome: &RefCell<Outcome>) {
    assert!(matches!(
        *outcome.borrow(),
        Some(Err(PipelineError::NoValidCategories))
    ));
}

#[then("the harvest fails because no data was retrieved")]
fn no_data(#[from(outcome)] outcome: &RefCell<Outcome>) {
    assert!(matches!(*outcome.borrow(), Some(Err(PipelineError::NoData))));
}

#[scenario(path = "tests/features/harvest.feature", index = 0)]
fn pharmacies_are_normalized(elements: RefCell<Vec<RawElement>>, outcome: RefCell<Outcome>) {
    let _ = (elements, outcome);
}

#[scenario(path = "tests/features/harvest.feature", index = 1)]
fn unknown_categories_fail(elements: RefCell<Vec<RawElement>>, outcome: RefCell<Outcome>) {
    let _ = (elements, outcome);
}

#[scenario(path = "tests/features/harvest.feature", index = 2)]
fn empty_response_fails(elements: RefCell<Vec<RawElement>>, outcome: RefCell<Outcome>) {
    let _ = (elements, outcome);
}
