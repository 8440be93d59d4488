use super::*;
use crate::{
    predicate::{FieldPresence, Predicate, Row, Selector},
    spec::Specification,
    test_fixtures::TestRow,
    value::Value,
};

fn post(name: &str, likes: i64) -> TestRow {
    TestRow::of([("name", Value::from(name)), ("likes", Value::Int(likes))])
}

fn names(rows: &[TestRow]) -> Vec<String> {
    rows.iter()
        .map(|row| match row.field("name") {
            FieldPresence::Present(Value::Text(name)) => name,
            _ => panic!("expected name field"),
        })
        .collect()
}

#[test]
fn empty_specification_passes_the_sequence_through() {
    let rows = vec![post("c", 1), post("a", 2), post("b", 3)];
    let source = MemorySource::new(rows.clone());

    let collected = apply(&Specification::new(), source).collect();
    assert_eq!(collected, rows);
}

#[test]
fn filter_preserves_relative_order_of_matches() {
    let rows = vec![post("c", 5), post("a", 1), post("b", 4), post("d", 2)];
    let spec = Specification::filtered(Predicate::new(|p| p.field("likes").gte(3)));

    let collected = apply(&spec, MemorySource::new(rows)).collect();
    assert_eq!(names(&collected), ["c", "b"]);
}

#[test]
fn descending_primary_with_ascending_tie_break() {
    let rows = vec![post("a", 3), post("b", 1), post("c", 3)];
    let spec = Specification::builder()
        .order_by_desc(Selector::field("likes"))
        .order_by(Selector::field("name"))
        .build();

    let collected = apply(&spec, MemorySource::new(rows)).collect();
    assert_eq!(names(&collected), ["a", "c", "b"]);
}

#[test]
fn single_ascending_list_sorts_with_its_own_tie_breaks() {
    let rows = vec![post("b", 2), post("a", 2), post("c", 1)];
    let spec = Specification::builder()
        .order_by(Selector::field("likes"))
        .order_by(Selector::field("name"))
        .build();

    let collected = apply(&spec, MemorySource::new(rows)).collect();
    assert_eq!(names(&collected), ["c", "a", "b"]);
}

#[test]
fn single_descending_list_sorts_descending() {
    let rows = vec![post("a", 1), post("b", 3), post("c", 2)];
    let spec = Specification::builder()
        .order_by_desc(Selector::field("likes"))
        .build();

    let collected = apply(&spec, MemorySource::new(rows)).collect();
    assert_eq!(names(&collected), ["b", "c", "a"]);
}

#[test]
fn missing_sort_keys_order_after_present_values() {
    let rows = vec![
        TestRow::of([("name", Value::from("a"))]),
        post("b", 2),
        post("c", 1),
    ];
    let spec = Specification::builder()
        .order_by(Selector::field("likes"))
        .build();

    let collected = apply(&spec, MemorySource::new(rows)).collect();
    assert_eq!(names(&collected), ["c", "b", "a"]);

    let rows = vec![
        TestRow::of([("name", Value::from("a"))]),
        post("b", 2),
        post("c", 1),
    ];
    let spec = Specification::builder()
        .order_by_desc(Selector::field("likes"))
        .build();

    let collected = apply(&spec, MemorySource::new(rows)).collect();
    assert_eq!(names(&collected), ["b", "c", "a"]);
}

#[test]
fn includes_are_recorded_in_list_order_without_data_effect() {
    let rows = vec![post("a", 1)];
    let spec = Specification::builder()
        .include(Selector::field("comments"))
        .include(Selector::field("author"))
        .build();

    let source = apply(&spec, MemorySource::new(rows.clone()));
    assert_eq!(source.included(), ["x.comments", "x.author"]);
    assert_eq!(source.collect(), rows);
}

#[test]
fn application_order_is_filter_then_include_then_order() {
    let rows = vec![post("b", 2), post("a", 5), post("c", 4)];
    let spec = Specification::builder()
        .filter(Predicate::new(|p| p.field("likes").gte(3)))
        .include(Selector::field("author"))
        .order_by(Selector::field("likes"))
        .build();

    let source = apply(&spec, MemorySource::new(rows));
    assert_eq!(source.included(), ["x.author"]);
    assert_eq!(names(&source.collect()), ["c", "a"]);
}

#[test]
fn applying_an_empty_spec_does_not_disturb_prior_shaping() {
    let rows = vec![post("b", 2), post("a", 5), post("c", 4)];
    let shaped = MemorySource::new(rows)
        .filter(Predicate::new(|p| p.field("likes").gte(3)))
        .order_by(Selector::field("name"));

    let reapplied = apply(&Specification::new(), shaped);
    assert_eq!(names(&reapplied.collect()), ["a", "c"]);
}

#[test]
fn then_by_without_a_primary_starts_an_ordering() {
    let rows = vec![post("b", 1), post("a", 2)];
    let source = MemorySource::new(rows).then_by(Selector::field("name"));

    assert_eq!(names(&source.collect()), ["a", "b"]);
}
