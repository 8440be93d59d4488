use super::*;
use crate::{
    expr::{Expr, references, substitute},
    predicate::{Predicate, Selector},
    test_fixtures::TestRow,
};

fn adults() -> Predicate<TestRow> {
    Predicate::new(|p| p.field("age").gte(18))
}

fn named_ada() -> Predicate<TestRow> {
    Predicate::new(|p| p.field("name").eq("ada"))
}

#[test]
fn builder_assembles_all_parts() {
    let spec = Specification::builder()
        .filter(adults())
        .include(Selector::field("posts"))
        .order_by(Selector::field("name"))
        .order_by_desc(Selector::field("likes"))
        .build();

    assert!(spec.filter().is_some());
    assert_eq!(spec.includes().len(), 1);
    assert_eq!(spec.order_by().len(), 1);
    assert_eq!(spec.order_by_desc().len(), 1);
    assert!(!spec.is_empty());
}

#[test]
fn empty_specification_is_identity() {
    let spec = Specification::<TestRow>::new();
    assert!(spec.is_empty());
    assert!(spec.filter().is_none());
}

#[test]
fn repeated_filter_calls_narrow_with_a_conjunction() {
    let spec = Specification::builder()
        .filter(adults())
        .filter(named_ada())
        .build();

    let filter = spec.filter().expect("expected combined filter");
    let Expr::And(children) = filter.body() else {
        panic!("expected conjunction body");
    };
    assert_eq!(children.len(), 2);
    // Both operands must reference the surviving binding.
    assert!(references(&children[0], filter.param()));
    assert!(references(&children[1], filter.param()));
}

#[test]
fn combine_of_two_empty_filters_stays_empty() {
    let left = Specification::<TestRow>::new();
    let right = Specification::<TestRow>::new();

    let combined = combine(&left, &right, CombineOp::And);
    assert!(combined.filter().is_none());
}

#[test]
fn combine_with_one_side_is_a_pass_through() {
    let filtered = Specification::filtered(adults());
    let empty = Specification::<TestRow>::new();

    let left_only = combine(&filtered, &empty, CombineOp::And);
    let right_only = combine(&empty, &filtered, CombineOp::Or);

    // No constant wrapper: the predicate comes through structurally intact.
    assert_eq!(left_only.filter(), filtered.filter());
    assert_eq!(right_only.filter(), filtered.filter());
}

#[test]
fn combine_unifies_parameter_bindings() {
    let left = Specification::filtered(adults());
    let right = Specification::filtered(named_ada());

    let combined = combine(&left, &right, CombineOp::And);
    let filter = combined.filter().expect("expected filter");

    let left_param = left.filter().unwrap().param();
    let right_param = right.filter().unwrap().param();

    assert!(filter.param().same_binding(left_param));
    assert!(!references(filter.body(), right_param));

    let expected_right = substitute(
        right.filter().unwrap().body(),
        right_param,
        left_param,
    )
    .into_owned();
    assert_eq!(
        filter.body(),
        &Expr::And(vec![left.filter().unwrap().body().clone(), expected_right])
    );
}

#[test]
fn combine_drops_includes_and_orderings() {
    let left = Specification::builder()
        .filter(adults())
        .include(Selector::field("posts"))
        .order_by(Selector::field("name"))
        .build();
    let right = Specification::builder()
        .filter(named_ada())
        .order_by_desc(Selector::field("likes"))
        .build();

    let combined = combine(&left, &right, CombineOp::Or);
    assert!(combined.includes().is_empty());
    assert!(combined.order_by().is_empty());
    assert!(combined.order_by_desc().is_empty());
}

#[test]
fn combine_leaves_inputs_untouched() {
    let left = Specification::filtered(adults());
    let right = Specification::filtered(named_ada());
    let left_before = left.clone();
    let right_before = right.clone();

    let _ = left.and(&right);
    let _ = left.or(&right);

    assert_eq!(left, left_before);
    assert_eq!(right, right_before);
}

#[test]
fn to_builder_copies_without_aliasing() {
    let base = Specification::builder()
        .filter(adults())
        .include(Selector::field("posts"))
        .build();

    let extended = base
        .to_builder()
        .order_by(Selector::field("name"))
        .build();

    assert_eq!(base.order_by().len(), 0);
    assert_eq!(extended.order_by().len(), 1);
    assert_eq!(extended.includes().len(), 1);
}
