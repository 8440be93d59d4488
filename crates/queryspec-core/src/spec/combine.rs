use crate::{
    expr::{Expr, substitute},
    predicate::Predicate,
    spec::Specification,
};

///
/// CombineOp
///
/// Explicit combination kind; there is exactly one combine routine and
/// the operator is data, not a subclass.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CombineOp {
    And,
    Or,
}

/// Combine two specifications into a new one whose filter is the boolean
/// combination of the inputs' filters.
///
/// - neither side filters: the result does not filter;
/// - one side filters: that predicate is carried over unchanged, with no
///   spurious constant wrapped around it;
/// - both sides filter: the right body is rewritten onto the left
///   parameter, then joined under `op`.
///
/// Includes and orderings are **not** merged; the composite starts with
/// none and the caller re-adds what it wants via `to_builder`.
///
/// Total over well-formed inputs; combination never fails.
#[must_use]
pub fn combine<E>(
    left: &Specification<E>,
    right: &Specification<E>,
    op: CombineOp,
) -> Specification<E> {
    let filter = match (left.filter(), right.filter()) {
        (None, None) => None,
        (Some(single), None) | (None, Some(single)) => Some(single.clone()),
        (Some(left), Some(right)) => Some(combine_predicates(left, right, op)),
    };

    match filter {
        Some(predicate) => Specification::filtered(predicate),
        None => Specification::new(),
    }
}

/// Join two predicates over the left predicate's parameter.
///
/// The right body is rewritten first so both operands reference one
/// binding; joining unrewritten bodies would leave the right operand's
/// parameter dangling outside any lambda.
pub(crate) fn combine_predicates<E>(
    left: &Predicate<E>,
    right: &Predicate<E>,
    op: CombineOp,
) -> Predicate<E> {
    let rewritten = substitute(right.body(), right.param(), left.param()).into_owned();

    let body = match op {
        CombineOp::And => Expr::And(vec![left.body().clone(), rewritten]),
        CombineOp::Or => Expr::Or(vec![left.body().clone(), rewritten]),
    };

    Predicate::from_raw(left.param().clone(), body)
}
