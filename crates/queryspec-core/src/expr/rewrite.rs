use crate::expr::{Expr, Param};
use std::borrow::Cow;

/// Replace every reference to `from` with `to` throughout an expression
/// tree.
///
/// The walk is pre-order and purely structural: a node is rewritten only
/// when it is a reference-identity match for `from`, and an interior node
/// is reallocated only when one of its children actually changed.
/// Untouched subtrees come back as `Cow::Borrowed`, so a body with no
/// occurrence of `from` is returned whole.
///
/// Only the named binding is unified; any other parameter inside the tree
/// is a different binding and is left alone.
#[must_use]
pub fn substitute<'a>(expr: &'a Expr, from: &Param, to: &Param) -> Cow<'a, Expr> {
    match expr {
        Expr::Param(param) => {
            if param.same_binding(from) {
                Cow::Owned(Expr::Param(to.clone()))
            } else {
                Cow::Borrowed(expr)
            }
        }
        Expr::Const(_) => Cow::Borrowed(expr),
        Expr::Field { base, name } => match substitute(base, from, to) {
            Cow::Borrowed(_) => Cow::Borrowed(expr),
            Cow::Owned(rebased) => Cow::Owned(Expr::Field {
                base: Box::new(rebased),
                name: name.clone(),
            }),
        },
        Expr::Compare { op, left, right } => {
            let new_left = substitute(left, from, to);
            let new_right = substitute(right, from, to);
            if matches!(new_left, Cow::Borrowed(_)) && matches!(new_right, Cow::Borrowed(_)) {
                Cow::Borrowed(expr)
            } else {
                Cow::Owned(Expr::Compare {
                    op: *op,
                    left: Box::new(new_left.into_owned()),
                    right: Box::new(new_right.into_owned()),
                })
            }
        }
        Expr::And(children) => match substitute_children(children, from, to) {
            Some(rewritten) => Cow::Owned(Expr::And(rewritten)),
            None => Cow::Borrowed(expr),
        },
        Expr::Or(children) => match substitute_children(children, from, to) {
            Some(rewritten) => Cow::Owned(Expr::Or(rewritten)),
            None => Cow::Borrowed(expr),
        },
        Expr::Not(inner) => match substitute(inner, from, to) {
            Cow::Borrowed(_) => Cow::Borrowed(expr),
            Cow::Owned(rewritten) => Cow::Owned(Expr::Not(Box::new(rewritten))),
        },
    }
}

// Returns `None` when no child changed, so the caller can keep the
// original allocation.
fn substitute_children(children: &[Expr], from: &Param, to: &Param) -> Option<Vec<Expr>> {
    let rewritten: Vec<Cow<'_, Expr>> = children
        .iter()
        .map(|child| substitute(child, from, to))
        .collect();

    if rewritten.iter().all(|child| matches!(child, Cow::Borrowed(_))) {
        return None;
    }

    Some(rewritten.into_iter().map(Cow::into_owned).collect())
}

/// True when the tree contains at least one reference to `param`.
#[must_use]
pub fn references(expr: &Expr, param: &Param) -> bool {
    match expr {
        Expr::Param(p) => p.same_binding(param),
        Expr::Const(_) => false,
        Expr::Field { base, .. } => references(base, param),
        Expr::Compare { left, right, .. } => {
            references(left, param) || references(right, param)
        }
        Expr::And(children) | Expr::Or(children) => {
            children.iter().any(|child| references(child, param))
        }
        Expr::Not(inner) => references(inner, param),
    }
}

/// First parameter reference in the tree that is not `bound`, if any.
///
/// Used by validating constructors: a body referencing a parameter other
/// than its own binding was assembled incorrectly upstream.
#[must_use]
pub fn unbound_param<'a>(expr: &'a Expr, bound: &Param) -> Option<&'a Param> {
    match expr {
        Expr::Param(param) => (!param.same_binding(bound)).then_some(param),
        Expr::Const(_) => None,
        Expr::Field { base, .. } => unbound_param(base, bound),
        Expr::Compare { left, right, .. } => {
            unbound_param(left, bound).or_else(|| unbound_param(right, bound))
        }
        Expr::And(children) | Expr::Or(children) => children
            .iter()
            .find_map(|child| unbound_param(child, bound)),
        Expr::Not(inner) => unbound_param(inner, bound),
    }
}
