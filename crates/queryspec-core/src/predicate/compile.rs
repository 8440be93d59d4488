use crate::{
    expr::{CompareOp, Expr, Param},
    value::{Value, strict_eq, strict_order_cmp},
};
use std::cmp::Ordering;

///
/// FieldPresence
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

///
/// Row
///
/// Field access contract entities implement so compiled predicates and
/// selectors can read them. Absent fields make comparisons false and
/// sort after present values; they are never an error.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// CompiledPredicate
///
/// Executable form of a predicate: a closure tree derived from the AST.
///

pub struct CompiledPredicate<E> {
    test: Box<dyn Fn(&E) -> bool>,
}

impl<E> CompiledPredicate<E> {
    pub(crate) fn new(test: Box<dyn Fn(&E) -> bool>) -> Self {
        Self { test }
    }

    #[must_use]
    pub fn eval(&self, row: &E) -> bool {
        (self.test)(row)
    }
}

///
/// CompiledSelector
///

pub struct CompiledSelector<E> {
    select: Box<dyn Fn(&E) -> Option<Value>>,
}

impl<E> CompiledSelector<E> {
    pub(crate) fn new(select: Box<dyn Fn(&E) -> Option<Value>>) -> Self {
        Self { select }
    }

    /// Key material for one row; `None` when the selector cannot be
    /// resolved against it.
    #[must_use]
    pub fn key(&self, row: &E) -> Option<Value> {
        (self.select)(row)
    }
}

// ─────────────────────────────────────────────────────────────
// Compilation
// ─────────────────────────────────────────────────────────────

pub(crate) fn compile_test<E: Row + 'static>(body: &Expr, param: &Param) -> Box<dyn Fn(&E) -> bool> {
    match body {
        Expr::Const(Value::Bool(b)) => {
            let b = *b;
            Box::new(move |_| b)
        }
        Expr::And(children) => {
            let tests: Vec<_> = children
                .iter()
                .map(|child| compile_test::<E>(child, param))
                .collect();
            Box::new(move |row| tests.iter().all(|test| test(row)))
        }
        Expr::Or(children) => {
            let tests: Vec<_> = children
                .iter()
                .map(|child| compile_test::<E>(child, param))
                .collect();
            Box::new(move |row| tests.iter().any(|test| test(row)))
        }
        Expr::Not(inner) => {
            let test = compile_test::<E>(inner, param);
            Box::new(move |row| !test(row))
        }
        Expr::Compare { op, left, right } => {
            let op = *op;
            let left = compile_value::<E>(left, param);
            let right = compile_value::<E>(right, param);
            Box::new(move |row| {
                let (Some(left), Some(right)) = (left(row), right(row)) else {
                    return false;
                };
                eval_compare(op, &left, &right)
            })
        }
        Expr::Const(_) | Expr::Param(_) | Expr::Field { .. } => {
            let value = compile_value::<E>(body, param);
            Box::new(move |row| matches!(value(row), Some(Value::Bool(true))))
        }
    }
}

pub(crate) fn compile_value<E: Row + 'static>(body: &Expr, param: &Param) -> Box<dyn Fn(&E) -> Option<Value>> {
    match body {
        Expr::Const(value) => {
            let value = value.clone();
            Box::new(move |_| Some(value.clone()))
        }
        Expr::Field { base, name } => match base.as_ref() {
            // Direct read off the row. A foreign binding cannot resolve
            // against this row and reads as missing.
            Expr::Param(p) if p.same_binding(param) => {
                let name = name.clone();
                Box::new(move |row| match row.field(&name) {
                    FieldPresence::Present(value) => Some(value),
                    FieldPresence::Missing => None,
                })
            }
            _ => Box::new(|_| None),
        },
        // The row itself has no value form, and boolean subtrees yield
        // their truth value.
        Expr::Param(_) => Box::new(|_| None),
        Expr::Compare { .. } | Expr::And(_) | Expr::Or(_) | Expr::Not(_) => {
            let test = compile_test::<E>(body, param);
            Box::new(move |row| Some(Value::Bool(test(row))))
        }
    }
}

fn eval_compare(op: CompareOp, left: &Value, right: &Value) -> bool {
    match op {
        CompareOp::Eq => strict_eq(left, right).unwrap_or(false),
        CompareOp::Ne => strict_eq(left, right).is_some_and(|v| !v),
        CompareOp::Lt => strict_order_cmp(left, right).is_some_and(Ordering::is_lt),
        CompareOp::Lte => strict_order_cmp(left, right).is_some_and(Ordering::is_le),
        CompareOp::Gt => strict_order_cmp(left, right).is_some_and(Ordering::is_gt),
        CompareOp::Gte => strict_order_cmp(left, right).is_some_and(Ordering::is_ge),
        CompareOp::In => in_list(left, right),
        CompareOp::Contains => contains(left, right),
        CompareOp::StartsWith => {
            text_pair(left, right).is_some_and(|(l, r)| l.starts_with(r))
        }
        CompareOp::EndsWith => text_pair(left, right).is_some_and(|(l, r)| l.ends_with(r)),
    }
}

fn in_list(actual: &Value, list: &Value) -> bool {
    let Value::List(items) = list else {
        return false;
    };

    items
        .iter()
        .any(|item| strict_eq(actual, item).unwrap_or(false))
}

fn contains(actual: &Value, needle: &Value) -> bool {
    if let Some((l, r)) = text_pair(actual, needle) {
        return l.contains(r);
    }

    let Value::List(items) = actual else {
        return false;
    };

    items
        .iter()
        .any(|item| strict_eq(item, needle).unwrap_or(false))
}

fn text_pair<'a>(left: &'a Value, right: &'a Value) -> Option<(&'a str, &'a str)> {
    match (left, right) {
        (Value::Text(l), Value::Text(r)) => Some((l.as_str(), r.as_str())),
        _ => None,
    }
}
