use crate::{expr::Expr, value::Value};

/// Semantics-preserving simplification: flatten nested `And`/`Or`, fold
/// boolean constants, and drop double negation. Child order is preserved;
/// this pass never reorders or re-parameterizes a tree.
#[must_use]
pub fn normalize(expr: &Expr) -> Expr {
    match expr {
        Expr::And(children) => normalize_and(children),
        Expr::Or(children) => normalize_or(children),
        Expr::Not(inner) => normalize_not(inner),
        Expr::Const(_) | Expr::Param(_) | Expr::Field { .. } | Expr::Compare { .. } => expr.clone(),
    }
}

fn normalize_not(inner: &Expr) -> Expr {
    let normalized = normalize(inner);

    match normalized {
        Expr::Not(double) => *double,
        Expr::Const(Value::Bool(b)) => Expr::Const(Value::Bool(!b)),
        other => Expr::Not(Box::new(other)),
    }
}

fn normalize_and(children: &[Expr]) -> Expr {
    let mut out = Vec::new();

    for child in children {
        let normalized = normalize(child);

        match normalized {
            Expr::Const(Value::Bool(true)) => {}
            Expr::Const(Value::Bool(false)) => return Expr::Const(Value::Bool(false)),
            Expr::And(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    match out.len() {
        0 => Expr::Const(Value::Bool(true)),
        1 => out.remove(0),
        _ => Expr::And(out),
    }
}

fn normalize_or(children: &[Expr]) -> Expr {
    let mut out = Vec::new();

    for child in children {
        let normalized = normalize(child);

        match normalized {
            Expr::Const(Value::Bool(false)) => {}
            Expr::Const(Value::Bool(true)) => return Expr::Const(Value::Bool(true)),
            Expr::Or(grandchildren) => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    match out.len() {
        0 => Expr::Const(Value::Bool(false)),
        1 => out.remove(0),
        _ => Expr::Or(out),
    }
}
