//! Deterministic, read-only explanation of specifications; must not
//! execute or validate.

use crate::{
    apply::OrderDirection,
    expr::{Expr, normalize},
    spec::Specification,
    value::Value,
};
use std::fmt;

///
/// ExplainSpec
///
/// Stable projection of a specification for observability surfaces.
/// The ordering keys are reported in effective application order, so the
/// rendering matches what the applicator will do.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExplainSpec {
    pub filter: Option<String>,
    pub includes: Vec<String>,
    pub order: Vec<ExplainOrder>,
}

///
/// ExplainOrder
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExplainOrder {
    pub key: String,
    pub direction: OrderDirection,
}

impl ExplainSpec {
    #[must_use]
    pub fn from_spec<E>(spec: &Specification<E>) -> Self {
        let filter = spec
            .filter()
            .map(|predicate| render_expr(&normalize(predicate.body())));

        let includes = spec
            .includes()
            .iter()
            .map(|selector| render_expr(selector.body()))
            .collect();

        // Effective order: descending keys first when both lists are
        // populated, matching the applicator.
        let mut order = Vec::new();
        for selector in spec.order_by_desc() {
            order.push(ExplainOrder {
                key: render_expr(selector.body()),
                direction: OrderDirection::Desc,
            });
        }
        for selector in spec.order_by() {
            order.push(ExplainOrder {
                key: render_expr(selector.body()),
                direction: OrderDirection::Asc,
            });
        }

        Self {
            filter,
            includes,
            order,
        }
    }
}

impl fmt::Display for ExplainSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.filter {
            Some(filter) => write!(f, "filter: {filter}")?,
            None => write!(f, "filter: none")?,
        }

        write!(f, "; includes: [")?;
        for (i, include) in self.includes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{include}")?;
        }
        write!(f, "]; order: [")?;
        for (i, order) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", order.key, order.direction)?;
        }
        write!(f, "]")
    }
}

/// Stable textual rendering of an expression tree.
pub(crate) fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Const(value) => render_value(value),
        Expr::Param(param) => param.name().to_string(),
        Expr::Field { base, name } => format!("{}.{name}", render_expr(base)),
        Expr::Compare { op, left, right } => format!(
            "({} {} {})",
            render_expr(left),
            op.label(),
            render_expr(right)
        ),
        Expr::And(children) => render_chain(children, " and "),
        Expr::Or(children) => render_chain(children, " or "),
        Expr::Not(inner) => format!("not {}", render_expr(inner)),
    }
}

fn render_chain(children: &[Expr], joiner: &str) -> String {
    let rendered: Vec<String> = children.iter().map(render_expr).collect();
    format!("({})", rendered.join(joiner))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Bool(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Int(v) => v.to_string(),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::None => "null".to_string(),
        Value::Text(v) => format!("\"{v}\""),
        Value::Uint(v) => v.to_string(),
        Value::Unit => "unit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        predicate::{Predicate, Selector},
        test_fixtures::TestRow,
    };

    #[test]
    fn renders_filter_includes_and_order() {
        let spec = Specification::builder()
            .filter(Predicate::<TestRow>::new(|p| {
                p.field("age").gte(18) & p.field("name").starts_with("a")
            }))
            .include(Selector::field("posts"))
            .order_by(Selector::field("name"))
            .order_by_desc(Selector::field("likes"))
            .build();

        let explain = ExplainSpec::from_spec(&spec);
        assert_eq!(
            explain.to_string(),
            "filter: ((x.age >= 18) and (x.name starts_with \"a\")); \
             includes: [x.posts]; order: [x.likes desc, x.name asc]"
        );
    }

    #[test]
    fn empty_specification_renders_as_identity() {
        let spec = Specification::<TestRow>::new();
        let explain = ExplainSpec::from_spec(&spec);
        assert_eq!(explain.to_string(), "filter: none; includes: []; order: []");
    }

    #[test]
    fn filter_rendering_is_normalized() {
        let spec = Specification::filtered(Predicate::<TestRow>::new(|p| {
            Expr::And(vec![
                Expr::And(vec![p.field("a").eq(1)]),
                Expr::Const(Value::Bool(true)),
            ])
        }));

        let explain = ExplainSpec::from_spec(&spec);
        assert_eq!(explain.filter.as_deref(), Some("(x.a == 1)"));
    }
}
