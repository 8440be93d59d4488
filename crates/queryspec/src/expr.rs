use crate::core::{
    apply::OrderDirection,
    expr::{Expr, Param},
    predicate::{Predicate, Selector},
    spec::SpecificationBuilder,
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// FilterExpr
///
/// Serialized, planner-agnostic predicate language.
///
/// This enum is intentionally isomorphic to the subset of the core
/// expression model that is:
/// - deterministic
/// - field-rooted
/// - safe across API boundaries
///
/// Parameter bindings never cross the wire: lowering allocates one fresh
/// binding and roots every field access in it.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum FilterExpr {
    /// Always true.
    True,
    /// Always false.
    False,

    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),

    // ─────────────────────────────────────────────────────────────
    // Scalar comparisons
    // ─────────────────────────────────────────────────────────────
    Eq {
        field: String,
        value: Value,
    },
    Ne {
        field: String,
        value: Value,
    },
    Lt {
        field: String,
        value: Value,
    },
    Lte {
        field: String,
        value: Value,
    },
    Gt {
        field: String,
        value: Value,
    },
    Gte {
        field: String,
        value: Value,
    },

    In {
        field: String,
        values: Vec<Value>,
    },

    // ─────────────────────────────────────────────────────────────
    // Collection / text predicates
    // ─────────────────────────────────────────────────────────────
    /// Collection contains value, or text contains substring.
    Contains {
        field: String,
        value: Value,
    },

    StartsWith {
        field: String,
        value: Value,
    },

    EndsWith {
        field: String,
        value: Value,
    },

    // ─────────────────────────────────────────────────────────────
    // Presence / nullability
    // ─────────────────────────────────────────────────────────────
    /// Field is present and explicitly null.
    IsNull {
        field: String,
    },

    /// Field is present and not null.
    IsNotNull {
        field: String,
    },
}

impl FilterExpr {
    // ─────────────────────────────────────────────────────────────
    // Lowering
    // ─────────────────────────────────────────────────────────────

    /// Lower into a typed predicate over one fresh parameter binding.
    /// Total: every serialized shape has a core counterpart.
    #[must_use]
    pub fn lower<E>(&self) -> Predicate<E> {
        Predicate::new(|p| self.lower_body(p))
    }

    fn lower_body(&self, p: &Param) -> Expr {
        match self {
            Self::True => Expr::Const(Value::Bool(true)),
            Self::False => Expr::Const(Value::Bool(false)),

            Self::And(xs) => Expr::And(xs.iter().map(|x| x.lower_body(p)).collect()),
            Self::Or(xs) => Expr::Or(xs.iter().map(|x| x.lower_body(p)).collect()),
            Self::Not(x) => x.lower_body(p).not(),

            Self::Eq { field, value } => p.field(field.as_str()).eq(value.clone()),
            Self::Ne { field, value } => p.field(field.as_str()).ne(value.clone()),
            Self::Lt { field, value } => p.field(field.as_str()).lt(value.clone()),
            Self::Lte { field, value } => p.field(field.as_str()).lte(value.clone()),
            Self::Gt { field, value } => p.field(field.as_str()).gt(value.clone()),
            Self::Gte { field, value } => p.field(field.as_str()).gte(value.clone()),

            Self::In { field, values } => p.field(field.as_str()).in_list(values.iter().cloned()),

            Self::Contains { field, value } => p.field(field.as_str()).contains(value.clone()),
            Self::StartsWith { field, value } => {
                p.field(field.as_str()).starts_with(value.clone())
            }
            Self::EndsWith { field, value } => p.field(field.as_str()).ends_with(value.clone()),

            Self::IsNull { field } => p.field(field.as_str()).is_null(),
            Self::IsNotNull { field } => p.field(field.as_str()).ne(Value::None),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Boolean
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub const fn and(exprs: Vec<Self>) -> Self {
        Self::And(exprs)
    }

    #[must_use]
    pub const fn or(exprs: Vec<Self>) -> Self {
        Self::Or(exprs)
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: Self) -> Self {
        Self::Not(Box::new(expr))
    }

    // ─────────────────────────────────────────────────────────────
    // Scalar comparisons
    // ─────────────────────────────────────────────────────────────

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Ne {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lt {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lte {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gt {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gte {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn in_list(
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Collection / text predicates
    // ─────────────────────────────────────────────────────────────

    pub fn contains(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn starts_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::StartsWith {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn ends_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::EndsWith {
            field: field.into(),
            value: value.into(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Presence / nullability
    // ─────────────────────────────────────────────────────────────

    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull {
            field: field.into(),
        }
    }

    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::IsNotNull {
            field: field.into(),
        }
    }
}

///
/// SortExpr
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortExpr {
    pub fields: Vec<(String, OrderDirection)>,
}

impl SortExpr {
    #[must_use]
    pub const fn new(fields: Vec<(String, OrderDirection)>) -> Self {
        Self { fields }
    }

    /// Lower onto a specification builder, appending each field as a
    /// sort key in its declared direction.
    #[must_use]
    pub fn lower<E>(&self, builder: SpecificationBuilder<E>) -> SpecificationBuilder<E> {
        let mut builder = builder;

        for (field, direction) in &self.fields {
            let selector = Selector::field(field.clone());
            builder = match direction {
                OrderDirection::Asc => builder.order_by(selector),
                OrderDirection::Desc => builder.order_by_desc(selector),
            };
        }

        builder
    }
}
