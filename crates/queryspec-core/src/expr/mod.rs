mod normalize;
mod rewrite;


use crate::value::Value;
use std::{
    ops::{BitAnd, BitOr},
    sync::Arc,
};

// re-exports
pub use normalize::normalize;
pub use rewrite::{references, substitute, unbound_param};

///
/// Expression AST
///
/// Pure, inspectable representation of single-parameter expressions over
/// an entity. This layer contains no evaluation or entity semantics; all
/// interpretation occurs in later passes:
///
/// - parameter rewriting
/// - normalization
/// - compilation
///

///
/// Param
///
/// A parameter binding with reference identity. Two parameters are the
/// same binding only when one is a clone of the other; equality never
/// consults the display name. This mirrors how separately constructed
/// lambdas bind unrelated parameters even over the same entity type.
///

#[derive(Clone, Debug)]
pub struct Param {
    name: Arc<str>,
}

impl Param {
    /// Allocate a fresh binding. Every call yields a distinct identity,
    /// even for the same display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Arc::from(name.into()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference-identity check; the display name plays no part.
    #[must_use]
    pub fn same_binding(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }

    /// Access a field of the bound entity.
    #[must_use]
    pub fn field(&self, name: impl Into<String>) -> Expr {
        Expr::Field {
            base: Box::new(Expr::Param(self.clone())),
            name: name.into(),
        }
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.same_binding(other)
    }
}

impl Eq for Param {}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Contains,
    StartsWith,
    EndsWith,
}

impl CompareOp {
    /// Stable label used by the explain rendering.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "in",
            Self::Contains => "contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
        }
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    And(Vec<Self>),
    Compare {
        op: CompareOp,
        left: Box<Self>,
        right: Box<Self>,
    },
    Const(Value),
    Field {
        base: Box<Self>,
        name: String,
    },
    Not(Box<Self>),
    Or(Vec<Self>),
    Param(Param),
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    // ─────────────────────────────────────────────────────────────
    // Boolean
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[must_use]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    // ─────────────────────────────────────────────────────────────
    // Scalar comparisons
    // ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Gte, value)
    }

    /// Membership test against a fixed list.
    #[must_use]
    pub fn in_list(self, values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.compare(CompareOp::In, Value::List(values))
    }

    // ─────────────────────────────────────────────────────────────
    // Collection / text
    // ─────────────────────────────────────────────────────────────

    /// Collection contains value, or text contains substring.
    #[must_use]
    pub fn contains(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::Contains, value)
    }

    #[must_use]
    pub fn starts_with(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::StartsWith, value)
    }

    #[must_use]
    pub fn ends_with(self, value: impl Into<Value>) -> Self {
        self.compare(CompareOp::EndsWith, value)
    }

    /// Null test: the field is present and explicitly null.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.compare(CompareOp::Eq, Value::None)
    }

    /// Access a field of this expression's value.
    #[must_use]
    pub fn field(self, name: impl Into<String>) -> Self {
        Self::Field {
            base: Box::new(self),
            name: name.into(),
        }
    }

    fn compare(self, op: CompareOp, value: impl Into<Value>) -> Self {
        Self::Compare {
            op,
            left: Box::new(self),
            right: Box::new(Self::Const(value.into())),
        }
    }
}

impl BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::Or(vec![self.clone(), rhs.clone()])
    }
}
