mod compare;
mod float;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// re-exports
pub use compare::{canonical_cmp, strict_eq, strict_order_cmp};
pub use float::Float64;

///
/// Value
///
/// Constant material carried by expression trees and field material
/// extracted from rows.
///
/// None        → the field's value is an explicit null.
/// Unit        → internal placeholder; not a real value.
///

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Value {
    Bool(bool),
    Float64(Float64),
    Int(i64),
    /// Ordered list of values.
    /// List order is preserved for comparison and display.
    List(Vec<Self>),
    None,
    Text(String),
    Uint(u64),
    Unit,
}

impl Value {
    /// Canonical variant rank used as the first key of [`canonical_cmp`].
    #[must_use]
    pub const fn canonical_rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Float64(_) => 4,
            Self::Text(_) => 5,
            Self::List(_) => 6,
            Self::Unit => 7,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<Float64> for Value {
    fn from(v: Float64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
