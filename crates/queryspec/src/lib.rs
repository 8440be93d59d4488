//! ## Crate layout
//! - `core`: the specification engine: values, expression trees,
//!   parameter rewriting, combinators, and the applicator.
//! - `expr`: serialized, planner-agnostic filter/sort expressions that
//!   lower into the core engine at a typed boundary.
//!
//! The `prelude` module mirrors the surface application code uses when
//! building and applying specifications.

pub use queryspec_core as core;

pub mod expr;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        apply::{MemorySource, OrderDirection, Queryable as _, apply},
        expr::{CompareOp, Expr, Param},
        predicate::{FieldPresence, Predicate, Row as _, Selector},
        spec::{CombineOp, Specification, combine},
        value::Value,
    };
    pub use crate::expr::{FilterExpr, SortExpr};
    pub use serde::{Deserialize, Serialize};
}
