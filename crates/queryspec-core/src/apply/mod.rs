mod memory;

#[cfg(test)]
mod tests;

use crate::{
    predicate::{Predicate, Selector},
    spec::Specification,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

// re-exports
pub use memory::MemorySource;

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Deserialize, Serialize)]
pub enum OrderDirection {
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

///
/// Queryable
///
/// Lazy, composable sequence abstraction. Every operation returns a new
/// queryable without executing; iteration, counting, and materialization
/// belong to the concrete data source.
///
/// `then_by`/`then_by_desc` extend the most recent ordering with a
/// tie-break key.
///

pub trait Queryable<E>: Sized {
    /// Narrow the sequence to rows satisfying the predicate.
    #[must_use]
    fn filter(self, predicate: Predicate<E>) -> Self;

    /// Annotate the sequence to eagerly associate related data.
    #[must_use]
    fn include(self, selector: Selector<E>) -> Self;

    /// Start a new ordering with an ascending primary key.
    #[must_use]
    fn order_by(self, selector: Selector<E>) -> Self;

    /// Start a new ordering with a descending primary key.
    #[must_use]
    fn order_by_desc(self, selector: Selector<E>) -> Self;

    /// Ascending tie-break on the current ordering.
    #[must_use]
    fn then_by(self, selector: Selector<E>) -> Self;

    /// Descending tie-break on the current ordering.
    #[must_use]
    fn then_by_desc(self, selector: Selector<E>) -> Self;
}

/// Decorate a queryable with everything a specification describes, in a
/// fixed order: filter first, then each include in list order, then the
/// ordering keys. Returns the still-lazy sequence; nothing executes here.
#[must_use]
pub fn apply<E, Q: Queryable<E>>(spec: &Specification<E>, source: Q) -> Q {
    let mut query = source;

    if let Some(filter) = spec.filter() {
        query = query.filter(filter.clone());
    }

    for include in spec.includes() {
        query = query.include(include.clone());
    }

    apply_order(spec, query)
}

// When both ordering lists are populated, the descending keys sort first
// and the ascending keys break ties, each list in its own relative order.
// Pinned by tests; do not make this symmetric.
fn apply_order<E, Q: Queryable<E>>(spec: &Specification<E>, query: Q) -> Q {
    let mut query = query;

    if let Some((primary, rest)) = spec.order_by_desc().split_first() {
        query = query.order_by_desc(primary.clone());
        for selector in rest {
            query = query.then_by_desc(selector.clone());
        }
        for selector in spec.order_by() {
            query = query.then_by(selector.clone());
        }
    } else if let Some((primary, rest)) = spec.order_by().split_first() {
        query = query.order_by(primary.clone());
        for selector in rest {
            query = query.then_by(selector.clone());
        }
    }

    query
}
