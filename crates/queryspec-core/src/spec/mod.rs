mod combine;

#[cfg(test)]
mod tests;

use crate::predicate::{Predicate, Selector};

// re-exports
pub use combine::{CombineOp, combine};

///
/// Specification
///
/// Immutable bundle of one optional filter predicate plus include and
/// ordering selectors. Built either directly, through the consuming
/// [`SpecificationBuilder`], or by combining two existing specifications
/// with [`and`](Self::and)/[`or`](Self::or); every path allocates a new
/// value and never mutates an input.
///
/// The empty specification is the identity transform: applying it passes
/// a sequence through unchanged.
///

#[derive(Debug)]
pub struct Specification<E> {
    filter: Option<Predicate<E>>,
    includes: Vec<Selector<E>>,
    order_by: Vec<Selector<E>>,
    order_by_desc: Vec<Selector<E>>,
}

impl<E> Specification<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: None,
            includes: Vec::new(),
            order_by: Vec::new(),
            order_by_desc: Vec::new(),
        }
    }

    /// Specification carrying only a filter.
    #[must_use]
    pub fn filtered(predicate: Predicate<E>) -> Self {
        Self {
            filter: Some(predicate),
            ..Self::new()
        }
    }

    #[must_use]
    pub const fn builder() -> SpecificationBuilder<E> {
        SpecificationBuilder {
            spec: Self::new(),
        }
    }

    /// Copy this specification into a builder for further extension.
    /// The original stays untouched.
    #[must_use]
    pub fn to_builder(&self) -> SpecificationBuilder<E> {
        SpecificationBuilder { spec: self.clone() }
    }

    #[must_use]
    pub const fn filter(&self) -> Option<&Predicate<E>> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn includes(&self) -> &[Selector<E>] {
        &self.includes
    }

    #[must_use]
    pub fn order_by(&self) -> &[Selector<E>] {
        &self.order_by
    }

    #[must_use]
    pub fn order_by_desc(&self) -> &[Selector<E>] {
        &self.order_by_desc
    }

    /// True for the identity transform.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filter.is_none()
            && self.includes.is_empty()
            && self.order_by.is_empty()
            && self.order_by_desc.is_empty()
    }

    /// Conjunction of the two filters; includes and orderings of both
    /// inputs are deliberately left behind.
    #[must_use]
    pub fn and(&self, other: &Self) -> Self {
        combine(self, other, CombineOp::And)
    }

    /// Disjunction of the two filters; includes and orderings of both
    /// inputs are deliberately left behind.
    #[must_use]
    pub fn or(&self, other: &Self) -> Self {
        combine(self, other, CombineOp::Or)
    }
}

impl<E> Default for Specification<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Specification<E> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            includes: self.includes.clone(),
            order_by: self.order_by.clone(),
            order_by_desc: self.order_by_desc.clone(),
        }
    }
}

impl<E> PartialEq for Specification<E> {
    fn eq(&self, other: &Self) -> bool {
        self.filter == other.filter
            && self.includes == other.includes
            && self.order_by == other.order_by
            && self.order_by_desc == other.order_by_desc
    }
}

impl<E> Eq for Specification<E> {}

///
/// SpecificationBuilder
///
/// Consuming builder; the only place a specification looks mutable.
/// `build` hands out the finished immutable value.
///

#[derive(Debug)]
pub struct SpecificationBuilder<E> {
    spec: Specification<E>,
}

impl<E> SpecificationBuilder<E> {
    /// Add a filter. A second call narrows the existing filter with a
    /// conjunction, unifying the parameter bindings.
    #[must_use]
    pub fn filter(mut self, predicate: Predicate<E>) -> Self {
        self.spec.filter = match self.spec.filter.take() {
            Some(existing) => Some(combine::combine_predicates(
                &existing,
                &predicate,
                CombineOp::And,
            )),
            None => Some(predicate),
        };
        self
    }

    /// Eagerly associate related data named by the selector.
    /// Insertion order is preserved.
    #[must_use]
    pub fn include(mut self, selector: Selector<E>) -> Self {
        self.spec.includes.push(selector);
        self
    }

    /// Append an ascending sort key.
    #[must_use]
    pub fn order_by(mut self, selector: Selector<E>) -> Self {
        self.spec.order_by.push(selector);
        self
    }

    /// Append a descending sort key.
    #[must_use]
    pub fn order_by_desc(mut self, selector: Selector<E>) -> Self {
        self.spec.order_by_desc.push(selector);
        self
    }

    #[must_use]
    pub fn build(self) -> Specification<E> {
        self.spec
    }
}
