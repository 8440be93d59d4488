use crate::{
    apply::{OrderDirection, Queryable},
    explain::render_expr,
    predicate::{CompiledSelector, Predicate, Row, Selector},
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

///
/// MemorySource
///
/// Lazy in-memory queryable over owned rows. Operations are recorded,
/// never run; the sequence is materialized only by [`collect`](Self::collect).
/// Eager-load annotations have no data effect here and are reported via
/// [`included`](Self::included) so callers can observe what was requested.
///

#[derive(Debug)]
pub struct MemorySource<E> {
    rows: Vec<E>,
    ops: Vec<SourceOp<E>>,
}

#[derive(Debug)]
enum SourceOp<E> {
    Filter(Predicate<E>),
    Include(Selector<E>),
    Order(Vec<(Selector<E>, OrderDirection)>),
}

impl<E> MemorySource<E> {
    #[must_use]
    pub const fn new(rows: Vec<E>) -> Self {
        Self {
            rows,
            ops: Vec::new(),
        }
    }

    /// Rendered include annotations, in request order.
    #[must_use]
    pub fn included(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SourceOp::Include(selector) => Some(render_expr(selector.body())),
                SourceOp::Filter(_) | SourceOp::Order(_) => None,
            })
            .collect()
    }

    fn push_key(mut self, selector: Selector<E>, direction: OrderDirection, extend: bool) -> Self {
        if extend {
            if let Some(SourceOp::Order(keys)) = self.ops.last_mut() {
                keys.push((selector, direction));
                return self;
            }
        }

        self.ops.push(SourceOp::Order(vec![(selector, direction)]));
        self
    }
}

impl<E: Row + Clone + 'static> MemorySource<E> {
    /// Execute the recorded operations and materialize the rows.
    ///
    /// Filters preserve the relative order of surviving rows; orderings
    /// are stable sorts, so earlier sort passes survive as tie-breaks of
    /// later ones.
    #[must_use]
    pub fn collect(&self) -> Vec<E> {
        let mut rows = self.rows.clone();

        for op in &self.ops {
            match op {
                SourceOp::Filter(predicate) => {
                    let compiled = predicate.compile();
                    rows.retain(|row| compiled.eval(row));
                }
                SourceOp::Include(_) => {}
                SourceOp::Order(keys) => {
                    let compiled: Vec<_> = keys
                        .iter()
                        .map(|(selector, direction)| (selector.compile(), *direction))
                        .collect();
                    rows.sort_by(|left, right| compare_rows(left, right, &compiled));
                }
            }
        }

        rows
    }
}

impl<E> Queryable<E> for MemorySource<E> {
    fn filter(mut self, predicate: Predicate<E>) -> Self {
        self.ops.push(SourceOp::Filter(predicate));
        self
    }

    fn include(mut self, selector: Selector<E>) -> Self {
        self.ops.push(SourceOp::Include(selector));
        self
    }

    fn order_by(self, selector: Selector<E>) -> Self {
        self.push_key(selector, OrderDirection::Asc, false)
    }

    fn order_by_desc(self, selector: Selector<E>) -> Self {
        self.push_key(selector, OrderDirection::Desc, false)
    }

    fn then_by(self, selector: Selector<E>) -> Self {
        self.push_key(selector, OrderDirection::Asc, true)
    }

    fn then_by_desc(self, selector: Selector<E>) -> Self {
        self.push_key(selector, OrderDirection::Desc, true)
    }
}

fn compare_rows<E: Row>(
    left: &E,
    right: &E,
    keys: &[(CompiledSelector<E>, OrderDirection)],
) -> Ordering {
    for (selector, direction) in keys {
        let cmp = compare_keys(
            selector.key(left).as_ref(),
            selector.key(right).as_ref(),
            *direction,
        );
        if cmp != Ordering::Equal {
            return cmp;
        }
    }

    Ordering::Equal
}

// Missing keys sort after present values in either direction.
fn compare_keys(
    left: Option<&Value>,
    right: Option<&Value>,
    direction: OrderDirection,
) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => {
            let cmp = canonical_cmp(left, right);
            match direction {
                OrderDirection::Asc => cmp,
                OrderDirection::Desc => cmp.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
