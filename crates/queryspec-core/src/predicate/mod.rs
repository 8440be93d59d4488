mod compile;


use crate::{
    error::ExprError,
    expr::{self, Expr, Param},
};
use std::marker::PhantomData;

// re-exports
pub use compile::{CompiledPredicate, CompiledSelector, FieldPresence, Row};

const DEFAULT_PARAM: &str = "x";

///
/// Predicate
///
/// A single-parameter, boolean-valued expression over entity type `E`.
///
/// The body stays an inspectable tree so predicates can be combined by
/// parameter rewriting; an executable form is derived on demand with
/// [`compile`](Self::compile) and regenerated after each combination
/// step rather than mutated in place.
///

#[derive(Debug)]
pub struct Predicate<E> {
    param: Param,
    body: Expr,
    _marker: PhantomData<fn(&E)>,
}

// Manual impls: the entity type is phantom and must not be bounded.
impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        Self::from_raw(self.param.clone(), self.body.clone())
    }
}

impl<E> PartialEq for Predicate<E> {
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param && self.body == other.body
    }
}

impl<E> Eq for Predicate<E> {}

impl<E> Predicate<E> {
    /// Build a predicate against a freshly allocated parameter. The
    /// closure receives the binding the body must be written against.
    #[must_use]
    pub fn new(build: impl FnOnce(&Param) -> Expr) -> Self {
        let param = Param::new(DEFAULT_PARAM);
        let body = build(&param);

        Self {
            param,
            body,
            _marker: PhantomData,
        }
    }

    /// Assemble a predicate from an existing parameter and body,
    /// rejecting bodies that reference any other binding.
    pub fn from_parts(param: Param, body: Expr) -> Result<Self, ExprError> {
        if let Some(foreign) = expr::unbound_param(&body, &param) {
            return Err(ExprError::UnboundParam {
                name: foreign.name().to_string(),
            });
        }

        Ok(Self::from_raw(param, body))
    }

    // Combination output is well-formed by construction; skip the walk.
    pub(crate) const fn from_raw(param: Param, body: Expr) -> Self {
        Self {
            param,
            body,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn param(&self) -> &Param {
        &self.param
    }

    #[must_use]
    pub const fn body(&self) -> &Expr {
        &self.body
    }

    /// Same binding, simplified body.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::from_raw(self.param.clone(), expr::normalize(&self.body))
    }

    /// Derive the executable form of this predicate.
    #[must_use]
    pub fn compile(&self) -> CompiledPredicate<E>
    where
        E: Row + 'static,
    {
        CompiledPredicate::new(compile::compile_test(&self.body, &self.param))
    }
}

///
/// Selector
///
/// A single-parameter, value-yielding expression over entity type `E`,
/// used for includes and ordering keys.
///

#[derive(Debug)]
pub struct Selector<E> {
    param: Param,
    body: Expr,
    _marker: PhantomData<fn(&E)>,
}

impl<E> Clone for Selector<E> {
    fn clone(&self) -> Self {
        Self {
            param: self.param.clone(),
            body: self.body.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E> PartialEq for Selector<E> {
    fn eq(&self, other: &Self) -> bool {
        self.param == other.param && self.body == other.body
    }
}

impl<E> Eq for Selector<E> {}

impl<E> Selector<E> {
    #[must_use]
    pub fn new(build: impl FnOnce(&Param) -> Expr) -> Self {
        let param = Param::new(DEFAULT_PARAM);
        let body = build(&param);

        Self {
            param,
            body,
            _marker: PhantomData,
        }
    }

    /// Shorthand for the common single-field selector.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(|p| p.field(name))
    }

    pub fn from_parts(param: Param, body: Expr) -> Result<Self, ExprError> {
        if let Some(foreign) = expr::unbound_param(&body, &param) {
            return Err(ExprError::UnboundParam {
                name: foreign.name().to_string(),
            });
        }

        Ok(Self {
            param,
            body,
            _marker: PhantomData,
        })
    }

    #[must_use]
    pub const fn param(&self) -> &Param {
        &self.param
    }

    #[must_use]
    pub const fn body(&self) -> &Expr {
        &self.body
    }

    /// Dotted field path of a plain field-access chain rooted at the
    /// parameter, e.g. `author.name`. `None` for computed selectors.
    #[must_use]
    pub fn field_path(&self) -> Option<String> {
        let mut segments = Vec::new();
        let mut cursor = &self.body;

        loop {
            match cursor {
                Expr::Field { base, name } => {
                    segments.push(name.as_str());
                    cursor = base;
                }
                Expr::Param(param) if param.same_binding(&self.param) => break,
                _ => return None,
            }
        }

        segments.reverse();
        Some(segments.join("."))
    }

    /// Derive the executable form of this selector.
    #[must_use]
    pub fn compile(&self) -> CompiledSelector<E>
    where
        E: Row + 'static,
    {
        CompiledSelector::new(compile::compile_value(&self.body, &self.param))
    }
}
