use crate::{
    predicate::{FieldPresence, Row},
    value::Value,
};
use std::collections::BTreeMap;

///
/// TestRow
///
/// Loose bag of fields for exercising compiled predicates and selectors
/// without a schema.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TestRow {
    fields: BTreeMap<String, Value>,
}

impl TestRow {
    pub(crate) fn new(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    pub(crate) fn of(entries: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        Self {
            fields: entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

impl Row for TestRow {
    fn field(&self, name: &str) -> FieldPresence {
        match self.fields.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}
