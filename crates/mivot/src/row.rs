//! Read access to the cells of one table row.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A table row giving access to its cells by column reference.
///
/// The column reference is the `ref` of an ATTRIBUTE: a FIELD `ID` or
/// `name` of the mapped table.
pub trait Row {
    /// Cell of the column named `column_ref`, `None` if the row has no
    /// such column.
    fn cell(&self, column_ref: &str) -> Option<&Value>;
}

impl Row for Map<String, Value> {
    fn cell(&self, column_ref: &str) -> Option<&Value> {
        self.get(column_ref)
    }
}

/// Only JSON objects have cells.
impl Row for Value {
    fn cell(&self, column_ref: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(column_ref))
    }
}

impl<S: BuildHasher> Row for HashMap<String, Value, S> {
    fn cell(&self, column_ref: &str) -> Option<&Value> {
        self.get(column_ref)
    }
}

impl Row for BTreeMap<String, Value> {
    fn cell(&self, column_ref: &str) -> Option<&Value> {
        self.get(column_ref)
    }
}

impl<S: BuildHasher> Row for IndexMap<String, Value, S> {
    fn cell(&self, column_ref: &str) -> Option<&Value> {
        self.get(column_ref)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn cell(&self, column_ref: &str) -> Option<&Value> {
        (**self).cell(column_ref)
    }
}
