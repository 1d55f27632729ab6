//! Whitelist-backed dynamic target.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::FieldTarget;
use crate::ResolveResult;

/// Target with a fixed list of declared field names and untyped values.
///
/// Useful when the request shape is only known at runtime. Only declared
/// names can be set; defaults supplied with [`FieldRecord::with_default`]
/// survive population when no source provides the field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldRecord {
    declared: Vec<String>,
    values: BTreeMap<String, Value>,
}

impl FieldRecord {
    /// Declare `fields`, all initially unset. Repeated names are kept once.
    #[must_use]
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut declared: Vec<String> = Vec::new();
        for field in fields {
            let name = field.into();
            if !declared.contains(&name) {
                declared.push(name);
            }
        }
        Self {
            declared,
            values: BTreeMap::new(),
        }
    }

    /// Give the declared `field` a starting value. Undeclared names are
    /// ignored.
    #[must_use]
    pub fn with_default(mut self, field: &str, value: impl Into<Value>) -> Self {
        if self.declares(field) {
            self.values.insert(field.to_owned(), value.into());
        }
        self
    }

    /// Current value of `field`, if set.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Consume the record, returning the fields that hold a value.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.values.into_iter().collect()
    }
}

impl FieldTarget for FieldRecord {
    fn field_names(&self) -> Vec<String> {
        self.declared.clone()
    }

    fn declares(&self, name: &str) -> bool {
        self.declared.iter().any(|declared| declared == name)
    }

    fn field(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: Value) -> ResolveResult<bool> {
        if !self.declares(name) {
            return Ok(false);
        }
        self.values.insert(name.to_owned(), value);
        Ok(true)
    }

    fn set_fields(&mut self, values: &[(&str, Value)]) -> ResolveResult<usize> {
        let mut assigned = 0;
        for (name, value) in values {
            if self.declares(name) {
                self.values.insert((*name).to_owned(), value.clone());
                assigned += 1;
            }
        }
        Ok(assigned)
    }
}
