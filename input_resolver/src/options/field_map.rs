//! Source key to target field renames.

use std::collections::BTreeMap;

use serde_json::Value;

use super::order::kind;
use crate::{ResolveError, ResolveResult};

/// Rename table from source keys to target field names.
///
/// Keys without an entry keep their name. A key that is renamed no longer
/// populates a field of its own name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    /// Create an empty rename table.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Rename `source_key` to `field`.
    pub fn insert(&mut self, source_key: impl Into<String>, field: impl Into<String>) {
        self.0.insert(source_key.into(), field.into());
    }

    pub(crate) fn from_value(value: &Value) -> ResolveResult<Self> {
        let Value::Object(entries) = value else {
            return Err(ResolveError::invalid_option(
                "map",
                format!("expected an object of renames, found {}", kind(value)),
            ));
        };
        entries
            .iter()
            .map(|(source_key, field)| match field {
                Value::String(name) => Ok((source_key.clone(), name.clone())),
                other => Err(ResolveError::invalid_option(
                    "map",
                    format!(
                        "rename target for '{source_key}' must be a string, found {}",
                        kind(other)
                    ),
                )),
            })
            .collect::<ResolveResult<BTreeMap<_, _>>>()
            .map(Self)
    }

    /// Target field name for `source_key`.
    #[must_use]
    pub fn target_for<'k>(&'k self, source_key: &'k str) -> &'k str {
        self.0.get(source_key).map_or(source_key, String::as_str)
    }

    /// Source keys renamed onto `field`, in source key order.
    pub fn source_keys_for<'f>(&'f self, field: &'f str) -> impl Iterator<Item = &'f str> {
        self.0
            .iter()
            .filter(move |(_, target)| target.as_str() == field)
            .map(|(key, _)| key.as_str())
    }

    /// Whether `source_key` is renamed.
    #[must_use]
    pub fn is_renamed(&self, source_key: &str) -> bool {
        self.0.contains_key(source_key)
    }

    /// Number of rename entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table holds no renames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(source_key, field)` pairs in source key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, field)| (key.as_str(), field.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, field)| (key.into(), field.into()))
                .collect(),
        )
    }
}
