//! Resolution output.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};
use tracing::trace;

use crate::SourceTag;

/// Where a resolved value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Provenance {
    /// Chosen from a request slot during multi-source resolution.
    Source(SourceTag),
    /// Taken from a single decoded payload or mapping.
    Payload,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(tag) => write!(f, "{tag}"),
            Self::Payload => f.write_str("payload"),
        }
    }
}

/// Final value per target field, with the source that supplied it.
///
/// Fields no eligible source defines are absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedFields {
    values: BTreeMap<String, (Value, Provenance)>,
}

impl ResolvedFields {
    /// Create an empty result.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Set `field`, replacing any value from a lower-priority layer.
    pub(crate) fn overlay(&mut self, field: &str, value: Value, provenance: Provenance) {
        if let Some((_, previous)) = self.values.insert(field.to_owned(), (value, provenance)) {
            trace!(field, %previous, winner = %provenance, "overrode lower-priority value");
        }
    }

    /// Resolved value for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field).map(|(value, _)| value)
    }

    /// Source that supplied `field`.
    #[must_use]
    pub fn provenance(&self, field: &str) -> Option<Provenance> {
        self.values.get(field).map(|(_, provenance)| *provenance)
    }

    /// Whether `field` was resolved.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of resolved fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(field, value)` pairs in field name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(field, (value, _))| (field.as_str(), value))
    }

    /// Iterate `(field, provenance)` pairs in field name order.
    pub fn provenances(&self) -> impl Iterator<Item = (&str, Provenance)> {
        self.values
            .iter()
            .map(|(field, (_, provenance))| (field.as_str(), *provenance))
    }

    /// Consume the result, keeping only the values.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.values
            .into_iter()
            .map(|(field, (value, _))| (field, value))
            .collect()
    }

    /// Render the values as a JSON object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(field, value)| (field.to_owned(), value.clone()))
                .collect(),
        )
    }
}
