//! Per-field source restrictions.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use super::order::{kind, parse_letters, tag_from_value};
use crate::{ResolveError, ResolveResult, SourceTag};

/// Allowed sources per target field.
///
/// Fields without an entry may be filled from any source in the resolution
/// order. Restricted fields are filled only from the intersection of the
/// order and their allowed set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestrictMap(BTreeMap<String, BTreeSet<SourceTag>>);

impl RestrictMap {
    /// Create an empty restriction table.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Only allow `field` to be filled from `tags`, replacing any previous
    /// restriction for that field.
    pub fn insert(&mut self, field: impl Into<String>, tags: impl IntoIterator<Item = SourceTag>) {
        self.0.insert(field.into(), tags.into_iter().collect());
    }

    pub(crate) fn from_value(value: &Value) -> ResolveResult<Self> {
        let Value::Object(entries) = value else {
            return Err(ResolveError::invalid_option(
                "restrict",
                format!("expected an object of field restrictions, found {}", kind(value)),
            ));
        };
        let mut restrictions = Self::new();
        for (field, allowed) in entries {
            let tags = match allowed {
                Value::String(letters) => parse_letters("restrict", letters)?,
                Value::Array(items) => items
                    .iter()
                    .map(|item| tag_from_value("restrict", item))
                    .collect::<ResolveResult<Vec<_>>>()?,
                other => {
                    return Err(ResolveError::invalid_option(
                        "restrict",
                        format!(
                            "allowed sources for '{field}' must be a string or array, found {}",
                            kind(other)
                        ),
                    ));
                }
            };
            restrictions.insert(field.clone(), tags);
        }
        Ok(restrictions)
    }

    /// Whether `field` may take its value from `tag`.
    #[must_use]
    pub fn allows(&self, field: &str, tag: SourceTag) -> bool {
        self.0.get(field).is_none_or(|allowed| allowed.contains(&tag))
    }

    /// Allowed sources for `field`, or `None` when unrestricted.
    #[must_use]
    pub fn allowed(&self, field: &str) -> Option<&BTreeSet<SourceTag>> {
        self.0.get(field)
    }

    /// Whether no field is restricted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
