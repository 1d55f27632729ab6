//! Resolution options: order, renames and per-field restrictions.
//!
//! Options arrive from callers as a loosely-typed JSON object with the keys
//! `order`, `map` and `restrict`. [`ResolveOptions::from_value`] checks the
//! key set first (see [`validate_option_keys`]) and only then interprets the
//! values, so an unknown key fails the call before anything else happens.
//!
//! ```
//! use input_resolver::{ResolveOptions, SourceTag};
//! use serde_json::json;
//!
//! let options = ResolveOptions::from_value(&json!({
//!     "order": "GPFCSHA",
//!     "map": {"PHPSESSID": "sessionId"},
//!     "restrict": {"sessionId": "SC"},
//! }))?;
//! assert_eq!(options.map().target_for("PHPSESSID"), "sessionId");
//! assert!(options.restrictions().allows("sessionId", SourceTag::Server));
//! assert!(!options.restrictions().allows("sessionId", SourceTag::Query));
//! # Ok::<_, input_resolver::ResolveError>(())
//! ```

mod field_map;
mod order;
mod restrict;
mod validate;

pub use field_map::FieldMap;
pub use order::ResolutionOrder;
pub use restrict::RestrictMap;
pub use validate::{RECOGNIZED_OPTIONS, validate_option_keys};

use serde_json::Value;

use crate::{ResolveResult, SourceTag};

/// Fully parsed options for a single resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    order: ResolutionOrder,
    map: FieldMap,
    restrict: RestrictMap,
}

impl ResolveOptions {
    /// Options with the default order, no renames and no restrictions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and parse a caller-supplied options object.
    ///
    /// `null` is treated as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ResolveError::UnrecognizedOption`] for the first key
    /// outside `order`, `map` and `restrict`, and
    /// [`crate::ResolveError::InvalidOption`] when a recognised key carries a
    /// value that cannot be interpreted.
    pub fn from_value(options: &Value) -> ResolveResult<Self> {
        let Some(entries) = validate::option_entries(options)? else {
            return Ok(Self::default());
        };
        let mut parsed = Self::default();
        if let Some(order) = entries.get("order") {
            parsed.order = ResolutionOrder::from_value(order)?;
        }
        if let Some(map) = entries.get("map") {
            parsed.map = FieldMap::from_value(map)?;
        }
        if let Some(restrict) = entries.get("restrict") {
            parsed.restrict = RestrictMap::from_value(restrict)?;
        }
        Ok(parsed)
    }

    /// Replace the resolution order.
    #[must_use]
    pub fn with_order(mut self, order: ResolutionOrder) -> Self {
        self.order = order;
        self
    }

    /// Rename `source_key` to `field` when copying values.
    #[must_use]
    pub fn rename(mut self, source_key: impl Into<String>, field: impl Into<String>) -> Self {
        self.map.insert(source_key, field);
        self
    }

    /// Only allow `field` to be filled from `tags`.
    #[must_use]
    pub fn restrict(mut self, field: impl Into<String>, tags: impl IntoIterator<Item = SourceTag>) -> Self {
        self.restrict.insert(field, tags);
        self
    }

    /// Resolution order, lowest priority first.
    #[must_use]
    pub const fn order(&self) -> &ResolutionOrder {
        &self.order
    }

    /// Source key renames.
    #[must_use]
    pub const fn map(&self) -> &FieldMap {
        &self.map
    }

    /// Per-field source restrictions.
    #[must_use]
    pub const fn restrictions(&self) -> &RestrictMap {
        &self.restrict
    }
}

#[cfg(test)]
mod tests;
