//! Multi-source merge engine.
//!
//! Each source named in the resolution order is projected through the rename
//! table into a layer keyed by target field, and the layers are overlaid from
//! lowest to highest priority. A value is written only when the field's
//! restriction admits the layer's source, so for every field the result holds
//! the value from the last eligible source that defines it. Sources without
//! the key leave earlier values in place.
//!
//! ```
//! use input_resolver::{ResolveOptions, SourceSet, SourceTag, resolve};
//! use serde_json::json;
//!
//! let object = |value: serde_json::Value| value.as_object().cloned().unwrap_or_default();
//! let sources = SourceSet::new()
//!     .with(SourceTag::Query, object(json!({"v1": "G1", "v2": "G2", "v3": "G3"})))
//!     .with(SourceTag::Body, object(json!({"v1": "P1", "v2": "P2"})))
//!     .with(SourceTag::Cookies, object(json!({"v1": "C1"})));
//! let options = ResolveOptions::from_value(&json!({"order": "GPC"}))?;
//!
//! let resolved = resolve(&sources, &options);
//! assert_eq!(resolved.get("v1"), Some(&json!("C1")));
//! assert_eq!(resolved.get("v2"), Some(&json!("P2")));
//! assert_eq!(resolved.get("v3"), Some(&json!("G3")));
//! # Ok::<_, input_resolver::ResolveError>(())
//! ```

mod fields;

pub use fields::{Provenance, ResolvedFields};

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::{FieldMap, ResolveOptions, SourceSet};

/// Resolve the final field values from `sources` according to `options`.
///
/// The result is deterministic for identical inputs. Values are copied
/// verbatim; nothing is trimmed or coerced.
#[must_use]
pub fn resolve(sources: &SourceSet<'_>, options: &ResolveOptions) -> ResolvedFields {
    let mut resolved = ResolvedFields::new();
    for &tag in options.order().tags() {
        let Some(values) = sources.get(tag) else {
            continue;
        };
        for (field, value) in project(values, options.map()) {
            if options.restrictions().allows(field, tag) {
                resolved.overlay(field, value.clone(), Provenance::Source(tag));
            }
        }
    }
    debug!(
        order = %options.order(),
        renames = options.map().len(),
        fields = resolved.len(),
        "resolved request fields"
    );
    resolved
}

/// Resolve a single flat mapping, applying renames only.
///
/// Used by processors whose input is one payload rather than a request with
/// several slots. Every value is attributed to [`Provenance::Payload`].
#[must_use]
pub fn resolve_single(values: &Map<String, Value>, map: &FieldMap) -> ResolvedFields {
    let mut resolved = ResolvedFields::new();
    for (field, value) in project(values, map) {
        resolved.overlay(field, value.clone(), Provenance::Payload);
    }
    debug!(renames = map.len(), fields = resolved.len(), "resolved payload fields");
    resolved
}

/// Re-key one source by target field name.
///
/// Verbatim keys go in first and renamed keys are laid over them in source key
/// order, so within a source an explicit rename beats a key that already
/// carries the field's name. Renamed keys never keep their original name.
fn project<'v>(values: &'v Map<String, Value>, map: &'v FieldMap) -> BTreeMap<&'v str, &'v Value> {
    let mut layer: BTreeMap<&str, &Value> = values
        .iter()
        .filter(|(key, _)| !map.is_renamed(key))
        .map(|(key, value)| (key.as_str(), value))
        .collect();
    for (source_key, field) in map.iter() {
        if let Some(value) = values.get(source_key) {
            layer.insert(field, value);
        }
    }
    layer
}
