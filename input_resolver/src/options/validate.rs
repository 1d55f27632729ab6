//! Option key validation.

use serde_json::{Map, Value};

use super::order::kind;
use crate::{ResolveError, ResolveResult};

/// Option keys understood by every input processor.
pub const RECOGNIZED_OPTIONS: [&str; 3] = ["order", "map", "restrict"];

/// Reject any option key outside [`RECOGNIZED_OPTIONS`].
///
/// Keys are checked in the mapping's iteration order and the first offending
/// key is reported. [`Map`] keeps its keys sorted, so with several unknown
/// keys the one reported is the first in sorted order, not the first written
/// in the source document. Values are not inspected.
///
/// # Errors
///
/// Returns [`ResolveError::UnrecognizedOption`] naming the first unknown key.
///
/// ```
/// use input_resolver::{ResolveError, validate_option_keys};
/// use serde_json::json;
///
/// let options = json!({"map": {}, "what is this": "crazy thing"});
/// let err = validate_option_keys(options.as_object().unwrap_or(&Default::default()))
///     .unwrap_err();
/// assert!(matches!(err, ResolveError::UnrecognizedOption { key } if key == "what is this"));
/// ```
pub fn validate_option_keys(options: &Map<String, Value>) -> ResolveResult<()> {
    match options
        .keys()
        .find(|key| !RECOGNIZED_OPTIONS.contains(&key.as_str()))
    {
        Some(key) => Err(ResolveError::unrecognized_option(key.as_str())),
        None => Ok(()),
    }
}

/// Validate the shape and key set of a raw options value.
///
/// Returns `None` for `null` or an empty object.
pub(super) fn option_entries(options: &Value) -> ResolveResult<Option<&Map<String, Value>>> {
    match options {
        Value::Null => Ok(None),
        Value::Object(entries) => {
            validate_option_keys(entries)?;
            Ok((!entries.is_empty()).then_some(entries))
        }
        other => Err(ResolveError::invalid_option(
            "<root>",
            format!("options must be an object, found {}", kind(other)),
        )),
    }
}
