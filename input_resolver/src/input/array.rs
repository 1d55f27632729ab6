//! Processor for a single flat mapping.

use std::any::Any;

use serde_json::{Map, Value};

use super::InputProcessor;
use crate::{FieldTarget, ResolveError, ResolveOptions, ResolveResult, populate, resolve_single};

/// Populates targets from one key/value mapping.
///
/// Only the `map` option has an effect; `order` and `restrict` are validated
/// but meaningless with a single source.
///
/// ```
/// use input_resolver::{ArrayInputProcessor, FieldRecord};
/// use serde_json::json;
///
/// let input = json!({"q": "hotels", "p": 3});
/// let mut target = FieldRecord::new(["searchQuery", "p"]);
/// ArrayInputProcessor.initialize_from_map(
///     &mut target,
///     input.as_object().unwrap_or(&Default::default()),
///     &json!({"map": {"q": "searchQuery"}}),
/// )?;
/// assert_eq!(target.get("searchQuery"), Some(&json!("hotels")));
/// assert_eq!(target.get("p"), Some(&json!(3)));
/// # Ok::<_, input_resolver::ResolveError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayInputProcessor;

impl ArrayInputProcessor {
    /// Populate `target` from `input`.
    ///
    /// # Errors
    ///
    /// Returns option validation errors before touching `target`, and
    /// [`ResolveError::FieldAssignment`] when a typed field rejects a value.
    pub fn initialize_from_map<'t, T>(
        &self,
        target: &'t mut T,
        input: &Map<String, Value>,
        options: &Value,
    ) -> ResolveResult<&'t mut T>
    where
        T: FieldTarget + ?Sized,
    {
        let parsed = ResolveOptions::from_value(options)?;
        Self::apply(target, input, &parsed)
    }

    /// Shared tail of the array and JSON pipelines once options are parsed.
    pub(crate) fn apply<'t, T>(
        target: &'t mut T,
        input: &Map<String, Value>,
        options: &ResolveOptions,
    ) -> ResolveResult<&'t mut T>
    where
        T: FieldTarget + ?Sized,
    {
        let resolved = resolve_single(input, options.map());
        populate(target, &resolved)
    }
}

impl InputProcessor for ArrayInputProcessor {
    fn name(&self) -> &'static str {
        "array"
    }

    fn initialize_request(
        &self,
        target: &mut dyn FieldTarget,
        input: &dyn Any,
        options: &Value,
    ) -> ResolveResult<()> {
        let map = match (input.downcast_ref::<Map<String, Value>>(), input.downcast_ref::<Value>()) {
            (Some(map), _) | (None, Some(Value::Object(map))) => map,
            _ => {
                return Err(ResolveError::unsupported_input(
                    self.name(),
                    "serde_json::Map<String, Value>",
                ));
            }
        };
        self.initialize_from_map(target, map, options).map(|_| ())
    }
}
