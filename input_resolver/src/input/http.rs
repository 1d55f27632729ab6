//! Processor for multi-slot HTTP requests.

use std::any::Any;

use serde_json::Value;
use tracing::debug;

use super::InputProcessor;
use crate::{
    FieldTarget, HttpRequest, RequestEnvelope, ResolveError, ResolveOptions, ResolveResult,
    SourceSet, populate, resolve,
};

/// Populates targets from every slot of an HTTP request.
///
/// Recognised options:
/// - `order`: sources to consult, lowest priority first (default `GPFCSHA`);
/// - `map`: renames from source keys to target field names;
/// - `restrict`: per-field subsets of sources allowed to supply the value.
///
/// ```
/// use input_resolver::{FieldRecord, HttpInputProcessor, HttpRequest, ParameterBag, SourceTag};
/// use serde_json::json;
///
/// let request = HttpRequest::new()
///     .with_bag(SourceTag::Query, ParameterBag::from_iter([("var", "query_value")]))
///     .with_bag(SourceTag::Attributes, ParameterBag::from_iter([("var", "attribute_value")]));
/// let mut target = FieldRecord::new(["var"]);
/// HttpInputProcessor.initialize_from_http(&mut target, &request, &json!(null))?;
/// assert_eq!(target.get("var"), Some(&json!("attribute_value")));
/// # Ok::<_, input_resolver::ResolveError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpInputProcessor;

impl HttpInputProcessor {
    /// Populate `target` from all seven slots of `request`.
    ///
    /// # Errors
    ///
    /// Returns option validation errors before any slot is read, and
    /// [`ResolveError::FieldAssignment`] when a typed field rejects a value.
    pub fn initialize_from_http<'t, T, E>(
        &self,
        target: &'t mut T,
        request: &E,
        options: &Value,
    ) -> ResolveResult<&'t mut T>
    where
        T: FieldTarget + ?Sized,
        E: RequestEnvelope + ?Sized,
    {
        let parsed = ResolveOptions::from_value(options)?;
        let sources = SourceSet::from_envelope(request);
        let resolved = resolve(&sources, &parsed);
        debug!(processor = self.name(), fields = resolved.len(), "initialising request");
        populate(target, &resolved)
    }
}

impl InputProcessor for HttpInputProcessor {
    fn name(&self) -> &'static str {
        "HTTP"
    }

    fn initialize_request(
        &self,
        target: &mut dyn FieldTarget,
        input: &dyn Any,
        options: &Value,
    ) -> ResolveResult<()> {
        let request = input
            .downcast_ref::<HttpRequest>()
            .ok_or_else(|| ResolveError::unsupported_input(self.name(), "input_resolver::HttpRequest"))?;
        self.initialize_from_http(target, request, options).map(|_| ())
    }
}
