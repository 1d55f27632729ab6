//! Processor for JSON request bodies.

use std::any::Any;

use serde_json::Value;

use super::{ArrayInputProcessor, Decoder, InputProcessor, JsonDecoder};
use crate::{FieldTarget, HttpRequest, RequestEnvelope, ResolveError, ResolveOptions, ResolveResult};

/// Decodes the request body as JSON and populates the target from it.
///
/// The decoded object is treated as the only source. `map` renames apply;
/// `order` and `restrict` are accepted but have nothing to choose between.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonInputProcessor<D = JsonDecoder> {
    decoder: D,
}

impl JsonInputProcessor {
    /// Create a processor using [`JsonDecoder`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decoder: JsonDecoder,
        }
    }
}

impl<D: Decoder> JsonInputProcessor<D> {
    /// Create a processor that decodes bodies with `decoder`.
    #[must_use]
    pub const fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Populate `target` from the JSON body of `request`.
    ///
    /// # Errors
    ///
    /// Returns option validation errors before the body is read, decoding
    /// errors unchanged, and [`ResolveError::FieldAssignment`] when a typed
    /// field rejects a value.
    ///
    /// ```
    /// use input_resolver::{FieldRecord, HttpRequest, JsonInputProcessor};
    /// use serde_json::json;
    ///
    /// let request = HttpRequest::new().with_content(r#"{"foo": "qwe", "nums": [3, 2, 1]}"#);
    /// let mut target = FieldRecord::new(["stringField", "nums"]);
    /// JsonInputProcessor::new().initialize_from_json(
    ///     &mut target,
    ///     &request,
    ///     &json!({"map": {"foo": "stringField"}}),
    /// )?;
    /// assert_eq!(target.get("stringField"), Some(&json!("qwe")));
    /// assert_eq!(target.get("nums"), Some(&json!([3, 2, 1])));
    /// # Ok::<_, input_resolver::ResolveError>(())
    /// ```
    pub fn initialize_from_json<'t, T, E>(
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
        let decoded = self.decoder.decode(request.content(), "json")?;
        ArrayInputProcessor::apply(target, &decoded, &parsed)
    }
}

impl<D: Decoder> InputProcessor for JsonInputProcessor<D> {
    fn name(&self) -> &'static str {
        "JSON"
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
        self.initialize_from_json(target, request, options).map(|_| ())
    }
}
