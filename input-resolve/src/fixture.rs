//! Request fixtures read from disk.
//!
//! A fixture is a JSON object keyed by slot letter (`G`, `P`, `F`, `C`, `S`,
//! `H`, `A`) or slot name (`query`, `cookies`, ...), each holding a flat
//! object, plus an optional `content` key carrying the raw body. The `array`
//! processor reads the whole object as its single mapping instead.

use std::any::Any;

use camino::Utf8Path;
use input_resolver::{HttpRequest, ParameterBag, SourceTag};
use serde_json::{Map, Value};

use crate::cli::ProcessorKind;
use crate::error::InputResolveError;

/// Key holding the raw body in HTTP fixtures.
pub const CONTENT_KEY: &str = "content";

/// Fixture converted into the input its processor expects.
#[derive(Debug, Clone)]
pub enum FixtureInput {
    /// Request envelope for the HTTP processor.
    Http(HttpRequest),
    /// Request envelope whose body the JSON processor decodes.
    Json(HttpRequest),
    /// Single flat mapping for the array processor.
    Array(Map<String, Value>),
}

impl FixtureInput {
    /// Read `path` and shape it for `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, is not JSON, or does
    /// not have the shape `kind` requires.
    pub fn load(path: &Utf8Path, kind: ProcessorKind) -> Result<Self, InputResolveError> {
        Self::from_value(read_json(path)?, kind)
    }

    /// Shape an already parsed fixture for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`InputResolveError::Fixture`] when the value is not an object,
    /// names an unknown slot, or holds a slot that is not an object.
    pub fn from_value(value: Value, kind: ProcessorKind) -> Result<Self, InputResolveError> {
        let Value::Object(entries) = value else {
            return Err(InputResolveError::Fixture(String::from(
                "fixture must be a JSON object",
            )));
        };
        match kind {
            ProcessorKind::Http => request_from_entries(entries).map(Self::Http),
            ProcessorKind::Json => request_from_entries(entries).map(Self::Json),
            ProcessorKind::Array => Ok(Self::Array(entries)),
        }
    }

    /// Borrow the input as the processors receive it.
    #[must_use]
    pub fn as_any(&self) -> &dyn Any {
        match self {
            Self::Http(request) | Self::Json(request) => request,
            Self::Array(map) => map,
        }
    }
}

/// Read and parse a JSON file.
///
/// # Errors
///
/// Returns [`InputResolveError::Io`] or [`InputResolveError::Json`].
pub fn read_json(path: &Utf8Path) -> Result<Value, InputResolveError> {
    let text = std::fs::read_to_string(path).map_err(|err| InputResolveError::io(path, err))?;
    serde_json::from_str(&text).map_err(|err| InputResolveError::json(path, err))
}

fn request_from_entries(entries: Map<String, Value>) -> Result<HttpRequest, InputResolveError> {
    let mut request = HttpRequest::new();
    for (key, value) in entries {
        if key == CONTENT_KEY {
            request = request.with_content(body_bytes(value)?);
            continue;
        }
        let tag: SourceTag = key
            .parse::<SourceTag>()
            .map_err(|err| InputResolveError::Fixture(err.to_string()))?;
        let Value::Object(slot) = value else {
            return Err(InputResolveError::Fixture(format!(
                "slot '{key}' must be a JSON object"
            )));
        };
        request = request.with_bag(tag, ParameterBag::from(slot));
    }
    Ok(request)
}

/// Strings are used verbatim; any other value is serialised back to JSON.
fn body_bytes(value: Value) -> Result<Vec<u8>, InputResolveError> {
    match value {
        Value::String(text) => Ok(text.into_bytes()),
        other => serde_json::to_vec(&other)
            .map_err(|err| InputResolveError::Fixture(format!("unreadable content: {err}"))),
    }
}
