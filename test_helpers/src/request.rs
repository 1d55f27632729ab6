//! Builders turning JSON literals into request envelopes.
//!
//! ```
//! use input_resolver::{RequestEnvelope, SourceTag};
//! use input_resolver_test_helpers::request_from_json;
//! use serde_json::json;
//!
//! let request = request_from_json(&json!({
//!     "G": { "q": "hotels" },
//!     "cookies": { "PHPSESSID": "asd123" },
//!     "content": "{}"
//! }))?;
//! assert_eq!(request.all(SourceTag::Cookies).get("PHPSESSID"), Some(&json!("asd123")));
//! assert_eq!(request.content(), b"{}");
//! # Ok::<_, anyhow::Error>(())
//! ```

use anyhow::{Result, anyhow, bail};
use input_resolver::{HttpRequest, ParameterBag, SourceTag};
use serde_json::{Map, Value};

/// Build an [`HttpRequest`] from an object keyed by slot letter or name.
///
/// Each slot value must be an object. The optional `content` key holds the
/// raw body as a string.
///
/// # Errors
///
/// Returns an error for unknown slot keys, non-object slots, or a non-string
/// `content`.
pub fn request_from_json(fixture: &Value) -> Result<HttpRequest> {
    let entries = fixture
        .as_object()
        .ok_or_else(|| anyhow!("request fixture must be an object"))?;
    let mut request = HttpRequest::new();
    for (key, value) in entries {
        if key == "content" {
            let Some(body) = value.as_str() else {
                bail!("content must be a string");
            };
            request = request.with_content(body);
            continue;
        }
        let tag: SourceTag = key.parse()?;
        let slot = value
            .as_object()
            .ok_or_else(|| anyhow!("slot '{key}' must be an object"))?;
        request = request.with_bag(tag, ParameterBag::from(slot.clone()));
    }
    Ok(request)
}

/// Unwrap a JSON object literal into a flat mapping.
///
/// # Errors
///
/// Returns an error when `value` is not an object.
pub fn slot_map(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected an object, got {other}")),
    }
}
