//! Body decoding collaborator.

use serde_json::{Map, Value};

use crate::DecodeError;

/// Decodes a raw request body into a flat mapping.
pub trait Decoder {
    /// Decode `raw` as `format`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when `raw` is malformed, is not an object,
    /// or `format` is not supported.
    fn decode(&self, raw: &[u8], format: &str) -> Result<Map<String, Value>, DecodeError>;
}

/// [`Decoder`] backed by `serde_json`, supporting the `json` format.
///
/// ```
/// use input_resolver::{Decoder, JsonDecoder};
///
/// let decoded = JsonDecoder.decode(br#"{"numberField": 123}"#, "json")?;
/// assert_eq!(decoded.get("numberField"), Some(&serde_json::json!(123)));
/// assert!(JsonDecoder.decode(b"[1, 2, 3]", "json").is_err());
/// # Ok::<_, input_resolver::DecodeError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDecoder;

impl Decoder for JsonDecoder {
    fn decode(&self, raw: &[u8], format: &str) -> Result<Map<String, Value>, DecodeError> {
        if format != "json" {
            return Err(DecodeError::new(
                format,
                format!("unsupported format '{format}'; expected \"json\""),
            ));
        }
        match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(DecodeError::new(
                format,
                format!("expected a JSON object at the top level, found {other}"),
            )),
            Err(err) => Err(DecodeError::new(format, err)),
        }
    }
}

impl<D: Decoder + ?Sized> Decoder for &D {
    fn decode(&self, raw: &[u8], format: &str) -> Result<Map<String, Value>, DecodeError> {
        (**self).decode(raw, format)
    }
}
