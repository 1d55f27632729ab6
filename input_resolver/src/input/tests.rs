//! Unit tests for the input processors.

use std::any::Any;
use std::cell::Cell;

use rstest::rstest;
use serde_json::{Map, Value, json};

use super::{ArrayInputProcessor, Decoder, HttpInputProcessor, InputProcessor, JsonInputProcessor};
use crate::{DecodeError, FieldRecord, HttpRequest, ParameterBag, ResolveError, SourceTag};

/// Decoder returning a canned mapping and counting calls.
struct StubDecoder {
    data: Value,
    calls: Cell<usize>,
}

impl StubDecoder {
    fn returning(data: Value) -> Self {
        Self {
            data,
            calls: Cell::new(0),
        }
    }
}

impl Decoder for StubDecoder {
    fn decode(&self, _raw: &[u8], format: &str) -> Result<Map<String, Value>, DecodeError> {
        self.calls.set(self.calls.get() + 1);
        match &self.data {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(DecodeError::new(format, "stub failure")),
        }
    }
}

fn json_fields() -> FieldRecord {
    FieldRecord::new(["stringField", "numberField", "booleanField", "arrayField"])
}

#[rstest]
#[case::http(Box::new(HttpInputProcessor) as Box<dyn InputProcessor>)]
#[case::json(Box::new(JsonInputProcessor::new()) as Box<dyn InputProcessor>)]
#[case::array(Box::new(ArrayInputProcessor) as Box<dyn InputProcessor>)]
fn rejects_unsupported_input(#[case] processor: Box<dyn InputProcessor>) {
    let mut target = FieldRecord::new(["a"]);
    let unsupported: &dyn Any = &42_u8;
    match processor.initialize_request(&mut target, unsupported, &Value::Null) {
        Err(ResolveError::UnsupportedInput { processor: name, .. }) => {
            assert_eq!(name, processor.name());
        }
        other => panic!("expected UnsupportedInput, got {other:?}"),
    }
    assert_eq!(target, FieldRecord::new(["a"]));
}

#[rstest]
#[case::http(Box::new(HttpInputProcessor) as Box<dyn InputProcessor>)]
#[case::json(Box::new(JsonInputProcessor::new()) as Box<dyn InputProcessor>)]
fn rejects_unrecognised_options(#[case] processor: Box<dyn InputProcessor>) {
    let request = HttpRequest::new()
        .with_bag(SourceTag::Query, ParameterBag::from_iter([("a", 1)]))
        .with_content(r#"{"a": 1}"#);
    let mut target = FieldRecord::new(["a"]);
    let err = processor
        .initialize_request(&mut target, &request, &json!({"what is this": "crazy thing"}))
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnrecognizedOption { ref key } if key == "what is this"));
    assert_eq!(target.get("a"), None, "nothing populated");
}

#[test]
fn json_options_are_validated_before_decoding() {
    let decoder = StubDecoder::returning(json!({"stringField": "asd"}));
    let processor = JsonInputProcessor::with_decoder(&decoder);
    let mut target = json_fields();
    let result = processor.initialize_from_json(&mut target, &HttpRequest::new(), &json!({"nope": 1}));
    assert!(result.is_err());
    assert_eq!(decoder.calls.get(), 0);
}

#[test]
fn json_populates_scalars_and_arrays_verbatim() {
    let data = json!({"stringField": "asd", "numberField": 123, "booleanField": true, "arrayField": [3, 2, 1]});
    let decoder = StubDecoder::returning(data.clone());
    let mut target = json_fields();
    JsonInputProcessor::with_decoder(&decoder)
        .initialize_from_json(&mut target, &HttpRequest::new(), &Value::Null)
        .unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(Value::Object(target.into_map()), data);
    assert_eq!(decoder.calls.get(), 1);
}

#[test]
fn json_order_and_restrict_are_accepted_and_inert() {
    let decoder = StubDecoder::returning(json!({"foo": "qwe"}));
    let mut target = json_fields();
    JsonInputProcessor::with_decoder(&decoder)
        .initialize_from_json(
            &mut target,
            &HttpRequest::new(),
            &json!({"map": {"foo": "stringField"}, "order": "G", "restrict": {"stringField": "H"}}),
        )
        .unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(target.get("stringField"), Some(&json!("qwe")));
}

#[test]
fn decode_failures_propagate() {
    let decoder = StubDecoder::returning(Value::Null);
    let mut target = json_fields();
    let err = JsonInputProcessor::with_decoder(&decoder)
        .initialize_from_json(&mut target, &HttpRequest::new(), &Value::Null)
        .unwrap_err();
    assert!(matches!(err, ResolveError::Decode(_)));
}

#[rstest]
#[case(b"{".as_slice())]
#[case(b"".as_slice())]
#[case(b"[1]".as_slice())]
#[case(b"\"text\"".as_slice())]
fn json_decoder_rejects_non_objects(#[case] raw: &[u8]) {
    let request = HttpRequest::new().with_content(raw);
    let mut target = json_fields();
    let err = JsonInputProcessor::new()
        .initialize_from_json(&mut target, &request, &Value::Null)
        .unwrap_err();
    assert!(matches!(err, ResolveError::Decode(ref decode) if decode.format() == "json"));
}

#[test]
fn array_processor_accepts_maps_and_object_values() {
    let value = json!({"q": "cheap hotels", "p": 3});
    let processor = ArrayInputProcessor;
    let options = json!({"map": {"q": "searchQuery", "p": "pageNumber"}});

    let mut from_value = FieldRecord::new(["searchQuery", "pageNumber"]);
    processor
        .initialize_request(&mut from_value, &value, &options)
        .unwrap_or_else(|err| panic!("{err}"));

    let map = value.as_object().cloned().unwrap_or_default();
    let mut from_map = FieldRecord::new(["searchQuery", "pageNumber"]);
    processor
        .initialize_request(&mut from_map, &map, &options)
        .unwrap_or_else(|err| panic!("{err}"));

    assert_eq!(from_value, from_map);
    assert_eq!(from_map.get("pageNumber"), Some(&json!(3)));
}

#[test]
fn array_processor_rejects_non_object_values() {
    let mut target = FieldRecord::new(["a"]);
    let err = ArrayInputProcessor
        .initialize_request(&mut target, &json!([1, 2]), &Value::Null)
        .unwrap_err();
    assert!(matches!(err, ResolveError::UnsupportedInput { .. }));
}
