//! Unit tests for option validation and parsing.

use rstest::rstest;
use serde_json::{Value, json};

use super::{FieldMap, ResolutionOrder, ResolveOptions, RestrictMap};
use crate::{ResolveError, SourceTag};

#[test]
fn null_and_empty_options_use_defaults() {
    for value in [Value::Null, json!({})] {
        let options = ResolveOptions::from_value(&value).unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(options, ResolveOptions::default());
        assert_eq!(options.order().to_string(), "GPFCSHA");
    }
}

#[rstest]
#[case(json!({"what is this": "crazy thing"}), "what is this")]
#[case(json!({"order": "GPC", "orderr": "GPC"}), "orderr")]
#[case(json!({"aaa": 1, "zzz": 2}), "aaa")]
fn unknown_keys_are_rejected(#[case] options: Value, #[case] expected: &str) {
    match ResolveOptions::from_value(&options) {
        Err(ResolveError::UnrecognizedOption { key }) => assert_eq!(key, expected),
        other => panic!("expected UnrecognizedOption, got {other:?}"),
    }
}

#[test]
fn first_unknown_key_is_taken_in_sorted_order() {
    let options: Value = serde_json::from_str(r#"{"zzz": 2, "map": {}, "aaa": 1}"#)
        .unwrap_or_else(|err| panic!("{err}"));
    let entries = options.as_object().cloned().unwrap_or_default();
    match super::validate_option_keys(&entries) {
        Err(ResolveError::UnrecognizedOption { key }) => assert_eq!(key, "aaa"),
        other => panic!("expected UnrecognizedOption, got {other:?}"),
    }
}

#[test]
fn unknown_keys_win_over_malformed_values() {
    let options = json!({"order": 42, "what is this": true});
    assert!(matches!(
        ResolveOptions::from_value(&options),
        Err(ResolveError::UnrecognizedOption { .. })
    ));
}

#[rstest]
#[case(json!("GPC"), vec![SourceTag::Query, SourceTag::Body, SourceTag::Cookies])]
#[case(json!(["S", "cookies"]), vec![SourceTag::Server, SourceTag::Cookies])]
#[case(json!("A"), vec![SourceTag::Attributes])]
fn parses_order(#[case] order: Value, #[case] expected: Vec<SourceTag>) {
    let options = ResolveOptions::from_value(&json!({ "order": order }))
        .unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(options.order().tags(), expected.as_slice());
}

#[rstest]
#[case(json!({"order": "GXP"}), "order")]
#[case(json!({"order": "GPG"}), "order")]
#[case(json!({"order": ""}), "order")]
#[case(json!({"order": 7}), "order")]
#[case(json!({"order": ["G", 1]}), "order")]
#[case(json!({"map": ["q"]}), "map")]
#[case(json!({"map": {"q": 1}}), "map")]
#[case(json!({"restrict": "SC"}), "restrict")]
#[case(json!({"restrict": {"sessionId": "Sx"}}), "restrict")]
#[case(json!({"restrict": {"sessionId": true}}), "restrict")]
#[case(json!(["order"]), "<root>")]
fn malformed_values_are_invalid(#[case] options: Value, #[case] expected_key: &str) {
    match ResolveOptions::from_value(&options) {
        Err(ResolveError::InvalidOption { key, .. }) => assert_eq!(key, expected_key),
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn parses_map_and_restrict() {
    let options = ResolveOptions::from_value(&json!({
        "map": {"q": "searchQuery", "PHPSESSID": "sessionId"},
        "restrict": {"pageNumber": "G", "sessionId": ["S", "C"]},
    }))
    .unwrap_or_else(|err| panic!("{err}"));

    let expected_map: FieldMap = [("q", "searchQuery"), ("PHPSESSID", "sessionId")]
        .into_iter()
        .collect();
    assert_eq!(options.map(), &expected_map);
    assert_eq!(options.map().target_for("p"), "p");

    let mut expected_restrict = RestrictMap::new();
    expected_restrict.insert("pageNumber", [SourceTag::Query]);
    expected_restrict.insert("sessionId", [SourceTag::Server, SourceTag::Cookies]);
    assert_eq!(options.restrictions(), &expected_restrict);
    assert!(options.restrictions().allows("ipAddress", SourceTag::Headers));
}

#[test]
fn builder_matches_parsed_options() {
    let built = ResolveOptions::new()
        .with_order("GPFCSHA".parse::<ResolutionOrder>().unwrap_or_default())
        .rename("PHPSESSID", "sessionId")
        .restrict("sessionId", [SourceTag::Server, SourceTag::Cookies]);
    let parsed = ResolveOptions::from_value(&json!({
        "order": "GPFCSHA",
        "map": {"PHPSESSID": "sessionId"},
        "restrict": {"sessionId": "SC"},
    }))
    .unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(built, parsed);
}

#[test]
fn order_rejects_duplicates_when_built_directly() {
    let err = ResolutionOrder::new([SourceTag::Query, SourceTag::Query]).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn field_map_lists_source_keys_per_field() {
    let map: FieldMap = [("sid", "sessionId"), ("PHPSESSID", "sessionId"), ("q", "searchQuery")]
        .into_iter()
        .collect();
    let keys: Vec<&str> = map.source_keys_for("sessionId").collect();
    assert_eq!(keys, ["PHPSESSID", "sid"]);
    assert_eq!(map.source_keys_for("pageNumber").count(), 0);
    assert!(map.is_renamed("q"));
    assert!(!map.is_renamed("searchQuery"));
}
