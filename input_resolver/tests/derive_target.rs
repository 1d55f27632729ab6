//! Behaviour of `#[derive(FieldTarget)]` through the public populator.

use anyhow::{Result, anyhow, ensure};
use input_resolver::{
    ArrayInputProcessor, FieldTarget, ResolveError, ResolveOptions, ResolvedFields, populate,
    resolve_single,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use test_helpers::slot_map;

#[derive(Debug, Default, FieldTarget)]
#[field_target(rename_all = "kebab-case")]
struct Booking {
    check_in: Option<String>,
    #[field_target(rename = "guests")]
    guest_count: u8,
    #[field_target(skip)]
    audit_note: String,
    r#type: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Default, FieldTarget)]
struct Shape {
    origin: Point,
    label: String,
    scale: u16,
}

#[derive(Debug, Default, FieldTarget)]
struct Wrapper<T> {
    inner: Option<T>,
}

#[derive(Debug, Default, FieldTarget)]
struct Empty {}

#[derive(Debug, FieldTarget)]
struct Scores {
    a: f64,
    b: u32,
}

fn resolved(payload: Value) -> Result<ResolvedFields> {
    Ok(resolve_single(&slot_map(payload)?, ResolveOptions::new().map()))
}

#[test]
fn exposes_external_names_in_declaration_order() {
    let booking = Booking::default();
    assert_eq!(booking.field_names(), ["check-in", "guests", "type"]);
    assert!(booking.declares("guests"));
    assert!(!booking.declares("guest_count"));
    assert!(!booking.declares("audit-note"));
}

#[test]
fn reads_and_writes_fields_by_name() -> Result<()> {
    let mut booking = Booking::default();
    ensure!(booking.set_field("check-in", json!("2026-10-19"))?);
    ensure!(booking.set_field("type", json!("suite"))?);
    ensure!(!booking.set_field("audit_note", json!("hidden"))?);
    ensure!(booking.field("check-in") == Some(json!("2026-10-19")));
    ensure!(booking.field("guests") == Some(json!(0)));
    ensure!(booking.field("audit_note").is_none());
    ensure!(booking.r#type.as_deref() == Some("suite"));
    ensure!(booking.audit_note.is_empty());
    Ok(())
}

#[test]
fn populates_nested_types_through_serde() -> Result<()> {
    let mut shape = Shape::default();
    populate(
        &mut shape,
        &resolved(json!({"origin": {"x": 1, "y": -2}, "label": "marker", "extra": true}))?,
    )?;
    ensure!(shape.origin == Point { x: 1, y: -2 });
    ensure!(shape.label == "marker");
    ensure!(shape.scale == 0, "unmentioned field must keep its value");
    Ok(())
}

#[test]
fn rejection_restores_earlier_fields() -> Result<()> {
    let mut shape = Shape {
        label: String::from("before"),
        ..Shape::default()
    };
    // `label` sorts before `origin`; it must not be assigned either.
    let err = populate(
        &mut shape,
        &resolved(json!({"label": "after", "origin": "not a point"}))?,
    )
    .err()
    .ok_or_else(|| anyhow!("expected a field assignment error"))?;
    ensure!(
        matches!(err, ResolveError::FieldAssignment { ref field, .. } if field == "origin"),
        "unexpected error: {err}"
    );
    ensure!(shape.label == "before");
    Ok(())
}

#[test]
fn rejection_keeps_values_json_cannot_represent() -> Result<()> {
    let mut scores = Scores {
        a: f64::INFINITY,
        b: 7,
    };
    let err = populate(
        &mut scores,
        &resolved(json!({"a": 1.5, "b": "not a number"}))?,
    )
    .err()
    .ok_or_else(|| anyhow!("expected a field assignment error"))?;
    ensure!(
        matches!(err, ResolveError::FieldAssignment { ref field, .. } if field == "b"),
        "unexpected error: {err}"
    );
    ensure!(
        scores.a.is_infinite() && scores.a.is_sign_positive(),
        "a changed to {}",
        scores.a
    );
    ensure!(scores.b == 7, "b changed to {}", scores.b);
    Ok(())
}

#[test]
fn batch_assignment_counts_committed_fields() -> Result<()> {
    let mut scores = Scores { a: 0.0, b: 0 };
    let assigned = scores.set_fields(&[
        ("a", json!(2.5)),
        ("ignored", json!(true)),
        ("b", json!(3)),
    ])?;
    ensure!(assigned == 2, "assigned {assigned}");
    ensure!((scores.a - 2.5).abs() < f64::EPSILON && scores.b == 3);
    Ok(())
}

#[test]
fn generic_targets_deserialise_their_parameter() -> Result<()> {
    let mut wrapper = Wrapper::<Vec<String>>::default();
    ArrayInputProcessor.initialize_from_map(
        &mut wrapper,
        &slot_map(json!({"value": ["a", "b"]}))?,
        &json!({"map": {"value": "inner"}}),
    )?;
    ensure!(wrapper.inner == Some(vec![String::from("a"), String::from("b")]));
    Ok(())
}

#[test]
fn empty_targets_accept_nothing() -> Result<()> {
    let mut empty = Empty {};
    ensure!(empty.field_names().is_empty());
    ensure!(!empty.set_field("anything", json!(1))?);
    populate(&mut empty, &resolved(json!({"anything": 1}))?)?;
    Ok(())
}
