use input_resolver::FieldTarget;

/// Uses the real crate name as a self-referential alias so no workspace
/// reconfiguration is needed.
#[derive(Default, FieldTarget)]
#[field_target(crate = "input_resolver")]
struct AliasedTarget {
    value: String,
}

fn main() {
    let target = AliasedTarget::default();
    let _: Vec<String> = target.field_names();
    let _ = target.value;
}
