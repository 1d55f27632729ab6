use input_resolver::{FieldTarget, ResolvedFields, populate};

#[derive(Default, FieldTarget)]
struct Page<T> {
    items: Vec<T>,
    total: u64,
}

fn main() {
    let mut page = Page::<String>::default();
    let _ = populate(&mut page, &ResolvedFields::new());
    let _ = (page.items.len(), page.total);
}
