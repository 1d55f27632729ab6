use input_resolver::FieldTarget;

#[derive(Default, FieldTarget)]
#[field_target(rename_all = "camelCase")]
struct SearchRequest {
    search_query: String,
    page_number: u32,
    #[field_target(skip)]
    cache_key: Option<u64>,
}

fn main() {
    let mut request = SearchRequest::default();
    let _: input_resolver::ResolveResult<bool> =
        request.set_field("searchQuery", serde_json::json!("hotels"));
    let _ = (request.page_number, request.cache_key);
}
