//! Expansion of `#[derive(FieldTarget)]`.

mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse `input` and emit the `FieldTarget` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let target = parse::parse_input(input)?;
    let krate = crate_path::resolve(target.attrs.crate_path.as_ref());
    Ok(generate::field_target_impl(input, &target, &krate))
}
