//! Procedural macros for `input_resolver`.
//!
//! `#[derive(FieldTarget)]` implements `input_resolver::FieldTarget` for a
//! struct with named fields, so the populator can list, read and assign its
//! fields by name. Field names default to the Rust identifier and can be
//! changed with `#[field_target(rename_all = "...")]` on the struct or
//! `#[field_target(rename = "...")]` on a field; `#[field_target(skip)]` hides
//! a field from the populator.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `input_resolver::FieldTarget`.
#[proc_macro_derive(FieldTarget, attributes(field_target))]
pub fn derive_field_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
