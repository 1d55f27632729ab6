//! Code generation for the `FieldTarget` implementation.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_quote};

use super::parse::ParsedTarget;

/// Emit `impl FieldTarget for <input>` using the parsed field list.
///
/// Generic structs gain `Serialize + DeserializeOwned` bounds on every
/// reachable field type.
pub(crate) fn field_target_impl(
    input: &DeriveInput,
    target: &ParsedTarget,
    krate: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in &target.fields {
            let ty = &field.ty;
            where_clause.predicates.push(parse_quote! {
                #ty: #krate::__private::serde::Serialize
                    + #krate::__private::serde::de::DeserializeOwned
            });
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let names: Vec<&str> = target.fields.iter().map(|f| f.name.as_str()).collect();
    let read_arms = target.fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            #name => #krate::__private::serde_json::to_value(&self.#member).ok(),
        }
    });
    let write_arms = target.fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            #name => {
                self.#member = #krate::__private::serde_json::from_value(value)
                    .map_err(|err| #krate::ResolveError::field_assignment(name, err))?;
                ::core::result::Result::Ok(true)
            }
        }
    });

    let set_fields = staged_set_fields(target, krate);

    quote! {
        impl #impl_generics #krate::FieldTarget for #ident #ty_generics #where_clause {
            fn field_names(&self) -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(::std::string::String::from(#names)),*]
            }

            fn declares(&self, name: &str) -> bool {
                [#(#names),*].contains(&name)
            }

            fn field(
                &self,
                name: &str,
            ) -> ::core::option::Option<#krate::__private::serde_json::Value> {
                match name {
                    #(#read_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #krate::__private::serde_json::Value,
            ) -> #krate::ResolveResult<bool> {
                match name {
                    #(#write_arms)*
                    _ => {
                        ::core::mem::drop(value);
                        ::core::result::Result::Ok(false)
                    }
                }
            }

            #set_fields
        }
    }
}

/// Emit a `set_fields` that converts every value before assigning any.
///
/// Each field gets an `Option<Ty>` slot; slots are indexed rather than named
/// after the field so raw identifiers need no special handling.
fn staged_set_fields(target: &ParsedTarget, krate: &TokenStream) -> TokenStream {
    if target.fields.is_empty() {
        return quote! {
            fn set_fields(
                &mut self,
                _values: &[(&str, #krate::__private::serde_json::Value)],
            ) -> #krate::ResolveResult<usize> {
                ::core::result::Result::Ok(0)
            }
        };
    }
    let slots: Vec<_> = (0..target.fields.len())
        .map(|index| format_ident!("__staged_{}", index))
        .collect();
    let declare = target.fields.iter().zip(&slots).map(|(field, slot)| {
        let ty = &field.ty;
        quote! { let mut #slot: ::core::option::Option<#ty> = ::core::option::Option::None; }
    });
    let convert = target.fields.iter().zip(&slots).map(|(field, slot)| {
        let name = &field.name;
        quote! {
            #name => {
                #slot = ::core::option::Option::Some(
                    #krate::__private::serde_json::from_value(value.clone())
                        .map_err(|err| #krate::ResolveError::field_assignment(#name, err))?,
                );
            }
        }
    });
    let commit = target.fields.iter().zip(&slots).map(|(field, slot)| {
        let member = &field.ident;
        quote! {
            if let ::core::option::Option::Some(staged) = #slot {
                self.#member = staged;
                assigned += 1;
            }
        }
    });

    quote! {
        fn set_fields(
            &mut self,
            values: &[(&str, #krate::__private::serde_json::Value)],
        ) -> #krate::ResolveResult<usize> {
            #(#declare)*
            for (name, value) in values {
                match *name {
                    #(#convert)*
                    _ => {}
                }
            }
            let mut assigned = 0_usize;
            #(#commit)*
            ::core::result::Result::Ok(assigned)
        }
    }
}

#[cfg(test)]
mod tests {
    //! Token-level checks on the generated implementation.

    use super::*;
    use crate::derive::parse::parse_input;
    use anyhow::{Result, anyhow, ensure};

    fn expand(input: &DeriveInput) -> Result<String> {
        let target = parse_input(input).map_err(|err| anyhow!(err))?;
        Ok(field_target_impl(input, &target, &quote! { ::input_resolver }).to_string())
    }

    #[test]
    fn lists_external_names() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            #[field_target(rename_all = "camelCase")]
            struct Search {
                search_query: String,
                #[field_target(skip)]
                cache: String,
            }
        };
        let tokens = expand(&input)?;
        ensure!(tokens.contains("\"searchQuery\""), "missing renamed field: {tokens}");
        ensure!(!tokens.contains("\"cache\""), "skipped field leaked: {tokens}");
        ensure!(tokens.contains("self . search_query"), "missing member access: {tokens}");
        Ok(())
    }

    #[test]
    fn bounds_generic_field_types() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> {
                inner: T,
            }
        };
        let tokens = expand(&input)?;
        ensure!(
            tokens.contains("T : :: input_resolver :: __private :: serde :: Serialize"),
            "missing serialize bound: {tokens}"
        );
        ensure!(tokens.contains("DeserializeOwned"), "missing deserialize bound: {tokens}");
        Ok(())
    }

    #[test]
    fn set_fields_converts_before_assigning() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Pair {
                r#type: String,
                count: u32,
            }
        };
        let tokens = expand(&input)?;
        let (_, batch) = tokens
            .split_once("fn set_fields")
            .ok_or_else(|| anyhow!("missing set_fields: {tokens}"))?;
        let (convert, commit) = batch
            .split_once("let mut assigned")
            .ok_or_else(|| anyhow!("missing commit phase: {tokens}"))?;
        ensure!(
            convert.contains("__staged_0 = :: core :: option :: Option :: Some"),
            "first slot not staged: {tokens}"
        );
        ensure!(!convert.contains("self . count ="), "assigned before staging: {tokens}");
        ensure!(commit.contains("self . r#type = staged"), "raw field not committed: {tokens}");
        ensure!(commit.contains("self . count = staged"), "field not committed: {tokens}");
        Ok(())
    }

    #[test]
    fn concrete_structs_have_no_where_clause() -> Result<()> {
        let input: DeriveInput = parse_quote! {
            struct Plain {
                value: u32,
            }
        };
        let tokens = expand(&input)?;
        ensure!(!tokens.contains("where"), "unexpected where clause: {tokens}");
        Ok(())
    }
}
