//! Parsing utilities for the `FieldTarget` derive macro.

mod literals;
mod rename;

use syn::{Attribute, Data, DeriveInput, Fields};

use literals::lit_str;
pub(crate) use rename::RenameAll;

/// Struct-level `#[field_target(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub rename_all: Option<RenameAll>,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[field_target(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

/// A field the populator can reach, with its resolved external name.
pub(crate) struct TargetField {
    pub ident: syn::Ident,
    pub ty: syn::Type,
    pub name: String,
}

/// Everything the generator needs from the input struct.
pub(crate) struct ParsedTarget {
    pub attrs: StructAttrs,
    pub fields: Vec<TargetField>,
}

/// Iterate all `#[field_target(...)]` attributes once and apply a callback.
fn parse_field_target<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("field_target")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts `#[field_target(...)]` metadata applied to a struct.
///
/// Recognises `rename_all` and `crate`; anything else is an error.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_field_target(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename_all") => {
                let value = lit_str(meta, "rename_all")?;
                out.rename_all = Some(RenameAll::parse(&value)?);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(meta.error("unknown field_target attribute; expected `rename_all` or `crate`")),
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[field_target(...)]` attributes.
///
/// Recognises `rename = "..."` and `skip`; anything else is an error.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_field_target(&field.attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename") => {
                out.rename = Some(lit_str(meta, "rename")?.value());
                Ok(())
            }
            Some("skip") => {
                out.skip = true;
                Ok(())
            }
            _ => Err(meta.error("unknown field_target attribute; expected `rename` or `skip`")),
        }
    })?;
    Ok(out)
}

/// Gathers the struct attributes and reachable fields in one pass.
///
/// Skipped fields are dropped here. Two fields resolving to the same external
/// name are rejected so lookups by name stay unambiguous.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedTarget> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FieldTarget requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "FieldTarget can only be derived for structs",
            ));
        }
    };

    let mut fields: Vec<TargetField> = Vec::with_capacity(named.len());
    for field in named {
        let field_attrs = parse_field_attrs(field)?;
        if field_attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "unnamed fields are not supported"));
        };
        let name = field_attrs.rename.unwrap_or_else(|| {
            let raw = ident.to_string();
            let unraw = raw.strip_prefix("r#").unwrap_or(&raw).to_owned();
            attrs
                .rename_all
                .map_or_else(|| unraw.clone(), |rule| rule.apply(&unraw))
        });
        if fields.iter().any(|existing| existing.name == name) {
            return Err(syn::Error::new_spanned(
                field,
                format!("duplicate field name '{name}'"),
            ));
        }
        fields.push(TargetField {
            ident,
            ty: field.ty.clone(),
            name,
        });
    }
    Ok(ParsedTarget { attrs, fields })
}
