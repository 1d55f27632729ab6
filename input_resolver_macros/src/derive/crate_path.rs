//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[field_target(crate = "...")]` attribute value into
//! the path generated code uses to reach `input_resolver`.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to the absolute path `::input_resolver`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::input_resolver }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, ensure};
    use rstest::rstest;

    #[rstest]
    #[case::alias("resolver", "resolver")]
    #[case::nested("deps::input_resolver", "deps :: input_resolver")]
    #[case::absolute("::vendored::input_resolver", ":: vendored :: input_resolver")]
    fn override_is_emitted_verbatim(#[case] raw: &str, #[case] expected: &str) -> Result<()> {
        let path: syn::Path = syn::parse_str(raw)?;
        let tokens = resolve(Some(&path)).to_string();
        ensure!(tokens == expected, "unexpected tokens: {tokens}");
        Ok(())
    }

    #[test]
    fn defaults_to_absolute_crate_path() {
        assert_eq!(resolve(None).to_string(), ":: input_resolver");
    }
}
