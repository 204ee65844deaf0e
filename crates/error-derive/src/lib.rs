//! `#[derive(Error)]` for error enums
//!
//! Every variant needs a `#[msg = "..."]` attribute, which becomes its [Display](std::fmt::Display)
//! output. Variants may either be units or wrap exactly one value; wrapped values get a
//! `From` impl and are reported as the error's `source()`.

use proc_macro::TokenStream;
use quote::quote;

#[proc_macro_derive(Error, attributes(msg))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    let item: syn::ItemEnum = match syn::parse(input) {
        Ok(item) => item,
        Err(error) => return error.to_compile_error().into(),
    };

    let name = &item.ident;
    let mut variant_displays = vec![];
    let mut from_impls = vec![];
    let mut variant_sources = vec![];

    for variant in &item.variants {
        let ident = &variant.ident;

        let display_value = variant
            .attrs
            .iter()
            .filter_map(|attr| match &attr.meta {
                syn::Meta::NameValue(name_value) if name_value.path.is_ident("msg") => {
                    Some(&name_value.value)
                },
                _ => None,
            })
            .next();

        let Some(display_value) = display_value else {
            return syn::Error::new_spanned(variant, "missing #[msg = \"...\"] attribute")
                .to_compile_error()
                .into();
        };

        match &variant.fields {
            syn::Fields::Unit => {
                variant_displays.push(quote!(
                    Self::#ident => ::std::fmt::Display::fmt(#display_value, f)
                ));
            },
            syn::Fields::Unnamed(unnamed_fields) if unnamed_fields.unnamed.len() == 1 => {
                let ty = &unnamed_fields.unnamed[0].ty;

                from_impls.push(quote!(
                    #[automatically_derived]
                    impl ::std::convert::From<#ty> for #name {
                        fn from(value: #ty) -> Self {
                            Self::#ident(value)
                        }
                    }
                ));
                variant_displays.push(quote!(
                    Self::#ident(_) => ::std::fmt::Display::fmt(#display_value, f)
                ));
                variant_sources.push(quote!(Self::#ident(value) => Some(value)));
            },
            _ => {
                return syn::Error::new_spanned(
                    &variant.fields,
                    "variants must be units or wrap exactly one value",
                )
                .to_compile_error()
                .into();
            },
        }
    }

    // Unit variants have no source
    let fallback_source = if variant_sources.len() < item.variants.len() {
        quote!(_ => None,)
    } else {
        quote!()
    };

    quote!(
        #[automatically_derived]
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(
                        #variant_displays,
                    )*
                }
            }
        }

        #(
            #from_impls
        )*

        #[automatically_derived]
        impl ::std::error::Error for #name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    #(
                        #variant_sources,
                    )*
                    #fallback_source
                }
            }
        }
    )
    .into()
}
