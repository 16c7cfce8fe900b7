use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, LitStr, Result};

use crate::utils::upper_snake;

pub fn handle_derive_singleton(item: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = syn::parse2(item)?;
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("singleton"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "#[derive(Singleton)] requires a #[singleton(\"Id\")] attribute",
            )
        })?;
    let dependency_id: LitStr = attr.parse_args()?;

    // One registration hook per type, picked up by Container::with_registered().
    let registration = format_ident!("__WIREBOX_SINGLETON_{}", upper_snake(&name.to_string()));

    Ok(quote! {
        impl ::wirebox::Singleton for #name {
            const DEPENDENCY_ID: &'static str = #dependency_id;
        }

        #[::wirebox::linkme::distributed_slice(::wirebox::SINGLETON_REGISTRATIONS)]
        #[linkme(crate = ::wirebox::linkme)]
        static #registration: fn(&mut ::wirebox::Container) = |container| {
            container.register_singleton::<#name>();
        };
    })
}
