use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

use crate::shared::{collect_inject_fields, has_inject_attr};

pub fn handle_derive_injectable(item: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = syn::parse2(item)?;
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            name,
            "#[derive(Injectable)] only supports structs",
        ));
    };

    let inject_fields = match &data.fields {
        Fields::Named(named) => collect_inject_fields(named)?,
        other => {
            if other.iter().any(has_inject_attr) {
                return Err(syn::Error::new_spanned(
                    name,
                    "#[inject] requires named struct fields",
                ));
            }
            Vec::new()
        }
    };

    let records = inject_fields.iter().map(|field| {
        let property = field.ident.to_string();
        let dependency_id = &field.dependency_id;
        quote! {
            ::wirebox::InjectionRecord {
                property: #property,
                dependency_id: #dependency_id,
            }
        }
    });

    let assign_arms = inject_fields.iter().map(|field| {
        let property = field.ident.to_string();
        let ident = &field.ident;
        let inner = &field.inner_type;
        quote! {
            #property => {
                let resolved = dependency.downcast::<#inner>().map_err(|_| {
                    ::wirebox::DiError::Resolution {
                        id: record.dependency_id.to_string(),
                        target: stringify!(#name),
                        property: record.property,
                    }
                })?;
                self.#ident = ::std::option::Option::Some(resolved);
                ::std::result::Result::Ok(())
            }
        }
    });

    // Unused when the type declares no injections.
    let dependency_param = if inject_fields.is_empty() {
        quote!(_dependency)
    } else {
        quote!(dependency)
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::wirebox::Injectable for #name #ty_generics #where_clause {
            fn injections() -> &'static [::wirebox::InjectionRecord] {
                &[#(#records),*]
            }

            fn assign(
                &mut self,
                record: &::wirebox::InjectionRecord,
                #dependency_param: ::wirebox::Shared,
            ) -> ::std::result::Result<(), ::wirebox::DiError> {
                match record.property {
                    #(#assign_arms)*
                    _ => ::std::result::Result::Err(::wirebox::DiError::Resolution {
                        id: record.dependency_id.to_string(),
                        target: stringify!(#name),
                        property: record.property,
                    }),
                }
            }
        }
    })
}
