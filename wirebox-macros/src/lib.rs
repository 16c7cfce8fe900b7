extern crate proc_macro2;

use proc_macro::TokenStream;

mod injectable_macro;
mod shared;
mod singleton_macro;
mod utils;

/// Marks a struct as constructible through the container's two-phase builder.
///
/// Fields annotated `#[inject("Id")]` must be declared `Option<Arc<T>>`; they
/// are resolved and assigned, in declaration order, before
/// `Container::construct` returns.
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    let output = injectable_macro::handle_derive_injectable(item);
    proc_macro::TokenStream::from(output.unwrap_or_else(|e| e.to_compile_error()))
}

/// Marks an injectable struct as a lazily constructed singleton.
///
/// `#[singleton("Id")]` fixes the identifier. The type is also picked up by
/// `Container::with_registered()` without any registration call site.
#[proc_macro_derive(Singleton, attributes(singleton))]
pub fn derive_singleton(item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    let output = singleton_macro::handle_derive_singleton(item);
    proc_macro::TokenStream::from(output.unwrap_or_else(|e| e.to_compile_error()))
}
