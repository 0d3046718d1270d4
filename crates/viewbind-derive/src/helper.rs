use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{DeriveInput, Ident};
use viewbind_paths::CratePaths;

/// Quote a slice by transforming each element and returning a token array.
pub fn quote_slice<T, F>(vec: &[T], transform: F) -> TokenStream
where
    F: Fn(&T) -> TokenStream,
{
    let items: Vec<TokenStream> = vec
        .iter()
        .map(transform)
        .filter(|ts| !ts.is_empty())
        .collect();

    quote! {
        &[#(#items),*]
    }
}

/// Resolve a type to its `Path::PATH` constant.
pub fn to_path<T: ToTokens>(t: &T, paths: &CratePaths) -> TokenStream {
    let core = &paths.core;

    quote! { <#t as #core::traits::Path>::PATH }
}

/// Name of the schema constant emitted next to a declared type.
pub fn schema_const(ident: &Ident, kind: &str) -> Ident {
    let ident_s = ident.to_string().to_case(Case::UpperSnake);

    format_ident!("__{ident_s}_{kind}_SCHEMA")
}

/// `impl Path` for a declared type.
pub fn impl_path(item: &DeriveInput, paths: &CratePaths) -> TokenStream {
    let core = &paths.core;
    let ident = &item.ident;
    let ident_s = ident.to_string();

    quote! {
        impl #core::traits::Path for #ident {
            const PATH: &'static str = concat!(module_path!(), "::", #ident_s);
        }
    }
}

/// Schema `Def` expression for a declared type.
pub fn def_expr(item: &DeriveInput, paths: &CratePaths) -> TokenStream {
    let schema = &paths.schema;
    let ident_s = item.ident.to_string();

    quote! {
        #schema::node::Def {
            module_path: module_path!(),
            ident: #ident_s,
        }
    }
}

/// Schema constant plus the constructor that registers it before `main`.
pub fn register_node(const_ident: &Ident, kind: &Ident, expr: &TokenStream, paths: &CratePaths) -> TokenStream {
    let schema = &paths.schema;
    let ctor = paths.ctor();

    quote! {
        #[doc(hidden)]
        #[allow(dead_code)]
        const #const_ident: #schema::node::#kind = #expr;

        #[cfg(not(target_arch = "wasm32"))]
        #[#ctor::ctor(unsafe, anonymous, crate_path = #ctor)]
        fn __ctor() {
            #schema::build::schema_write().insert_node(
                #schema::node::SchemaNode::#kind(#const_ident)
            );
        }
    }
}

/// Reject generic items: a schema path names exactly one type.
pub fn reject_generics(item: &DeriveInput, what: &str) -> Result<(), darling::Error> {
    if item.generics.params.is_empty() {
        Ok(())
    } else {
        Err(darling::Error::custom(format!("{what} types cannot be generic"))
            .with_span(&item.generics))
    }
}
