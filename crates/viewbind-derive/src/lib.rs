//! Marker attributes that record the static type model.
//!
//! - `#[component(extends = "Parent")]` declares a UI component and its
//!   supertype edge.
//! - `#[host]` declares a host struct; its fields marked `#[bind(<id>)]`
//!   are injected by the generated binder.
//!
//! Each attribute re-emits the item, implements the runtime traits and
//! registers a schema node before `main` runs.

mod helper;
mod node;

use proc_macro::TokenStream;

/// Declares a UI component type.
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    node::component::expand(args.into(), input.into())
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}

/// Declares a host type whose `#[bind(..)]` fields receive components.
#[proc_macro_attribute]
pub fn host(args: TokenStream, input: TokenStream) -> TokenStream {
    node::host::expand(args.into(), input.into())
        .unwrap_or_else(darling::Error::write_errors)
        .into()
}

/// Only meaningful on the fields of a `#[host]` struct, where `#[host]`
/// consumes it. Anywhere else it is an error.
#[proc_macro_attribute]
pub fn bind(_args: TokenStream, input: TokenStream) -> TokenStream {
    let input = proc_macro2::TokenStream::from(input);

    syn::Error::new_spanned(
        &input,
        "#[bind] can only be used on fields of a #[host] struct",
    )
    .to_compile_error()
    .into()
}
