use crate::helper::{def_expr, impl_path, register_node, reject_generics, schema_const, to_path};
use darling::{Error as DarlingError, FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Path};
use viewbind_paths::{CratePaths, paths};

///
/// ComponentArgs
///

#[derive(Debug, Default, FromMeta)]
pub struct ComponentArgs {
    /// Parent component; omitted for a hierarchy root.
    #[darling(default)]
    pub extends: Option<Path>,
}

pub fn expand(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
    let nested = NestedMeta::parse_meta_list(args)?;
    let args = ComponentArgs::from_list(&nested)?;
    let item: DeriveInput = syn::parse2(input)?;

    if !matches!(item.data, Data::Struct(_)) {
        return Err(DarlingError::custom("#[component] can only be used on structs")
            .with_span(&item.ident));
    }
    reject_generics(&item, "component")?;

    Ok(generate(&item, &args, &paths()))
}

fn generate(item: &DeriveInput, args: &ComponentArgs, paths: &CratePaths) -> TokenStream {
    let core = &paths.core;
    let schema = &paths.schema;
    let ident = &item.ident;

    let def = def_expr(item, paths);
    let extends = match &args.extends {
        Some(parent) => {
            let parent = to_path(parent, paths);
            quote!(Some(#parent))
        }
        None => quote!(None),
    };
    let node = quote! {
        #schema::node::Component {
            def: #def,
            extends: #extends,
        }
    };

    let path_impl = impl_path(item, paths);
    let registration = register_node(
        &schema_const(ident, "COMPONENT"),
        &format_ident!("Component"),
        &node,
        paths,
    );

    quote! {
        #item

        #path_impl

        impl #core::traits::Component for #ident {}

        #registration
    }
}
