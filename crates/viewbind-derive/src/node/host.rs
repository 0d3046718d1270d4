use crate::helper::{
    def_expr, impl_path, quote_slice, register_node, reject_generics, schema_const, to_path,
};
use darling::{Error as DarlingError, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Attribute, Data, DeriveInput, Expr, Fields, GenericArgument, Ident, PathArguments, Type,
    ext::IdentExt,
};
use viewbind_paths::{CratePaths, paths};

/// Field wrapper every bound field must be declared with.
const BOUND_WRAPPER: &str = "Bound";

///
/// BoundField
/// one `#[bind(..)]` field as parsed from the host struct
///

#[derive(Debug)]
pub struct BoundField {
    pub ident: Ident,
    pub component: Type,
    pub id: Expr,
}

pub fn expand(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
    let nested = NestedMeta::parse_meta_list(args)?;
    if let Some(arg) = nested.first() {
        return Err(DarlingError::custom("#[host] takes no arguments").with_span(arg));
    }

    let mut item: DeriveInput = syn::parse2(input)?;
    reject_generics(&item, "host")?;

    let fields = take_bound_fields(&mut item)?;

    Ok(generate(&item, &fields, &paths()))
}

// Pull `#[bind(..)]` off every named field, leaving the struct free of
// attributes the compiler would not recognise.
fn take_bound_fields(item: &mut DeriveInput) -> Result<Vec<BoundField>, DarlingError> {
    let span_ident = item.ident.clone();
    let Data::Struct(data) = &mut item.data else {
        return Err(
            DarlingError::custom("#[host] can only be used on structs").with_span(&span_ident)
        );
    };
    let Fields::Named(named) = &mut data.fields else {
        return Err(DarlingError::custom("#[host] structs must have named fields")
            .with_span(&span_ident));
    };

    let mut errors = DarlingError::accumulator();
    let mut bound = Vec::new();
    let mut marked = 0usize;

    for field in &mut named.named {
        let (binds, rest): (Vec<Attribute>, Vec<Attribute>) = field
            .attrs
            .drain(..)
            .partition(|attr| attr.path().is_ident("bind"));
        field.attrs = rest;

        let Some(attr) = binds.first() else {
            continue;
        };
        marked += 1;
        if binds.len() > 1 {
            errors.push(
                DarlingError::custom("a field can carry at most one #[bind]").with_span(&binds[1]),
            );
            continue;
        }

        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let id = match attr.parse_args::<Expr>() {
            Ok(id) => id,
            Err(err) => {
                errors.push(err.into());
                continue;
            }
        };
        let Some(component) = bound_component(&field.ty) else {
            errors.push(
                DarlingError::custom(format!(
                    "#[bind] field '{ident}' must have type `{BOUND_WRAPPER}<T>`"
                ))
                .with_span(&field.ty),
            );
            continue;
        };

        bound.push(BoundField {
            ident,
            component,
            id,
        });
    }

    if marked == 0 {
        errors.push(
            DarlingError::custom("a #[host] struct needs at least one #[bind] field")
                .with_span(&span_ident),
        );
    }

    errors.finish_with(bound)
}

// `Bound<T>` (with any path prefix) -> `T`
fn bound_component(ty: &Type) -> Option<Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != BOUND_WRAPPER {
        return None;
    }
    let PathArguments::AngleBracketed(generics) = &segment.arguments else {
        return None;
    };
    if generics.args.len() != 1 {
        return None;
    }

    match generics.args.first()? {
        GenericArgument::Type(inner) => Some(inner.clone()),
        _ => None,
    }
}

fn generate(item: &DeriveInput, fields: &[BoundField], paths: &CratePaths) -> TokenStream {
    let core = &paths.core;
    let schema = &paths.schema;
    let ident = &item.ident;

    let def = def_expr(item, paths);
    let bindings = quote_slice(fields, |field| {
        let name = field.ident.unraw().to_string();
        let ty = to_path(&field.component, paths);
        let id = &field.id;

        quote! {
            #schema::node::Binding {
                ident: #name,
                ty: #ty,
                id: #id,
            }
        }
    });
    let node = quote! {
        #schema::node::Host {
            def: #def,
            bindings: #bindings,
        }
    };

    let path_impl = impl_path(item, paths);
    let registration = register_node(
        &schema_const(ident, "HOST"),
        &format_ident!("Host"),
        &node,
        paths,
    );

    quote! {
        #item

        #path_impl

        impl #core::traits::Host for #ident {}

        #registration
    }
}
