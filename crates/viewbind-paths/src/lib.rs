use proc_macro2::TokenStream;
use quote::quote;
use syn::Path;

fn env_path(name: &str) -> Option<TokenStream> {
    std::env::var(name)
        .ok()
        .and_then(|value| syn::parse_str::<Path>(value.trim()).ok())
        .map(|path| quote!(#path))
}

///
/// CratePaths
///
/// Crate roots named by macro and build-script output. Defaults to the
/// `::viewbind::` facade, which also resolves inside the facade itself
/// through `extern crate self as viewbind`. `VIEWBIND_CORE_CRATE` and
/// `VIEWBIND_SCHEMA_CRATE` override each root for crates that depend on
/// `viewbind-core` or `viewbind-schema` directly.
///

#[derive(Clone, Debug, Default)]
pub struct CratePaths {
    pub core: TokenStream,
    pub schema: TokenStream,
}

impl CratePaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: env_path("VIEWBIND_CORE_CRATE").unwrap_or_else(|| quote!(::viewbind::core)),
            schema: env_path("VIEWBIND_SCHEMA_CRATE")
                .unwrap_or_else(|| quote!(::viewbind::schema)),
        }
    }

    /// `ctor` as re-exported by core, for registration constructors.
    #[must_use]
    pub fn ctor(&self) -> TokenStream {
        let core = &self.core;

        quote!(#core::__reexports::ctor)
    }
}

#[must_use]
pub fn paths() -> CratePaths {
    CratePaths::new()
}

///
/// TESTS
///
