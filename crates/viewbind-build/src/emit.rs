use crate::{
    diagnostics::Diagnostics,
    discover::{AnnotatedDeclaration, HostGroup},
    imports::ImportSet,
};
use convert_case::{Case, Casing};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{format_ident, quote};
use viewbind_config_build::InvalidFieldPolicy;
use viewbind_core::naming::{unit_ident, unit_name};
use viewbind_paths::CratePaths;

///
/// TypeRef
/// how an assignment names its component type
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeRef {
    /// Through an import entry.
    Local(String),

    /// By fully-qualified path; used for fields that have no import.
    Qualified(String),
}

///
/// Assignment
/// one generated `target.<field> = ...` statement
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub field: String,
    pub ty: TypeRef,
    pub id: i32,
}

///
/// GeneratedUnit
///
/// The binder source for one host: a module wrapping the `<Host>ViewBinder`
/// type, its `inject` method and the constructor that registers it.
///

#[derive(Clone, Debug)]
pub struct GeneratedUnit {
    pub package: String,
    pub host: String,
    pub name: String,
    pub module: String,
    pub imports: ImportSet,
    pub assignments: Vec<Assignment>,
    paths: CratePaths,
}

impl GeneratedUnit {
    /// Fully-qualified path of the host this unit binds.
    #[must_use]
    pub fn host_path(&self) -> String {
        format!("{}::{}", self.package, self.host)
    }

    /// Registry key the unit registers under.
    #[must_use]
    pub fn unit_name(&self) -> String {
        unit_name(&self.host_path())
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module)
    }

    /// Package declaration: header comment, module opening and the glob
    /// import of the host's package.
    #[must_use]
    pub fn package_section(&self) -> String {
        format!(
            "// @generated by viewbind for {}\npub mod {} {{\nuse ::{}::*;\n",
            self.host_path(),
            self.module,
            self.package
        )
    }

    /// One `use` line per import entry, in path order.
    #[must_use]
    pub fn import_section(&self) -> String {
        let mut out = String::new();
        for entry in &self.imports {
            if entry.is_aliased() {
                out.push_str(&format!("use ::{} as {};\n", entry.path, entry.local));
            } else {
                out.push_str(&format!("use ::{};\n", entry.path));
            }
        }

        out
    }

    /// Element tokens: binder type, `inject` method and registration.
    #[must_use]
    pub fn body(&self) -> TokenStream {
        let core = &self.paths.core;
        let ctor = self.paths.ctor();
        let host = format_ident!("{}", self.host);
        let unit = format_ident!("{}", self.name);
        let unit_name = self.unit_name();

        let statements = self.assignments.iter().filter_map(|assignment| {
            let field = field_ident(&assignment.field)?;
            let ty = type_tokens(&assignment.ty)?;
            let id = Literal::i32_unsuffixed(assignment.id);
            let name = &assignment.field;

            Some(quote! {
                target.#field = #core::view::Bound::<#ty>::cast(
                    target.find_view_by_id(#id),
                    #id,
                    #name,
                )?;
            })
        });

        quote! {
            use #core::traits::FindView as _;

            pub struct #unit;

            impl #unit {
                pub fn inject(
                    target: &mut #host,
                ) -> ::core::result::Result<(), #core::error::InjectError> {
                    #(#statements)*
                    ::core::result::Result::Ok(())
                }
            }

            #[cfg(not(target_arch = "wasm32"))]
            #[#ctor::ctor(unsafe, anonymous, crate_path = #ctor)]
            fn __register() {
                #core::registry::register::<#host>(#unit_name, #unit::inject);
            }
        }
    }

    /// Full unit source.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{}{}{}\n}}\n",
            self.package_section(),
            self.import_section(),
            self.body()
        )
    }
}

/// Build the unit for one host group.
///
/// `conforms` says whether a declaration passed the base type check; the
/// caller has already reported the ones that did not. Returns `None` when
/// `policy` is `Abort` and any declaration failed, or when the host itself
/// cannot be named in Rust source.
pub fn emit(
    group: &HostGroup,
    conforms: impl Fn(&AnnotatedDeclaration) -> bool,
    policy: InvalidFieldPolicy,
    paths: &CratePaths,
    diagnostics: &mut Diagnostics,
) -> Option<GeneratedUnit> {
    let host_path = group.path();
    let (valid, invalid): (Vec<&AnnotatedDeclaration>, Vec<&AnnotatedDeclaration>) =
        group.declarations.iter().partition(|decl| conforms(*decl));

    if policy == InvalidFieldPolicy::Abort && !invalid.is_empty() {
        diagnostics.warning(format!(
            "no binder generated for '{host_path}': {} field(s) failed the type check",
            invalid.len()
        ));
        return None;
    }
    if syn::parse_str::<Ident>(&group.host).is_err()
        || syn::parse_str::<syn::Path>(&group.package).is_err()
    {
        diagnostics.error(format!("host '{host_path}' cannot be named in generated code"));
        return None;
    }

    // the unit declares its own struct beside the glob-imported host
    let name = unit_ident(&group.host);
    let imports =
        ImportSet::with_reserved(&[group.host.as_str(), name.as_str()], valid.iter().copied());

    let mut assignments = Vec::new();
    for decl in &group.declarations {
        let ty = if let Some(local) = imports.local(&decl.ty) {
            TypeRef::Local(local.to_string())
        } else if policy == InvalidFieldPolicy::Emit {
            TypeRef::Qualified(decl.ty.clone())
        } else {
            continue;
        };

        if field_ident(&decl.field).is_none() || type_tokens(&ty).is_none() {
            diagnostics.error(format!(
                "field '{}' on '{host_path}' cannot be assigned in generated code",
                decl.field
            ));
            continue;
        }

        assignments.push(Assignment {
            field: decl.field.clone(),
            ty,
            id: decl.id,
        });
    }

    let module = format!("{}_{name}", group.package.replace("::", "_")).to_case(Case::Snake);

    Some(GeneratedUnit {
        package: group.package.clone(),
        host: group.host.clone(),
        name,
        module,
        imports,
        assignments,
        paths: paths.clone(),
    })
}

// keywords come back raw; names that cannot be raw are rejected
fn field_ident(field: &str) -> Option<Ident> {
    if let Ok(ident) = syn::parse_str::<Ident>(field) {
        return Some(ident);
    }
    if matches!(field, "self" | "Self" | "super" | "crate" | "_") {
        return None;
    }

    syn::parse_str::<Ident>(&format!("r#{field}"))
        .ok()
        .map(|_| Ident::new_raw(field, Span::call_site()))
}

fn type_tokens(ty: &TypeRef) -> Option<TokenStream> {
    match ty {
        TypeRef::Local(local) => syn::parse_str::<Ident>(local).ok().map(|i| quote!(#i)),
        TypeRef::Qualified(path) => syn::parse_str::<syn::Path>(&format!("::{path}"))
            .ok()
            .map(|p| quote!(#p)),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{decl, paths};

    fn main_screen() -> HostGroup {
        HostGroup {
            package: "app::screens".to_string(),
            host: "MainScreen".to_string(),
            declarations: vec![
                decl("app::screens", "MainScreen", "title_label", "app::widgets::Label", 100),
                decl("app::screens", "MainScreen", "count", "std::string::String", 5),
                decl("app::screens", "MainScreen", "type", "app::widgets::Label", 101),
            ],
        }
    }

    fn is_widget(decl: &AnnotatedDeclaration) -> bool {
        decl.ty.starts_with("app::widgets::")
    }

    #[test]
    fn skip_policy_drops_invalid_fields() {
        let mut diags = Diagnostics::new();
        let unit = emit(&main_screen(), is_widget, InvalidFieldPolicy::Skip, &paths(), &mut diags)
            .unwrap();

        assert_eq!(unit.name, "MainScreenViewBinder");
        assert_eq!(unit.module, "app_screens_main_screen_view_binder");
        assert_eq!(unit.file_name(), "app_screens_main_screen_view_binder.rs");
        assert_eq!(unit.unit_name(), "app::screens::MainScreenViewBinder");
        assert_eq!(unit.imports.len(), 1);
        assert!(!unit.imports.contains("std::string::String"));

        let fields: Vec<&str> = unit.assignments.iter().map(|a| a.field.as_str()).collect();
        assert_eq!(fields, vec!["title_label", "type"]);
        assert!(diags.is_empty());
    }

    #[test]
    fn emit_policy_keeps_invalid_fields_by_full_path() {
        let mut diags = Diagnostics::new();
        let unit = emit(&main_screen(), is_widget, InvalidFieldPolicy::Emit, &paths(), &mut diags)
            .unwrap();

        assert_eq!(unit.assignments.len(), 3);
        assert_eq!(
            unit.assignments[1].ty,
            TypeRef::Qualified("std::string::String".to_string())
        );
        assert_eq!(unit.imports.len(), 1);
        assert!(unit.render().contains(":: std :: string :: String"));
    }

    #[test]
    fn abort_policy_emits_nothing_for_the_host() {
        let mut diags = Diagnostics::new();
        let unit = emit(&main_screen(), is_widget, InvalidFieldPolicy::Abort, &paths(), &mut diags);

        assert!(unit.is_none());
        assert_eq!(diags.len(), 1);
        assert!(!diags.has_errors());
    }

    #[test]
    fn render_orders_package_imports_then_body() {
        let mut diags = Diagnostics::new();
        let unit = emit(&main_screen(), is_widget, InvalidFieldPolicy::Skip, &paths(), &mut diags)
            .unwrap();
        let source = unit.render();

        let package = source.find("use ::app::screens::*;").unwrap();
        let import = source.find("use ::app::widgets::Label;").unwrap();
        let body = source.find("pub struct MainScreenViewBinder").unwrap();
        assert!(package < import && import < body, "{source}");

        assert!(source.contains("target . r#type ="), "{source}");
        assert!(source.contains("\"app::screens::MainScreenViewBinder\""), "{source}");
        assert!(source.contains("ctor (unsafe , anonymous ,"), "{source}");
        assert!(source.ends_with("}\n"));
    }

    #[test]
    fn host_named_like_a_component_keeps_its_name() {
        let group = HostGroup {
            package: "app".to_string(),
            host: "Label".to_string(),
            declarations: vec![decl("app", "Label", "inner", "widgets::Label", 1)],
        };
        let mut diags = Diagnostics::new();
        let unit = emit(&group, |_| true, InvalidFieldPolicy::Skip, &paths(), &mut diags).unwrap();

        assert_eq!(unit.imports.local("widgets::Label"), Some("Label2"));
        assert!(unit.import_section().contains("use ::widgets::Label as Label2;"));
    }

    #[test]
    fn component_named_like_the_binder_is_aliased() {
        let group = HostGroup {
            package: "app".to_string(),
            host: "Main".to_string(),
            declarations: vec![decl("app", "Main", "panel", "w::MainViewBinder", 1)],
        };
        let mut diags = Diagnostics::new();
        let unit = emit(&group, |_| true, InvalidFieldPolicy::Skip, &paths(), &mut diags).unwrap();

        assert_eq!(unit.imports.local("w::MainViewBinder"), Some("MainViewBinder2"));
        assert!(
            unit.import_section()
                .contains("use ::w::MainViewBinder as MainViewBinder2;")
        );
        assert_eq!(
            unit.assignments[0].ty,
            TypeRef::Local("MainViewBinder2".to_string())
        );

        let source = unit.render();
        assert!(source.contains("pub struct MainViewBinder ;"), "{source}");
        assert!(source.contains("Bound :: < MainViewBinder2 >"), "{source}");
    }
}
