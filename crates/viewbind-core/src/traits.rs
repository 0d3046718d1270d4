use crate::view::ViewRef;

///
/// Path
///
/// Fully-qualified path of a declared type, `module_path!()` plus ident.
/// Implemented by `#[component]` and `#[host]`.
///

pub trait Path {
    const PATH: &'static str;
}

///
/// Component
/// marker for types declared with `#[component]`
///

pub trait Component: Path + 'static {}

///
/// FindView
///
/// The identifier lookup. Implemented by hand on every host; returns `None`
/// when no view is registered under `id`.
///

pub trait FindView {
    fn find_view_by_id(&self, id: i32) -> Option<ViewRef>;
}

///
/// Host
/// marker for types declared with `#[host]`
///

pub trait Host: Path + FindView + 'static {}
