//! ## Crate layout
//! - `build`: the binder generator, driven from `build.rs` through `build!`.
//! - `config`: `viewbind.toml` build configuration.
//! - `core`: run-time traits, `Bound<T>`, the binder registry and dispatch.
//! - `macros`: `#[component]`, `#[host]` and `#[bind]`.
//! - `schema`: the registered type model and its validation.
//! - `ui`: the default base component.
//!
//! The `prelude` covers what host and component code needs.

pub use viewbind_build as build;
pub use viewbind_config_build as config;
pub use viewbind_core as core;
pub use viewbind_derive as macros;
pub use viewbind_schema as schema;

// macro output inside this crate names `::viewbind::..`
extern crate self as viewbind;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//
// Macros
//

pub use viewbind_core::{inject, try_inject};
pub use viewbind_build::build;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        core::{
            DispatchError, InjectError, inject, try_inject,
            traits::{Component as _, FindView, Host as _, Path as _},
            view::{Bound, ViewRef, view_ref},
        },
        macros::{bind, component, host},
        ui::View,
    };
}

///
/// ui
///
/// `View` is the root every bound component descends from unless the
/// build configuration names another base type.
///

pub mod ui {
    use crate::macros::component;

    #[component]
    #[derive(Clone, Copy, Debug, Default)]
    pub struct View;
}
