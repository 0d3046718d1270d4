//! ## Crate layout
//! - `dispatch`: run-time entry points that hand a host to its generated binder.
//! - `error`: injection and dispatch error types.
//! - `naming`: the unit naming convention shared with the generator.
//! - `registry`: process-wide table of generated binder handles.
//! - `traits`: host and component traits implemented by the marker attributes.
//! - `view`: view references and the `Bound<T>` field wrapper.

pub mod dispatch;
pub mod error;
pub mod naming;
pub mod registry;
pub mod traits;
pub mod view;

pub use dispatch::{inject, try_inject};
pub use error::{DispatchError, InjectError};

/// re-exports
///
/// generated code reaches dependencies through here so consumers do not
/// list them in their own Cargo.toml
pub mod __reexports {
    pub use ctor;
}
