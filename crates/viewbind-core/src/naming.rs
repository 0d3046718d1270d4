//! Unit naming convention.
//!
//! The generator names each unit with `unit_ident`/`unit_name` at build time
//! and the dispatcher recomputes `unit_name` from the host's `Path` at run
//! time. Both sides must go through these functions.

/// Suffix appended to a host type name to form its generated unit name.
pub const GENERATED_SUFFIX: &str = "ViewBinder";

/// Type identifier of the generated unit for a host identifier.
#[must_use]
pub fn unit_ident(host_ident: &str) -> String {
    format!("{host_ident}{GENERATED_SUFFIX}")
}

/// Registry key of the generated unit for a fully-qualified host path.
#[must_use]
pub fn unit_name(host_path: &str) -> String {
    format!("{host_path}{GENERATED_SUFFIX}")
}
