use crate::{
    error::DispatchError,
    naming::unit_name,
    registry::{InjectorRegistry, registry_read},
    traits::Host,
};

/// Inject `target` through its generated binder in the global registry.
///
/// Steps: derive the unit name from `H::PATH`, resolve it, bind the handle
/// to `H`, invoke it. The first failing step is returned; nothing is logged.
pub fn try_inject<H: Host>(target: &mut H) -> Result<(), DispatchError> {
    let unit = unit_name(H::PATH);

    // the guard is released before the binder runs
    let injector = registry_read().get::<H>(&unit)?;

    injector
        .inject(target)
        .map_err(|source| DispatchError::Injection { unit, source })
}

/// Same as `try_inject`, against an explicit registry.
pub fn try_inject_with<H: Host>(
    registry: &InjectorRegistry,
    target: &mut H,
) -> Result<(), DispatchError> {
    let unit = unit_name(H::PATH);
    let injector = registry.get::<H>(&unit)?;

    injector
        .inject(target)
        .map_err(|source| DispatchError::Injection { unit, source })
}

/// Best-effort injection: failures are logged and swallowed.
///
/// Returns whether the binder ran to completion. Never panics and never
/// propagates an error to the caller.
pub fn inject<H: Host>(target: &mut H) -> bool {
    match try_inject(target) {
        Ok(()) => {
            tracing::debug!(host = H::PATH, "view bindings injected");
            true
        }
        Err(err) => {
            tracing::error!(host = H::PATH, unit = err.unit(), error = %err, "view injection failed");
            false
        }
    }
}

///
/// TESTS
///
