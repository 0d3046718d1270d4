use crate::{
    error::{DispatchError, InjectError},
    traits::Host,
};
use std::{
    any::Any,
    collections::HashMap,
    sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Signature of the `inject` method on every generated unit.
pub type InjectFn<H> = fn(&mut H) -> Result<(), InjectError>;

///
/// Injector
///
/// Statically typed handle to one generated unit's `inject` method.
///

pub struct Injector<H: 'static> {
    inject: InjectFn<H>,
}

impl<H: 'static> Injector<H> {
    #[must_use]
    pub const fn new(inject: InjectFn<H>) -> Self {
        Self { inject }
    }

    pub fn inject(&self, target: &mut H) -> Result<(), InjectError> {
        (self.inject)(target)
    }
}

impl<H: 'static> Clone for Injector<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H: 'static> Copy for Injector<H> {}

///
/// InjectorRegistry
///
/// Unit name to injector handle. Handles are stored type-erased and bound
/// back to their host type on lookup.
///

#[derive(Default)]
pub struct InjectorRegistry {
    handles: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl InjectorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handle under `unit`. Returns `true` if it replaced an
    /// earlier registration.
    pub fn register<H: Host>(&mut self, unit: impl Into<String>, inject: InjectFn<H>) -> bool {
        self.handles
            .insert(unit.into(), Box::new(Injector::new(inject)))
            .is_some()
    }

    /// Resolve `unit` and bind its handle to host type `H`.
    pub fn get<H: Host>(&self, unit: &str) -> Result<Injector<H>, DispatchError> {
        let handle = self
            .handles
            .get(unit)
            .ok_or_else(|| DispatchError::UnitNotFound {
                unit: unit.to_string(),
            })?;

        handle
            .downcast_ref::<Injector<H>>()
            .copied()
            .ok_or_else(|| DispatchError::HandleMismatch {
                unit: unit.to_string(),
                host: H::PATH,
            })
    }

    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.handles.contains_key(unit)
    }

    /// Registered unit names, sorted.
    #[must_use]
    pub fn units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = self.handles.keys().map(String::as_str).collect();
        units.sort_unstable();

        units
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

///
/// REGISTRY
/// written by generated registration constructors before `main`
///

static REGISTRY: LazyLock<RwLock<InjectorRegistry>> =
    LazyLock::new(|| RwLock::new(InjectorRegistry::new()));

pub fn registry_read() -> RwLockReadGuard<'static, InjectorRegistry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

pub fn registry_write() -> RwLockWriteGuard<'static, InjectorRegistry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a generated unit in the global registry.
pub fn register<H: Host>(unit: &str, inject: InjectFn<H>) {
    let replaced = registry_write().register(unit, inject);

    if replaced {
        tracing::warn!(unit, "generated binder registered twice; keeping the latest");
    }
}

///
/// TESTS
///
