use crate::error::InjectError;
use std::{any::Any, fmt, rc::Rc};

///
/// ViewRef
/// type-erased component reference returned by the identifier lookup
///

pub type ViewRef = Rc<dyn Any>;

/// Erase a component into a `ViewRef`.
pub fn view_ref<T: Any>(component: T) -> ViewRef {
    Rc::new(component)
}

///
/// Bound
///
/// Field wrapper for an injected component. Starts unbound; a generated
/// binder fills it from the identifier lookup.
///

pub struct Bound<T> {
    inner: Option<Rc<T>>,
}

impl<T: 'static> Bound<T> {
    #[must_use]
    pub const fn unbound() -> Self {
        Self { inner: None }
    }

    #[must_use]
    pub const fn new(component: Rc<T>) -> Self {
        Self {
            inner: Some(component),
        }
    }

    /// Cast a lookup result to `T`.
    ///
    /// A missing view yields an unbound field; a view of another concrete
    /// type is a `CastMismatch`.
    pub fn cast(view: Option<ViewRef>, id: i32, field: &'static str) -> Result<Self, InjectError> {
        let Some(view) = view else {
            return Ok(Self::unbound());
        };

        view.downcast::<T>()
            .map(Self::new)
            .map_err(|_| InjectError::CastMismatch {
                id,
                field,
                expected: std::any::type_name::<T>(),
            })
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    #[must_use]
    pub fn rc(&self) -> Option<Rc<T>> {
        self.inner.clone()
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    pub fn take(&mut self) -> Option<Rc<T>> {
        self.inner.take()
    }
}

impl<T: 'static> Default for Bound<T> {
    fn default() -> Self {
        Self::unbound()
    }
}

impl<T> Clone for Bound<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(component) => f.debug_tuple("Bound").field(component).finish(),
            None => f.write_str("Unbound"),
        }
    }
}

///
/// TESTS
///
