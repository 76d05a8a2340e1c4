use alloc::sync::Arc;
use core::fmt::{self, Debug, Formatter};
use tracing::debug;

use crate::{
    any::{downcast, Instance, TypeInfo},
    errors::{InstantiateErrorKind, ResolveErrorKind},
};

type Factory = Arc<dyn Fn() -> Result<Instance, InstantiateErrorKind> + Send + Sync>;

/// Zero-argument callable registered under a service id.
///
/// Clones share the same underlying callable.
#[derive(Clone)]
pub struct Definition {
    factory: Factory,
    provides: TypeInfo,
}

impl Definition {
    #[inline]
    #[must_use]
    pub fn new<F, T, E>(factory: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        T: Send + Sync + 'static,
        E: Into<InstantiateErrorKind>,
    {
        let provides = TypeInfo::of::<T>();
        Self {
            factory: Arc::new(move || -> Result<Instance, InstantiateErrorKind> {
                match factory() {
                    Ok(value) => {
                        debug!(provides = provides.short_name(), "Instantiated");
                        Ok(Arc::new(value) as Instance)
                    }
                    Err(err) => Err(err.into()),
                }
            }),
            provides,
        }
    }

    /// Definition that returns a clone of a value created outside the provider.
    #[inline]
    #[must_use]
    pub fn instance<T>(value: T) -> Self
    where
        T: Clone + Send + Sync + 'static,
    {
        Self::new(move || Ok::<_, InstantiateErrorKind>(value.clone()))
    }

    /// Binds `method` to `receiver`. Calling the definition is the same as
    /// calling `method(&receiver)`; nothing is invoked until then.
    #[inline]
    #[must_use]
    pub fn method<P, F, T, E>(receiver: Arc<P>, method: F) -> Self
    where
        P: ?Sized + Send + Sync + 'static,
        F: Fn(&P) -> Result<T, E> + Send + Sync + 'static,
        T: Send + Sync + 'static,
        E: Into<InstantiateErrorKind>,
    {
        Self::new(move || method(&*receiver))
    }

    #[inline]
    pub fn call(&self) -> Result<Instance, InstantiateErrorKind> {
        (self.factory)()
    }

    pub fn call_as<T>(&self) -> Result<Arc<T>, ResolveErrorKind>
    where
        T: Send + Sync + 'static,
    {
        let instance = self.call()?;
        downcast(instance).map_err(|expected| ResolveErrorKind::IncorrectType { expected })
    }

    /// Type the definition was built to provide.
    #[inline]
    #[must_use]
    pub const fn provides(&self) -> TypeInfo {
        self.provides
    }

    /// Returns `true` if both definitions wrap the same callable.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }
}

impl Debug for Definition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition").field("provides", &self.provides.name).finish_non_exhaustive()
    }
}
