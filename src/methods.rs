use alloc::{collections::BTreeMap, string::String, sync::Arc, vec::Vec};
use core::fmt::{self, Debug, Formatter};

use crate::{definition::Definition, errors::InstantiateErrorKind, prefix::Prefix};

type Binder<P> = Arc<dyn Fn(Arc<P>) -> Definition + Send + Sync>;

/// Unprefixed service ids mapped to methods of the provider `P`.
///
/// Inserting an id twice keeps the last method.
pub struct Methods<P: ?Sized> {
    entries: BTreeMap<String, Binder<P>>,
}

impl<P: ?Sized> Methods<P> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    #[inline]
    #[must_use]
    pub fn add<F, T, E>(mut self, id: impl Into<String>, method: F) -> Self
    where
        P: Send + Sync + 'static,
        F: Fn(&P) -> Result<T, E> + Send + Sync + 'static,
        T: Send + Sync + 'static,
        E: Into<InstantiateErrorKind>,
    {
        self.insert(id, method);
        self
    }

    /// Returns `true` if a method was already registered under `id`.
    pub fn insert<F, T, E>(&mut self, id: impl Into<String>, method: F) -> bool
    where
        P: Send + Sync + 'static,
        F: Fn(&P) -> Result<T, E> + Send + Sync + 'static,
        T: Send + Sync + 'static,
        E: Into<InstantiateErrorKind>,
    {
        let method = Arc::new(method);
        let binder: Binder<P> = Arc::new(move |receiver: Arc<P>| {
            let method = method.clone();
            Definition::method(receiver, move |provider: &P| (*method)(provider))
        });
        self.entries.insert(id.into(), binder).is_some()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Prefixes every id and binds every method to `receiver`.
    pub(crate) fn bind<'a>(&'a self, receiver: &'a Arc<P>, prefix: &'a Prefix) -> impl Iterator<Item = (String, Definition)> + 'a {
        self.entries
            .iter()
            .map(move |(id, binder)| (prefix.apply(id), binder(receiver.clone())))
    }
}

impl<P: ?Sized> Default for Methods<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized> Clone for Methods<P> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<P: ?Sized> Debug for Methods<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Methods")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}
