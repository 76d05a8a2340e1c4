use alloc::{
    collections::{btree_map, BTreeMap},
    string::String,
    sync::Arc,
};
use tracing::debug;

use crate::{
    any::{downcast, Instance},
    definition::Definition,
    errors::ResolveErrorKind,
};

/// Service ids mapped to their definitions, as handed to a container.
#[derive(Debug, Clone, Default)]
pub struct ServiceMap {
    pub(crate) entries: BTreeMap<String, Definition>,
}

impl ServiceMap {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Inserts a definition as is, returning the one it replaced.
    #[inline]
    pub fn insert(&mut self, id: impl Into<String>, definition: Definition) -> Option<Definition> {
        self.entries.insert(id.into(), definition)
    }

    #[inline]
    #[must_use]
    pub fn with(mut self, id: impl Into<String>, definition: Definition) -> Self {
        self.insert(id, definition);
        self
    }

    #[inline]
    pub fn remove(&mut self, id: &str) -> Option<Definition> {
        self.entries.remove(id)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Definition> {
        self.entries.get(id)
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

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.entries.iter().map(|(id, definition)| (id.as_str(), definition))
    }

    /// Looks up `id` and calls its definition.
    pub fn resolve(&self, id: &str) -> Result<Instance, ResolveErrorKind> {
        let Some(definition) = self.entries.get(id) else {
            debug!(id, "Definition not found");
            return Err(ResolveErrorKind::NoDefinition { id: id.into() });
        };
        let instance = definition.call()?;

        debug!(id, "Resolved");
        Ok(instance)
    }

    pub fn resolve_as<T>(&self, id: &str) -> Result<Arc<T>, ResolveErrorKind>
    where
        T: Send + Sync + 'static,
    {
        let instance = self.resolve(id)?;
        downcast(instance).map_err(|expected| ResolveErrorKind::IncorrectType { expected })
    }
}

impl<K> FromIterator<(K, Definition)> for ServiceMap
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Definition)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K> Extend<(K, Definition)> for ServiceMap
where
    K: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, Definition)>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(|(id, definition)| (id.into(), definition)));
    }
}

impl IntoIterator for ServiceMap {
    type Item = (String, Definition);
    type IntoIter = btree_map::IntoIter<String, Definition>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ServiceMap {
    type Item = (&'a String, &'a Definition);
    type IntoIter = btree_map::Iter<'a, String, Definition>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
