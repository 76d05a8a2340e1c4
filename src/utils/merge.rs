use alloc::string::String;
use tracing::debug;

use crate::{definition::Definition, service_map::ServiceMap};

/// Overlays `other` on top of `self`: entries of `other` win on collision.
pub trait Merge<T> {
    type Output;

    #[must_use]
    fn merge(self, other: T) -> Self::Output;
}

impl Merge<ServiceMap> for ServiceMap {
    type Output = ServiceMap;

    #[inline]
    fn merge(self, other: ServiceMap) -> Self::Output {
        other.entries.into_iter().fold(self, Merge::merge)
    }
}

impl Merge<(String, Definition)> for ServiceMap {
    type Output = ServiceMap;

    #[inline]
    fn merge(mut self, (id, definition): (String, Definition)) -> Self::Output {
        if self.entries.contains_key(&id) {
            debug!(id = id.as_str(), "Definition overridden");
        }
        self.entries.insert(id, definition);
        self
    }
}

impl Merge<(&str, Definition)> for ServiceMap {
    type Output = ServiceMap;

    #[inline]
    fn merge(self, (id, definition): (&str, Definition)) -> Self::Output {
        self.merge((String::from(id), definition))
    }
}
