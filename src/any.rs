use alloc::sync::Arc;
use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
};

/// Type-erased service instance produced by a [`crate::Definition`].
pub type Instance = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit_once("::").map_or(self.name, |(_, name)| name)
    }
}

/// Downcasts an instance, reporting the expected type on mismatch.
pub(crate) fn downcast<T>(instance: Instance) -> Result<Arc<T>, TypeInfo>
where
    T: Send + Sync + 'static,
{
    instance.downcast::<T>().map_err(|_| TypeInfo::of::<T>())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::{string::String, sync::Arc};

    use super::{downcast, Instance, TypeInfo};

    #[test]
    fn test_type_info_eq_by_id() {
        assert_eq!(TypeInfo::of::<u8>(), TypeInfo::of::<u8>());
        assert_ne!(TypeInfo::of::<u8>(), TypeInfo::of::<i8>());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(TypeInfo::of::<String>().short_name(), "String");
        assert_eq!(TypeInfo::of::<u32>().short_name(), "u32");
    }

    #[test]
    fn test_downcast() {
        let instance: Instance = Arc::new(5u16);
        assert_eq!(*downcast::<u16>(instance.clone()).unwrap(), 5);
        assert_eq!(downcast::<u32>(instance).unwrap_err(), TypeInfo::of::<u32>());
    }
}
