use alloc::{string::String, sync::Arc};
use tracing::debug;

use crate::{
    any::TypeInfo,
    definition::Definition,
    errors::InstantiateErrorKind,
    methods::Methods,
    prefix::Prefix,
    service_map::ServiceMap,
    utils::merge::Merge as _,
};

static EMPTY_PREFIX: Prefix = Prefix::empty();

/// A unit declaring a set of named service definitions for a container.
///
/// Implementors keep their prefix as a field and build the final map in
/// [`ServiceProvider::services`], usually with [`ServiceProvider::prepare`].
///
/// # Examples
/// ```rust
/// use froodi_provider::{methods, Definition, InstantiateErrorKind, Prefix, ServiceMap, ServiceProvider};
/// use std::sync::Arc;
///
/// struct AppProvider {
///     prefix: Prefix,
///     level: &'static str,
/// }
///
/// impl AppProvider {
///     fn logger(&self) -> Result<String, InstantiateErrorKind> {
///         Ok(format!("logger({})", self.level))
///     }
/// }
///
/// impl ServiceProvider for AppProvider {
///     fn prefix(&self) -> &Prefix {
///         &self.prefix
///     }
///
///     fn services(self: Arc<Self>) -> ServiceMap {
///         Self::prepare(
///             &self,
///             methods!["logger" => Self::logger],
///             ServiceMap::new().with("app.cache", Definition::instance(64usize)),
///         )
///     }
/// }
///
/// let provider = Arc::new(AppProvider {
///     prefix: Prefix::new("app."),
///     level: "debug",
/// });
/// let services = provider.services();
///
/// assert_eq!(services.ids().collect::<Vec<_>>(), ["app.cache", "app.logger"]);
/// assert_eq!(*services.resolve_as::<String>("app.logger").unwrap(), "logger(debug)");
/// ```
pub trait ServiceProvider: Send + Sync + 'static {
    /// Prefix applied to the ids of the primary map. Empty by default.
    #[inline]
    fn prefix(&self) -> &Prefix {
        &EMPTY_PREFIX
    }

    #[inline]
    fn prefixed(&self, id: &str) -> String {
        self.prefix().apply(id)
    }

    fn services(self: Arc<Self>) -> ServiceMap;

    /// Reference to `method` bound to this provider instance.
    #[inline]
    fn method<F, T, E>(this: &Arc<Self>, method: F) -> Definition
    where
        Self: Sized,
        F: Fn(&Self) -> Result<T, E> + Send + Sync + 'static,
        T: Send + Sync + 'static,
        E: Into<InstantiateErrorKind>,
    {
        Definition::method(this.clone(), method)
    }

    /// Prefixes the ids of `primary`, binds its methods to this instance and
    /// overlays `additional` on top. Ids of `additional` are used as is and
    /// win on collision.
    fn prepare(this: &Arc<Self>, primary: Methods<Self>, additional: ServiceMap) -> ServiceMap
    where
        Self: Sized,
    {
        let provider = TypeInfo::of::<Self>().short_name();
        let prefix = this.prefix();

        let mut prepared = ServiceMap::new();
        for (id, definition) in primary.bind(this, prefix) {
            debug!(provider, id = id.as_str(), "Prepared");
            prepared.insert(id, definition);
        }

        debug!(provider, primary = prepared.len(), additional = additional.len(), "Merging additional definitions");
        prepared.merge(additional)
    }

    /// [`ServiceProvider::prepare`] without additional definitions.
    #[inline]
    fn prepare_methods(this: &Arc<Self>, primary: Methods<Self>) -> ServiceMap
    where
        Self: Sized,
    {
        Self::prepare(this, primary, ServiceMap::new())
    }
}

/// Collects the services of several providers into one map.
///
/// Providers later in the sequence win on id collision.
pub fn collect_services<I>(providers: I) -> ServiceMap
where
    I: IntoIterator<Item = Arc<dyn ServiceProvider>>,
{
    providers
        .into_iter()
        .fold(ServiceMap::new(), |services, provider| services.merge(provider.services()))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::{
        format,
        string::{String, ToString as _},
        sync::Arc,
        vec,
        vec::Vec,
    };
    use core::sync::atomic::{AtomicU32, Ordering};
    use tracing_test::traced_test;

    use super::{collect_services, ServiceProvider};
    use crate::{Definition, InstantiateErrorKind, Methods, Prefix, ServiceMap};

    struct Unprefixed;

    impl Unprefixed {
        fn answer(&self) -> Result<u32, InstantiateErrorKind> {
            Ok(42)
        }
    }

    impl ServiceProvider for Unprefixed {
        fn services(self: Arc<Self>) -> ServiceMap {
            Self::prepare_methods(&self, Methods::new().add("answer", Self::answer))
        }
    }

    struct Counting {
        prefix: Prefix,
        hits: AtomicU32,
    }

    impl Counting {
        fn new(prefix: &'static str) -> Arc<Self> {
            Arc::new(Self {
                prefix: Prefix::new(prefix),
                hits: AtomicU32::new(0),
            })
        }

        fn hit(&self) -> Result<u32, InstantiateErrorKind> {
            Ok(self.hits.fetch_add(1, Ordering::SeqCst) + 1)
        }

        fn label(&self) -> Result<String, InstantiateErrorKind> {
            Ok(format!("{}label", self.prefix))
        }
    }

    impl ServiceProvider for Counting {
        fn prefix(&self) -> &Prefix {
            &self.prefix
        }

        fn services(self: Arc<Self>) -> ServiceMap {
            Self::prepare(
                &self,
                methods!["hit" => Self::hit, "label" => Self::label],
                ServiceMap::new().with("extra", Definition::instance(0u8)),
            )
        }
    }

    #[test]
    fn test_default_prefix_is_empty() {
        let provider = Unprefixed;

        assert!(provider.prefix().is_empty());
        assert_eq!(provider.prefixed("logger"), "logger");
        assert_eq!(provider.prefixed(""), "");

        let services = Arc::new(provider).services();
        assert_eq!(services.ids().collect::<Vec<_>>(), ["answer"]);
        assert_eq!(*services.resolve_as::<u32>("answer").unwrap(), 42);
    }

    #[test]
    fn test_prefixed() {
        let provider = Counting::new("app.");

        assert_eq!(provider.prefixed("logger"), "app.logger");
        assert_eq!(provider.prefixed(""), "app.");
        assert_eq!(provider.prefixed("app.logger"), "app.app.logger");
    }

    #[test]
    fn test_method_reference_shares_instance() {
        let provider = Counting::new("app.");
        let reference = Counting::method(&provider, Counting::hit);

        assert_eq!(*reference.call_as::<u32>().unwrap(), 1);
        assert_eq!(provider.hit().unwrap(), 2);
        assert_eq!(*reference.call_as::<u32>().unwrap(), 3);
    }

    #[test]
    #[traced_test]
    fn test_prepare_disjoint() {
        let provider = Counting::new("app.");

        let services = provider.clone().services();

        assert_eq!(services.len(), 3);
        assert_eq!(services.ids().collect::<Vec<_>>(), ["app.hit", "app.label", "extra"]);
        assert_eq!(*services.resolve_as::<String>("app.label").unwrap(), "app.label");
        assert_eq!(*services.resolve_as::<u8>("extra").unwrap(), 0);
        assert!(logs_contain("Prepared"));
        assert!(logs_contain("Merging additional definitions"));
    }

    #[test]
    fn test_prepare_additional_wins() {
        let provider = Counting::new("app.");
        let cache = Definition::instance("cache".to_string());

        let services = Counting::prepare(
            &provider,
            Methods::new().add("hit", Counting::hit).add("cache", Counting::label),
            ServiceMap::new().with("app.cache", cache.clone()),
        );

        assert_eq!(services.len(), 2);
        assert!(services.get("app.cache").unwrap().ptr_eq(&cache));
        assert_eq!(provider.hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_prepare_prefix_applied_once() {
        let provider = Counting::new("app.");

        let services = Counting::prepare(
            &provider,
            Methods::new().add("app.hit", Counting::hit),
            ServiceMap::new().with("label", Definition::instance(())),
        );

        assert_eq!(services.ids().collect::<Vec<_>>(), ["app.app.hit", "label"]);
    }

    #[test]
    fn test_prepare_recomputes() {
        let provider = Counting::new("app.");

        let first = provider.clone().services();
        let second = provider.clone().services();

        assert!(!first.get("app.hit").unwrap().ptr_eq(second.get("app.hit").unwrap()));
        assert_eq!(*first.resolve_as::<u32>("app.hit").unwrap(), 1);
        assert_eq!(*second.resolve_as::<u32>("app.hit").unwrap(), 2);
    }

    #[test]
    fn test_prepare_methods_without_additional() {
        let provider = Counting::new("app.");

        let services = Counting::prepare_methods(&provider, methods!["hit" => Counting::hit, "" => Counting::label]);

        assert_eq!(services.ids().collect::<Vec<_>>(), ["app.", "app.hit"]);
        assert_eq!(*services.resolve_as::<String>("app.").unwrap(), "app.label");
    }

    #[test]
    fn test_collect_services() {
        let providers: Vec<Arc<dyn ServiceProvider>> = vec![Arc::new(Unprefixed), Counting::new(""), Counting::new("b.")];

        let services = collect_services(providers);

        assert_eq!(
            services.ids().collect::<Vec<_>>(),
            ["answer", "b.hit", "b.label", "extra", "hit", "label"]
        );
        assert_eq!(*services.resolve_as::<String>("label").unwrap(), "label");
    }
}
