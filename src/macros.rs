/// Builds a [`Methods`](crate::Methods) map from `id => method` entries.
///
/// # Examples
/// ```rust
/// use froodi_provider::{methods, InstantiateErrorKind, Methods};
///
/// struct Provider;
///
/// impl Provider {
///     fn logger(&self) -> Result<&'static str, InstantiateErrorKind> {
///         Ok("logger")
///     }
///
///     fn port(&self) -> Result<u16, InstantiateErrorKind> {
///         Ok(8080)
///     }
/// }
///
/// let methods: Methods<Provider> = methods![
///     "logger" => Provider::logger,
///     "port" => Provider::port,
/// ];
/// assert_eq!(methods.len(), 2);
/// ```
#[macro_export]
macro_rules! methods {
    () => {
        $crate::Methods::new()
    };
    ( $( $id:expr => $method:expr ),+ $(,)? ) => {{
        let methods = $crate::Methods::new();
        $(
            $crate::__private::tracing::debug!("Parsed entry: {} => {}", stringify!($id), stringify!($method));
            let methods = methods.add($id, $method);
        )+
        methods
    }};
}
