#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod definition;
pub(crate) mod errors;
pub(crate) mod methods;
pub(crate) mod prefix;
pub(crate) mod provider;
pub(crate) mod service_map;

pub mod utils;

pub use any::{Instance, TypeInfo};
pub use definition::Definition;
pub use errors::{InstantiateErrorKind, ResolveErrorKind};
pub use methods::Methods;
pub use prefix::Prefix;
pub use provider::{collect_services, ServiceProvider};
pub use service_map::ServiceMap;
pub use utils::merge::Merge;

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
