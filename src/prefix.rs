use alloc::{borrow::Cow, string::String};
use core::fmt::{self, Display, Formatter};

/// Namespace prepended to the service ids of one provider.
///
/// Empty by default, so ids are used as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(Cow<'static, str>);

impl Prefix {
    #[inline]
    #[must_use]
    pub const fn new(prefix: &'static str) -> Self {
        Self(Cow::Borrowed(prefix))
    }

    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new("")
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn apply(&self, id: &str) -> String {
        let mut prefixed = String::with_capacity(self.0.len() + id.len());
        prefixed.push_str(&self.0);
        prefixed.push_str(id);
        prefixed
    }
}

impl From<&'static str> for Prefix {
    #[inline]
    fn from(prefix: &'static str) -> Self {
        Self::new(prefix)
    }
}

impl From<String> for Prefix {
    #[inline]
    fn from(prefix: String) -> Self {
        Self(Cow::Owned(prefix))
    }
}

impl AsRef<str> for Prefix {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
