use std::fmt;

use crate::Element;

/// Wrapper to store types from other crates in an [`Optional`]
///
/// Any thread safe type that is `Clone`, `PartialEq`, `Hash` and `Display`
/// becomes an [`Element`] when wrapped in [`Val`]. Values wrapped like this
/// are never null.
///
/// [`Optional`]: crate::Optional
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Val<T>(pub T);

impl<T> From<T> for Val<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::ops::Deref for Val<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Element for Val<T>
where
    T: Clone + PartialEq + std::hash::Hash + fmt::Display + Send + Sync + 'static,
{
    fn hash_element(&self, mut state: &mut dyn std::hash::Hasher) {
        std::hash::Hash::hash(&self.0, &mut state);
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
