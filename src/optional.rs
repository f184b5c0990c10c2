use std::{
    any::type_name,
    fmt,
    hash::{DefaultHasher, Hash, Hasher},
};

use log::trace;

use crate::{AbsentValueAccess, Element, Object};

/// Textual form of an empty [`Optional`]
pub const EMPTY_MARKER: &str = "(empty)";

/// Textual form of an [`Optional`] holding a null value
pub const NULL_MARKER: &str = "(null)";

/// A value that is either present or absent
///
/// A present value may itself be null. `Optional::some(None::<String>)` is
/// present and holds null, while `Optional::<Option<String>>::empty()` holds
/// nothing at all. The two are never equal.
///
/// An [`Optional`] cannot be changed after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// Create a present [`Optional`] holding `value`
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Create an absent [`Optional`]
    pub const fn empty() -> Self {
        Self::None
    }

    /// Create an [`Optional`] from an [`Option`], mapping `None` to absent
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::Some(x),
            None => Self::None,
        }
    }

    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub const fn is_empty(&self) -> bool {
        !self.has_value()
    }

    /// Get a reference to the value
    ///
    /// Fails if there is no value. Callers that can legitimately encounter
    /// an empty optional should check [`Optional::has_value`] first or use
    /// one of the `value_or_*` methods.
    pub fn value(&self) -> Result<&T, AbsentValueAccess> {
        match self {
            Self::Some(x) => Ok(x),
            Self::None => Err(AbsentValueAccess),
        }
    }

    /// Take the value out of the optional
    ///
    /// Fails if there is no value.
    pub fn into_value(self) -> Result<T, AbsentValueAccess> {
        match self {
            Self::Some(x) => Ok(x),
            Self::None => Err(AbsentValueAccess),
        }
    }

    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Some(x) => Some(x),
            Self::None => None,
        }
    }
}

impl<T: Clone> Optional<T> {
    /// Get the value or `fallback` if there is no value
    pub fn value_or_default(&self, fallback: T) -> T {
        match self {
            Self::Some(x) => x.clone(),
            Self::None => fallback,
        }
    }

    /// Get the value or the default value of `T` if there is no value
    pub fn value_or_zero(&self) -> T
    where
        T: Default,
    {
        self.value_or_default(T::default())
    }
}

impl<T: Element> Optional<T> {
    /// Get the value narrowed to `R`
    ///
    /// There are three outcomes:
    ///  - there is no value: `fallback` is returned,
    ///  - the value narrows to `R`: the narrowed value is returned,
    ///  - the value is null or does not narrow to `R`: `R::default()` is
    ///    returned and `fallback` is ignored.
    ///
    /// Every non-null value narrows to its own type and to [`Object`], and
    /// narrows to `Option<U>` when it narrows to `U`.
    ///
    /// A value of the wrong type is therefore treated differently from a
    /// missing value.
    ///
    /// ```rust
    /// use optval::{Object, Optional};
    ///
    /// let hello = Optional::some(Object::new("hello"));
    /// assert_eq!(hello.value_or_default_as::<i32>(99), 0);
    ///
    /// let empty = Optional::<Object>::empty();
    /// assert_eq!(empty.value_or_default_as::<i32>(99), 99);
    /// ```
    pub fn value_or_default_as<R: Element + Default>(
        &self,
        fallback: R,
    ) -> R {
        let Self::Some(value) = self else {
            return fallback;
        };

        match R::narrow_from(value) {
            Some(x) => x,
            None => {
                trace!(
                    "value of type {} does not narrow to {}",
                    type_name::<T>(),
                    type_name::<R>(),
                );
                R::default()
            }
        }
    }

    /// Get the value narrowed to `R` or the default value of `R`
    ///
    /// Same as [`Optional::value_or_default_as`] with `R::default()` as the
    /// fallback.
    pub fn value_or_zero_as<R: Element + Default>(&self) -> R {
        self.value_or_default_as(R::default())
    }

    /// Erase the value into an [`Object`]
    pub fn to_object(&self) -> Optional<Object> {
        match self {
            Self::Some(x) => Optional::Some(x.to_object()),
            Self::None => Optional::None,
        }
    }
}

impl<T: Element> Optional<T> {
    /// The hash of the value, or 0 if there is no value
    pub fn hash_code(&self) -> u64 {
        match self {
            Self::Some(x) => {
                let mut hasher = DefaultHasher::new();
                x.hash_element(&mut hasher);
                hasher.finish()
            }
            Self::None => 0,
        }
    }
}

impl<T: Element> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(x) => Some(x),
            Optional::None => None,
        }
    }
}

impl<T: Element> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(x) if x.is_null() => write!(f, "{NULL_MARKER}"),
            Self::Some(x) => x.fmt_element(f),
            Self::None => write!(f, "{EMPTY_MARKER}"),
        }
    }
}
