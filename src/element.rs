//! Values that can be stored in an [`Optional`]
//!
//! The [`Element`] trait describes what an optional needs from its payload
//! beyond equality: whether the payload is null, how it is hashed, how it
//! can be narrowed to another element type, how it is erased into an
//! [`Object`] and how it is rendered as text.
//!
//! The trait is implemented for the primitives, the common string types,
//! `Option<T>` (where `None` is the null value), [`Val<T>`](crate::Val) and
//! [`Object`]. Other types can use `#[derive(Element)]`.
//!
//! [`Optional`]: crate::Optional

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::Object;

/// A type that can be stored in an [`Optional`](crate::Optional)
#[diagnostic::on_unimplemented(
    note = "`Element` is implemented for primitives, strings, `Option<T>`, `Object` and `Val<T>`.",
    note = "Wrap your type in `Val<T>` or use `#[derive(Element)]`."
)]
pub trait Element: Clone + PartialEq + Send + Sync + 'static {
    /// Whether this value is the null value of its type
    fn is_null(&self) -> bool {
        false
    }

    /// View this value as a [`dyn Any`](Any) to attempt a downcast
    ///
    /// Returns `None` if the value is null, because a null value never
    /// narrows to any type.
    fn as_any(&self) -> Option<&dyn Any> {
        Some(self as &dyn Any)
    }

    /// Attempt to view `value` as a `Self`
    ///
    /// By default this succeeds only if `value` is a non-null `Self`.
    /// Types that can hold values of other types override this.
    fn narrow_from<S: Element>(value: &S) -> Option<Self> {
        value.as_any()?.downcast_ref::<Self>().cloned()
    }

    /// Erase this value into an [`Object`]
    fn to_object(&self) -> Object {
        Object::erase(self.clone())
    }

    /// Equality used for erased values
    ///
    /// Must be reflexive, so that [`Object`] can be `Eq`.
    fn eq_element(&self, other: &Self) -> bool {
        self == other
    }

    /// Feed this value into `state`
    ///
    /// Values that are equal must hash equally, under both `PartialEq` and
    /// [`Element::eq_element`].
    fn hash_element(&self, state: &mut dyn Hasher);

    /// Write the textual form of a non-null value
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! display_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn hash_element(&self, mut state: &mut dyn Hasher) {
                    self.hash(&mut state);
                }

                fn fmt_element(
                    &self,
                    f: &mut fmt::Formatter<'_>,
                ) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

display_element! {
    bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    String, &'static str, Arc<str>, Box<str>,
}

// Floats hash their bits with `-0.0` folded into `0.0` and every NaN
// folded into one NaN, matching `eq_element`.
macro_rules! float_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                fn eq_element(&self, other: &Self) -> bool {
                    self == other || (self.is_nan() && other.is_nan())
                }

                fn hash_element(&self, state: &mut dyn Hasher) {
                    let normalized = if self.is_nan() {
                        <$t>::NAN
                    } else if *self == 0.0 {
                        0.0
                    } else {
                        *self
                    };
                    normalized.to_bits().hash(&mut &mut *state);
                }

                fn fmt_element(
                    &self,
                    f: &mut fmt::Formatter<'_>,
                ) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

float_element! { f32, f64 }

impl Element for () {
    fn hash_element(&self, _state: &mut dyn Hasher) {}

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "()")
    }
}

impl<T: Element> Element for Option<T> {
    fn is_null(&self) -> bool {
        match self {
            Some(x) => x.is_null(),
            None => true,
        }
    }

    fn as_any(&self) -> Option<&dyn Any> {
        self.as_ref().and_then(|x| x.as_any())
    }

    fn narrow_from<S: Element>(value: &S) -> Option<Self> {
        T::narrow_from(value).map(Some)
    }

    fn to_object(&self) -> Object {
        match self {
            Some(x) => x.to_object(),
            None => Object::null(),
        }
    }

    fn eq_element(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.eq_element(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn hash_element(&self, state: &mut dyn Hasher) {
        match self {
            Some(x) => {
                state.write_u8(1);
                x.hash_element(state);
            }
            None => state.write_u8(0),
        }
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(x) => x.fmt_element(f),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fmt,
        hash::{DefaultHasher, Hasher},
        sync::Arc,
    };

    use crate::{Element, Object};

    fn hash_of<T: Element>(x: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        x.hash_element(&mut hasher);
        hasher.finish()
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Element)]
    #[element(null = is_unknown)]
    struct Origin(u8);

    impl Origin {
        fn is_unknown(&self) -> bool {
            self.0 == 0
        }
    }

    impl fmt::Display for Origin {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "origin {}", self.0)
        }
    }

    #[test]
    fn none_is_null() {
        assert!(None::<String>.is_null());
        assert!(Some(None::<u8>).is_null());
        assert!(!Some(0u8).is_null());
        assert!(!"".is_null());
    }

    #[test]
    fn null_does_not_narrow() {
        assert!(None::<u32>.as_any().is_none());

        let some = Some(3u32);
        let any = some.as_any().unwrap();
        assert_eq!(any.downcast_ref::<u32>(), Some(&3));
        assert_eq!(any.downcast_ref::<Option<u32>>(), None);
    }

    #[test]
    fn narrow_into_option_and_object() {
        assert_eq!(Option::<u8>::narrow_from(&5u8), Some(Some(5)));
        assert_eq!(Option::<u8>::narrow_from(&None::<u8>), None);
        assert_eq!(Option::<u8>::narrow_from(&5u16), None);
        assert_eq!(Object::narrow_from(&5u8), Some(Object::new(5u8)));
        assert_eq!(Object::narrow_from(&None::<u8>), None);
    }

    #[test]
    fn option_erases_its_content() {
        assert!(None::<Arc<str>>.to_object().is_null());

        let obj = Some(Arc::<str>::from("x")).to_object();
        assert_eq!(obj.downcast_ref::<Arc<str>>().map(|s| &**s), Some("x"));
    }

    #[test]
    fn float_equality_and_hash() {
        assert!(f64::NAN.eq_element(&f64::NAN));
        assert!(0.0f64.eq_element(&-0.0));
        assert_eq!(hash_of(&0.0f64), hash_of(&-0.0f64));
        assert_eq!(hash_of(&f32::NAN), hash_of(&-f32::NAN));
        assert_ne!(hash_of(&1.5f64), hash_of(&2.5f64));
    }

    #[test]
    fn derived_in_crate() {
        assert!(Origin(0).is_null());
        assert!(Origin(0).to_object().is_null());
        assert_eq!(Origin(2).to_object().to_string(), "origin 2");
        assert_eq!(Origin::narrow_from(&Origin(2)), Some(Origin(2)));
        assert_eq!(Origin::narrow_from(&Origin(0)), None);
    }
}
