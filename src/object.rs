//! The universal erased element type
//!
//! Any [`Element`] can be erased into an [`Object`] without failure. The
//! object keeps the concrete type around at runtime so that it can be
//! narrowed back with [`Object::downcast_ref`] or through
//! [`Optional::value_or_default_as`](crate::Optional::value_or_default_as).

use std::{
    any::{type_name, Any},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{optional::NULL_MARKER, Element};

/// Object safe counterpart of [`Element`]
///
/// Blanket implemented for every [`Element`], so it never has to be
/// implemented by hand.
trait ErasedElement: Send + Sync {
    fn type_name(&self) -> &'static str;

    /// The value itself, not narrowed through [`Element::as_any`]
    fn as_erased_any(&self) -> &dyn Any;

    fn as_any(&self) -> Option<&dyn Any>;

    fn eq_erased(&self, other: &dyn ErasedElement) -> bool;

    fn hash_erased(&self, state: &mut dyn Hasher);

    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T: Element> ErasedElement for T {
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_erased_any(&self) -> &dyn Any {
        self
    }

    fn as_any(&self) -> Option<&dyn Any> {
        Element::as_any(self)
    }

    fn eq_erased(&self, other: &dyn ErasedElement) -> bool {
        other
            .as_erased_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.eq_element(other))
    }

    fn hash_erased(&self, state: &mut dyn Hasher) {
        self.hash_element(state);
    }

    fn fmt_erased(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_element(f)
    }
}

/// A type-erased, reference counted element or the null object
///
/// Cloning an [`Object`] is cheap and never clones the erased value.
#[derive(Clone, Default)]
pub struct Object(Option<Arc<dyn ErasedElement>>);

impl Object {
    /// Erase a value into an [`Object`]
    ///
    /// Erasing a `None` gives the null object and erasing an [`Object`]
    /// gives the object back, so objects never nest.
    pub fn new<T: Element>(value: T) -> Self {
        value.to_object()
    }

    /// The null object
    pub fn null() -> Self {
        Self(None)
    }

    /// Erase a value, mapping any null value to the null object
    pub(crate) fn erase<T: Element>(value: T) -> Self {
        if value.is_null() {
            return Self::null();
        }
        Self(Some(Arc::new(value)))
    }

    /// Whether this is the null object
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Name of the concrete type of the erased value
    ///
    /// Returns `None` for the null object.
    pub fn type_name(&self) -> Option<&'static str> {
        self.0.as_deref().map(|v| v.type_name())
    }

    /// Attempt to view the erased value as an `R`
    pub fn downcast_ref<R: Any>(&self) -> Option<&R> {
        Element::as_any(self)?.downcast_ref()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self.0.as_deref(), other.0.as_deref()) {
            (Some(a), Some(b)) => a.eq_erased(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(v) = self.0.as_deref() {
            v.hash_erased(state);
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_deref() {
            Some(v) => {
                write!(f, "Object<{}>(", v.type_name())?;
                v.fmt_erased(f)?;
                write!(f, ")")
            }
            None => write!(f, "Object::null"),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_element(f)
    }
}

impl Element for Object {
    fn is_null(&self) -> bool {
        Object::is_null(self)
    }

    fn as_any(&self) -> Option<&dyn Any> {
        self.0.as_deref().and_then(|v| v.as_any())
    }

    fn narrow_from<S: Element>(value: &S) -> Option<Self> {
        let object = value.to_object();
        (!object.is_null()).then_some(object)
    }

    fn to_object(&self) -> Object {
        self.clone()
    }

    fn hash_element(&self, mut state: &mut dyn Hasher) {
        self.hash(&mut state);
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_deref() {
            Some(v) => v.fmt_erased(f),
            None => write!(f, "{NULL_MARKER}"),
        }
    }
}
