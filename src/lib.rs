//! Immutable optional values that keep "unset" apart from "set to null".
//!
//! An [`Optional<T>`] is either empty or holds a value of `T`. Unlike a
//! nullable reference, the held value may itself be null (for example
//! `Optional::some(None::<String>)`), which makes it possible to tell a
//! caller that supplied nothing apart from a caller that explicitly supplied
//! a null value.

// Needed for the derive macro
extern crate self as optval;

mod element;
mod error;
mod object;
mod optional;
mod val;

pub use element::Element;
pub use error::AbsentValueAccess;
pub use object::Object;
pub use optional::{Optional, EMPTY_MARKER, NULL_MARKER};
pub use optval_macros::Element;
pub use val::Val;
