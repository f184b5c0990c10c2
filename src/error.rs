use std::fmt;

/// The value of an empty [`Optional`](crate::Optional) was accessed
///
/// This signals a caller that did not check for presence before reading
/// the value. It should be propagated, not recovered from locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbsentValueAccess;

impl fmt::Display for AbsentValueAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value present")
    }
}

impl std::error::Error for AbsentValueAccess {}
