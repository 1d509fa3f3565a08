//! Errors returned by the checked operations.
//!
//! Only the `try_*` insertions and the `at` accessors report failures as
//! values. Every other broken precondition is a contract violation, caught
//! by a debug assertion.

use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// Error value indicating insufficient capacity
///
/// Returned by the checked insertions (`try_push_back`, `try_push_front`,
/// `try_push`) instead of breaking the container's capacity contract.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

#[cfg(feature = "std")]
impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacityError: {}", CAPERROR)
    }
}

/// Error value indicating an access past the last element
///
/// Only the `at` accessors report this; every other accessor treats an
/// out-of-range position as a broken precondition.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange {
    /// The requested position.
    pub index: usize,
    /// The number of elements at the time of the access.
    pub len: usize,
}

#[cfg(feature = "std")]
impl Error for OutOfRange {}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range for length {}", self.index, self.len)
    }
}
