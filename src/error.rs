//! Errors reported by positional operations.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Error value indicating a position outside the deque.
///
/// Returned by `RingDeque::try_insert` and `RingDeque::try_remove`. When an
/// insertion is refused the element is handed back in `element`.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct IndexError<T = ()> {
    /// The requested position.
    pub index: usize,
    /// The length of the deque when the request was made.
    pub len: usize,
    /// The element that could not be placed.
    pub element: T,
}

const IDXERROR: &str = "index out of bounds";

#[cfg(feature = "std")]
impl<T> Error for IndexError<T> {}

impl<T> fmt::Display for IndexError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: the len is {} but the index is {}", IDXERROR, self.len, self.index)
    }
}

impl<T> fmt::Debug for IndexError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "IndexError {{ index: {}, len: {} }}", self.index, self.len)
    }
}
