//! Ring buffers over a single backing array.
//!
//! - [`RingDeque`] is a growable double-ended queue. It has `O(1)` amortized
//!   pushes and pops at both ends, `O(1)` indexing like a vector, and
//!   inserts or removes at any position by rotating whichever end is nearer.
//!   The capacity is kept a power of two so wraparound is a bit mask; it
//!   doubles when full and halves when only a quarter full.
//! - [`FixedRing`] has a capacity fixed at construction and is always full.
//!   Every push overwrites the oldest value and returns it.
//!
//! The contained elements are not required to be copyable. Neither container
//! is internally synchronized; share one across threads behind a lock.
//!
//! # Feature Flags
//! The **ringdeque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd and implement `std::error::Error` for [`IndexError`].
//!     Without it the crate is `no_std` and needs only `alloc`.
//!
//! # Logging
//!
//! Reallocations of a `RingDeque` are reported at `trace` level through the
//! [`log`](https://docs.rs/log) facade.
//!
//! # Examples
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::new();
//!
//! deque.push_back(1);
//! deque.push_back(2);
//! assert_eq!(deque.len(), 2);
//!
//! assert_eq!(deque.pop_front(), Some(1));
//! assert_eq!(deque.pop_front(), Some(2));
//! assert_eq!(deque.pop_front(), None);
//! ```
//!
//! # Insert & Remove
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque: RingDeque<_> = vec!["A", "B", "C", "D", "E", "F", "G"].into_iter().collect();
//!
//! deque.insert(4, "x");
//! assert_eq!(deque.values(), vec!["A", "B", "C", "D", "x", "E", "F", "G"]);
//!
//! assert_eq!(deque.remove(4), "x");
//! assert_eq!(format!("{:?}", deque), r#"["A", "B", "C", "D", "E", "F", "G"]"#);
//! ```
//!
//! # Rolling Window
//! ```
//! use ringdeque::FixedRing;
//!
//! let mut last_five = FixedRing::new(5, 0);
//! for sample in 1..7 {
//!     last_five.push(sample);
//! }
//!
//! assert_eq!(last_five.values(), vec![2, 3, 4, 5, 6]);
//! assert_eq!(last_five[-1], 6);
//! ```

#![cfg_attr(not(any(feature="std", test)), no_std)]

#![deny(missing_docs)]

extern crate alloc;

pub use odds::IndexRange as RangeArgument;

mod fixedring;
mod ringdeque;
mod utils;
pub mod error;

pub use crate::error::IndexError;
pub use crate::fixedring::{FixedRing, Iter as FixedRingIter};
pub use crate::ringdeque::{IntoIter, Iter, IterMut, RingDeque, MIN_CAPACITY};
