//! A fixed-capacity ring that overwrites its oldest value on every push.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::fmt;
use core::iter::{self, FusedIterator};
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::utils::*;

/// A rolling window over the last `capacity` values pushed.
///
/// Every slot is always populated: construction fills the ring with a
/// caller-supplied value, and each `push` replaces the oldest slot and hands
/// the replaced value back. The capacity never changes.
///
/// Positions are signed offsets from the *origin*, the slot the next push will
/// overwrite. Offset `0` is the oldest value and `-1` the newest; any offset
/// is reduced modulo the capacity, so addressing can never go out of bounds.
///
/// # Examples
///
/// ```
/// use ringdeque::FixedRing;
///
/// let mut ring = FixedRing::new(3, 0);
/// assert_eq!(ring.push(1), 0);
/// assert_eq!(ring.push(2), 0);
/// assert_eq!(ring.push(3), 0);
/// assert_eq!(ring.push(4), 1);
/// assert_eq!(ring.values(), vec![2, 3, 4]);
/// assert_eq!(ring[-1], 4);
/// ```
#[derive(Clone)]
pub struct FixedRing<T> {
    buf: Box<[T]>,
    origin: usize,
}

impl<T> FixedRing<T> {
    /// Creates a ring of `capacity` slots, each holding a clone of `fill`.
    ///
    /// A `capacity` of zero is raised to one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::FixedRing;
    ///
    /// let ring = FixedRing::new(0, 'a');
    /// assert_eq!(ring.capacity(), 1);
    /// ```
    pub fn new(capacity: usize, fill: T) -> Self
        where T: Clone
    {
        let capacity = cmp::max(capacity, 1);
        FixedRing {
            buf: iter::repeat(fill).take(capacity).collect(),
            origin: 0,
        }
    }

    /// Returns the number of slots. Always equal to `len`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of values held, which is always the capacity.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Always `false`: a ring holds at least one slot.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Buffer position of the slot the next push will overwrite.
    #[inline]
    pub fn origin(&self) -> usize {
        self.origin
    }

    #[inline]
    fn slot(&self, offset: isize) -> usize {
        wrap_add(self.origin, normalize(offset, self.buf.len()), self.buf.len())
    }

    /// Stores `value` in place of the oldest value and returns the value it
    /// replaced.
    pub fn push(&mut self, value: T) -> T {
        let origin = self.origin;
        let evicted = mem::replace(&mut self.buf[origin], value);
        self.origin = wrap_add(origin, 1, self.buf.len());
        evicted
    }

    /// Returns the value at `offset` from the origin.
    #[inline]
    pub fn get(&self, offset: isize) -> &T {
        &self.buf[self.slot(offset)]
    }

    /// Returns the value at `offset` from the origin mutably.
    #[inline]
    pub fn get_mut(&mut self, offset: isize) -> &mut T {
        let slot = self.slot(offset);
        &mut self.buf[slot]
    }

    /// Replaces the value at `offset` from the origin, returning the old one.
    /// The origin does not move.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::FixedRing;
    ///
    /// let mut ring = FixedRing::new(4, 0);
    /// assert_eq!(ring.set(-1, 9), 0);
    /// assert_eq!(ring.values(), vec![0, 0, 0, 9]);
    /// ```
    pub fn set(&mut self, offset: isize, value: T) -> T {
        mem::replace(self.get_mut(offset), value)
    }

    /// The value the next push will evict.
    #[inline]
    pub fn oldest(&self) -> &T {
        self.get(0)
    }

    /// The most recently pushed value.
    #[inline]
    pub fn newest(&self) -> &T {
        self.get(-1)
    }

    /// Overwrites every slot with a clone of `fill`. The origin is unchanged.
    pub fn reinit(&mut self, fill: T)
        where T: Clone
    {
        for slot in self.buf.iter_mut() {
            *slot = fill.clone();
        }
    }

    /// Returns an oldest-to-newest iterator.
    pub fn iter(&self) -> Iter<T> {
        let (newer, older) = self.buf.split_at(self.origin);
        Iter {
            front: older.iter(),
            back: newer.iter(),
        }
    }

    /// Copies the values, oldest to newest, into a new `Vec`.
    pub fn values(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }

    /// Calls `f` on every value, oldest to newest.
    pub fn for_each<F>(&self, f: F)
        where F: FnMut(&T)
    {
        self.iter().for_each(f)
    }
}

impl<T> Index<isize> for FixedRing<T> {
    type Output = T;

    #[inline]
    fn index(&self, offset: isize) -> &T {
        self.get(offset)
    }
}

impl<T> IndexMut<isize> for FixedRing<T> {
    #[inline]
    fn index_mut(&mut self, offset: isize) -> &mut T {
        self.get_mut(offset)
    }
}

impl<T> PartialEq for FixedRing<T>
    where T: PartialEq
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for FixedRing<T> where T: Eq {}

impl<T> fmt::Debug for FixedRing<T>
    where T: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<'a, T> IntoIterator for &'a FixedRing<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `FixedRing` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
