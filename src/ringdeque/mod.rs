use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::iter;

use crate::error::IndexError;
use crate::utils::*;
use crate::RangeArgument;

mod internal;
mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::{IntoIter, Iter, IterMut};

/// Smallest capacity a `RingDeque` allocates, and the floor below which it
/// never shrinks.
pub const MIN_CAPACITY: usize = 16;

/// A growable ring buffer.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the queue, and `pop_front` to remove from the queue. `extend` pushes onto
/// the back in this manner, and iterating over `RingDeque` goes front to back.
///
/// # Capacity
///
/// Once allocated, the capacity is always a power of two no smaller than
/// [`MIN_CAPACITY`], so positions wrap with a bit mask. A push into a full
/// buffer doubles it. A pop that leaves the buffer exactly one quarter full
/// halves it, which keeps alternating push/pop at either boundary from
/// reallocating.
///
/// # Errors
///
/// Peeking or popping an empty deque returns `None`. Positional operations
/// (`at`, indexing, `insert`, `remove`, `swap`, `range`) panic on an index out
/// of bounds; `get`, `try_insert` and `try_remove` report it instead.
pub struct RingDeque<T> {
    buf: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> RingDeque<T> {
    /// Creates an empty `RingDeque`. Nothing is allocated until the first push.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<usize> = RingDeque::new();
    /// assert_eq!(deque.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        RingDeque {
            buf: Box::new([]),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates an empty `RingDeque` with room for at least `capacity`
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<u8> = RingDeque::with_capacity(100);
    /// assert_eq!(deque.capacity(), 128);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = cmp::max(capacity, MIN_CAPACITY).next_power_of_two();
        RingDeque {
            buf: internal::empty_slots(capacity),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Creates a `RingDeque` holding `len` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque = RingDeque::filled(3, "x");
    /// assert_eq!(deque.values(), vec!["x", "x", "x"]);
    /// ```
    pub fn filled(len: usize, value: T) -> Self
        where T: Clone
    {
        let mut deque = Self::with_capacity(len);
        deque.extend(iter::repeat(value).take(len));
        deque
    }

    /// Returns the number of elements in the `RingDeque`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Appends an element to the back of the deque, growing the buffer if it
    /// is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, element: T) {
        self.grow_if_full();
        let tail = self.tail;
        self.buf[tail] = Some(element);
        self.tail = self.next(tail);
        self.len += 1;
    }

    /// Prepends an element to the front of the deque, growing the buffer if
    /// it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// assert_eq!(deque.front(), Some(&2));
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.grow_if_full();
        let head = self.prev(self.head);
        self.buf[head] = Some(element);
        self.head = head;
        self.len += 1;
    }

    /// Removes and returns an element from the front of the deque.
    ///
    /// Returns the element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head;
        let element = self.buf[head].take();
        self.head = self.next(head);
        self.len -= 1;
        self.shrink_if_excess();
        element
    }

    /// Removes an element from the back of the deque.
    ///
    /// Returns the element, or `None` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.pop_back(), None);
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.prev(self.tail);
        let element = self.buf[tail].take();
        self.tail = tail;
        self.len -= 1;
        self.shrink_if_excess();
        element
    }

    /// Provides a reference to the front element, or `None` if the deque is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Provides a reference to the back element, or `None` if the deque is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let last = self.len - 1;
        self.get_mut(last)
    }

    /// Retrieves an element in the `RingDeque` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(3);
    /// deque.push_back(4);
    /// deque.push_back(5);
    /// assert_eq!(deque.get(1), Some(&4));
    /// assert_eq!(deque.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.buf[self.slot(index)].as_ref()
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingDeque` mutably by index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.slot(index);
            self.buf[slot].as_mut()
        } else {
            None
        }
    }

    /// Returns the element at logical `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<_> = (0..10).collect();
    /// assert_eq!(*deque.at(7), 7);
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> &T {
        &self[index]
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if there is no element with either index.
    pub fn swap(&mut self, i: usize, j: usize) {
        assert!(i < self.len, "index out of bounds: the len is {} but the index is {}", self.len, i);
        assert!(j < self.len, "index out of bounds: the len is {} but the index is {}", self.len, j);
        let ri = self.slot(i);
        let rj = self.slot(j);
        self.buf.swap(ri, rj);
    }

    /// Returns `true` if the deque contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        self.iter().any(|e| e == x)
    }

    /// Removes every element, keeping the allocated buffer for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque: RingDeque<_> = (0..100).collect();
    /// let capacity = deque.capacity();
    /// deque.clear();
    /// assert!(deque.is_empty());
    /// assert_eq!(deque.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        let len = self.len;
        let (front, back) = self.window_mut(0, len);
        for slot in front.iter_mut().chain(back.iter_mut()) {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Rotates the deque `n` steps front-to-back, or back-to-front when `n`
    /// is negative.
    ///
    /// Equivalent to `n` rounds of `push_back(pop_front())` (or the mirror),
    /// but never reallocates. Whichever direction needs fewer moves is taken;
    /// with every slot occupied only the indices move.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque: RingDeque<_> = (1..6).collect();
    /// deque.rotate(2);
    /// assert_eq!(deque.values(), vec![3, 4, 5, 1, 2]);
    /// deque.rotate(-3);
    /// assert_eq!(deque.values(), vec![5, 1, 2, 3, 4]);
    /// ```
    pub fn rotate(&mut self, n: isize) {
        if self.len <= 1 {
            return;
        }
        let steps = normalize(n, self.len);
        if steps == 0 {
            return;
        }

        if self.is_full() {
            let capacity = self.buf.len();
            self.head = mask_add(self.head, steps, capacity);
            self.tail = self.head;
            return;
        }

        if steps <= self.len / 2 {
            for _ in 0..steps {
                self.rotate_forward();
            }
        } else {
            for _ in 0..self.len - steps {
                self.rotate_backward();
            }
        }
    }

    /// Inserts an element at `index` within the deque, shifting the elements
    /// on the nearer side of `index` by rotation.
    ///
    /// `insert(0, e)` is `push_front(e)`; `insert(len, e)` is `push_back(e)`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque: RingDeque<_> = vec!['a', 'b', 'c'].into_iter().collect();
    /// deque.insert(1, 'd');
    /// assert_eq!(deque.values(), vec!['a', 'd', 'b', 'c']);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        if let Err(err) = self.try_insert(index, element) {
            panic!("insertion {}", err);
        }
    }

    /// Inserts an element at `index`, handing it back in the error if
    /// `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque: RingDeque<_> = (0..3).collect();
    /// let err = deque.try_insert(5, 42).unwrap_err();
    /// assert_eq!(err.element, 42);
    /// assert_eq!(deque.len(), 3);
    /// ```
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), IndexError<T>> {
        let len = self.len;
        if index > len {
            return Err(IndexError { index, len, element });
        }

        if index == 0 {
            self.push_front(element);
        } else if index == len {
            self.push_back(element);
        } else if index <= len / 2 {
            let rots = index as isize;
            self.rotate(rots);
            self.push_front(element);
            self.rotate(-rots);
        } else {
            let rots = (len - index) as isize;
            self.rotate(-rots);
            self.push_back(element);
            self.rotate(rots);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the elements on
    /// the nearer side of `index` by rotation.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque: RingDeque<_> = (1..4).collect();
    /// assert_eq!(deque.remove(1), 2);
    /// assert_eq!(deque.values(), vec![1, 3]);
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(element) => element,
            Err(err) => panic!("removal {}", err),
        }
    }

    /// Removes and returns the element at `index`, or an error if
    /// `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexError> {
        let len = self.len;
        let err = IndexError { index, len, element: () };
        if index >= len {
            return Err(err);
        }

        let element = if index == 0 {
            self.pop_front()
        } else if index == len - 1 {
            self.pop_back()
        } else if index <= len / 2 {
            let rots = index as isize;
            self.rotate(rots);
            let element = self.pop_front();
            self.rotate(-rots);
            element
        } else {
            let rots = (len - 1 - index) as isize;
            self.rotate(-rots);
            let element = self.pop_back();
            self.rotate(rots);
            element
        };
        element.ok_or(err)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    /// let c: Vec<&i32> = deque.iter().collect();
    /// assert_eq!(c, [&4, &5, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (front, back) = self.window(0, self.len);
        Iter::new(front, back)
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let len = self.len;
        let (front, back) = self.window_mut(0, len);
        IterMut::new(front, back)
    }

    /// Returns a front-to-back iterator over the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<_> = (0..10).collect();
    /// let middle: Vec<_> = deque.range(3..6).cloned().collect();
    /// assert_eq!(middle, vec![3, 4, 5]);
    /// assert_eq!(deque.range(8..).count(), 2);
    /// ```
    pub fn range<R>(&self, range: R) -> Iter<T>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(self.len);
        assert!(start <= end, "range lower bound was too large");
        assert!(end <= self.len, "range upper bound was too large");

        let (front, back) = self.window(start, end - start);
        Iter::new(front, back)
    }

    /// Copies the elements, front to back, into a new `Vec`.
    pub fn values(&self) -> Vec<T>
        where T: Clone
    {
        self.iter().cloned().collect()
    }

    /// Calls `f` on every element, front to back.
    pub fn for_each<F>(&self, f: F)
        where F: FnMut(&T)
    {
        self.iter().for_each(f)
    }

    /// Calls `f` on every element, beginning at logical index `start` and
    /// wrapping past the back to finish with the elements before it.
    ///
    /// `start` is taken modulo `len`, so negative values count from the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<_> = (0..5).collect();
    /// let mut seen = Vec::new();
    /// deque.for_each_from(-2, |&x| seen.push(x));
    /// assert_eq!(seen, vec![3, 4, 0, 1, 2]);
    /// ```
    pub fn for_each_from<F>(&self, start: isize, f: F)
        where F: FnMut(&T)
    {
        self.for_each_range(start, self.len, f)
    }

    /// Calls `f` on at most `count` elements, beginning at logical index
    /// `start` (taken modulo `len`) and wrapping past the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let deque: RingDeque<_> = (0..5).collect();
    /// let mut seen = Vec::new();
    /// deque.for_each_range(3, 4, |&x| seen.push(x));
    /// assert_eq!(seen, vec![3, 4, 0, 1]);
    /// ```
    pub fn for_each_range<F>(&self, start: isize, count: usize, f: F)
        where F: FnMut(&T)
    {
        if self.is_empty() {
            return;
        }
        let start = normalize(start, self.len);
        let count = cmp::min(count, self.len);
        let before_wrap = cmp::min(count, self.len - start);

        self.range(start..start + before_wrap)
            .chain(self.range(0..count - before_wrap))
            .for_each(f)
    }
}
