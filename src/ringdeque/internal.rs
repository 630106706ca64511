use alloc::boxed::Box;
use core::iter;

use log::trace;

use super::{RingDeque, MIN_CAPACITY};
use crate::utils::*;

/// Allocates `capacity` cleared slots.
pub fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> RingDeque<T> {
    #[inline]
    pub(super) fn next(&self, index: usize) -> usize {
        mask_add(index, 1, self.buf.len())
    }

    #[inline]
    pub(super) fn prev(&self, index: usize) -> usize {
        mask_sub(index, 1, self.buf.len())
    }

    /// Buffer position of the logical `index`.
    #[inline]
    pub(super) fn slot(&self, index: usize) -> usize {
        mask_add(self.head, index, self.buf.len())
    }

    #[inline]
    pub(super) fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    pub(super) fn grow_if_full(&mut self) {
        if self.buf.is_empty() {
            trace!("ring deque allocating {} slots", MIN_CAPACITY);
            self.buf = empty_slots(MIN_CAPACITY);
            self.head = 0;
            self.tail = 0;
        } else if self.is_full() {
            self.resize(self.len << 1);
        }
    }

    pub(super) fn shrink_if_excess(&mut self) {
        if self.buf.len() > MIN_CAPACITY && (self.len << 2) == self.buf.len() {
            self.resize(self.buf.len() >> 1);
        }
    }

    /// Moves the live window into a fresh buffer of `capacity` slots,
    /// starting at slot 0.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity.is_power_of_two());
        debug_assert!(capacity > self.len);

        let mut slots = empty_slots(capacity);
        let len = self.len;
        {
            // the segment from head to the buffer end goes first, then
            // whatever wrapped around to slot 0
            let (front, back) = self.window_mut(0, len);
            for (dst, src) in slots.iter_mut().zip(front.iter_mut().chain(back.iter_mut())) {
                *dst = src.take();
            }
        }
        trace!("ring deque resized from {} to {} slots (len {})",
               self.buf.len(),
               capacity,
               len);

        self.buf = slots;
        self.head = 0;
        self.tail = len;
    }

    /// Moves the front element to the back.
    #[inline]
    pub(super) fn rotate_forward(&mut self) {
        let head = self.head;
        let tail = self.tail;
        let element = self.buf[head].take();
        self.buf[tail] = element;
        self.head = self.next(head);
        self.tail = self.next(tail);
    }

    /// Moves the back element to the front.
    #[inline]
    pub(super) fn rotate_backward(&mut self) {
        let head = self.prev(self.head);
        let tail = self.prev(self.tail);
        let element = self.buf[tail].take();
        self.buf[head] = element;
        self.head = head;
        self.tail = tail;
    }

    /// Returns the slots holding logical indices `start..start + len` as a
    /// pair of buffer slices, in order.
    pub(super) fn window(&self, start: usize, len: usize) -> (&[Option<T>], &[Option<T>]) {
        if len == 0 {
            return (&[], &[]);
        }
        let begin = self.slot(start);
        let pre_wrap_len = self.buf.len() - begin;
        if len <= pre_wrap_len {
            (&self.buf[begin..begin + len], &[])
        } else {
            (&self.buf[begin..], &self.buf[..len - pre_wrap_len])
        }
    }

    pub(super) fn window_mut(&mut self,
                             start: usize,
                             len: usize)
                             -> (&mut [Option<T>], &mut [Option<T>]) {
        if len == 0 {
            return (&mut [], &mut []);
        }
        let begin = self.slot(start);
        let (wrapped, from_begin) = self.buf.split_at_mut(begin);
        if len <= from_begin.len() {
            (&mut from_begin[..len], &mut [])
        } else {
            let rest = len - from_begin.len();
            (from_begin, &mut wrapped[..rest])
        }
    }

    /// Moves the empty deque's head and tail to `position`, allocating if
    /// needed, so tests can start the window anywhere in the buffer.
    #[cfg(test)]
    pub(super) fn reposition(&mut self, position: usize) {
        assert!(self.is_empty());
        if self.buf.is_empty() {
            self.buf = empty_slots(MIN_CAPACITY);
        }
        let position = position & (self.buf.len() - 1);
        self.head = position;
        self.tail = position;
    }

    #[cfg(test)]
    pub(super) fn live_slots(&self) -> usize {
        self.buf.iter().filter(|slot| slot.is_some()).count()
    }
}
