//! Index arithmetic shared by the ring containers.

/// Wraps `index + addend` into a buffer of any `capacity`.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Wraps `index + addend` into a buffer whose `capacity` is a power of two.
#[inline]
pub fn mask_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    index.wrapping_add(addend) & (capacity - 1)
}

/// Wraps `index - subtrahend` into a buffer whose `capacity` is a power of two.
#[inline]
pub fn mask_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    index.wrapping_sub(subtrahend) & (capacity - 1)
}

/// Maps a signed offset of any magnitude onto `0..len`.
///
/// `len` must be non-zero.
#[inline]
pub fn normalize(offset: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    offset.rem_euclid(len as isize) as usize
}
