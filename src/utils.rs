//! Index arithmetic for a ring of `len` physical slots.

#[inline]
pub fn wrap_add(index: usize, addend: usize, len: usize) -> usize {
    debug_assert!(addend <= len);
    (index + addend) % len
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, len: usize) -> usize {
    debug_assert!(subtrahend <= len);
    (index + len - subtrahend) % len
}

/// Moves `index` by a signed `offset`, using Euclidean modulo so the result
/// is never negative.
#[inline]
pub fn wrap_offset(index: usize, offset: isize, len: usize) -> usize {
    debug_assert!(index < len);
    let offset = offset.rem_euclid(len as isize) as usize;
    (index + offset) % len
}

#[inline]
pub fn count(read: usize, write: usize, len: usize) -> usize {
    debug_assert!(read < len);
    debug_assert!(write < len);
    if write >= read {
        write - read
    } else {
        len + write - read
    }
}
