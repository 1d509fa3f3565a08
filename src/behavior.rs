//! Cursor semantics for the ring containers.
//!
//! A ring cursor is a physical slot, so "how far apart are two cursors" and
//! "which one comes first" have no answer without looking at the ring's
//! current read and write indices. The two containers answer it differently.

/// Tagging trait for providing cursor arithmetic to `Ring`.
///
/// All positions are physical slots in `0..len`, where `len` is the length of
/// the backing array (capacity plus one).
pub trait Behavior {
    /// Signed distance `lhs - rhs`, chosen so that `rhs + distance == lhs`.
    fn distance(lhs: usize, rhs: usize, read: usize, write: usize, len: usize) -> isize;

    /// Whether `lhs` orders before `rhs`.
    fn less(lhs: usize, rhs: usize, read: usize, write: usize, len: usize) -> bool;
}

/// Behavior of [`CircularArray`](crate::CircularArray).
///
/// ### Distance:
///
/// While the ring is **not wrapped** (`read <= write`) the distance is the plain
/// difference of the slots. While it **is wrapped**, a non-zero difference is
/// shifted by the slot count towards the opposite sign, which makes
/// `end - begin` equal to the length.
///
/// ### Ordering:
///
/// Lower slots come first while not wrapped, higher slots while wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Circular;

impl Behavior for Circular {
    #[inline]
    fn distance(lhs: usize, rhs: usize, read: usize, write: usize, len: usize) -> isize {
        let diff = lhs as isize - rhs as isize;
        if read <= write {
            diff
        } else if diff < 0 {
            diff + len as isize
        } else if diff > 0 {
            diff - len as isize
        } else {
            0
        }
    }

    #[inline]
    fn less(lhs: usize, rhs: usize, read: usize, write: usize, _len: usize) -> bool {
        if read <= write {
            lhs < rhs
        } else {
            lhs > rhs
        }
    }
}

/// Behavior of [`InplaceDeque`](crate::InplaceDeque).
///
/// ### Distance:
///
/// Each operand is first unrolled on its own: a slot below the read index
/// is taken to lie one full turn further. The distance is the difference of
/// the unrolled slots, so it follows iteration order from `begin` to `end`
/// regardless of how the two cursors sit relative to the wrap point.
///
/// ### Ordering:
///
/// The sign of the distance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Deque;

impl Deque {
    #[inline]
    fn unroll(slot: usize, read: usize, len: usize) -> isize {
        if slot < read {
            (slot + len) as isize
        } else {
            slot as isize
        }
    }
}

impl Behavior for Deque {
    #[inline]
    fn distance(lhs: usize, rhs: usize, read: usize, _write: usize, len: usize) -> isize {
        Self::unroll(lhs, read, len) - Self::unroll(rhs, read, len)
    }

    #[inline]
    fn less(lhs: usize, rhs: usize, read: usize, write: usize, len: usize) -> bool {
        Self::distance(lhs, rhs, read, write, len) < 0
    }
}
