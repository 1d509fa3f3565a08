use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::ptr;

use super::Ring;
use crate::array::Array;
use crate::behavior::Behavior;
use crate::utils::*;

/// A random-access position inside a [`Ring`].
///
/// A cursor is a physical slot plus a shared borrow of its ring. Moving it
/// wraps around the backing array in both directions, so it can be moved past
/// `end()` and land on stale slots; only dereferencing a position in
/// `begin()..end()` yields a live element.
///
/// Distances and ordering between cursors are defined by the ring's
/// [`Behavior`].
pub struct Cursor<'a, A: Array, B: Behavior> {
    ring: &'a Ring<A, B>,
    slot: usize,
}

/// A mutable random-access position inside a [`Ring`].
pub struct CursorMut<'a, A: Array, B: Behavior> {
    ring: &'a mut Ring<A, B>,
    slot: usize,
}

impl<'a, A: Array, B: Behavior> Clone for Cursor<'a, A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A: Array, B: Behavior> Copy for Cursor<'a, A, B> {}

impl<'a, A: Array, B: Behavior> Cursor<'a, A, B> {
    #[inline]
    pub(crate) fn new(ring: &'a Ring<A, B>, slot: usize) -> Self {
        Cursor { ring, slot }
    }

    /// The physical slot the cursor points at.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Returns the element under the cursor.
    ///
    /// The cursor must not be `end()`.
    #[inline]
    pub fn get(&self) -> &'a A::Item {
        debug_assert!(self.slot != self.ring.write(), "dereferencing end()");
        self.ring.slot(self.slot)
    }

    /// Returns the element `n` positions away, like `*(cursor + n)`.
    #[inline]
    pub fn at(&self, n: isize) -> &'a A::Item {
        self.offset(n).get()
    }

    /// Returns a cursor moved by `n` positions.
    #[inline]
    pub fn offset(&self, n: isize) -> Self {
        Cursor::new(self.ring, wrap_offset(self.slot, n, Ring::<A, B>::slots()))
    }

    /// Moves the cursor one position forward.
    #[inline]
    pub fn move_next(&mut self) {
        self.slot = wrap_add(self.slot, 1, Ring::<A, B>::slots());
    }

    /// Moves the cursor one position back.
    #[inline]
    pub fn move_prev(&mut self) {
        self.slot = wrap_sub(self.slot, 1, Ring::<A, B>::slots());
    }
}

impl<'a, A: Array, B: Behavior> Add<isize> for Cursor<'a, A, B> {
    type Output = Self;

    #[inline]
    fn add(self, n: isize) -> Self {
        self.offset(n)
    }
}

impl<'a, A: Array, B: Behavior> Sub<isize> for Cursor<'a, A, B> {
    type Output = Self;

    #[inline]
    fn sub(self, n: isize) -> Self {
        self.offset(n.wrapping_neg())
    }
}

impl<'a, A: Array, B: Behavior> AddAssign<isize> for Cursor<'a, A, B> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        *self = self.offset(n);
    }
}

impl<'a, A: Array, B: Behavior> SubAssign<isize> for Cursor<'a, A, B> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        *self = self.offset(n.wrapping_neg());
    }
}

impl<'a, A: Array, B: Behavior> Sub for Cursor<'a, A, B> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Self) -> isize {
        debug_assert!(ptr::eq(self.ring, rhs.ring), "cursors of different rings");
        let ring = self.ring;
        B::distance(self.slot, rhs.slot, ring.read(), ring.write(), Ring::<A, B>::slots())
    }
}

impl<'a, A: Array, B: Behavior> PartialEq for Cursor<'a, A, B> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<'a, A: Array, B: Behavior> Eq for Cursor<'a, A, B> {}

impl<'a, A: Array, B: Behavior> PartialOrd for Cursor<'a, A, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let ring = self.ring;
        let (read, write, len) = (ring.read(), ring.write(), Ring::<A, B>::slots());
        if self.slot == other.slot {
            Some(Ordering::Equal)
        } else if B::less(self.slot, other.slot, read, write, len) {
            Some(Ordering::Less)
        } else {
            Some(Ordering::Greater)
        }
    }
}

impl<'a, A: Array, B: Behavior> fmt::Debug for Cursor<'a, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.slot).finish()
    }
}

impl<'a, A: Array, B: Behavior> CursorMut<'a, A, B> {
    #[inline]
    pub(crate) fn new(ring: &'a mut Ring<A, B>, slot: usize) -> Self {
        CursorMut { ring, slot }
    }

    /// The physical slot the cursor points at.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Returns the element under the cursor.
    ///
    /// The cursor must not be `end()`.
    #[inline]
    pub fn get(&self) -> &A::Item {
        self.as_cursor().get()
    }

    /// Returns the element under the cursor mutably.
    ///
    /// The cursor must not be `end()`.
    #[inline]
    pub fn get_mut(&mut self) -> &mut A::Item {
        debug_assert!(self.slot != self.ring.write(), "dereferencing end()");
        self.ring.slot_mut(self.slot)
    }

    /// Consumes the cursor, returning the element under it with the ring's
    /// lifetime.
    #[inline]
    pub fn into_mut(self) -> &'a mut A::Item {
        debug_assert!(self.slot != self.ring.write(), "dereferencing end()");
        self.ring.slot_mut(self.slot)
    }

    /// Moves the cursor by `n` positions.
    #[inline]
    pub fn offset(&mut self, n: isize) {
        self.slot = wrap_offset(self.slot, n, Ring::<A, B>::slots());
    }

    /// Moves the cursor one position forward.
    #[inline]
    pub fn move_next(&mut self) {
        self.slot = wrap_add(self.slot, 1, Ring::<A, B>::slots());
    }

    /// Moves the cursor one position back.
    #[inline]
    pub fn move_prev(&mut self) {
        self.slot = wrap_sub(self.slot, 1, Ring::<A, B>::slots());
    }

    /// A read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, A, B> {
        Cursor::new(self.ring, self.slot)
    }

    /// A cursor on the front element of the same ring.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, A, B> {
        self.ring.begin()
    }

    /// A cursor one past the back element of the same ring.
    #[inline]
    pub fn end(&self) -> Cursor<'_, A, B> {
        self.ring.end()
    }
}

/// Distance from a read-only cursor of the same ring.
///
/// # Examples
///
/// ```
/// use inplace::InplaceDeque;
///
/// let mut deque: InplaceDeque<[i32; 6]> = (0..5).collect();
/// let mut it = deque.begin_mut();
/// it += 2;
/// *it.get_mut() = 20;
/// assert_eq!(&it - it.begin(), 2);
/// assert!(it < it.end());
/// ```
impl<'a, 'b, 'c, A: Array, B: Behavior> Sub<Cursor<'b, A, B>> for &'c CursorMut<'a, A, B> {
    type Output = isize;

    #[inline]
    fn sub(self, rhs: Cursor<'b, A, B>) -> isize {
        self.as_cursor() - rhs
    }
}

impl<'a, 'b, A: Array, B: Behavior> PartialEq<Cursor<'b, A, B>> for CursorMut<'a, A, B> {
    #[inline]
    fn eq(&self, other: &Cursor<'b, A, B>) -> bool {
        self.slot == other.slot
    }
}

impl<'a, 'b, A: Array, B: Behavior> PartialOrd<Cursor<'b, A, B>> for CursorMut<'a, A, B> {
    #[inline]
    fn partial_cmp(&self, other: &Cursor<'b, A, B>) -> Option<Ordering> {
        self.as_cursor().partial_cmp(other)
    }
}

impl<'a, A: Array, B: Behavior> AddAssign<isize> for CursorMut<'a, A, B> {
    #[inline]
    fn add_assign(&mut self, n: isize) {
        self.offset(n);
    }
}

impl<'a, A: Array, B: Behavior> SubAssign<isize> for CursorMut<'a, A, B> {
    #[inline]
    fn sub_assign(&mut self, n: isize) {
        self.offset(n.wrapping_neg());
    }
}

impl<'a, A: Array, B: Behavior> fmt::Debug for CursorMut<'a, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.slot).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::behavior::{Behavior, Circular, Deque};
    use crate::ring::Ring;
    use std::vec::Vec;

    // ten elements, capacity ten: begin at slot 1, end at slot 0
    fn shifted<B: Behavior>() -> Ring<[i32; 11], B> {
        let mut ring: Ring<[i32; 11], B> = (0..10).collect();
        ring.pop_front();
        ring.push_back(10);
        ring
    }

    // begin at slot 8, end at slot 7
    fn wrapped<B: Behavior>() -> Ring<[i32; 11], B> {
        let mut ring: Ring<[i32; 11], B> = Ring::new();
        for i in (7..=10).rev() {
            ring.push_front(i);
        }
        ring.pop_front();
        for i in 0..=6 {
            ring.push_back(i);
        }
        ring
    }

    #[test]
    fn addition_wraps_over_the_whole_array() {
        let ring = shifted::<Circular>();
        let it = ring.begin();
        let expected = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0];
        for n in 0..22 {
            assert_eq!(*(it + n).peek(), expected[n as usize % 11]);
        }
    }

    #[test]
    fn negative_addition() {
        let ring = wrapped::<Circular>();
        assert_eq!((ring.begin().slot(), ring.end().slot()), (8, 7));
        let it = ring.begin();
        let expected = [7, 6, 5, 4, 3, 2, 1, 0, 10, 9, 8];
        for n in 1..22isize {
            let value = *(it + -n).peek();
            assert_eq!(value, expected[(n as usize - 1) % 11]);
        }
    }

    #[test]
    fn subtraction() {
        let ring = shifted::<Circular>();
        let it = ring.begin();
        let expected = [1, 0, 10, 9, 8, 7, 6, 5, 4, 3, 2];
        for n in 0..22isize {
            assert_eq!(*(it - n).peek(), expected[n as usize % 11]);
        }
    }

    #[test]
    fn negative_subtraction() {
        let ring = wrapped::<Circular>();
        let it = ring.end();
        let expected = [8, 9, 10, 0, 1, 2, 3, 4, 5, 6, 7];
        for n in 1..22isize {
            let value = *(it - -n).peek();
            assert_eq!(value, expected[(n as usize - 1) % 11]);
        }
    }

    #[test]
    fn decrement() {
        let ring = shifted::<Circular>();
        let mut it = ring.begin();
        let mut seen = Vec::new();
        for _ in 0..12 {
            seen.push(*it.peek());
            it.move_prev();
        }
        assert_eq!(seen, [1, 0, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);

        let mut ring: Ring<[i32; 8], Circular> = (0..7).collect();
        ring.pop_front();
        ring.push_back(7);
        let mut it = ring.begin();
        let mut seen = Vec::new();
        for _ in 0..9 {
            seen.push(*it.peek());
            it -= 1;
        }
        assert_eq!(seen, [1, 0, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn circular_difference_when_not_wrapped() {
        let mut ring: Ring<[i32; 11], Circular> = (0..10).collect();
        ring.pop_front();
        ring.push_back(10);
        ring.pop_back();
        ring.pop_back();

        let it = ring.begin();
        assert_eq!(it - it, 0);
        for n in 0..=8isize {
            assert_eq!(it - (it + n), -n);
            assert_eq!((it + n) - it, n);
            assert_eq!(it + ((it + n) - it), it + n);
        }
        assert_eq!(it + 8, ring.end());

        let it = ring.end();
        for n in 0..=8isize {
            assert_eq!(it - (it - n), n);
            assert_eq!((it - n) - it, -n);
        }
        assert_eq!(it - 8, ring.begin());
    }

    #[test]
    fn circular_difference_across_the_wrap() {
        let mut ring: Ring<[i32; 11], Circular> = Ring::new();
        ring.push_front(10);
        ring.push_front(9);
        ring.push_front(8);
        ring.push_back(0);
        ring.push_back(1);
        ring.push_back(2);
        assert_eq!((ring.begin().slot(), ring.end().slot()), (8, 3));

        assert_eq!(ring.end() - ring.begin(), 6);
        assert_eq!(ring.begin() - ring.end(), -6);
        assert_eq!(ring.begin() + (ring.end() - ring.begin()), ring.end());
        // both on the same side of the wrap: shifted by a full turn
        assert_eq!((ring.begin() + 1) - ring.begin(), 1 - 11);
    }

    #[test]
    fn deque_difference_in_both_states() {
        let ring = wrapped::<Deque>();
        let it = ring.begin();
        for n in 0..=10isize {
            assert_eq!((it + n) - it, n);
            assert_eq!(it - (it + n), -n);
            assert_eq!((it + n) - n, it);
        }
        assert_eq!(ring.end() - ring.begin(), ring.len() as isize);

        let ring = shifted::<Deque>();
        let it = ring.end();
        for n in 0..=10isize {
            assert_eq!(it - (it - n), n);
        }
    }

    #[test]
    fn comparison() {
        let ring: Ring<[i32; 5], Circular> = [1, 2, 3].into_iter().collect();
        assert!(ring.begin() < ring.end());
        assert!(!(ring.end() < ring.begin()));

        let mut ring: Ring<[i32; 5], Circular> = Ring::new();
        ring.push_front(1);
        ring.push_back(2);
        ring.push_back(3);
        ring.push_back(4);
        assert!(ring.begin() < ring.end());
        assert!(!(ring.end() < ring.begin()));

        let ring = wrapped::<Deque>();
        let (first, last) = (ring.begin(), ring.end());
        assert!(first < first + 3);
        assert!(first + 3 < last);
        assert!(last - 1 > first);
        assert!(first <= first);
    }

    #[test]
    fn at_and_move_next() {
        let ring = wrapped::<Deque>();
        let mut it = ring.begin();
        assert_eq!(*it.at(3), 0);
        it.move_next();
        it += 2;
        assert_eq!(*it.get(), 0);
        assert_eq!(*it.at(-1), 10);
    }

    #[test]
    fn cursor_mut_writes_through() {
        let mut ring = wrapped::<Deque>();
        {
            let mut it = ring.begin_mut();
            *it.get_mut() = 80;
            it += 3;
            assert_eq!(*it.get(), 0);
            *it.get_mut() = -1;
            it.move_prev();
            assert_eq!(it.as_cursor().slot(), 10);
            it += 7;
            *it.into_mut() = 66;
        }
        {
            let mut end = ring.end_mut();
            end.move_prev();
            assert_eq!(*end.get(), 66);
        }
        assert_eq!(
            ring.iter().copied().collect::<Vec<_>>(),
            [80, 9, 10, -1, 1, 2, 3, 4, 5, 66]
        );
    }

    #[test]
    fn cursor_mut_difference_and_ordering() {
        let mut ring = wrapped::<Deque>();
        let mut it = ring.begin_mut();
        assert!(it == it.begin());
        it += 5;
        assert_eq!(&it - it.begin(), 5);
        assert_eq!(&it - it.end(), -5);
        assert!(it > it.begin());
        assert!(it < it.end());
        assert!(it == it.begin() + 5);
        *it.get_mut() = 100;
        it -= 4;
        assert_eq!(&it - it.begin(), 1);
        assert!(it < it.begin() + 2);

        let mut ring: Ring<[i32; 11], Circular> = (1..=10).collect();
        let mut it = ring.end_mut();
        it.move_prev();
        assert_eq!(*it.get(), 10);
        assert_eq!(&it - it.begin(), 9);
        assert!(it < it.end());
    }

    impl<'a, A: crate::array::Array, B: Behavior> super::Cursor<'a, A, B> {
        // Reads stale slots as well, which the arithmetic tests rely on.
        fn peek(&self) -> &'a A::Item {
            self.ring.slot(self.slot)
        }
    }
}
