use crate::array::Array;
use crate::behavior::Deque;
use crate::ring::Ring;
use crate::utils::*;

/// A fixed capacity double-ended queue.
///
/// `InplaceDeque<[T; N]>` is the same ring buffer as
/// [`CircularArray`](crate::CircularArray) with two differences: it can be
/// resized, and cursor distances follow the [`Deque`] rule, which unrolls each
/// cursor against the read index on its own. `(it + n) - it == n` therefore
/// holds for every cursor, wrapped or not.
///
/// # Examples
///
/// ```
/// use inplace::InplaceDeque;
///
/// let mut deque: InplaceDeque<[i32; 11]> = (0..10).collect();
/// deque.pop_front();
/// deque.push_back(10);
///
/// let (begin, end) = (deque.begin(), deque.end());
/// assert_eq!(*begin.get(), 1);
/// assert_eq!(*(end - 1).get(), 10);
/// assert_eq!(end - begin, 10);
/// assert_eq!((begin + 4) - begin, 4);
/// ```
pub type InplaceDeque<A> = Ring<A, Deque>;

impl<A: Array> Ring<A, Deque> {
    /// Sets the number of elements to `count`.
    ///
    /// Only the write index moves. Growing exposes whatever the newly covered
    /// slots last held; use [`resize_with_value`](Self::resize_with_value) to
    /// overwrite them.
    ///
    /// `count` must not exceed the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::InplaceDeque;
    ///
    /// let mut deque: InplaceDeque<[i32; 5]> = [1, 2, 3].into_iter().collect();
    /// deque.resize(1);
    /// assert_eq!(deque.len(), 1);
    /// deque.resize(3);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn resize(&mut self, count: usize) {
        debug_assert!(count <= self.capacity(), "resize beyond capacity");
        let write = wrap_add(self.read(), count, Self::slots());
        self.set_write(write);
    }

    /// Sets the number of elements to `count`, filling the positions past the
    /// old length with clones of `value`.
    ///
    /// `count` must not exceed the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::InplaceDeque;
    ///
    /// let mut deque: InplaceDeque<[i32; 5]> = [1].into_iter().collect();
    /// deque.resize_with_value(3, 7);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 7, 7]);
    /// ```
    pub fn resize_with_value(&mut self, count: usize, value: A::Item)
    where
        A::Item: Clone,
    {
        let old_len = self.len();
        self.resize(count);
        for index in old_len..count {
            self[index] = value.clone();
        }
    }
}
