use core::marker::PhantomData;

use crate::array::Array;
use crate::array::Index as ArrayIndex;
use crate::behavior::Behavior;
use crate::error::{CapacityError, OutOfRange};
use crate::utils::*;

mod cursor;
mod iterator_impls;
mod trait_impls;

pub use self::cursor::{Cursor, CursorMut};

/// `Ring` is a fixed capacity ring buffer.
///
/// It can be stored directly on the stack if needed.
///
/// One slot of the backing array is kept free to tell a full ring from an
/// empty one, so `capacity()` is always `backed_array.len() - 1`. Equal read
/// and write indices mean empty; a write index one behind the read index
/// means full.
///
/// `Ring` is not used directly but through [`CircularArray`] and
/// [`InplaceDeque`], which differ in the `B: Behavior` used for cursor
/// arithmetic.
///
/// # Contracts
///
/// Pushing into a full ring, popping from an empty one and reading `front` or
/// `back` of an empty one break the container's contract. Debug builds assert;
/// release builds do not check, and the ring's contents are unspecified
/// afterwards. Use `is_full`/`is_empty`, or the `try_push_*` variants.
///
/// [`CircularArray`]: crate::CircularArray
/// [`InplaceDeque`]: crate::InplaceDeque
#[derive(Clone, Copy)]
pub struct Ring<A: Array, B: Behavior> {
    xs: A,
    read: A::Index,
    write: A::Index,
    behavior: PhantomData<B>,
}

/// `Ring` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [T],
    read: usize,
    write: usize,
}

/// `Ring` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: core::slice::IterMut<'a, T>,
    back: core::slice::IterMut<'a, T>,
}

/// A by-value `Ring` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<A: IntoIterator> {
    inner: core::iter::Take<A::IntoIter>,
}

impl<A: Array, B: Behavior> Ring<A, B> {
    /// Creates an empty ring.
    ///
    /// Every slot of the backing array is filled with `Default::default()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let ring: CircularArray<[usize; 3]> = CircularArray::new();
    /// assert_eq!(ring.capacity(), 2);
    /// ```
    #[inline]
    pub fn new() -> Self
    where
        A::Item: Default,
    {
        Ring {
            xs: A::from_fn(|_| Default::default()),
            read: ArrayIndex::from_usize(0),
            write: ArrayIndex::from_usize(0),
            behavior: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn slots() -> usize {
        A::capacity()
    }

    #[inline]
    pub(crate) fn read(&self) -> usize {
        self.read.to_usize()
    }

    #[inline]
    pub(crate) fn write(&self) -> usize {
        self.write.to_usize()
    }

    #[inline]
    pub(crate) fn set_read(&mut self, read: usize) {
        debug_assert!(read < Self::slots());
        self.read = ArrayIndex::from_usize(read);
    }

    #[inline]
    pub(crate) fn set_write(&mut self, write: usize) {
        debug_assert!(write < Self::slots());
        self.write = ArrayIndex::from_usize(write);
    }

    #[inline]
    pub(crate) fn slot(&self, slot: usize) -> &A::Item {
        &self.xs.as_slice()[slot]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, slot: usize) -> &mut A::Item {
        &mut self.xs.as_mut_slice()[slot]
    }

    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.read() + index) % Self::slots()
    }

    /// Returns the number of elements the ring can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let ring: CircularArray<[usize; 5]> = CircularArray::new();
    /// assert_eq!(ring.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        Self::slots() - 1
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline]
    pub fn max_size(&self) -> usize {
        self.capacity()
    }

    /// Returns the number of elements in the ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 4]> = CircularArray::new();
    /// ring.push_back(1);
    /// ring.push_front(0);
    /// assert_eq!(ring.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        count(self.read(), self.write(), Self::slots())
    }

    /// Returns true if the ring contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Returns true if the ring is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 3]> = CircularArray::new();
    /// ring.push_back(0);
    /// assert!(!ring.is_full());
    /// ring.push_back(1);
    /// assert!(ring.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.read() == wrap_add(self.write(), 1, Self::slots())
    }

    /// Retrieves an element in the ring by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 4]> = CircularArray::new();
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// ring.push_back(5);
    /// assert_eq!(ring.get(1), Some(&4));
    /// assert_eq!(ring.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&A::Item> {
        if index < self.len() {
            Some(self.slot(self.physical(index)))
        } else {
            None
        }
    }

    /// Retrieves an element in the ring mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut A::Item> {
        if index < self.len() {
            let slot = self.physical(index);
            Some(self.slot_mut(slot))
        } else {
            None
        }
    }

    /// Bounds-checked element access.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::{CircularArray, OutOfRange};
    ///
    /// let ring: CircularArray<[_; 4]> = [7, 8].into_iter().collect();
    /// assert_eq!(ring.at(1), Ok(&8));
    /// assert_eq!(ring.at(2), Err(OutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&A::Item, OutOfRange> {
        let len = self.len();
        self.get(index).ok_or(OutOfRange { index, len })
    }

    /// Mutable bounds-checked element access.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut A::Item, OutOfRange> {
        let len = self.len();
        self.get_mut(index).ok_or(OutOfRange { index, len })
    }

    /// Provides a reference to the front element.
    ///
    /// The ring must not be empty.
    #[inline]
    pub fn front(&self) -> &A::Item {
        debug_assert!(!self.is_empty(), "front of an empty ring");
        self.slot(self.read())
    }

    /// Provides a mutable reference to the front element.
    ///
    /// The ring must not be empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut A::Item {
        debug_assert!(!self.is_empty(), "front of an empty ring");
        let read = self.read();
        self.slot_mut(read)
    }

    /// Provides a reference to the back element.
    ///
    /// The ring must not be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 3]> = CircularArray::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// assert_eq!(*ring.back(), 2);
    /// ```
    #[inline]
    pub fn back(&self) -> &A::Item {
        debug_assert!(!self.is_empty(), "back of an empty ring");
        self.slot(wrap_sub(self.write(), 1, Self::slots()))
    }

    /// Provides a mutable reference to the back element.
    ///
    /// The ring must not be empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut A::Item {
        debug_assert!(!self.is_empty(), "back of an empty ring");
        let slot = wrap_sub(self.write(), 1, Self::slots());
        self.slot_mut(slot)
    }

    /// Appends an element to the back of the ring.
    ///
    /// The ring must not be full.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 3]> = CircularArray::new();
    /// ring.push_back(1);
    /// ring.push_back(3);
    /// assert_eq!(3, *ring.back());
    /// ```
    #[inline]
    pub fn push_back(&mut self, element: A::Item) {
        debug_assert!(!self.is_full(), "push_back on a full ring");
        let write = self.write();
        *self.slot_mut(write) = element;
        self.set_write(wrap_add(write, 1, Self::slots()));
    }

    /// Prepends an element to the front of the ring.
    ///
    /// The ring must not be full.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 3]> = CircularArray::new();
    /// ring.push_front(1);
    /// ring.push_front(2);
    /// assert_eq!(*ring.front(), 2);
    /// ```
    #[inline]
    pub fn push_front(&mut self, element: A::Item) {
        debug_assert!(!self.is_full(), "push_front on a full ring");
        let read = wrap_sub(self.read(), 1, Self::slots());
        self.set_read(read);
        *self.slot_mut(read) = element;
    }

    /// Appends an element to the back of the ring, or hands it back if the
    /// ring is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 2]> = CircularArray::new();
    /// assert!(ring.try_push_back(1).is_ok());
    /// assert_eq!(ring.try_push_back(2).unwrap_err().element, 2);
    /// ```
    #[inline]
    pub fn try_push_back(&mut self, element: A::Item) -> Result<(), CapacityError<A::Item>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        self.push_back(element);
        Ok(())
    }

    /// Prepends an element to the front of the ring, or hands it back if the
    /// ring is full.
    #[inline]
    pub fn try_push_front(&mut self, element: A::Item) -> Result<(), CapacityError<A::Item>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        self.push_front(element);
        Ok(())
    }

    /// Removes the last element.
    ///
    /// The ring must not be empty. The element stays in its slot until it is
    /// overwritten by a later push.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 3]> = [1, 2].into_iter().collect();
    /// ring.pop_back();
    /// assert_eq!(*ring.back(), 1);
    /// ```
    #[inline]
    pub fn pop_back(&mut self) {
        debug_assert!(!self.is_empty(), "pop_back on an empty ring");
        let write = wrap_sub(self.write(), 1, Self::slots());
        self.set_write(write);
    }

    /// Removes the first element.
    ///
    /// The ring must not be empty. The element stays in its slot until it is
    /// overwritten by a later push.
    #[inline]
    pub fn pop_front(&mut self) {
        debug_assert!(!self.is_empty(), "pop_front on an empty ring");
        let read = wrap_add(self.read(), 1, Self::slots());
        self.set_read(read);
    }

    /// Clears the ring by resetting both indices.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 3]> = CircularArray::new();
    /// ring.push_back(1);
    /// ring.clear();
    /// assert!(ring.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.set_read(0);
        self.set_write(0);
    }

    /// Returns a cursor on the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, A, B> {
        Cursor::new(self, self.read())
    }

    /// Returns a cursor one past the back element.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let ring: CircularArray<[_; 5]> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(ring.end() - ring.begin(), 3);
    /// assert_eq!(*(ring.end() - 1).get(), 3);
    /// ```
    #[inline]
    pub fn end(&self) -> Cursor<'_, A, B> {
        Cursor::new(self, self.write())
    }

    /// Returns a mutable cursor on the front element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, A, B> {
        let read = self.read();
        CursorMut::new(self, read)
    }

    /// Returns a mutable cursor one past the back element.
    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, A, B> {
        let write = self.write();
        CursorMut::new(self, write)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 4]> = CircularArray::new();
    /// ring.push_back(5);
    /// ring.push_back(3);
    /// ring.push_back(4);
    ///
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = ring.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, A::Item> {
        Iter {
            ring: self.xs.as_slice(),
            read: self.read(),
            write: self.write(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 4]> = CircularArray::new();
    /// ring.push_back(5);
    /// ring.push_back(3);
    /// ring.push_back(4);
    /// for num in ring.iter_mut() {
    ///     *num = *num - 2;
    /// }
    /// let b: &[_] = &[&mut 3, &mut 1, &mut 2];
    /// assert_eq!(&ring.iter_mut().collect::<Vec<&mut i32>>()[..], b);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, A::Item> {
        let (front, back) = self.as_mut_slices();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 5]> = CircularArray::new();
    ///
    /// ring.push_back(0);
    /// ring.push_back(1);
    /// ring.push_back(2);
    ///
    /// assert_eq!(ring.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// ring.push_front(10);
    /// ring.push_front(9);
    ///
    /// assert_eq!(ring.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[A::Item], &[A::Item]) {
        let (read, write) = (self.read(), self.write());
        let xs = self.xs.as_slice();
        if read <= write {
            (&xs[read..write], &xs[..0])
        } else {
            (&xs[read..], &xs[..write])
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// ring.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 5]> = CircularArray::new();
    ///
    /// ring.push_back(0);
    /// ring.push_back(1);
    ///
    /// ring.push_front(10);
    /// ring.push_front(9);
    ///
    /// ring.as_mut_slices().0[0] = 42;
    /// ring.as_mut_slices().1[0] = 24;
    /// assert_eq!(ring.as_slices(), (&[42, 10][..], &[24, 1][..]));
    /// ```
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [A::Item], &mut [A::Item]) {
        let (read, write) = (self.read(), self.write());
        let xs = self.xs.as_mut_slice();
        if read <= write {
            let (_, tail) = xs.split_at_mut(read);
            let (front, back) = tail.split_at_mut(write - read);
            (front, &mut back[..0])
        } else {
            let (wrapped, front) = xs.split_at_mut(read);
            (front, &mut wrapped[..write])
        }
    }

    /// Rotates the backing array so the elements start at slot 0, and
    /// returns them as one slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use inplace::CircularArray;
    ///
    /// let mut ring: CircularArray<[_; 6]> = CircularArray::new();
    /// ring.push_back(2);
    /// ring.push_back(1);
    /// ring.push_front(3);
    ///
    /// ring.make_contiguous().sort();
    /// assert_eq!(ring.as_slices(), (&[1, 2, 3][..], &[][..]));
    /// ```
    pub fn make_contiguous(&mut self) -> &mut [A::Item] {
        let (read, len) = (self.read(), self.len());
        if read != 0 {
            self.xs.as_mut_slice().rotate_left(read);
            self.set_read(0);
            self.set_write(len);
        }
        &mut self.xs.as_mut_slice()[..len]
    }
}
