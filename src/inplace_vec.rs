use core::fmt;
use core::iter;
use core::mem;
use core::ops::{Deref, DerefMut};

use crate::array::Array;
use crate::array::Index as ArrayIndex;
use crate::error::CapacityError;

/// A vector with a fixed capacity, backed by an array.
///
/// `InplaceVec<[T; N]>` holds up to `N` elements. Every slot is always
/// initialized, so `T: Default` is needed to create one; elements past the
/// length are default values.
///
/// # Examples
///
/// ```
/// use inplace::InplaceVec;
///
/// let mut stack: InplaceVec<[u8; 3]> = InplaceVec::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(&stack[..], &[1]);
/// ```
#[derive(Clone, Copy)]
pub struct InplaceVec<A: Array> {
    xs: A,
    len: A::Index,
}

impl<A: Array> InplaceVec<A> {
    /// Creates an empty vector.
    #[inline]
    pub fn new() -> Self
    where
        A::Item: Default,
    {
        InplaceVec {
            xs: A::from_fn(|_| Default::default()),
            len: ArrayIndex::from_usize(0),
        }
    }

    /// Returns the number of elements in the vector.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.to_usize()
    }

    /// Returns the number of elements the vector can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        A::capacity()
    }

    /// Returns true if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the vector is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    #[inline]
    fn set_len(&mut self, len: usize) {
        self.len = ArrayIndex::from_usize(len);
    }

    /// Appends an element.
    ///
    /// The vector must not be full.
    #[inline]
    pub fn push(&mut self, element: A::Item) {
        debug_assert!(!self.is_full(), "push on a full vector");
        let len = self.len();
        self.xs.as_mut_slice()[len] = element;
        self.set_len(len + 1);
    }

    /// Appends an element, or hands it back if the vector is full.
    ///
    /// ```
    /// use inplace::InplaceVec;
    ///
    /// let mut v: InplaceVec<[u8; 1]> = InplaceVec::new();
    /// assert!(v.try_push(1).is_ok());
    /// assert_eq!(v.try_push(2).unwrap_err().element, 2);
    /// ```
    #[inline]
    pub fn try_push(&mut self, element: A::Item) -> Result<(), CapacityError<A::Item>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        self.push(element);
        Ok(())
    }

    /// Removes the last element and returns it, leaving a default value in
    /// its slot.
    #[inline]
    pub fn pop(&mut self) -> Option<A::Item>
    where
        A::Item: Default,
    {
        let len = self.len().checked_sub(1)?;
        self.set_len(len);
        Some(mem::take(&mut self.xs.as_mut_slice()[len]))
    }

    /// Returns the last element.
    #[inline]
    pub fn last(&self) -> Option<&A::Item> {
        self.as_slice().last()
    }

    /// Shortens the vector to `len` elements. Has no effect if `len` is not
    /// below the current length.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.set_len(len);
        }
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[A::Item] {
        &self.xs.as_slice()[..self.len()]
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [A::Item] {
        let len = self.len();
        &mut self.xs.as_mut_slice()[..len]
    }
}

impl<A: Array> Default for InplaceVec<A>
where
    A::Item: Default,
{
    fn default() -> Self {
        InplaceVec::new()
    }
}

impl<A: Array> Deref for InplaceVec<A> {
    type Target = [A::Item];

    #[inline]
    fn deref(&self) -> &[A::Item] {
        self.as_slice()
    }
}

impl<A: Array> DerefMut for InplaceVec<A> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [A::Item] {
        self.as_mut_slice()
    }
}

impl<A: Array> iter::FromIterator<A::Item> for InplaceVec<A>
where
    A::Item: Default,
{
    fn from_iter<T: IntoIterator<Item = A::Item>>(iter: T) -> Self {
        let mut vec = InplaceVec::new();
        for elt in iter {
            vec.push(elt);
        }
        vec
    }
}

impl<A: Array> PartialEq for InplaceVec<A>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<A: Array> Eq for InplaceVec<A> where A::Item: Eq {}

impl<A: Array> fmt::Debug for InplaceVec<A>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
