use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use super::{IntoIter, Iter, IterMut, Ring};
use crate::array::Array;
use crate::behavior::Behavior;

impl<A: Array, B: Behavior> Default for Ring<A, B>
where
    A::Item: Default,
{
    #[inline]
    fn default() -> Self {
        Ring::new()
    }
}

impl<A: Array, B: Behavior> PartialEq for Ring<A, B>
where
    A::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            debug_assert_eq!(sa.len(), oa_front.len());
            debug_assert_eq!(sb_mid.len(), oa_mid.len());
            debug_assert_eq!(sb_back.len(), ob.len());
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            debug_assert_eq!(sa_front.len(), oa.len());
            debug_assert_eq!(sa_mid.len(), ob_mid.len());
            debug_assert_eq!(sb.len(), ob_back.len());
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

impl<A: Array, B: Behavior> Eq for Ring<A, B> where A::Item: Eq {}

impl<A: Array, B: Behavior> PartialOrd for Ring<A, B>
where
    A::Item: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<A: Array, B: Behavior> Ord for Ring<A, B>
where
    A::Item: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<A: Array, B: Behavior> Hash for Ring<A, B>
where
    A::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // per element, so the split between the two slices never shows
        self.iter().for_each(|elt| elt.hash(state));
    }
}

/// Unchecked element access.
///
/// `index` must be below `len()`. Debug builds assert; release builds read
/// whatever the slot holds.
impl<A: Array, B: Behavior> Index<usize> for Ring<A, B> {
    type Output = A::Item;

    #[inline]
    fn index(&self, index: usize) -> &A::Item {
        debug_assert!(
            index < self.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        self.slot(self.physical(index))
    }
}

impl<A: Array, B: Behavior> IndexMut<usize> for Ring<A, B> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A::Item {
        debug_assert!(
            index < self.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        let slot = self.physical(index);
        self.slot_mut(slot)
    }
}

impl<A: Array, B: Behavior> iter::FromIterator<A::Item> for Ring<A, B>
where
    A::Item: Default,
{
    fn from_iter<T: IntoIterator<Item = A::Item>>(iter: T) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

/// Extend the ring with an iterator.
///
/// Every element is pushed to the back, so the iterator must not yield more
/// elements than there is room for.
impl<A: Array, B: Behavior> Extend<A::Item> for Ring<A, B> {
    fn extend<T: IntoIterator<Item = A::Item>>(&mut self, iter: T) {
        for elt in iter {
            self.push_back(elt);
        }
    }
}

impl<A, B> IntoIterator for Ring<A, B>
where
    A: Array + IntoIterator<Item = <A as Array>::Item>,
    <A as IntoIterator>::IntoIter: DoubleEndedIterator + ExactSizeIterator,
    B: Behavior,
{
    type Item = <A as Array>::Item;
    type IntoIter = IntoIter<A>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.len();
        self.make_contiguous();
        IntoIter {
            inner: self.xs.into_iter().take(len),
        }
    }
}

impl<'a, A: Array, B: Behavior> IntoIterator for &'a Ring<A, B> {
    type Item = &'a A::Item;
    type IntoIter = Iter<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A: Array, B: Behavior> IntoIterator for &'a mut Ring<A, B> {
    type Item = &'a mut A::Item;
    type IntoIter = IterMut<'a, A::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A: Array, B: Behavior> fmt::Debug for Ring<A, B>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
