use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;

use crate::array::{Capacity, Index, SmallestIndex};
use crate::error::OutOfRange;
use crate::inplace_vec::InplaceVec;
use crate::link::{Chain, Iter, IterMut, Link, Node, Position};

type Ix<const N: usize> = <Capacity<N> as SmallestIndex>::Index;

/// A doubly linked list with a fixed capacity, storing its nodes inline.
///
/// `InplaceList<T, N>` owns an arena of `N` nodes plus a stack of the free
/// ones. Inserting takes a node off the stack and erasing puts it back, both
/// in constant time. Links are node indices of the narrowest unsigned type
/// that can count to `N`, so cloning a list is a plain copy of its arena.
///
/// Every node always holds an initialized element, so `T: Default` is needed
/// to create a list. An erased element stays in its node until the node is
/// reused.
///
/// # Examples
///
/// ```
/// use inplace::InplaceList;
///
/// let mut list: InplaceList<i32, 5> = [1, 2, 3].into_iter().collect();
/// let second = list.next(list.begin());
/// list.insert(second, 4);
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 4, 2, 3]);
/// assert_eq!((*list.front(), *list.back(), list.len()), (1, 3, 4));
/// ```
#[derive(Clone)]
pub struct InplaceList<T, const N: usize>
where
    Capacity<N>: SmallestIndex,
{
    tail: Link<Ix<N>>,
    nodes: [Node<T, Ix<N>>; N],
    free: InplaceVec<[Ix<N>; N]>,
}

impl<T, const N: usize> InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    /// Creates an empty list.
    pub fn new() -> Self
    where
        T: Default,
    {
        InplaceList {
            tail: Link::empty(N),
            nodes: core::array::from_fn(|_| Node::default()),
            free: (0..N).map(Index::from_usize).collect(),
        }
    }

    #[inline]
    fn chain(&mut self) -> Chain<'_, T, Ix<N>> {
        Chain::new(&mut self.tail, &mut self.nodes, N)
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        N - self.free.len()
    }

    /// Returns the number of elements the list can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline]
    pub fn max_size(&self) -> usize {
        N
    }

    /// Returns true if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.free.is_full()
    }

    /// Returns true if the list is full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.free.is_empty()
    }

    /// Position of the first element, or `end()` if the list is empty.
    #[inline]
    pub fn begin(&self) -> Position<Ix<N>> {
        Position::new(self.tail.next.to_usize())
    }

    /// The past-the-end position.
    #[inline]
    pub fn end(&self) -> Position<Ix<N>> {
        Position::new(N)
    }

    /// The position after `pos`. Stepping past the last element gives
    /// `end()`, and stepping past `end()` gives the first element.
    #[inline]
    pub fn next(&self, pos: Position<Ix<N>>) -> Position<Ix<N>> {
        Position::new(self.link(pos).next.to_usize())
    }

    /// The position before `pos`.
    #[inline]
    pub fn prev(&self, pos: Position<Ix<N>>) -> Position<Ix<N>> {
        Position::new(self.link(pos).prev.to_usize())
    }

    // Whether `pos` names a linked node, as opposed to `end()` or a node
    // sitting on the free stack.
    #[inline]
    fn holds_element(&self, pos: Position<Ix<N>>) -> bool {
        pos != self.end() && !self.nodes[pos.index()].link.is_detached(N)
    }

    #[inline]
    fn link(&self, pos: Position<Ix<N>>) -> Link<Ix<N>> {
        match pos.index() {
            i if i == N => self.tail,
            i => self.nodes[i].link,
        }
    }

    /// Returns the element at `pos`.
    ///
    /// `pos` must refer to a linked element.
    #[inline]
    pub fn get(&self, pos: Position<Ix<N>>) -> &T {
        debug_assert!(pos != self.end(), "dereferencing end()");
        &self.nodes[pos.index()].element
    }

    /// Returns the element at `pos` mutably.
    ///
    /// `pos` must refer to a linked element.
    #[inline]
    pub fn get_mut(&mut self, pos: Position<Ix<N>>) -> &mut T {
        debug_assert!(pos != self.end(), "dereferencing end()");
        &mut self.nodes[pos.index()].element
    }

    /// Returns the first element.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn front(&self) -> &T {
        debug_assert!(!self.is_empty(), "front of an empty list");
        self.get(self.begin())
    }

    /// Returns the first element mutably.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "front of an empty list");
        let begin = self.begin();
        self.get_mut(begin)
    }

    /// Returns the last element.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn back(&self) -> &T {
        debug_assert!(!self.is_empty(), "back of an empty list");
        self.get(self.prev(self.end()))
    }

    /// Returns the last element mutably.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(!self.is_empty(), "back of an empty list");
        let last = self.prev(self.end());
        self.get_mut(last)
    }

    /// Returns the element `index` steps from the front. Takes linear time.
    ///
    /// ```
    /// use inplace::{InplaceList, OutOfRange};
    ///
    /// let list: InplaceList<char, 4> = "abc".chars().collect();
    /// assert_eq!(list.at(2), Ok(&'c'));
    /// assert_eq!(list.at(3), Err(OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.len();
        self.iter().nth(index).ok_or(OutOfRange { index, len })
    }

    /// Returns the element `index` steps from the front mutably. Takes linear
    /// time.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.len();
        self.iter_mut().nth(index).ok_or(OutOfRange { index, len })
    }

    /// Takes a node off the free stack, stores `f()` in it and links it in
    /// front of `pos`. Returns the new element's position.
    ///
    /// The list must not be full. In release builds a full list is left
    /// untouched, `f` is not called, and `end()` is returned. The same
    /// happens, in every build, when `pos` names an erased element.
    pub fn emplace<F>(&mut self, pos: Position<Ix<N>>, f: F) -> Position<Ix<N>>
    where
        F: FnOnce() -> T,
    {
        debug_assert!(!self.is_full(), "emplace into a full list");
        if pos != self.end() && !self.holds_element(pos) {
            return self.end();
        }
        let index = match self.free.last() {
            Some(ix) => ix.to_usize(),
            None => return self.end(),
        };
        self.free.truncate(self.free.len() - 1);
        self.nodes[index].element = f();
        self.chain().splice(index, pos.index());
        Position::new(index)
    }

    /// Inserts `value` in front of `pos` and returns its position.
    ///
    /// The list must not be full.
    #[inline]
    pub fn insert(&mut self, pos: Position<Ix<N>>, value: T) -> Position<Ix<N>> {
        self.emplace(pos, || value)
    }

    /// Stores `f()` at the front and returns a reference to it.
    ///
    /// # Panics
    ///
    /// If the list is full. Use
    /// [`try_emplace_front`](Self::try_emplace_front) to get `None` instead.
    #[inline]
    pub fn emplace_front<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        assert!(!self.is_full(), "push into a full list");
        let pos = self.emplace(self.begin(), f);
        self.get_mut(pos)
    }

    /// Stores `f()` at the back and returns a reference to it.
    ///
    /// # Panics
    ///
    /// If the list is full. Use
    /// [`try_emplace_back`](Self::try_emplace_back) to get `None` instead.
    #[inline]
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        assert!(!self.is_full(), "push into a full list");
        let pos = self.emplace(self.end(), f);
        self.get_mut(pos)
    }

    /// Like [`emplace_front`](Self::emplace_front), but returns `None` without
    /// calling `f` if the list is full.
    ///
    /// ```
    /// use inplace::InplaceList;
    ///
    /// let mut list: InplaceList<u8, 1> = InplaceList::new();
    /// assert_eq!(list.try_emplace_front(|| 1), Some(&mut 1));
    /// assert_eq!(list.try_emplace_front(|| 2), None);
    /// ```
    #[inline]
    pub fn try_emplace_front<F>(&mut self, f: F) -> Option<&mut T>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return None;
        }
        Some(self.emplace_front(f))
    }

    /// Like [`emplace_back`](Self::emplace_back), but returns `None` without
    /// calling `f` if the list is full.
    #[inline]
    pub fn try_emplace_back<F>(&mut self, f: F) -> Option<&mut T>
    where
        F: FnOnce() -> T,
    {
        if self.is_full() {
            return None;
        }
        Some(self.emplace_back(f))
    }

    /// Prepends `value` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// If the list is full.
    #[inline]
    pub fn push_front(&mut self, value: T) -> &mut T {
        self.emplace_front(|| value)
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// # Panics
    ///
    /// If the list is full.
    #[inline]
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.emplace_back(|| value)
    }

    /// Removes the element at `pos` and returns the position that followed
    /// it.
    ///
    /// `pos` must not be `end()`; release builds ignore it and return
    /// `end()`. A position whose element was already erased is ignored the
    /// same way in every build, so a stale position can never put a node on
    /// the free stack twice.
    pub fn erase(&mut self, pos: Position<Ix<N>>) -> Position<Ix<N>> {
        debug_assert!(pos != self.end(), "erasing end()");
        if !self.holds_element(pos) {
            return self.end();
        }
        let next = self.chain().unsplice(pos.index());
        self.free.push(Index::from_usize(pos.index()));
        Position::new(next)
    }

    /// Removes the first element.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn pop_front(&mut self) {
        self.erase(self.begin());
    }

    /// Removes the last element.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn pop_back(&mut self) {
        self.erase(self.prev(self.end()));
    }

    /// Relinks the element at `elem` in front of `dest` and returns `elem`.
    /// Nothing is copied and no position is invalidated. Nothing happens if
    /// either position names an erased element.
    ///
    /// ```
    /// use inplace::InplaceList;
    ///
    /// let mut list: InplaceList<i32, 4> = [1, 2, 3, 4].into_iter().collect();
    /// list.move_to(list.begin(), list.end());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 1]);
    /// ```
    pub fn move_to(&mut self, elem: Position<Ix<N>>, dest: Position<Ix<N>>) -> Position<Ix<N>> {
        debug_assert!(elem != self.end(), "moving end()");
        let dest_is_linked = dest == self.end() || self.holds_element(dest);
        if self.holds_element(elem) && dest_is_linked {
            self.chain().relocate(elem.index(), dest.index());
        }
        elem
    }

    /// Inserts every element of `iter` in front of `pos`, keeping their
    /// order.
    ///
    /// The list must have room for all of them.
    pub fn insert_range<I>(&mut self, pos: Position<Ix<N>>, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(pos, value);
        }
    }

    /// Inserts every element of `iter` at the front, keeping their order.
    #[inline]
    pub fn prepend_range<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_range(self.begin(), iter);
    }

    /// Appends every element of `iter`.
    #[inline]
    pub fn append_range<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.insert_range(self.end(), iter);
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.remove_if(|_| true);
    }

    /// Removes every element matching `f`. The others keep their order and
    /// their positions.
    pub fn remove_if<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut first = self.begin();
        let last = self.end();
        while first != last {
            let next = self.next(first);
            if f(self.get(first)) {
                self.erase(first);
            }
            first = next;
        }
    }

    /// Removes every element equal to the element before it, so runs of
    /// equal elements shrink to their first one.
    ///
    /// ```
    /// use inplace::InplaceList;
    ///
    /// let mut list: InplaceList<i32, 8> = [1, 1, 2, 1, 3, 3, 3].into_iter().collect();
    /// list.unique();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 1, 3]);
    /// ```
    pub fn unique(&mut self)
    where
        T: PartialEq,
    {
        let last = self.end();
        let mut first = self.begin();
        if first == last {
            return;
        }
        loop {
            let next = self.next(first);
            if next == last {
                break;
            }
            if self.get(first) == self.get(next) {
                self.erase(next);
            } else {
                first = next;
            }
        }
    }

    /// Iterates over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, Ix<N>> {
        Iter::new(&self.tail, &self.nodes, N)
    }

    /// Iterates over the elements mutably, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, Ix<N>> {
        IterMut::new(&self.tail, &mut self.nodes, N)
    }
}

impl<T: Default, const N: usize> Default for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn default() -> Self {
        InplaceList::new()
    }
}

impl<T: Default, const N: usize> iter::FromIterator<T> for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = InplaceList::new();
        list.append_range(iter);
        list
    }
}

/// Extend the list with an iterator.
///
/// The iterator must not yield more elements than there is room for.
impl<T, const N: usize> Extend<T> for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_range(iter);
    }
}

impl<T: PartialEq, const N: usize> PartialEq for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for InplaceList<T, N> where Capacity<N>: SmallestIndex {}

impl<T: PartialOrd, const N: usize> PartialOrd for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const N: usize> Ord for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash, const N: usize> Hash for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, Ix<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, Ix<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for InplaceList<T, N>
where
    Capacity<N>: SmallestIndex,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::vec::Vec;

    type TList = InplaceList<i32, 5>;

    fn list<const N: usize>(xs: &[i32]) -> InplaceList<i32, N>
    where
        Capacity<N>: SmallestIndex,
    {
        xs.iter().copied().collect()
    }

    fn elements<const N: usize>(list: &InplaceList<i32, N>) -> Vec<i32>
    where
        Capacity<N>: SmallestIndex,
    {
        list.iter().copied().collect()
    }

    fn assert_consistent<const N: usize>(list: &InplaceList<i32, N>)
    where
        Capacity<N>: SmallestIndex,
    {
        assert_eq!(list.len() + list.free.len(), N);
        let mut seen = [false; N];
        for ix in list.free.iter() {
            assert!(!seen[ix.to_usize()]);
            seen[ix.to_usize()] = true;
        }
        let mut pos = list.begin();
        let mut linked = 0;
        while pos != list.end() {
            assert!(!seen[pos.index()], "node both free and linked");
            seen[pos.index()] = true;
            assert_eq!(list.next(list.prev(pos)), pos);
            pos = list.next(pos);
            linked += 1;
        }
        assert_eq!(linked, list.len());
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn ctor() {
        let default_ctor: InplaceList<i32, 1> = InplaceList::new();
        assert_eq!(default_ctor.len(), 0);

        let collected = list::<5>(&[1, 2, 3]);
        assert_eq!(*collected.front(), 1);
        assert_eq!(*collected.back(), 3);
        assert_eq!(collected.len(), 3);
        assert_eq!(collected.max_size(), 5);

        let exact = list::<3>(&[1, 2, 3]);
        assert_eq!(exact.max_size(), 3);
        assert!(exact.is_full());

        let copy = collected.clone();
        assert_eq!(*copy.front(), 1);
        assert_eq!(*copy.back(), 3);
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.capacity(), 5);
    }

    #[test]
    fn empty_and_full() {
        let mut l: InplaceList<i32, 2> = InplaceList::default();
        assert!(l.is_empty());
        l.push_back(1);
        assert!(!l.is_empty());

        let mut l = list::<3>(&[1, 2, 3]);
        assert!(l.is_full());
        l.pop_back();
        assert!(!l.is_full());
    }

    #[test]
    fn size() {
        let mut l = list::<5>(&[1, 2, 3, 4]);
        assert_eq!(l.len(), 4);
        l.pop_back();
        assert_eq!(l.len(), 3);
    }

    #[test]
    fn insert() {
        let mut l = list::<5>(&[1, 2, 3]);
        let pos = l.insert(l.next(l.begin()), 4);
        assert_eq!(*l.get(pos), 4);
        assert_eq!(l, list::<5>(&[1, 4, 2, 3]));
        assert_consistent(&l);
    }

    #[test]
    fn erase() {
        let mut l = list::<4>(&[1, 2, 3, 4]);
        let next = l.erase(l.next(l.begin()));
        assert_eq!(*l.get(next), 3);
        assert_eq!(elements(&l), [1, 3, 4]);
        assert_eq!(l.erase(l.prev(l.end())), l.end());
        assert_consistent(&l);
    }

    #[test]
    fn move_to() {
        let mut l = list::<4>(&[1, 2, 3, 4]);
        let first = l.begin();
        assert_eq!(l.move_to(first, l.end()), first);
        assert_eq!(elements(&l), [2, 3, 4, 1]);
        assert_eq!(l.prev(l.end()), first);

        let mut l = list::<4>(&[1, 2, 3, 4]);
        l.move_to(l.begin(), l.begin());
        assert_eq!(elements(&l), [1, 2, 3, 4]);

        let last = l.prev(l.end());
        l.move_to(last, l.next(l.begin()));
        assert_eq!(elements(&l), [1, 4, 2, 3]);
        assert_consistent(&l);
    }

    #[test]
    fn push_and_pop() {
        let mut l = list::<5>(&[1, 2, 3]);
        *l.push_front(4) += 10;
        assert_eq!(elements(&l), [14, 1, 2, 3]);
        *l.push_back(5) += 10;
        assert_eq!(elements(&l), [14, 1, 2, 3, 15]);

        l.pop_front();
        assert_eq!(elements(&l), [1, 2, 3, 15]);
        l.pop_back();
        assert_eq!(elements(&l), [1, 2, 3]);
        *l.front_mut() = 0;
        *l.back_mut() = 9;
        assert_eq!(elements(&l), [0, 2, 9]);
        assert_consistent(&l);
    }

    #[test]
    fn spaceship() {
        let l = list::<5>(&[1, 2, 3, 4]);

        let equal = l.clone();
        assert_eq!(l.cmp(&equal), Ordering::Equal);
        assert_eq!(equal.cmp(&l), Ordering::Equal);
        assert_eq!(l, equal);

        let lesser: TList = list(&[1, 2, 2, 4]);
        assert!(l > lesser);
        assert!(lesser < l);
        assert_ne!(l, lesser);

        let greater: TList = list(&[1, 2, 4, 4]);
        assert!(l < greater);
        assert!(greater > l);
        assert_ne!(l, greater);

        let shorter: TList = list(&[1, 2, 3]);
        assert!(l > shorter);
        assert!(shorter < l);
    }

    #[test]
    fn integrity() {
        let mut l: TList = list(&[1, 2, 3, 4, 5]);
        l.erase(l.next(l.begin()));
        assert_eq!(l, list(&[1, 3, 4, 5]));

        l.push_back(2);
        assert_eq!(l, list(&[1, 3, 4, 5, 2]));
        assert_consistent(&l);
    }

    #[test]
    fn clone_is_deep() {
        let mut source = list::<6>(&[1, 2, 3]);
        source.erase(source.begin());
        source.push_front(7);
        let mut copy = source.clone();

        copy.push_back(4);
        *copy.front_mut() = 0;
        source.pop_back();

        assert_eq!(elements(&source), [7, 2]);
        assert_eq!(elements(&copy), [0, 2, 3, 4]);
        assert_consistent(&source);
        assert_consistent(&copy);
    }

    #[test]
    fn unique() {
        let mut l = list::<10>(&[1, 1, 2, 2, 2, 3, 1, 1]);
        l.unique();
        assert_eq!(elements(&l), [1, 2, 3, 1]);
        assert_consistent(&l);

        let mut l = list::<3>(&[5, 5, 5]);
        l.unique();
        assert_eq!(elements(&l), [5]);

        let mut l: TList = InplaceList::new();
        l.unique();
        assert!(l.is_empty());
    }

    #[test]
    fn remove_if_and_clear() {
        let mut l = list::<8>(&[1, 2, 3, 4, 5, 6]);
        let four = l.next(l.next(l.next(l.begin())));
        l.remove_if(|v| v % 2 == 1);
        assert_eq!(elements(&l), [2, 4, 6]);
        assert_eq!(*l.get(four), 4);
        assert_consistent(&l);

        l.clear();
        assert!(l.is_empty());
        assert_consistent(&l);
        l.push_back(1);
        assert_eq!(elements(&l), [1]);
    }

    #[test]
    fn try_emplace() {
        let mut l: InplaceList<i32, 2> = InplaceList::new();
        assert_eq!(l.try_emplace_back(|| 2), Some(&mut 2));
        assert_eq!(l.try_emplace_front(|| 1), Some(&mut 1));
        assert!(l.try_emplace_back(|| unreachable!()).is_none());
        assert!(l.try_emplace_front(|| unreachable!()).is_none());
        assert_eq!(elements(&l), [1, 2]);
    }

    #[test]
    fn erasing_twice_is_ignored() {
        let mut l = list::<4>(&[1, 2, 3]);
        let two = l.next(l.begin());
        let after = l.erase(two);
        assert_eq!(*l.get(after), 3);
        assert_eq!(l.erase(two), l.end());
        assert_eq!(l.len(), 2);
        assert_consistent(&l);

        l.push_back(10);
        l.push_back(20);
        assert_eq!(l.len(), 4);
        assert!(l.is_full());
        assert_eq!(elements(&l), [1, 3, 10, 20]);
        assert_consistent(&l);

        let mut seen: Vec<*mut i32> = l.iter_mut().rev().map(|x| x as *mut i32).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn erased_positions_are_not_relinked() {
        let mut l = list::<5>(&[1, 2, 3, 4]);
        let three = l.next(l.next(l.begin()));
        l.erase(three);

        assert_eq!(l.move_to(three, l.begin()), three);
        assert_eq!(l.move_to(l.begin(), three), l.begin());
        assert_eq!(l.insert(three, 9), l.end());
        assert_eq!(elements(&l), [1, 2, 4]);
        assert_consistent(&l);
    }

    #[test]
    #[should_panic(expected = "push into a full list")]
    fn push_into_a_full_list_panics() {
        let mut l = list::<2>(&[1, 2]);
        l.push_back(3);
    }

    #[test]
    fn any_length_works() {
        let mut l: InplaceList<i32, 37> = (0..37).collect();
        assert!(l.is_full());
        l.remove_if(|v| v % 3 != 0);
        assert_eq!(l.len(), 13);
        assert_eq!(*l.back(), 36);
        assert_consistent(&l);
    }

    #[test]
    fn ranges() {
        let mut l = list::<8>(&[3]);
        l.prepend_range([1, 2]);
        l.append_range(4..6);
        let pos = l.prev(l.end());
        l.insert_range(pos, [9, 9]);
        assert_eq!(elements(&l), [1, 2, 3, 4, 9, 9, 5]);
        l.extend([6]);
        assert_eq!(l.len(), 8);
        assert!(l.is_full());
        assert_consistent(&l);
    }

    #[test]
    fn at_walks_forward() {
        let mut l = list::<5>(&[10, 20, 30]);
        assert_eq!(l.at(0), Ok(&10));
        assert_eq!(l.at(2), Ok(&30));
        assert_eq!(l.at(3), Err(OutOfRange { index: 3, len: 3 }));
        *l.at_mut(1).unwrap() = 21;
        assert_eq!(l.at_mut(4), Err(OutOfRange { index: 4, len: 3 }));
        assert_eq!(elements(&l), [10, 21, 30]);
    }

    #[test]
    fn iteration_both_ways() {
        let mut l = list::<5>(&[1, 2, 3, 4]);
        l.move_to(l.begin(), l.end());
        assert_eq!(l.iter().rev().copied().collect::<Vec<_>>(), [1, 4, 3, 2]);
        for x in &mut l {
            *x *= 2;
        }
        assert_eq!((&l).into_iter().copied().collect::<Vec<_>>(), [4, 6, 8, 2]);
        assert_eq!(format!("{:?}", l), "[4, 6, 8, 2]");
    }

    #[test]
    fn index_type_is_narrow() {
        use core::mem::size_of;
        assert_eq!(size_of::<Ix<5>>(), 1);
        assert_eq!(size_of::<Ix<1024>>(), 2);
        // sentinel, five nodes and the free stack with its length
        assert_eq!(size_of::<InplaceList<u8, 5>>(), 2 + 5 * 3 + 5 + 1);
    }

    #[derive(Clone, Debug)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        Insert(usize, i32),
        Erase(usize),
        Move(usize, usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushFront),
            any::<i32>().prop_map(Op::PushBack),
            (0usize..16, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
            (0usize..16).prop_map(Op::Erase),
            (0usize..16, 0usize..16).prop_map(|(a, b)| Op::Move(a, b)),
        ]
    }

    fn nth(list: &InplaceList<i32, 8>, n: usize) -> Position<Ix<8>> {
        let mut pos = list.begin();
        for _ in 0..n {
            pos = list.next(pos);
        }
        pos
    }

    proptest! {
        #[test]
        fn prop_arena_matches_vec(ops in prop::collection::vec(op(), 1..100)) {
            let mut list: InplaceList<i32, 8> = InplaceList::new();
            let mut model: Vec<i32> = Vec::new();

            for op in ops {
                match op {
                    Op::PushFront(v) if !list.is_full() => {
                        list.push_front(v);
                        model.insert(0, v);
                    }
                    Op::PushBack(v) if !list.is_full() => {
                        list.push_back(v);
                        model.push(v);
                    }
                    Op::Insert(i, v) if !list.is_full() => {
                        let i = i % (model.len() + 1);
                        list.insert(nth(&list, i), v);
                        model.insert(i, v);
                    }
                    Op::Erase(i) if !model.is_empty() => {
                        let i = i % model.len();
                        list.erase(nth(&list, i));
                        model.remove(i);
                    }
                    Op::Move(a, b) if !model.is_empty() => {
                        let a = a % model.len();
                        let b = b % (model.len() + 1);
                        list.move_to(nth(&list, a), nth(&list, b));
                        let v = model.remove(a);
                        let b = if b > a { b - 1 } else { b };
                        model.insert(b, v);
                    }
                    _ => {}
                }

                prop_assert_eq!(list.len() + list.free.len(), 8);
                prop_assert_eq!(&elements(&list), &model);
                prop_assert!(list.iter().rev().eq(model.iter().rev()));
            }
            assert_consistent(&list);
        }

        #[test]
        fn prop_insert_then_erase_restores(
            values in prop::collection::vec(any::<i32>(), 0..8),
            at in 0usize..8,
            v in any::<i32>(),
        ) {
            let mut list: InplaceList<i32, 8> = values.iter().copied().collect();
            prop_assume!(!list.is_full());
            let before = list.clone();

            let at = at % (values.len() + 1);
            let pos = list.insert(nth(&list, at), v);
            prop_assert_eq!(list.len(), values.len() + 1);
            list.erase(pos);

            prop_assert_eq!(&list, &before);
            assert_consistent(&list);
        }
    }
}
