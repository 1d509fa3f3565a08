//! Index-linked nodes shared by [`StaticList`](crate::StaticList) and
//! [`InplaceList`](crate::InplaceList).
//!
//! Links are positions into a node slice rather than addresses. The list
//! itself holds one extra link, the sentinel, which stands at position `end`
//! (past every real node) and closes the nodes into a ring: its `next` is the
//! first node and its `prev` the last one. An empty list is a sentinel
//! pointing at itself.

use core::marker::PhantomData;
use core::ptr::{addr_of, addr_of_mut};

use crate::array::Index;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Link<Ix> {
    pub(crate) prev: Ix,
    pub(crate) next: Ix,
}

impl<Ix: Index> Link<Ix> {
    /// A sentinel with no nodes linked to it.
    pub(crate) fn empty(end: usize) -> Self {
        Link {
            prev: Ix::from_usize(end),
            next: Ix::from_usize(end),
        }
    }

    /// Whether these are the links of a node outside any list.
    ///
    /// Unlinked nodes carry `Link::default()`. A linked node only has equal
    /// `prev` and `next` when it is alone in its list, and then both are
    /// `end`, so the two states cannot be confused.
    #[inline]
    pub(crate) fn is_detached(&self, end: usize) -> bool {
        self.prev == self.next && self.prev.to_usize() != end
    }
}

/// A list node: an element plus its two links.
///
/// Nodes of a [`StaticList`](crate::StaticList) are allocated by the caller;
/// nodes of an [`InplaceList`](crate::InplaceList) live inside the list.
#[derive(Clone, Copy, Debug, Default)]
pub struct Node<T, Ix = usize> {
    pub(crate) link: Link<Ix>,
    pub(crate) element: T,
}

impl<T, Ix: Index> Node<T, Ix> {
    /// Creates an unlinked node holding `element`.
    #[inline]
    pub fn new(element: T) -> Self {
        Node {
            link: Link::default(),
            element,
        }
    }

    /// Returns the element.
    #[inline]
    pub fn get(&self) -> &T {
        &self.element
    }

    /// Returns the element mutably.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.element
    }

    /// Unwraps the element.
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }
}

/// A position in a list: the index of a node, or the list's `end()`.
///
/// Positions do not borrow the list. Erasing the node a position refers to
/// invalidates that position only; every other position stays valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position<Ix = usize>(Ix);

impl<Ix: Index> Position<Ix> {
    #[inline]
    pub(crate) fn new(index: usize) -> Self {
        Position(Ix::from_usize(index))
    }

    /// The node index this position refers to.
    #[inline]
    pub fn index(self) -> usize {
        self.0.to_usize()
    }
}

/// Mutable view of a sentinel and its nodes.
pub(crate) struct Chain<'a, T, Ix> {
    tail: &'a mut Link<Ix>,
    nodes: &'a mut [Node<T, Ix>],
    end: usize,
}

impl<'a, T, Ix: Index> Chain<'a, T, Ix> {
    #[inline]
    pub(crate) fn new(tail: &'a mut Link<Ix>, nodes: &'a mut [Node<T, Ix>], end: usize) -> Self {
        Chain { tail, nodes, end }
    }

    #[inline]
    fn link(&self, at: usize) -> Link<Ix> {
        if at == self.end {
            *self.tail
        } else {
            self.nodes[at].link
        }
    }

    #[inline]
    fn link_mut(&mut self, at: usize) -> &mut Link<Ix> {
        if at == self.end {
            &mut *self.tail
        } else {
            &mut self.nodes[at].link
        }
    }

    /// Links `node` in front of `pos`.
    pub(crate) fn splice(&mut self, node: usize, pos: usize) {
        debug_assert!(node != self.end);
        let prev = self.link(pos).prev;
        self.nodes[node].link = Link {
            prev,
            next: Ix::from_usize(pos),
        };
        self.link_mut(prev.to_usize()).next = Ix::from_usize(node);
        self.link_mut(pos).prev = Ix::from_usize(node);
    }

    /// Unlinks `node`, clears its links, and returns its successor.
    pub(crate) fn unsplice(&mut self, node: usize) -> usize {
        debug_assert!(node != self.end);
        let Link { prev, next } = self.nodes[node].link;
        self.link_mut(prev.to_usize()).next = next;
        self.link_mut(next.to_usize()).prev = prev;
        self.nodes[node].link = Link::default();
        next.to_usize()
    }

    /// Moves `node` in front of `pos`. Does nothing if they are the same.
    pub(crate) fn relocate(&mut self, node: usize, pos: usize) {
        if node == pos {
            return;
        }
        let Link { prev, next } = self.nodes[node].link;
        self.link_mut(prev.to_usize()).next = next;
        self.link_mut(next.to_usize()).prev = prev;
        self.splice(node, pos);
    }
}

/// Front-to-back iterator over a list's elements.
///
/// Every step checks that the node it reaches links back to the node reached
/// before it on the same side, and panics on a broken chain.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, Ix = usize> {
    nodes: &'a [Node<T, Ix>],
    walk: Walk,
}

/// Front-to-back iterator over a list's elements, yielding mutable
/// references.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T, Ix = usize> {
    nodes: *mut Node<T, Ix>,
    len: usize,
    walk: Walk,
    marker: PhantomData<&'a mut [Node<T, Ix>]>,
}

// Both ends of a walk over a chain. `behind_head` is the position the head
// node must name as its `prev`, `behind_tail` the one the tail node must
// name as its `next`.
#[derive(Clone, Copy)]
struct Walk {
    head: usize,
    tail: usize,
    behind_head: usize,
    behind_tail: usize,
    done: bool,
}

impl Walk {
    fn new<Ix: Index>(sentinel: &Link<Ix>, end: usize) -> Self {
        let (head, tail) = (sentinel.next.to_usize(), sentinel.prev.to_usize());
        Walk {
            head,
            tail,
            behind_head: end,
            behind_tail: end,
            done: head == end,
        }
    }

    // Checks the head node's links and moves past it.
    #[inline]
    fn advance_head<Ix: Index>(&mut self, link: Link<Ix>) {
        assert!(link.prev.to_usize() == self.behind_head, "broken list links");
        if self.head == self.tail {
            self.done = true;
        } else {
            self.behind_head = self.head;
            self.head = link.next.to_usize();
        }
    }

    // Checks the tail node's links and moves past it.
    #[inline]
    fn advance_tail<Ix: Index>(&mut self, link: Link<Ix>) {
        assert!(link.next.to_usize() == self.behind_tail, "broken list links");
        if self.head == self.tail {
            self.done = true;
        } else {
            self.behind_tail = self.tail;
            self.tail = link.prev.to_usize();
        }
    }
}

impl<'a, T, Ix: Index> Iter<'a, T, Ix> {
    #[inline]
    pub(crate) fn new(sentinel: &Link<Ix>, nodes: &'a [Node<T, Ix>], end: usize) -> Self {
        Iter {
            nodes,
            walk: Walk::new(sentinel, end),
        }
    }
}

impl<'a, T, Ix> Clone for Iter<'a, T, Ix> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            walk: self.walk,
        }
    }
}

impl<'a, T, Ix: Index> Iterator for Iter<'a, T, Ix> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.walk.done {
            return None;
        }
        let node = &self.nodes[self.walk.head];
        self.walk.advance_head(node.link);
        Some(&node.element)
    }
}

impl<'a, T, Ix: Index> DoubleEndedIterator for Iter<'a, T, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.walk.done {
            return None;
        }
        let node = &self.nodes[self.walk.tail];
        self.walk.advance_tail(node.link);
        Some(&node.element)
    }
}

impl<'a, T, Ix: Index> IterMut<'a, T, Ix> {
    #[inline]
    pub(crate) fn new(sentinel: &Link<Ix>, nodes: &'a mut [Node<T, Ix>], end: usize) -> Self {
        IterMut {
            nodes: nodes.as_mut_ptr(),
            len: nodes.len(),
            walk: Walk::new(sentinel, end),
            marker: PhantomData,
        }
    }

    #[inline]
    fn link_at(&self, at: usize) -> Link<Ix> {
        assert!(at < self.len, "list link out of bounds");
        // SAFETY: `at` is in bounds and links are only ever copied out, never
        // borrowed.
        unsafe { *addr_of!((*self.nodes.add(at)).link) }
    }

    // The walk only hands out a node whose links agree with every node handed
    // out before it on the same side, and it stops where the two sides meet.
    // A chain that would lead either side back onto a handed out node fails
    // one of those link checks first, so each element is borrowed at most once.
    #[inline]
    fn element_at(&mut self, at: usize) -> &'a mut T {
        debug_assert!(at < self.len);
        // SAFETY: `at` was bounds checked by `link_at` and, per the walk's
        // checks, has not been handed out before.
        unsafe { &mut *addr_of_mut!((*self.nodes.add(at)).element) }
    }
}

impl<'a, T, Ix: Index> Iterator for IterMut<'a, T, Ix> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.walk.done {
            return None;
        }
        let at = self.walk.head;
        let link = self.link_at(at);
        self.walk.advance_head(link);
        Some(self.element_at(at))
    }
}

impl<'a, T, Ix: Index> DoubleEndedIterator for IterMut<'a, T, Ix> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.walk.done {
            return None;
        }
        let at = self.walk.tail;
        let link = self.link_at(at);
        self.walk.advance_tail(link);
        Some(self.element_at(at))
    }
}
