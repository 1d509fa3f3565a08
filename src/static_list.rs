//! Doubly linked list over caller-owned nodes.
//!
//! A [`StaticList`] owns nothing but its sentinel link. The nodes live in a
//! slice the caller allocates and passes to every operation, and the list only
//! records which of them are linked and in what order. Several lists may share
//! one node slice as long as each node is linked into at most one of them.
//!
//! # Storage Invariant
//!
//! A list must always be used with the same node slice. Passing a different
//! slice is a logic error: the list will follow links that mean nothing in the
//! other slice. It never causes undefined behavior, but it may panic on an
//! out-of-bounds index or produce an arbitrary order.
//!
//! Linking a node that is already linked somewhere is refused, and erasing a
//! node that is not linked does nothing. The iterators check every link they
//! follow and panic on a chain that does not link back, so no element is ever
//! yielded twice.
//!
//! # Example
//!
//! ```
//! use inplace::{Node, StaticList};
//!
//! let mut nodes = [Node::new(38), Node::new(39), Node::new(40)];
//! let mut list = StaticList::new();
//!
//! list.push_back(&mut nodes, 1);
//! list.push_front(&mut nodes, 2);
//! list.push_back(&mut nodes, 0);
//!
//! let order: Vec<_> = list.iter(&nodes).copied().collect();
//! assert_eq!(order, [40, 39, 38]);
//!
//! list.pop_front(&mut nodes);
//! assert_eq!(*list.front(&nodes), 39);
//! assert_eq!(list.len(&nodes), 2);
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::link::{Chain, Iter, IterMut, Link, Node, Position};

const END: usize = usize::MAX;

/// A doubly linked list threaded through a caller-owned `[Node<T>]`.
///
/// Nodes are named by their index in the slice; [`Position`]s name either a
/// node or [`end()`](Self::end).
pub struct StaticList<T> {
    tail: Link<usize>,
    marker: PhantomData<fn(T) -> T>,
}

impl<T> StaticList<T> {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        StaticList {
            tail: Link {
                prev: END,
                next: END,
            },
            marker: PhantomData,
        }
    }

    #[inline]
    fn chain<'a>(&'a mut self, nodes: &'a mut [Node<T>]) -> Chain<'a, T, usize> {
        Chain::new(&mut self.tail, nodes, END)
    }

    /// Counts the linked nodes. Takes linear time.
    pub fn len(&self, nodes: &[Node<T>]) -> usize {
        self.iter(nodes).count()
    }

    /// Returns true if no node is linked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.next == END
    }

    /// Position of the first node, or `end()` if the list is empty.
    #[inline]
    pub fn begin(&self) -> Position {
        Position::new(self.tail.next)
    }

    /// The past-the-end position. It refers to no node.
    #[inline]
    pub fn end(&self) -> Position {
        Position::new(END)
    }

    /// The position after `pos`. The successor of the last node is `end()`,
    /// and the successor of `end()` is the first node.
    #[inline]
    pub fn next(&self, nodes: &[Node<T>], pos: Position) -> Position {
        match pos.index() {
            END => Position::new(self.tail.next),
            i => Position::new(nodes[i].link.next),
        }
    }

    /// The position before `pos`.
    #[inline]
    pub fn prev(&self, nodes: &[Node<T>], pos: Position) -> Position {
        match pos.index() {
            END => Position::new(self.tail.prev),
            i => Position::new(nodes[i].link.prev),
        }
    }

    /// Returns the first element.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn front<'a>(&self, nodes: &'a [Node<T>]) -> &'a T {
        debug_assert!(!self.is_empty(), "front of an empty list");
        &nodes[self.tail.next].element
    }

    /// Returns the first element mutably.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn front_mut<'a>(&self, nodes: &'a mut [Node<T>]) -> &'a mut T {
        debug_assert!(!self.is_empty(), "front of an empty list");
        &mut nodes[self.tail.next].element
    }

    /// Returns the last element.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn back<'a>(&self, nodes: &'a [Node<T>]) -> &'a T {
        debug_assert!(!self.is_empty(), "back of an empty list");
        &nodes[self.tail.prev].element
    }

    /// Returns the last element mutably.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn back_mut<'a>(&self, nodes: &'a mut [Node<T>]) -> &'a mut T {
        debug_assert!(!self.is_empty(), "back of an empty list");
        &mut nodes[self.tail.prev].element
    }

    /// Links node `node` in front of `pos` and returns its position.
    ///
    /// Returns `end()` and changes nothing if `node` is already linked into a
    /// list, or if `pos` is neither `end()` nor a linked node.
    #[inline]
    pub fn insert(&mut self, nodes: &mut [Node<T>], pos: Position, node: usize) -> Position {
        let at = pos.index();
        if !nodes[node].link.is_detached(END) || (at != END && nodes[at].link.is_detached(END)) {
            return self.end();
        }
        self.chain(nodes).splice(node, at);
        Position::new(node)
    }

    /// Unlinks the node at `pos` and returns the position that followed it.
    ///
    /// `pos` must not be `end()`. The node's own links are cleared; its
    /// element is left in place. Erasing a node that is not linked returns
    /// `end()`.
    #[inline]
    pub fn erase(&mut self, nodes: &mut [Node<T>], pos: Position) -> Position {
        debug_assert!(pos != self.end(), "erasing end()");
        if pos == self.end() || nodes[pos.index()].link.is_detached(END) {
            return self.end();
        }
        Position::new(self.chain(nodes).unsplice(pos.index()))
    }

    /// Links node `node` at the front. An already linked node is left where
    /// it is.
    #[inline]
    pub fn push_front(&mut self, nodes: &mut [Node<T>], node: usize) {
        let begin = self.begin();
        self.insert(nodes, begin, node);
    }

    /// Links node `node` at the back. An already linked node is left where
    /// it is.
    #[inline]
    pub fn push_back(&mut self, nodes: &mut [Node<T>], node: usize) {
        let end = self.end();
        self.insert(nodes, end, node);
    }

    /// Unlinks the first node.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn pop_front(&mut self, nodes: &mut [Node<T>]) {
        let begin = self.begin();
        self.erase(nodes, begin);
    }

    /// Unlinks the last node.
    ///
    /// The list must not be empty.
    #[inline]
    pub fn pop_back(&mut self, nodes: &mut [Node<T>]) {
        let last = Position::new(self.tail.prev);
        self.erase(nodes, last);
    }

    /// Unlinks every node.
    pub fn clear(&mut self, nodes: &mut [Node<T>]) {
        self.remove_if(nodes, |_| true);
    }

    /// Unlinks every node whose element matches `f`. The remaining nodes keep
    /// their order.
    pub fn remove_if<F>(&mut self, nodes: &mut [Node<T>], mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut first = self.begin();
        let last = self.end();
        while first != last {
            let next = self.next(nodes, first);
            if f(&nodes[first.index()].element) {
                self.erase(nodes, first);
            }
            first = next;
        }
    }

    /// Iterates over the linked elements, front to back.
    #[inline]
    pub fn iter<'a>(&self, nodes: &'a [Node<T>]) -> Iter<'a, T> {
        Iter::new(&self.tail, nodes, END)
    }

    /// Iterates over the linked elements mutably, front to back.
    #[inline]
    pub fn iter_mut<'a>(&self, nodes: &'a mut [Node<T>]) -> IterMut<'a, T> {
        IterMut::new(&self.tail, nodes, END)
    }
}

impl<T> Default for StaticList<T> {
    fn default() -> Self {
        StaticList::new()
    }
}

impl<T> fmt::Debug for StaticList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticList")
            .field("head", &self.tail.next)
            .field("tail", &self.tail.prev)
            .finish()
    }
}
