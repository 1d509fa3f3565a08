//! Fixed-capacity containers that live entirely inside their own value.
//!
//! Nothing in this crate allocates. Every container stores its elements in
//! an array, so it can be kept on the stack, in a `static`, or inside another
//! fixed-size structure.
//!
//! - [`CircularArray`] and [`InplaceDeque`] are ring buffers with `O(1)`
//!   pushes and pops at both ends, `O(1)` indexing, and random-access
//!   cursors. They differ only in how cursor distances are measured.
//! - [`InplaceList`] is a doubly linked list whose nodes live in an inline
//!   arena. Nodes are relinked instead of moved, so positions stay valid
//!   across insertions and erasures of other elements.
//! - [`StaticList`] is an intrusive doubly linked list over a node slice
//!   owned by the caller. Several lists can share one slice.
//!
//! Indices are stored in the narrowest unsigned type able to count the
//! array's length (see [`SmallestIndex`]), so a `CircularArray<[u8; 200]>`
//! spends one byte on each of its read and write indices.
//!
//! # Feature Flags
//! The **inplace** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; implements `std::error::Error` for the error types
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it just like a fixed
//!     size array for ring storage.
//!
//!
//! - `defmt`
//!   - Optional
//!   - Derive `defmt::Format` for positions and errors, for logging on
//!     embedded targets.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! inplace = "0.1"
//! ```
//!
//! To use it in a `#![no_std]` crate, turn off the default features:
//!
//! ```toml
//! [dependencies]
//! inplace = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! Note that the `capacity()` of a ring is always `backed_array.len() - 1`.
//! The lists use every node, so an `InplaceList<T, N>` holds `N` elements.
//!
//! # Contracts
//!
//! Pushing into a full container, popping from an empty one, and
//! dereferencing `end()` break the container's contract. Debug builds assert
//! on them. Release builds do not check; where cheap, the operation is
//! refused instead. The checked variants (`try_push_*`, `try_emplace_*`,
//! `at`) report the failure as a value.
//!
//! # Examples
//! ```
//! use inplace::CircularArray;
//!
//! let mut ring: CircularArray<[_; 8]> = CircularArray::new();
//! assert_eq!(ring.capacity(), 7);
//! assert_eq!(ring.len(), 0);
//!
//! ring.push_back(1);
//! ring.push_back(2);
//! ring.push_front(0);
//! assert_eq!(ring.len(), 3);
//! assert_eq!(ring[0], 0);
//!
//! ring.pop_front();
//! assert_eq!(*ring.front(), 1);
//! assert_eq!(ring.try_push_back(3), Ok(()));
//! ```
//!
//! # Cursors
//! ```
//! use inplace::InplaceDeque;
//!
//! let mut deque: InplaceDeque<[_; 6]> = (1..=5).collect();
//! deque.pop_front();
//! deque.push_back(6);
//!
//! let begin = deque.begin();
//! assert_eq!(*(begin + 2).get(), 4);
//! assert_eq!(deque.end() - begin, 5);
//! assert!(begin < deque.end());
//! ```
//!
//! # Lists
//! ```
//! use inplace::{InplaceList, Node, StaticList};
//!
//! let mut list: InplaceList<&str, 4> = InplaceList::new();
//! list.push_back("b");
//! let a = list.insert(list.begin(), "a");
//! list.push_back("c");
//! list.move_to(a, list.end());
//! assert_eq!(format!("{:?}", list), r#"["b", "c", "a"]"#);
//!
//! let mut nodes = [1, 2, 3].map(Node::new);
//! let mut odd = StaticList::new();
//! odd.push_back(&mut nodes, 0);
//! odd.push_back(&mut nodes, 2);
//! assert_eq!(odd.iter(&nodes).copied().collect::<Vec<_>>(), [1, 3]);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

mod array;
mod behavior;
pub mod error;
mod utils;

mod ring;

mod circular_array;
mod inplace_deque;
mod inplace_vec;

mod link;

mod inplace_list;
mod static_list;

pub use crate::array::{smallest_unsigned_width, Array, Capacity, Index, SmallestIndex};
pub use crate::behavior::{Behavior, Circular, Deque};
pub use crate::error::{CapacityError, OutOfRange};
pub use crate::ring::{Cursor, CursorMut, IntoIter, Iter, IterMut, Ring};

pub use crate::circular_array::CircularArray;
pub use crate::inplace_deque::InplaceDeque;
pub use crate::inplace_vec::InplaceVec;

pub use crate::link::{Iter as ListIter, IterMut as ListIterMut, Node, Position};

pub use crate::inplace_list::InplaceList;
pub use crate::static_list::StaticList;
