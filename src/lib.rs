//! This crate provides a doubly-linked list that carries a single movable
//! cursor, and insertion adapters that let generic code fill it.
//!
//! The [`List`] inserts and removes elements next to its cursor in constant
//! time, and walks in both directions in constant time per step. In
//! compromise, there is no random access: reaching the *k*-th element takes
//! *O*(*k*) steps.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 4]); // the cursor is on 4
//!
//! list.add_before(3); // becomes [1, 2, 3, 4], the cursor is on 3
//! assert_eq!(list.get(), Ok(&3));
//!
//! list.go_to_begin();
//! assert_eq!(list.delete_current(), Some(1)); // becomes [2, 3, 4], on 2
//! assert_eq!(list.get(), Ok(&2));
//!
//! list.push_back(5); // the cursor follows the new element
//! assert_eq!(Vec::from_iter(list), vec![2, 3, 4, 5]);
//! ```
//!
//! # Memory Layout
//!
//! Nodes are kept in an arena and refer to each other by key:
//! ```text
//!    head                                              tail
//!     │                                                  │
//!     ↓                                                  ↓
//!  ┌───────────┐           ┌───────────┐           ┌───────────┐
//!  │   next    │ ════════⇒ │   next    │ ════════⇒ │   next    │ ═⇒ ∅
//!  ├───────────┤           ├───────────┤           ├───────────┤
//!  │   prev    │ ←──────── │   prev    │ ←──────── │   prev    │
//!  ├───────────┤           ├───────────┤           ├───────────┤
//!  │   stamp   │           │   stamp   │           │   stamp   │
//!  ├───────────┤           ├───────────┤           ├───────────┤
//!  │ element T │           │ element T │           │ element T │
//!  └───────────┘           └───────────┘           └───────────┘
//!                               ↑
//!                             cursor
//! ```
//! The forward links (`═⇒`) form the chain: a node is in the list exactly
//! while it is reachable from `head` through them. The backward links (`←─`)
//! are only used to step back and are rewritten every time a neighbour
//! changes, so the two directions never disagree.
//!
//! `head`, `tail` and `cursor` are either all present or, in an empty list,
//! all absent.
//!
//! # The Cursor
//!
//! Editing is relative to the cursor:
//! - [`add_after`] and [`add_before`] insert next to the cursor and move the
//!   cursor onto the new element;
//! - [`delete_current`] removes the element under the cursor, then moves the
//!   cursor to the next element, or to the previous one if there is no next;
//! - [`go_next`], [`go_prev`], [`go_to_begin`], [`go_to_end`] move it;
//! - [`get`] and [`get_mut`] read it, and fail with [`ListError::Empty`] on an
//!   empty list.
//!
//! # Positions
//!
//! A [`Position`] is a forward iterator that does not borrow the list. It
//! keeps pointing at its node while the cursor moves and while elements are
//! inserted, and it reports [`ListError::StalePosition`] once its node is
//! deleted.
//!
//! ```
//! use cursor_list::{List, ListError};
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let first = list.begin();
//! list.push_front(0);
//! assert_eq!(list.at(first), Ok(&1));
//!
//! list.set_cursor(first).unwrap();
//! list.delete_current();
//! assert_eq!(list.at(first), Err(ListError::StalePosition));
//! ```
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These are
//! double-ended iterators and do not move the cursor.
//!
//! ```
//! use cursor_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Insertion Adapters
//!
//! See the [`insert`] module.
//!
//! [`add_after`]: crate::List::add_after
//! [`add_before`]: crate::List::add_before
//! [`delete_current`]: crate::List::delete_current
//! [`go_next`]: crate::List::go_next
//! [`go_prev`]: crate::List::go_prev
//! [`go_to_begin`]: crate::List::go_to_begin
//! [`go_to_end`]: crate::List::go_to_end
//! [`get`]: crate::List::get
//! [`get_mut`]: crate::List::get_mut

pub use error::ListError;
#[doc(inline)]
pub use insert::{back_inserter, front_inserter, inserter};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::position::Position;
#[doc(inline)]
pub use list::List;

pub mod insert;
pub mod list;

mod error;
