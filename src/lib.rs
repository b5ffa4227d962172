//! This crate provides a circular doubly-linked list with owned nodes and a
//! sentinel node marking the end position.
//!
//! The [`List`] allows inserting and removing elements at any given position
//! in constant time. In compromise, accessing or mutating elements at any
//! position take *O*(*n*) time.
//!
//! Positions in the list are denoted by cursors, and every access through a
//! cursor is bounds-checked: dereferencing or advancing a cursor parked at
//! the end position fails with an [`OutOfRangeError`] instead of walking off
//! the ring.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use circular_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0); // insert 0 at the beginning of the list
//! assert_eq!(cursor.current(), Ok(&1));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 2, 3]));
//!
//! cursor.move_next()?; // move the cursor to 2, and remove it.
//! assert_eq!(cursor.remove(), Ok(2));
//! assert_eq!(cursor.view(), &List::from_iter([0, 1, 3]));
//! # Ok::<(), circular_list::OutOfRangeError>(())
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                    Sentinel node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║ sentinel  ║ ──────────────────────────────────────────────────────────┘
//! ╟───────────╢
//! ║    len    ║
//! ╚═══════════╝
//!     List
//! ```
//! The `List` contains:
//! - a pointer `sentinel` that points to the sentinel node;
//! - a length field `len` indicating the length of the list, so that
//!   [`len`] is always *O*(1).
//!
//! Each node of the list `List<T>` is allocated on heap, which contains:
//! - the `next` pointer that points to the next element (or the sentinel node
//!   if it is the last element in the list);
//! - the `prev` pointer that points to the previous element (or the sentinel
//!   node if it is the first element in the list);
//! - the actual payload `T` that depends on the element type of the list,
//!   except the sentinel node.
//!
//! Note that the sentinel node has *NO* payload to save memory.
//!
//! Initially, there is a sentinel node in an empty list, of which the `next`
//! and `prev` pointers point to itself.
//!
//! As elements are inserted into the list, `sentinel.next` points to the first
//! element, and `sentinel.prev` points to the last element of the list.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic), so reverse iteration is simply `.rev()`. [`IterMut`] provides
//! mutability of the elements (but not the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use circular_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! assert_eq!(Vec::from_iter(list.iter().rev()), vec![&3, &2, &1]);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide more
//! flexible ways of viewing a list. In a list with length *n*, there are
//! *n* + 1 valid locations for a cursor, indexed by 0, 1, ..., *n*, where
//! *n* is the sentinel node of the list.
//!
//! Moving forward with [`move_next`] is bounds-checked and refuses to pass
//! the end position. Moving backward with [`move_prev`] never fails: from the
//! first element it wraps over the sentinel to the last element, which makes
//! `cursor_end_mut` followed by `move_prev` the idiom for reaching the back
//! of the list.
//!
//! ## Examples
//!
//! ```
//! use circular_list::{List, OutOfRangeError};
//! use std::iter::FromIterator;
//!
//! let list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start();
//! assert_eq!(cursor.current(), Ok(&1));
//! assert!(cursor.move_next().is_ok());
//! assert_eq!(cursor.current(), Ok(&2));
//!
//! let mut end = list.cursor_end();
//! assert_eq!(end.current(), Err(OutOfRangeError::DereferenceEnd));
//! assert_eq!(end.move_next(), Err(OutOfRangeError::AdvanceEnd));
//! end.move_prev(); // wraps over the sentinel, never fails
//! assert_eq!(end.current(), Ok(&3));
//! ```
//!
//! # Mutation
//!
//! [`CursorMut`] mutates the list at the cursor position.
//! - [`insert`]: insert a new item before the cursor;
//! - [`remove`]: remove the item at the cursor, leaving the cursor at the
//!   following item.
//!
//! ## Examples
//!
//! ```
//! use circular_list::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.move_next()?;
//! assert_eq!(cursor.remove(), Ok(2)); // becomes [1, 3], points to 3
//! assert_eq!(cursor.current(), Ok(&3));
//!
//! cursor.insert(4); // becomes [1, 4, 3], still points to 3
//! assert_eq!(cursor.current(), Ok(&3));
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 4, 3]);
//! # Ok::<(), circular_list::OutOfRangeError>(())
//! ```
//!
//! [`List`]: crate::List
//! [`len`]: crate::List::len
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`OutOfRangeError`]: crate::OutOfRangeError
//! [`move_next`]: crate::list::cursor::Cursor::move_next
//! [`move_prev`]: crate::list::cursor::Cursor::move_prev
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::error::OutOfRangeError;
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;

mod experiments;
