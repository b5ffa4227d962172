use crate::list::error::OutOfRangeError;
use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A bounds-checked bidirectional cursor over a `List`.
///
/// A `Cursor` is a position in the ring: either a real element, or the
/// end position represented by the sentinel node. In a list with length
/// *n* there are *n* + 1 valid positions.
///
/// Dereferencing or advancing a cursor at the end position fails with an
/// [`OutOfRangeError`] instead of walking onto the sentinel, which makes
/// the end position a detectable, safely-copyable boundary value for loop
/// conditions. Moving backward never fails: stepping back from the first
/// element wraps around the sentinel to the last element (see
/// [`move_prev`](Cursor::move_prev)).
///
/// # Examples
///
/// ```
/// use circular_list::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter(['A', 'B', 'C']);
///
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Ok(&'A'));
///
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Ok(&'B'));
///
/// // Stepping back from the first element wraps to the last.
/// let mut cursor = list.cursor_start();
/// cursor.move_prev();
/// assert_eq!(cursor.current(), Ok(&'C'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

/// A bounds-checked cursor over a `List` with editing operations.
///
/// A `CursorMut` can freely seek back and forth and can safely mutate the
/// list during iteration, because the lifetime of its yielded references
/// is tied to its own borrow of the list. All structural edits funnel
/// through [`insert`](CursorMut::insert) and
/// [`remove`](CursorMut::remove), the two ring primitives.
///
/// # Examples
///
/// ```
/// use circular_list::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 4]);
///
/// let mut cursor = list.cursor_start_mut();
/// assert!(cursor.move_next().is_ok());
/// assert!(cursor.move_next().is_ok());
///
/// cursor.insert(3); // becomes [1, 2, 3, 4], cursor still at 4
/// assert_eq!(cursor.current(), Ok(&4));
///
/// assert_eq!(cursor.remove(), Ok(4)); // becomes [1, 2, 3], cursor at end
/// assert!(cursor.current().is_err());
///
/// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_end(&self) -> bool {
                self.current == self.list.sentinel_node()
            }
            fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always a valid node of the ring.
                unsafe { self.current.as_ref().next }
            }
            fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always a valid node of the ring.
                unsafe { self.current.as_ref().prev }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Return a reference to the element at the cursor, or an
            /// [`OutOfRangeError`] if the cursor is at the end position.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor_start().current(), Ok(&1));
            /// assert!(list.cursor_end().current().is_err());
            /// ```
            pub fn current(&self) -> Result<&'a T, OutOfRangeError> {
                if self.is_end() {
                    return Err(OutOfRangeError::DereferenceEnd);
                }
                // SAFETY: non-sentinel nodes always hold a valid element.
                unsafe { Ok(&self.current.as_ref().element) }
            }

            /// Move the cursor to the next position, or return an
            /// [`OutOfRangeError`] if it is already at the end position.
            ///
            /// Stepping from the last element onto the end position is
            /// legal; only advancing *past* it fails.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.move_next().is_ok()); // at 2
            /// assert!(cursor.move_next().is_ok()); // at the end position
            /// assert!(cursor.move_next().is_err()); // cannot advance past it
            /// ```
            pub fn move_next(&mut self) -> Result<(), OutOfRangeError> {
                if self.is_end() {
                    return Err(OutOfRangeError::AdvanceEnd);
                }
                self.current = self.next_node();
                Ok(())
            }

            /// Move the cursor to the previous position, skipping over the
            /// sentinel node.
            ///
            /// Unlike [`move_next`](Self::move_next), moving backward never
            /// fails: stepping back from the first element wraps around to
            /// the last element, and repeated calls keep wrapping. On an
            /// empty list the cursor stays at the end position.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use circular_list::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// cursor.move_prev(); // wraps to the last element
            /// assert_eq!(cursor.current(), Ok(&3));
            ///
            /// cursor.move_prev();
            /// assert_eq!(cursor.current(), Ok(&2));
            /// ```
            pub fn move_prev(&mut self) {
                self.current = self.prev_node();
                if self.is_end() {
                    self.current = self.prev_node();
                }
            }
        }

        /// Two cursors are equal iff they reference the same node. Nodes of
        /// different lists are distinct allocations, so cursors of
        /// different lists never compare equal.
        impl<'a, T: 'a> PartialEq for $CURSOR<'a, T> {
            fn eq(&self, other: &Self) -> bool {
                self.current == other.current
            }
        }

        impl<'a, T: 'a> Eq for $CURSOR<'a, T> {}

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("current", &self.current().ok())
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }

    /// Return a mutable reference to the element at the cursor, or an
    /// [`OutOfRangeError`] if the cursor is at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_start_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Ok(&5));
    ///
    /// // The end position cannot be mutated.
    /// assert!(list.cursor_end_mut().current_mut().is_err());
    /// ```
    pub fn current_mut(&mut self) -> Result<&'a mut T, OutOfRangeError> {
        if self.is_end() {
            return Err(OutOfRangeError::DereferenceEnd);
        }
        // SAFETY: non-sentinel nodes always hold a valid element.
        unsafe { Ok(&mut self.current.as_mut().element) }
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Convert the mutable cursor to an immutable one.
    ///
    /// This is a one-way widening conversion; there is no way back from a
    /// `Cursor` to a `CursorMut`.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list cannot be read while a mutable
    /// cursor is alive.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// cursor.insert(0);
    /// assert_eq!(cursor.view().len(), 4);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Add an element immediately before the cursor position.
    ///
    /// The cursor stays put, so the new element becomes its predecessor.
    /// Inserting at the start position prepends; inserting at the end
    /// position appends. This operation never fails.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert!(cursor.move_next().is_ok());
    /// cursor.insert(2); // becomes [1, 2, 3], cursor still at 3
    /// assert_eq!(cursor.current(), Ok(&3));
    ///
    /// cursor.move_prev();
    /// assert_eq!(cursor.current(), Ok(&2)); // the new element
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let node = Node::new_detached(item);
        // SAFETY: `current` is a valid node of this list, so splicing
        // before it keeps the ring well-formed.
        unsafe { self.list.splice_before(self.current, node) };
    }

    /// Remove the element at the cursor and return it, or an
    /// [`OutOfRangeError`] if the list is empty or the cursor is at the
    /// end position.
    ///
    /// After removal the cursor is moved to the node that followed the
    /// removed one, which is the end position if the removed element was
    /// the last.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert!(cursor.move_next().is_ok());
    /// assert_eq!(cursor.remove(), Ok(2)); // becomes [1, 3], cursor at 3
    /// assert_eq!(cursor.current(), Ok(&3));
    ///
    /// assert_eq!(cursor.remove(), Ok(3)); // becomes [1], cursor at end
    /// assert!(cursor.remove().is_err());
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1]);
    /// ```
    pub fn remove(&mut self) -> Result<T, OutOfRangeError> {
        if self.list.is_empty() {
            return Err(OutOfRangeError::EmptyList);
        }
        if self.is_end() {
            return Err(OutOfRangeError::EraseEnd);
        }
        // SAFETY: `current` is a real node of this list.
        let node = unsafe { self.list.unlink_node(self.current) };
        self.current = node.next;
        Ok(node.element)
    }
}

#[cfg(test)]
mod tests {
    use crate::list::error::OutOfRangeError;
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_walk_forward() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();
        let mut collected = Vec::new();
        while let Ok(&value) = cursor.current() {
            collected.push(value);
            cursor.move_next().unwrap();
        }
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(cursor.is_end());
        assert_eq!(cursor.move_next(), Err(OutOfRangeError::AdvanceEnd));
    }

    #[test]
    fn cursor_end_is_not_dereferenceable() {
        let mut list = List::new();
        list.push_back(42);

        let mut cursor = list.cursor_end();
        assert_eq!(cursor.current(), Err(OutOfRangeError::DereferenceEnd));
        assert_eq!(cursor.move_next(), Err(OutOfRangeError::AdvanceEnd));
        // the failed moves left the cursor in place
        assert!(cursor.is_end());

        assert_eq!(
            list.cursor_end_mut().current_mut(),
            Err(OutOfRangeError::DereferenceEnd)
        );
    }

    #[test]
    fn cursor_move_prev_wraps_without_failing() {
        let list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start();

        // stepping back from the first element skips the sentinel and
        // lands on the last
        cursor.move_prev();
        assert_eq!(cursor.current(), Ok(&3));
        cursor.move_prev();
        assert_eq!(cursor.current(), Ok(&2));
        cursor.move_prev();
        assert_eq!(cursor.current(), Ok(&1));

        // repeated wrapping keeps cycling indefinitely
        for expected in [3, 2, 1, 3, 2, 1].iter() {
            cursor.move_prev();
            assert_eq!(cursor.current(), Ok(expected));
        }
    }

    #[test]
    fn cursor_on_empty_list() {
        let list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), Err(OutOfRangeError::DereferenceEnd));
        assert_eq!(cursor.move_next(), Err(OutOfRangeError::AdvanceEnd));

        // moving backward on an empty list stays at the end position
        cursor.move_prev();
        assert!(cursor.is_end());

        assert_eq!(list.cursor_start(), list.cursor_end());
    }

    #[test]
    fn cursor_equality() {
        let list = List::from_iter([1, 2]);
        assert_eq!(list.cursor_start(), list.cursor_start());
        assert_ne!(list.cursor_start(), list.cursor_end());

        let mut walked = list.cursor_start();
        walked.move_next().unwrap();
        walked.move_next().unwrap();
        assert_eq!(walked, list.cursor_end());

        // cursors of different lists never compare equal
        let other = list.clone();
        assert_ne!(list.cursor_start(), other.cursor_start());
    }

    #[test]
    fn cursor_mut_widens_to_cursor() {
        let mut list = List::from_iter([7, 8, 9]);
        let mut cursor = list.cursor_start_mut();
        cursor.move_next().unwrap();

        let shared = cursor.as_cursor();
        assert_eq!(shared.current(), Ok(&8));

        let shared = cursor.into_cursor();
        assert_eq!(shared.current(), Ok(&8));
    }

    #[test]
    fn insert_before_positions() {
        let mut list = List::from_iter([2, 4]);

        // at the start position: prepend
        list.cursor_start_mut().insert(1);
        assert_eq!(list.front(), Ok(&1));

        // at the end position: append
        list.cursor_end_mut().insert(5);
        assert_eq!(list.back(), Ok(&5));

        // in the middle: before the cursor, which stays put
        let mut cursor = list.cursor_start_mut();
        cursor.move_next().unwrap();
        cursor.move_next().unwrap();
        cursor.insert(3);
        assert_eq!(cursor.current(), Ok(&4));
        cursor.move_prev();
        assert_eq!(cursor.current(), Ok(&3));

        assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_into_empty_list() {
        let mut list = List::new();
        let mut cursor = list.cursor_start_mut();
        assert!(cursor.is_end());

        cursor.insert(1);
        // the cursor is still at the end position; the new element is its
        // predecessor
        assert!(cursor.is_end());
        assert_eq!(cursor.view().front(), Ok(&1));
        assert_eq!(cursor.view().len(), 1);
    }

    #[test]
    fn remove_middle_element() {
        let mut list = List::from_iter([1, 2, 3]);
        let mut cursor = list.cursor_start_mut();
        cursor.move_next().unwrap();

        assert_eq!(cursor.remove(), Ok(2));
        // the cursor moved to the element that followed
        assert_eq!(cursor.current(), Ok(&3));
        assert_eq!(cursor.view().len(), 2);

        assert_eq!(Vec::from_iter(list), vec![1, 3]);
    }

    #[test]
    fn remove_last_element_lands_on_end() {
        let mut list = List::from_iter([1]);
        let mut cursor = list.cursor_start_mut();
        assert_eq!(cursor.remove(), Ok(1));
        assert!(cursor.is_end());
        assert!(cursor.view().is_empty());
    }

    #[test]
    fn remove_error_triggers() {
        // empty list: the empty-list error wins, whatever the position
        let mut list = List::<i32>::new();
        assert_eq!(
            list.cursor_start_mut().remove(),
            Err(OutOfRangeError::EmptyList)
        );

        // non-empty list, cursor at the end position
        list.push_back(1);
        assert_eq!(
            list.cursor_end_mut().remove(),
            Err(OutOfRangeError::EraseEnd)
        );
        // the failed removal did not mutate the list
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Ok(&1));
    }

    #[test]
    fn cursor_mut_edits_during_iteration() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_start_mut();

        // drop every odd element while walking
        while !cursor.is_end() {
            if cursor.current().unwrap() % 2 == 1 {
                cursor.remove().unwrap();
            } else {
                cursor.move_next().unwrap();
            }
        }

        assert_eq!(Vec::from_iter(list), vec![0, 2, 4]);
    }
}
