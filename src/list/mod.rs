use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::list::error::OutOfRangeError;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod error;
pub mod iterator;

/// The `List` is a circular doubly-linked list with owned nodes. A single
/// always-present sentinel node closes the ring and marks the boundary
/// between the last and the first element, so inserting and removing at
/// any position runs in constant time with no special-casing of the ends.
///
/// The `List` contains:
/// - a pointer `sentinel` that points to the sentinel node;
/// - a length field `len` counting the real (non-sentinel) nodes.
///
/// All bounds-checked operations report failure with [`OutOfRangeError`]
/// instead of panicking.
pub struct List<T> {
    sentinel: Box<Node<Erased>>,
    /// the number of real elements in the ring
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

/// The sentinel node never stores an element, so its payload slot is a
/// zero-sized placeholder. `Node` is `#[repr(C)]` with the links first,
/// which makes casting `Node<Erased>` to `Node<T>` sound as long as the
/// element of the cast node is never read.
#[derive(Default)]
struct Erased;

// private methods
impl<T> List<T> {
    pub(crate) fn sentinel_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.sentinel.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.next` is always valid (either the sentinel itself,
        // or the first element of the ring).
        NonNull::from(unsafe { self.sentinel_node().as_ref().next.as_ref() })
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `sentinel.prev` is always valid (either the sentinel itself,
        // or the last element of the ring).
        NonNull::from(unsafe { self.sentinel_node().as_ref().prev.as_ref() })
    }

    unsafe fn connect(&mut self, mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
        prev.as_mut().next = next;
        next.as_mut().prev = prev;
    }

    /// Splice the detached node `node` into the ring immediately before
    /// `target`.
    ///
    /// This relinks four pointers and works uniformly at every ring
    /// position: splicing before the sentinel appends, splicing before the
    /// first element prepends.
    ///
    /// It is unsafe because it does not check whether `target` belongs to
    /// this list; splicing before a foreign node leaves both rings
    /// ill-formed.
    pub(crate) unsafe fn splice_before(
        &mut self,
        target: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        let prev = target.as_ref().prev;
        #[cfg(debug_assertions)]
        assert_adjacent(prev, target);
        self.connect(prev, node);
        self.connect(node, target);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, target);
        }
    }

    /// Unlink the node `node` from the ring and reclaim it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to
    /// this list, and `node` must not be the sentinel.
    pub(crate) unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        debug_assert!(node != self.sentinel_node());
        let node = Box::from_raw(node.as_ptr());
        self.connect(node.prev, node.next);
        self.len -= 1;
        node
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use circular_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            sentinel: new_sentinel(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements from the `List`.
    ///
    /// Never fails; on an already-empty list it is a no-op. Afterwards the
    /// sentinel is linked to itself again.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    ///
    /// list.clear(); // no-op
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_ok() {}
    }

    /// Provides a reference to the front element, or an
    /// [`OutOfRangeError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.front().is_err());
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, OutOfRangeError> {
        if self.is_empty() {
            return Err(OutOfRangeError::EmptyList);
        }
        // SAFETY: the list is not empty, so `sentinel.next` is a real node
        // holding a valid element.
        unsafe { Ok(&self.front_node().as_ref().element) }
    }

    /// Provides a mutable reference to the front element, or an
    /// [`OutOfRangeError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// if let Ok(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Ok(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, OutOfRangeError> {
        if self.is_empty() {
            return Err(OutOfRangeError::EmptyList);
        }
        let mut node = self.front_node();
        // SAFETY: the list is not empty, and we hold `&mut self`.
        unsafe { Ok(&mut node.as_mut().element) }
    }

    /// Provides a reference to the back element, or an
    /// [`OutOfRangeError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.back().is_err());
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Ok(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, OutOfRangeError> {
        if self.is_empty() {
            return Err(OutOfRangeError::EmptyList);
        }
        // SAFETY: the list is not empty, so `sentinel.prev` is a real node
        // holding a valid element.
        unsafe { Ok(&self.back_node().as_ref().element) }
    }

    /// Provides a mutable reference to the back element, or an
    /// [`OutOfRangeError`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// if let Ok(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Ok(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, OutOfRangeError> {
        if self.is_empty() {
            return Err(OutOfRangeError::EmptyList);
        }
        let mut node = self.back_node();
        // SAFETY: the list is not empty, and we hold `&mut self`.
        unsafe { Ok(&mut node.as_mut().element) }
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Ok(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Ok(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or an
    /// [`OutOfRangeError`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_front().is_err());
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Ok(3));
    /// assert_eq!(list.pop_front(), Ok(1));
    /// assert!(list.pop_front().is_err());
    /// ```
    pub fn pop_front(&mut self) -> Result<T, OutOfRangeError> {
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element and returns it, or an
    /// [`OutOfRangeError`] if the list is empty.
    ///
    /// This is removal at the predecessor of the end position: the cursor
    /// first steps back from the sentinel (a no-op wrap on an empty list,
    /// where the removal then reports the empty-list error).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.pop_back().is_err());
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Ok(3));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, OutOfRangeError> {
        let mut cursor = self.cursor_end_mut();
        cursor.move_prev();
        cursor.remove()
    }

    /// Provides a cursor at the first element.
    ///
    /// The cursor is at the end position if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_start();
    /// assert_eq!(cursor.current(), Ok(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node())
    }

    /// Provides a cursor at the end position (the sentinel node).
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert!(cursor.current().is_err());
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.sentinel_node())
    }

    /// Provides a cursor with editing operations at the first element.
    ///
    /// The cursor is at the end position if the list is empty.
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
    /// if let Ok(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Ok(&5));
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with editing operations at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2]);
    /// let mut cursor = list.cursor_end_mut();
    ///
    /// cursor.insert(3);
    /// assert_eq!(list.back(), Ok(&3));
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let sentinel = self.sentinel_node();
        CursorMut::new(self, sentinel)
    }

    /// Provides a forward iterator.
    ///
    /// The iterator is double-ended; `iter().rev()` traverses the elements
    /// in last-to-first order.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use circular_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other)
    }
}

/// Deep copy: every element is cloned in order into freshly allocated
/// nodes, so the clone shares no storage with the original.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given element. The links are
    /// dangling until the node is spliced into a ring, and are never read
    /// before that.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        })))
    }
}

fn new_sentinel() -> Box<Node<Erased>> {
    let ptr = Node::new_detached(Erased::default());
    // SAFETY: the pointer was just leaked from a box, and the links are
    // initialized to close the ring before anyone can read them.
    let mut sentinel = unsafe { Box::from_raw(ptr.as_ptr()) };
    sentinel.next = ptr;
    sentinel.prev = ptr;
    sentinel
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::error::OutOfRangeError;
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), Err(OutOfRangeError::EmptyList));
        assert_eq!(list.back(), Err(OutOfRangeError::EmptyList));
        assert_eq!(list.pop_front(), Err(OutOfRangeError::EmptyList));
        assert_eq!(list.pop_back(), Err(OutOfRangeError::EmptyList));

        list.push_back(1);
        assert_eq!(list.back(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Err(OutOfRangeError::EmptyList));
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Ok(&2));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_back(), Ok(3));

        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.front(), Err(OutOfRangeError::EmptyList));
        assert_eq!(list.back(), Err(OutOfRangeError::EmptyList));
        assert!(list.is_empty());
    }

    #[test]
    fn list_front_back_scenario() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.front(), Ok(&1));
        assert_eq!(list.back(), Ok(&3));
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2, 3]);

        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![2]);
    }

    #[test]
    fn list_push_both_ends() {
        let mut list = List::new();
        list.push_front(10);
        list.push_back(20);
        assert_eq!(list.front(), Ok(&10));
        assert_eq!(list.back(), Ok(&20));
        assert_eq!(Vec::from_iter(list), vec![10, 20]);
    }

    #[test]
    fn list_clear_is_idempotent() {
        let mut list = List::from_iter(0..10);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        // the ring is still usable after clearing
        list.push_back(1);
        assert_eq!(list.front(), Ok(&1));
    }

    #[test]
    fn list_mutate_front_and_back() {
        let mut list = List::from_iter([1, 2, 3]);
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(Vec::from_iter(list), vec![10, 2, 30]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.front_mut(), Err(OutOfRangeError::EmptyList));
        assert_eq!(empty.back_mut(), Err(OutOfRangeError::EmptyList));
    }

    #[test]
    fn list_clone_is_deep() {
        let original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_back(4);
        *copy.front_mut().unwrap() = 100;
        assert_eq!(Vec::from_iter(original.iter().copied()), vec![1, 2, 3]);
        assert_eq!(Vec::from_iter(copy), vec![100, 2, 3, 4]);
    }

    #[test]
    fn list_move_transfers_contents() {
        let source = List::from_iter([5, 6, 7]);
        let moved = source;
        assert_eq!(moved.len(), 3);
        assert_eq!(moved.front(), Ok(&5));
        assert_eq!(moved.back(), Ok(&7));

        // move-assignment flavor via `mem::take`: the source is reset to
        // the empty invariant and stays usable.
        let mut source = List::from_iter([1, 2]);
        let taken = std::mem::take(&mut source);
        assert_eq!(taken.len(), 2);
        assert!(source.is_empty());
        source.push_back(9);
        assert_eq!(source.front(), Ok(&9));
    }

    #[test]
    fn list_eq_ord_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 3]);
        let c = List::from_iter([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c < a);

        let hash = |list: &List<i32>| {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn list_debug_format() {
        let list = List::from_iter([1, 2, 3]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
        assert_eq!(format!("{:?}", List::<i32>::new()), "[]");
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::list::List;
    use proptest::prelude::*;
    use std::collections::VecDeque;
    use std::iter::FromIterator;

    /// Operations applied in lockstep to the list and to a `VecDeque`
    /// reference model.
    #[derive(Clone, Debug)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        PopBack,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => any::<i32>().prop_map(Op::PushFront),
            2 => any::<i32>().prop_map(Op::PushBack),
            1 => Just(Op::PopFront),
            1 => Just(Op::PopBack),
        ]
    }

    proptest! {
        #[test]
        fn list_matches_deque_model(ops in proptest::collection::vec(op_strategy(), 0..100)) {
            let mut list = List::new();
            let mut model = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushFront(v) => {
                        list.push_front(v);
                        model.push_front(v);
                    }
                    Op::PushBack(v) => {
                        list.push_back(v);
                        model.push_back(v);
                    }
                    Op::PopFront => prop_assert_eq!(list.pop_front().ok(), model.pop_front()),
                    Op::PopBack => prop_assert_eq!(list.pop_back().ok(), model.pop_back()),
                }
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.is_empty(), model.is_empty());
                prop_assert_eq!(list.front().ok(), model.front());
                prop_assert_eq!(list.back().ok(), model.back());
            }
            prop_assert_eq!(Vec::from_iter(list), Vec::from_iter(model));
        }

        #[test]
        fn iteration_preserves_insertion_order(values in proptest::collection::vec(any::<i32>(), 0..50)) {
            let list = List::from_iter(values.iter().copied());
            prop_assert_eq!(Vec::from_iter(list.iter().copied()), values.clone());
            let mut reversed = values;
            reversed.reverse();
            prop_assert_eq!(Vec::from_iter(list.iter().rev().copied()), reversed);
        }
    }
}
