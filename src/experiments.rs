//! A safe rendition of the same ring built on `GhostCell` branded tokens and
//! `StaticRc` fractional ownership, kept here for comparison with the raw
//! pointer implementation in [`crate::list`].

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct Ring<'id, T> {
    head: Option<NodePtr<'id, T>>,
    tail: Option<NodePtr<'id, T>>,
    len: usize,
}

struct RingNode<'id, T> {
    next: Option<NodePtr<'id, T>>,
    prev: Option<NodePtr<'id, T>>,
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, RingNode<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> RingNode<'id, T> {
    fn new(elem: T) -> Self {
        Self {
            next: None,
            prev: None,
            elem,
        }
    }
}

impl<'id, T> Default for Ring<'id, T> {
    fn default() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }
}

impl<'id, T> Ring<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.head.as_ref().map(|node| &node.deref().borrow(token).elem)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.tail.as_ref().map(|node| &node.deref().borrow(token).elem)
    }

    pub fn push_front(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (left, right) = Full::split(Full::new(GhostCell::new(RingNode::new(elem))));
        match self.head.take() {
            Some(head) => {
                head.deref().borrow_mut(token).prev = Some(left);
                right.deref().borrow_mut(token).next = Some(head);
            }
            None => self.tail = Some(left),
        }
        self.head = Some(right);
        self.len += 1;
    }

    pub fn push_back(&mut self, elem: T, token: &mut GhostToken<'id>) {
        let (left, right) = Full::split(Full::new(GhostCell::new(RingNode::new(elem))));
        match self.tail.take() {
            Some(tail) => {
                tail.deref().borrow_mut(token).next = Some(left);
                right.deref().borrow_mut(token).prev = Some(tail);
            }
            None => self.head = Some(left),
        }
        self.tail = Some(right);
        self.len += 1;
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let right = self.head.take()?;
        let left = match right.deref().borrow_mut(token).next.take() {
            Some(head) => {
                let left = head.deref().borrow_mut(token).prev.take().unwrap();
                self.head = Some(head);
                left
            }
            None => self.tail.take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(left, right)).into_inner().elem)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        let right = self.tail.take()?;
        let left = match right.deref().borrow_mut(token).prev.take() {
            Some(tail) => {
                let left = tail.deref().borrow_mut(token).next.take().unwrap();
                self.tail = Some(tail);
                left
            }
            None => self.head.take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(left, right)).into_inner().elem)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::Ring;
    use ghost_cell::GhostToken;

    #[test]
    fn ring_push_pop() {
        GhostToken::new(|mut token| {
            let mut ring = Ring::new();
            assert!(ring.is_empty());
            ring.push_back(1, &mut token);
            ring.push_front(2, &mut token);
            assert!(!ring.is_empty());
            assert_eq!(ring.len(), 2);
            assert_eq!(ring.pop_back(&mut token), Some(1));
            assert_eq!(ring.pop_front(&mut token), Some(2));
            assert!(ring.is_empty());
        })
    }

    #[test]
    fn ring_peeks() {
        GhostToken::new(|mut token| {
            let mut ring = Ring::new();
            assert_eq!(ring.front(&token), None);
            assert_eq!(ring.back(&token), None);
            ring.push_back(1, &mut token);
            ring.push_back(2, &mut token);
            ring.push_back(3, &mut token);
            assert_eq!(ring.front(&token), Some(&1));
            assert_eq!(ring.back(&token), Some(&3));
            while ring.pop_front(&mut token).is_some() {}
            assert_eq!(ring.len(), 0);
        })
    }
}
