//! Doubly linked list.

use std::fmt;

use super::arena::{Arena, Handle};
use crate::error::ListError;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<Handle>,
    next: Option<Handle>,
}

/// A doubly linked list supporting O(1) insertion and removal at any handle.
///
/// For every interior node `n`, `n.prev.next == n` and `n.next.prev == n`;
/// the head has no `prev` and the tail has no `next`.
///
/// # Example
///
/// ```rust
/// use aoc_utils::linked_list::DoubleList;
///
/// let mut ring: DoubleList<u8> = [1, 2, 3].into_iter().collect();
/// let front = ring.front_handle().unwrap();
/// ring.insert_before(0, Some(front)).unwrap();
/// assert_eq!(ring.pop_back(), Ok(3));
/// assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[derive(Clone)]
pub struct DoubleList<T> {
    arena: Arena<Node<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<T> DoubleList<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds `value` after the current tail and returns its handle.
    pub fn append(&mut self, value: T) -> Handle {
        let handle = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail.and_then(|tail| self.arena.get_mut(tail)) {
            Some(tail) => tail.next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
        handle
    }

    /// Adds `value` before the current head and returns its handle.
    pub fn insert_front(&mut self, value: T) -> Handle {
        let handle = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head.and_then(|head| self.arena.get_mut(head)) {
            Some(head) => head.prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    /// Adds `value` right before the node `at`; with no handle, at the front.
    pub fn insert_before(&mut self, value: T, at: Option<Handle>) -> Result<Handle, ListError> {
        let Some(at) = at else {
            return Ok(self.insert_front(value));
        };
        let prev = self.arena.get(at).ok_or(ListError::InvalidHandle)?.prev;
        let handle = self.arena.insert(Node {
            value,
            prev,
            next: Some(at),
        });
        if let Some(node) = self.arena.get_mut(at) {
            node.prev = Some(handle);
        }
        match prev.and_then(|prev| self.arena.get_mut(prev)) {
            Some(prev) => prev.next = Some(handle),
            None => self.head = Some(handle),
        }
        self.len += 1;
        Ok(handle)
    }

    /// Adds `value` right after the node `at`; with no handle, at the back.
    pub fn insert_after(&mut self, value: T, at: Option<Handle>) -> Result<Handle, ListError> {
        let Some(at) = at else {
            return Ok(self.append(value));
        };
        let next = self.arena.get(at).ok_or(ListError::InvalidHandle)?.next;
        let handle = self.arena.insert(Node {
            value,
            prev: Some(at),
            next,
        });
        if let Some(node) = self.arena.get_mut(at) {
            node.next = Some(handle);
        }
        match next.and_then(|next| self.arena.get_mut(next)) {
            Some(next) => next.prev = Some(handle),
            None => self.tail = Some(handle),
        }
        self.len += 1;
        Ok(handle)
    }

    /// Removes the head and returns its value.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::Underflow)?;
        self.remove(head)
    }

    /// Removes the tail and returns its value.
    pub fn pop_back(&mut self) -> Result<T, ListError> {
        let tail = self.tail.ok_or(ListError::Underflow)?;
        self.remove(tail)
    }

    /// Unlinks the node `at` and returns its value. The handle becomes invalid.
    pub fn remove(&mut self, at: Handle) -> Result<T, ListError> {
        let node = self.arena.remove(at).ok_or(ListError::InvalidHandle)?;
        match node.prev.and_then(|prev| self.arena.get_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.arena.get_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|h| self.get(h).ok())
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|h| self.get(h).ok())
    }

    pub fn front_handle(&self) -> Option<Handle> {
        self.head
    }

    pub fn back_handle(&self) -> Option<Handle> {
        self.tail
    }

    /// The handle of the node after `at`, or `None` at the tail.
    pub fn next_handle(&self, at: Handle) -> Result<Option<Handle>, ListError> {
        self.arena
            .get(at)
            .map(|node| node.next)
            .ok_or(ListError::InvalidHandle)
    }

    /// The handle of the node before `at`, or `None` at the head.
    pub fn prev_handle(&self, at: Handle) -> Result<Option<Handle>, ListError> {
        self.arena
            .get(at)
            .map(|node| node.prev)
            .ok_or(ListError::InvalidHandle)
    }

    pub fn get(&self, handle: Handle) -> Result<&T, ListError> {
        self.arena
            .get(handle)
            .map(|node| &node.value)
            .ok_or(ListError::InvalidHandle)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Result<&mut T, ListError> {
        self.arena
            .get_mut(handle)
            .map(|node| &mut node.value)
            .ok_or(ListError::InvalidHandle)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates values head to tail; `.rev()` walks tail to head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }
}

impl<T> Default for DoubleList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`DoubleList`], usable from both ends.
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`DoubleList`].
pub struct IntoIter<T>(DoubleList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.pop_back().ok()
    }
}

impl<T> IntoIterator for DoubleList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a DoubleList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for DoubleList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoubleList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: PartialEq> PartialEq for DoubleList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoubleList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoubleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoubleList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
