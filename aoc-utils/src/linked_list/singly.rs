//! Singly linked list.

use std::fmt;

use super::arena::{Arena, Handle};
use crate::error::ListError;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<Handle>,
}

/// A singly linked list with O(1) append through a stored tail handle.
///
/// # Example
///
/// ```rust
/// use aoc_utils::linked_list::List;
///
/// let mut list: List<u32> = (1..=3).collect();
/// list.insert_front(0);
/// assert_eq!(list.to_string(), "0, 1, 2, 3");
/// assert_eq!(list.pop_front(), Ok(0));
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone)]
pub struct List<T> {
    arena: Arena<Node<T>>,
    head: Option<Handle>,
    tail: Option<Handle>,
    len: usize,
}

impl<T> List<T> {
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
        let handle = self.arena.insert(Node { value, next: None });
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
            next: self.head,
        });
        if self.tail.is_none() {
            self.tail = Some(handle);
        }
        self.head = Some(handle);
        self.len += 1;
        handle
    }

    /// Adds `value` right after the node `at` and returns its handle.
    pub fn insert_after(&mut self, value: T, at: Handle) -> Result<Handle, ListError> {
        let next = self.arena.get(at).ok_or(ListError::InvalidHandle)?.next;
        let handle = self.arena.insert(Node { value, next });
        if let Some(node) = self.arena.get_mut(at) {
            node.next = Some(handle);
        }
        if self.tail == Some(at) {
            self.tail = Some(handle);
        }
        self.len += 1;
        Ok(handle)
    }

    /// Removes the head and returns its value.
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::Underflow)?;
        let node = self.arena.remove(head).ok_or(ListError::InvalidHandle)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
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

    /// Iterates values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`List`].
pub struct Iter<'a, T> {
    arena: &'a Arena<Node<T>>,
    cursor: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.cursor?)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Owning iterator over a [`List`], popping from the front.
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front().ok()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
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
