//! Singly and Doubly Linked Lists with Stable Handles
//!
//! Both lists store their nodes in a slot arena owned by the list and hand
//! out [`Handle`]s instead of references. A handle stays valid until its node
//! is removed, no matter how many other nodes are inserted or removed around
//! it.
//!
//! # List Types
//!
//! - [`List`]: singly linked, O(1) `append`, `insert_front`, `insert_after`
//!   and `pop_front`
//! - [`DoubleList`]: doubly linked, additionally O(1) `insert_before`,
//!   `pop_back` and `remove` of any node by handle
//!
//! # Handle Validity
//!
//! A handle carries the id of the list that issued it and the generation of
//! the slot it points at. Passing a handle whose node was removed, or one
//! issued by a different list, fails with [`ListError::InvalidHandle`]
//! instead of corrupting the list. A list produced by `clone()` gets a new
//! id, so handles from the original are rejected by the copy and vice versa.
//!
//! # Example
//!
//! ```rust
//! use aoc_utils::linked_list::DoubleList;
//!
//! let mut list = DoubleList::new();
//! let a = list.append('a');
//! let c = list.append('c');
//! list.insert_before('b', Some(c)).unwrap();
//! assert_eq!(list.to_string(), "a, b, c");
//!
//! assert_eq!(list.remove(a).unwrap(), 'a');
//! assert!(list.remove(a).is_err());
//! assert_eq!(list.iter().rev().copied().collect::<String>(), "cb");
//! ```
//!
//! [`ListError::InvalidHandle`]: crate::ListError::InvalidHandle

mod arena;
mod doubly;
mod singly;

pub use arena::Handle;
pub use doubly::DoubleList;
pub use singly::List;

#[cfg(test)]
mod tests;
