//! Tests for the linked list module.

use super::*;
use crate::error::ListError;

/// Checks `len` against a forward walk and, for doubly linked lists, a backward walk.
fn assert_consistent<T: PartialEq + std::fmt::Debug>(list: &DoubleList<T>) {
    let forward: Vec<&T> = list.iter().collect();
    let mut backward: Vec<&T> = list.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward.len(), list.len());
    assert_eq!(forward, backward);
    assert_eq!(list.front(), forward.first().copied());
    assert_eq!(list.back(), forward.last().copied());
}

#[test]
fn test_singly_append_then_pop() {
    let mut list = List::new();
    list.append("v");
    assert_eq!(list.pop_front(), Ok("v"));
    assert!(list.is_empty());
    assert_eq!(list.front_handle(), None);
    assert_eq!(list.back_handle(), None);
}

#[test]
fn test_singly_pop_empty_underflows() {
    let mut list: List<i32> = List::new();
    assert_eq!(list.pop_front(), Err(ListError::Underflow));
}

#[test]
fn test_singly_order_and_len() {
    let mut list = List::new();
    list.extend([2, 3]);
    list.insert_front(1);
    list.append(4);
    assert_eq!(list.len(), 4);
    assert_eq!(list.iter().count(), 4);
    assert_eq!(list.to_string(), "1, 2, 3, 4");
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn test_singly_insert_after_tail_moves_tail() {
    let mut list = List::new();
    let a = list.append('a');
    let c = list.append('c');
    list.insert_after('b', a).unwrap();
    let d = list.insert_after('d', c).unwrap();
    assert_eq!(list.back_handle(), Some(d));
    list.append('e');
    assert_eq!(list.iter().collect::<String>(), "abcde");
}

#[test]
fn test_singly_pop_until_empty_then_reuse() {
    let mut list: List<i32> = (0..3).collect();
    let stale = list.front_handle().unwrap();
    assert_eq!(list.pop_front(), Ok(0));
    assert_eq!(list.get(stale), Err(ListError::InvalidHandle));
    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_front(), Ok(2));
    assert_eq!(list.pop_front(), Err(ListError::Underflow));

    // recycled slot must not revive the stale handle
    let fresh = list.append(9);
    assert_ne!(fresh, stale);
    assert_eq!(list.get(stale), Err(ListError::InvalidHandle));
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![9]);
}

#[test]
fn test_singly_walk_by_handles() {
    let list: List<u8> = [5, 6, 7].into_iter().collect();
    let mut cursor = list.front_handle();
    let mut seen = Vec::new();
    while let Some(handle) = cursor {
        seen.push(*list.get(handle).unwrap());
        cursor = list.next_handle(handle).unwrap();
    }
    assert_eq!(seen, vec![5, 6, 7]);
}

#[test]
fn test_double_remove_middle() {
    let mut list = DoubleList::new();
    list.append("a");
    let b = list.append("b");
    list.append("c");
    assert_eq!(list.remove(b), Ok("b"));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "c"]);
    assert_consistent(&list);
}

#[test]
fn test_double_remove_ends_updates_head_and_tail() {
    let mut list: DoubleList<i32> = (1..=3).collect();
    let head = list.front_handle().unwrap();
    let tail = list.back_handle().unwrap();
    assert_eq!(list.remove(head), Ok(1));
    assert_eq!(list.remove(tail), Ok(3));
    assert_eq!(list.front(), Some(&2));
    assert_eq!(list.back(), Some(&2));
    assert_consistent(&list);

    let last = list.front_handle().unwrap();
    assert_eq!(list.remove(last), Ok(2));
    assert!(list.is_empty());
    assert_eq!(list.front_handle(), None);
    assert_eq!(list.back_handle(), None);
}

#[test]
fn test_double_insert_before() {
    let mut list = DoubleList::new();
    let b = list.append('b');
    let d = list.append('d');
    list.insert_before('c', Some(d)).unwrap();
    list.insert_before('a', Some(b)).unwrap();
    list.insert_before('_', None).unwrap();
    assert_eq!(list.to_string(), "_, a, b, c, d");
    assert_consistent(&list);
}

#[test]
fn test_double_insert_after() {
    let mut list = DoubleList::new();
    let a = list.append(1);
    list.insert_after(3, Some(a)).unwrap();
    list.insert_after(2, Some(a)).unwrap();
    list.insert_after(4, None).unwrap();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_consistent(&list);
}

#[test]
fn test_double_pop_both_ends() {
    let mut list: DoubleList<i32> = (1..=4).collect();
    assert_eq!(list.pop_back(), Ok(4));
    assert_eq!(list.pop_front(), Ok(1));
    assert_eq!(list.pop_back(), Ok(3));
    assert_eq!(list.pop_back(), Ok(2));
    assert_eq!(list.pop_back(), Err(ListError::Underflow));
    assert_eq!(list.pop_front(), Err(ListError::Underflow));
}

#[test]
fn test_double_handles_survive_neighbour_mutation() {
    let mut list = DoubleList::new();
    let handles: Vec<Handle> = (0..6).map(|v| list.append(v)).collect();
    list.remove(handles[1]).unwrap();
    list.remove(handles[4]).unwrap();
    list.insert_before(10, Some(handles[2])).unwrap();
    *list.get_mut(handles[3]).unwrap() += 100;

    assert_eq!(list.get(handles[0]), Ok(&0));
    assert_eq!(list.get(handles[3]), Ok(&103));
    assert_eq!(list.prev_handle(handles[5]), Ok(Some(handles[3])));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 10, 2, 103, 5]);
    assert_consistent(&list);
}

#[test]
fn test_double_rejects_stale_and_foreign_handles() {
    let mut list = DoubleList::new();
    let a = list.append(1);
    list.remove(a).unwrap();
    assert_eq!(list.remove(a), Err(ListError::InvalidHandle));
    assert_eq!(list.insert_before(2, Some(a)), Err(ListError::InvalidHandle));

    let mut other = DoubleList::new();
    let foreign = other.append(1);
    list.append(1);
    assert_eq!(list.remove(foreign), Err(ListError::InvalidHandle));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_double_clear_invalidates_handles() {
    let mut list: DoubleList<i32> = DoubleList::new();
    let a = list.append(1);
    list.append(2);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.get(a), Err(ListError::InvalidHandle));
    list.append(3);
    assert_eq!(list.to_string(), "3");
}

#[test]
fn test_double_owning_iter_from_both_ends() {
    let list: DoubleList<i32> = (1..=5).collect();
    let mut iter = list.into_iter();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(5));
    assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3, 4]);
}

#[test]
fn test_double_iter_meets_in_middle() {
    let list: DoubleList<i32> = (1..=3).collect();
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_debug_and_equality() {
    let a: DoubleList<i32> = vec![1, 2].into_iter().collect();
    let mut b = DoubleList::new();
    b.append(2);
    b.insert_front(1);
    assert_eq!(a, b);
    assert_eq!(format!("{a:?}"), "[1, 2]");

    let s: List<i32> = vec![1, 2].into_iter().collect();
    assert_eq!(format!("{s:?}"), "[1, 2]");
}

#[test]
fn test_clone_rejects_handles_of_the_other_copy() {
    let mut original = DoubleList::new();
    let z = original.append('z');
    let mut copy = original.clone();
    let b = copy.append('b');

    assert_eq!(original.remove(b), Err(ListError::InvalidHandle));
    assert_eq!(copy.get(z), Err(ListError::InvalidHandle));
    assert_eq!(original.to_string(), "z");
    assert_eq!(copy.to_string(), "z, b");

    let mut singly: List<u8> = [1, 2].into_iter().collect();
    let head = singly.front_handle().unwrap();
    let copy = singly.clone();
    assert_eq!(copy.next_handle(head), Err(ListError::InvalidHandle));
    assert_eq!(singly.insert_after(3, head).map(|_| ()), Ok(()));
}
