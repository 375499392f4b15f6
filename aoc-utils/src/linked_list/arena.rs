//! Slot arena backing both list types.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// An opaque reference to a list node.
///
/// Handles are `Copy` and cheap to store; they do not borrow the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    owner: u64,
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot<N> {
    generation: u32,
    node: Option<N>,
}

/// A vector of reusable slots. Removing a node bumps its slot's generation so
/// stale handles stop resolving.
#[derive(Debug)]
pub(super) struct Arena<N> {
    owner: u64,
    slots: Vec<Slot<N>>,
    free: Vec<usize>,
}

fn next_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// A clone is a separate owner; handles never cross between copies.
impl<N: Clone> Clone for Arena<N> {
    fn clone(&self) -> Self {
        Self {
            owner: next_owner(),
            slots: self.slots.clone(),
            free: self.free.clone(),
        }
    }
}

impl<N> Arena<N> {
    pub(super) fn new() -> Self {
        Self {
            owner: next_owner(),
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(super) fn insert(&mut self, node: N) -> Handle {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        };
        Handle {
            owner: self.owner,
            index,
            generation: self.slots[index].generation,
        }
    }

    fn slot(&self, handle: Handle) -> Option<&Slot<N>> {
        if handle.owner != self.owner {
            return None;
        }
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
    }

    pub(super) fn get(&self, handle: Handle) -> Option<&N> {
        self.slot(handle).and_then(|slot| slot.node.as_ref())
    }

    pub(super) fn get_mut(&mut self, handle: Handle) -> Option<&mut N> {
        if handle.owner != self.owner {
            return None;
        }
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub(super) fn remove(&mut self, handle: Handle) -> Option<N> {
        self.slot(handle)?;
        let slot = &mut self.slots[handle.index];
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        Some(node)
    }

    /// Drops every node. Outstanding handles become invalid.
    pub(super) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }
    }
}
