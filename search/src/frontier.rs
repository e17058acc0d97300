//! Open set with replace-on-cheaper-route semantics.
//!
//! Every frontier entry lives in a *slot* with a sequence number assigned
//! when the slot is created. A cheaper route to a state already in the
//! frontier replaces the node in that slot; the slot keeps its sequence
//! number, so its position in scan order does not change.
//!
//! Two selection strategies are available (see [`FrontierMode`]). Both pick
//! the lowest-priority slot, breaking ties by slot order, and therefore make
//! identical selections.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use ordered_float::OrderedFloat;

use crate::node::{Cost, NodeId, PriorityKey};
use crate::policy::FrontierMode;

#[derive(Debug, Clone)]
struct Slot<S> {
    state: S,
    node: NodeId,
    priority: Cost,
}

/// Heap entry. `node` identifies which occupant of the slot the key was
/// computed for; a mismatch at pop time marks the entry stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapEntry {
    key: PriorityKey,
    node: NodeId,
}

/// Best-first frontier keyed by state.
#[derive(Debug, Clone)]
pub struct Frontier<S> {
    mode: FrontierMode,
    slots: BTreeMap<u64, Slot<S>>,
    by_state: BTreeMap<S, u64>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_slot: u64,
    high_water: u64,
}

impl<S: Ord + Clone> Frontier<S> {
    /// Create an empty frontier using the given selection strategy.
    #[must_use]
    pub fn new(mode: FrontierMode) -> Self {
        Self {
            mode,
            slots: BTreeMap::new(),
            by_state: BTreeMap::new(),
            heap: BinaryHeap::new(),
            next_slot: 0,
            high_water: 0,
        }
    }

    /// The selection strategy in use.
    #[must_use]
    pub fn mode(&self) -> FrontierMode {
        self.mode
    }

    /// Insert a new entry for `state` at the end of scan order.
    ///
    /// The caller must ensure `state` is not already present; use
    /// [`Frontier::replace`] for a cheaper route to a frontier state.
    pub fn push(&mut self, state: S, node: NodeId, priority: Cost) -> u64 {
        let slot = self.next_slot;
        self.next_slot += 1;
        self.by_state.insert(state.clone(), slot);
        self.slots.insert(
            slot,
            Slot {
                state,
                node,
                priority,
            },
        );
        if self.mode == FrontierMode::IndexedHeap {
            self.heap.push(Reverse(HeapEntry {
                key: PriorityKey::new(priority, slot),
                node,
            }));
        }
        let size = self.slots.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        slot
    }

    /// Point the slot holding `state` at `node`, discarding its previous
    /// occupant. Returns the replaced node, or `None` if `state` is not in
    /// the frontier.
    pub fn replace(&mut self, state: &S, node: NodeId, priority: Cost) -> Option<NodeId> {
        let slot_id = *self.by_state.get(state)?;
        let slot = self.slots.get_mut(&slot_id)?;
        let previous = std::mem::replace(&mut slot.node, node);
        slot.priority = priority;
        if self.mode == FrontierMode::IndexedHeap {
            self.heap.push(Reverse(HeapEntry {
                key: PriorityKey::new(priority, slot_id),
                node,
            }));
        }
        Some(previous)
    }

    /// Remove and return the entry with the lowest priority, ties broken by
    /// slot order.
    pub fn pop_best(&mut self) -> Option<(S, NodeId)> {
        let slot_id = match self.mode {
            FrontierMode::LinearScan => self.scan_best()?,
            FrontierMode::IndexedHeap => self.heap_best()?,
        };
        let slot = self.slots.remove(&slot_id)?;
        self.by_state.remove(&slot.state);
        Some((slot.state, slot.node))
    }

    /// `Iterator::min_by_key` returns the first minimum, which is the
    /// first-encountered entry in slot order.
    fn scan_best(&self) -> Option<u64> {
        self.slots
            .iter()
            .min_by_key(|(_, slot)| OrderedFloat(slot.priority))
            .map(|(&id, _)| id)
    }

    fn heap_best(&mut self) -> Option<u64> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let live = self
                .slots
                .get(&entry.key.slot)
                .is_some_and(|slot| slot.node == entry.node);
            if live {
                return Some(entry.key.slot);
            }
        }
        None
    }

    /// The node currently occupying the slot for `state`.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<NodeId> {
        let slot = self.by_state.get(state)?;
        self.slots.get(slot).map(|s| s.node)
    }

    /// Whether `state` has a frontier entry.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.by_state.contains_key(state)
    }

    /// Node handles in scan (slot) order.
    #[must_use]
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.slots.values().map(|s| s.node).collect()
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
