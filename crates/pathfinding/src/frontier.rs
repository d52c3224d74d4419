//! Priority frontier for uniform-cost search.
//!
//! `BinaryHeap` is a max-heap, so entries are keyed by
//! `Reverse<(priority, sequence)>` to pop the lowest priority first. The
//! insertion sequence breaks ties, so entries with equal priority come out in
//! the order they were pushed. This matches a list that is stable-sorted by
//! priority after every push.
//!
//! Superseded entries are not removed on push. The engine decides when to
//! drop them through [`Frontier::retain`].

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::PathCost;

#[derive(Debug, Clone)]
struct FrontierEntry<T> {
    key: Reverse<(PathCost, u64)>,
    node: T,
}

impl<T> FrontierEntry<T> {
    fn priority(&self) -> PathCost {
        (self.key.0).0
    }
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for FrontierEntry<T> {}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue of discovered but not yet expanded nodes.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    next_sequence: u64,
}

impl<T> Frontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Push `node` with the given priority behind every entry of equal priority.
    pub(crate) fn push(&mut self, priority: PathCost, node: T) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse((priority, sequence)),
            node,
        });
    }

    /// Lowest-priority entry without removing it.
    pub(crate) fn peek(&self) -> Option<(PathCost, &T)> {
        self.heap.peek().map(|e| (e.priority(), &e.node))
    }

    /// Remove and return the lowest-priority entry.
    pub(crate) fn pop(&mut self) -> Option<(PathCost, T)> {
        self.heap.pop().map(|e| (e.priority(), e.node))
    }

    /// Lowest priority currently queued, or 0 when empty.
    pub(crate) fn floor(&self) -> PathCost {
        self.peek().map_or(0, |(priority, _)| priority)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }

    /// Keep only entries for which `keep` returns `true`.
    ///
    /// Sequence numbers are untouched, so the relative order of the survivors
    /// is preserved. Returns the number of dropped entries.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(PathCost, &T) -> bool) -> usize {
        let before = self.heap.len();
        self.heap.retain(|e| keep(e.priority(), &e.node));
        before - self.heap.len()
    }
}
