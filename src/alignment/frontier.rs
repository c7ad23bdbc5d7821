//! Min-cost frontier over live path heads.
//!
//! A thin wrapper around `std::collections::BinaryHeap` inverted into a
//! min-heap. Ties on cost break by push order (FIFO), which makes a whole
//! search run deterministic for a given input and policy. Decrease-key is
//! deliberately absent: relaxation re-pushes the node and the stale entry
//! is discarded on pop by the driver.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::arena::NodeId;
use crate::cost::Cost;

struct Entry<C> {
    cost: C,
    seq: u64,
    node: NodeId,
}

impl<C: Cost> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for Entry<C> {}

impl<C: Cost> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Inverted: BinaryHeap is a max-heap, we want the cheapest entry
        // on top, and among equal costs the earliest-pushed one.
        // Incomparable costs (NaN) collapse to Equal; such policies are
        // outside the cost preconditions.
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of path heads keyed by accumulated cost.
pub(crate) struct Frontier<C> {
    heap: BinaryHeap<Entry<C>>,
    seq: u64,
}

impl<C: Cost> Frontier<C> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Push `node` with priority `cost`.
    pub fn push(&mut self, node: NodeId, cost: C) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { cost, seq, node });
    }

    /// Pop the cheapest entry, oldest first among ties.
    ///
    /// The returned cost is the priority the entry was pushed with, which
    /// may be stale if the node has been relaxed since; the caller checks
    /// against the node's current cost.
    pub fn pop(&mut self) -> Option<(NodeId, C)> {
        self.heap.pop().map(|e| (e.node, e.cost))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
