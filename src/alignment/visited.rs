//! Visited index: de-duplication of edit-graph positions.
//!
//! Maps each reached `(pos1, pos2)` to the cheapest node known at that
//! position. Reaching a position again with an equal-or-higher cost is
//! rejected outright; a strictly cheaper rediscovery relaxes the existing
//! node in place (new cost, new parent) and hands it back so the driver
//! re-pushes it; the stale frontier entry is discarded lazily on pop.

use rustc_hash::FxHashMap;

use super::arena::{NodeArena, NodeId};
use crate::cost::Cost;

pub(crate) struct Visited {
    map: FxHashMap<(usize, usize), NodeId>,
}

impl Visited {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Construct-or-relax the node at `(pos1, pos2)`.
    ///
    /// Returns the node to push onto the frontier, or `None` when the
    /// position is already held at an equal or lower cost.
    pub fn construct<C: Cost>(
        &mut self,
        arena: &mut NodeArena<C>,
        pos1: usize,
        pos2: usize,
        cost: C,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        match self.map.get(&(pos1, pos2)) {
            None => {
                let id = arena.alloc(pos1, pos2, cost, parent);
                self.map.insert((pos1, pos2), id);
                Some(id)
            }
            Some(&existing) => {
                if arena.node(existing).cost <= cost {
                    return None;
                }
                let node = arena.node_mut(existing);
                node.cost = cost;
                node.parent = parent;
                Some(existing)
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.map.len()
    }
}
