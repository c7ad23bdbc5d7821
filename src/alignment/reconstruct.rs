//! Path reconstruction: parent-chain reversal and script emission.

use super::arena::{NodeArena, NodeId};
use crate::cost::Cost;
use crate::script::EditSink;

/// Reverse the goal node's parent chain in place, so that following
/// `parent` from the returned start node walks forward along the optimal
/// path.
fn reverse_chain<C: Cost>(arena: &mut NodeArena<C>, goal: NodeId) -> NodeId {
    let mut prev: Option<NodeId> = None;
    let mut cur = goal;
    loop {
        let next = arena.node(cur).parent;
        arena.node_mut(cur).parent = prev;
        match next {
            None => return cur,
            Some(n) => {
                prev = Some(cur);
                cur = n;
            }
        }
    }
}

/// Walk the optimal path forward and emit the edit script.
///
/// Each consecutive node pair is one hop of the search: a single insert,
/// a single delete, or a compressed diagonal run (equal pairs, possibly
/// capped by one substitution or one trailing insert/delete), which is
/// re-expanded here element by element.
pub(crate) fn emit_script<A, B, C, S>(
    seq1: &[A],
    seq2: &[B],
    arena: &mut NodeArena<C>,
    goal: NodeId,
    sink: &mut S,
) where
    C: Cost,
    S: EditSink<A, B, C>,
{
    let start = reverse_chain(arena, goal);

    let mut cur = start;
    while let Some(next) = arena.node(cur).parent {
        let n = *arena.node(cur);
        let m = *arena.node(next);
        let delta = m.cost - n.cost;

        if n.pos1 == m.pos1 {
            debug_assert!(delta >= C::zero());
            sink.output_ins(&seq2[n.pos2], delta);
        } else if n.pos2 == m.pos2 {
            debug_assert!(delta >= C::zero());
            sink.output_del(&seq1[n.pos1], delta);
        } else {
            let mut i = n.pos1;
            let mut j = n.pos2;
            while i + 1 < m.pos1 && j + 1 < m.pos2 {
                sink.output_eql(&seq1[i], &seq2[j]);
                i += 1;
                j += 1;
            }
            if i + 1 == m.pos1 && j + 1 == m.pos2 {
                // Run capped by a true substitution, or ending on an
                // equal pair.
                if delta > C::zero() {
                    sink.output_sub(&seq1[i], &seq2[j], delta);
                } else {
                    sink.output_eql(&seq1[i], &seq2[j]);
                }
            } else if i + 1 == m.pos1 {
                sink.output_eql(&seq1[i], &seq2[j]);
                sink.output_ins(&seq2[j + 1], delta);
            } else {
                sink.output_eql(&seq1[i], &seq2[j]);
                sink.output_del(&seq1[i + 1], delta);
            }
        }
        cur = next;
    }
}
