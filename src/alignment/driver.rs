//! Search driver: best-first expansion of the implicit edit graph.
//!
//! Classic single-source shortest-path over the lazily-expanded grid of
//! `(pos1, pos2)` states, with three prunes layered on top:
//!
//! - **beam**: positions too far off the main diagonal are dropped, with
//!   an exemption once either sequence is exhausted;
//! - **envelope**: a monotone `(env1, env2, env_cost)` witness reached on
//!   some known path dominates every strictly-interior state of equal or
//!   higher cost;
//! - **equal runs**: a maximal run of equal pairs is walked in one step
//!   and stored as a single compressed node, so heap and arena traffic
//!   scale with the number of true edits rather than sequence length.

use super::arena::{NodeArena, NodeId};
use super::frontier::Frontier;
use super::visited::Visited;
use crate::config::AlignConfig;
use crate::cost::{Cost, CostPolicy};
use crate::error::AlignError;

/// Run the search to the goal state `(|seq1|, |seq2|)`.
///
/// Returns the goal node; its arena entry carries the minimum total cost
/// and the backward parent chain used for reconstruction.
pub(crate) fn run_search<A, B, P>(
    seq1: &[A],
    seq2: &[B],
    policy: &P,
    config: &AlignConfig,
    arena: &mut NodeArena<P::Cost>,
) -> Result<NodeId, AlignError>
where
    P: CostPolicy<A, B>,
{
    let len1 = seq1.len();
    let len2 = seq2.len();
    let zero = P::Cost::zero();

    let mut visited = Visited::new();
    let mut frontier = Frontier::new();

    // Envelope: some known path reaches (env1, env2) at env_cost.
    let mut env1 = 0usize;
    let mut env2 = 0usize;
    let mut env_cost = zero;

    if let Some(start) = visited.construct(arena, 0, 0, zero, None) {
        frontier.push(start, zero);
    }

    while let Some((h, popped_cost)) = frontier.pop() {
        let (pos1, pos2, cost) = {
            let n = arena.node(h);
            (n.pos1, n.pos2, n.cost)
        };

        // Entry superseded by a later relaxation of the same node.
        if cost < popped_cost {
            continue;
        }

        if let Some(beam) = config.beam() {
            // Off-beam nodes are dropped, except at a sequence end where
            // drifting past the band is the only way to finish.
            if pos1.abs_diff(pos2) > beam && pos1 != len1 && pos2 != len2 {
                continue;
            }
        }

        // Strictly inside the envelope at no less than its cost: no
        // completion of this path can beat the witness path.
        if pos1 < env1 && pos2 < env2 && cost >= env_cost {
            continue;
        }

        if pos1 == len1 && pos2 == len2 {
            return Ok(h);
        }

        if pos1 == len1 {
            // Only insertions remain.
            let ci = cost + policy.cost_ins(&seq2[pos2]);
            if let Some(t) = visited.construct(arena, pos1, pos2 + 1, ci, Some(h)) {
                frontier.push(t, ci);
            }
        } else if pos2 == len2 {
            // Only deletions remain.
            let cd = cost + policy.cost_del(&seq1[pos1]);
            if let Some(t) = visited.construct(arena, pos1 + 1, pos2, cd, Some(h)) {
                frontier.push(t, cd);
            }
        } else {
            // Interior: slide along the diagonal while the policy keeps
            // reporting equality, then branch from the far end of the
            // run. The intermediate states stay implicit; reconstruction
            // re-expands them.
            let mut near1 = pos1;
            let mut near2 = pos2;
            loop {
                let csub = policy.cost_sub(&seq1[near1], &seq2[near2]);
                let far1 = near1 + 1;
                let far2 = near2 + 1;
                if csub <= zero {
                    // Each equal step pushes the envelope forward at the
                    // cost of the run's head.
                    if far1 > env1 {
                        env1 = far1;
                        env_cost = cost;
                    }
                    if far2 > env2 {
                        env2 = far2;
                        env_cost = cost;
                    }
                }
                if csub > zero || far1 == len1 || far2 == len2 {
                    let ci = cost + policy.cost_ins(&seq2[near2]);
                    if let Some(t) = visited.construct(arena, near1, far2, ci, Some(h)) {
                        frontier.push(t, ci);
                    }
                    let cd = cost + policy.cost_del(&seq1[near1]);
                    if let Some(t) = visited.construct(arena, far1, near2, cd, Some(h)) {
                        frontier.push(t, cd);
                    }
                    if config.sub_allowed() || csub <= zero {
                        let cs = cost + csub;
                        if let Some(t) = visited.construct(arena, far1, far2, cs, Some(h)) {
                            frontier.push(t, cs);
                        }
                    } else if let Some(t) = visited.construct(arena, near1, near2, cost, Some(h)) {
                        // Mismatch with substitution disabled: keep the
                        // equal prefix of the run as its own node.
                        frontier.push(t, cost);
                    }
                    break;
                }
                near1 = far1;
                near2 = far2;
            }
        }
    }

    match config.beam() {
        Some(beam) => Err(AlignError::BeamExhausted { beam }),
        // Without a beam every non-goal node keeps a viable successor, so
        // the frontier cannot drain before the goal pops.
        None => unreachable!("frontier exhausted without reaching the goal"),
    }
}
