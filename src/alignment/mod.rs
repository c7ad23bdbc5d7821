//! Minimum-cost edit distance and alignment over the implicit edit graph.
//!
//! Both entry points run the same single-source shortest-path search from
//! `(0, 0)` to `(|seq1|, |seq2|)`; [`edit_alignment`] additionally walks
//! the goal node's parent chain and replays the optimal path into a sink.
//! All per-search state (nodes, frontier, visited index) lives for the
//! duration of one call and is released collectively on return.

mod arena;
mod driver;
mod frontier;
mod reconstruct;
mod visited;

use arena::NodeArena;

use crate::config::AlignConfig;
use crate::cost::CostPolicy;
use crate::error::AlignError;
use crate::script::EditSink;

/// Compute the minimum total edit cost transforming `seq1` into `seq2`.
///
/// # Errors
///
/// [`AlignError::BeamExhausted`] when a configured
/// [`edit_beam`](AlignConfig::edit_beam) prunes every edit path. Cannot
/// occur without a beam.
///
/// # Example
///
/// ```rust
/// use seqalign::prelude::*;
///
/// let a: Vec<char> = "kitten".chars().collect();
/// let b: Vec<char> = "sitting".chars().collect();
///
/// let config = AlignConfig::new().allow_sub(true);
/// assert_eq!(edit_distance(&a, &b, &UnitCost, &config), Ok(3));
/// ```
pub fn edit_distance<A, B, P>(
    seq1: &[A],
    seq2: &[B],
    policy: &P,
    config: &AlignConfig,
) -> Result<P::Cost, AlignError>
where
    P: CostPolicy<A, B>,
{
    let mut arena = NodeArena::new();
    let goal = driver::run_search(seq1, seq2, policy, config, &mut arena)?;
    Ok(arena.node(goal).cost)
}

/// Compute the minimum total edit cost and emit the realizing edit script
/// to `sink`.
///
/// The sink receives one call per edit, in forward order along the
/// optimal path; the incremental costs it sees sum to the returned total.
///
/// # Errors
///
/// [`AlignError::BeamExhausted`] when a configured
/// [`edit_beam`](AlignConfig::edit_beam) prunes every edit path. Nothing
/// is emitted to the sink in that case.
///
/// # Example
///
/// ```rust
/// use seqalign::prelude::*;
///
/// let a: Vec<char> = "abc".chars().collect();
/// let b: Vec<char> = "abxc".chars().collect();
/// let mut sink = ScriptSink::new();
///
/// let total = edit_alignment(&a, &b, &mut sink, &UnitCost, &AlignConfig::new()).unwrap();
/// assert_eq!(total, 1);
/// assert_eq!(sink.ops().iter().map(|op| op.cost()).sum::<usize>(), total);
/// ```
pub fn edit_alignment<A, B, P, S>(
    seq1: &[A],
    seq2: &[B],
    sink: &mut S,
    policy: &P,
    config: &AlignConfig,
) -> Result<P::Cost, AlignError>
where
    P: CostPolicy<A, B>,
    S: EditSink<A, B, P::Cost>,
{
    let mut arena = NodeArena::new();
    let goal = driver::run_search(seq1, seq2, policy, config, &mut arena)?;
    let total = arena.node(goal).cost;
    reconstruct::emit_script(seq1, seq2, &mut arena, goal, sink);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::UnitCost;
    use crate::script::{EditOp, ScriptSink};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_distance_and_alignment_agree() {
        let a = chars("saturday");
        let b = chars("sunday");
        let config = AlignConfig::new().allow_sub(true);

        let dist = edit_distance(&a, &b, &UnitCost, &config).unwrap();
        let mut sink = ScriptSink::new();
        let total = edit_alignment(&a, &b, &mut sink, &UnitCost, &config).unwrap();

        assert_eq!(dist, 3);
        assert_eq!(total, dist);
        assert_eq!(
            sink.ops().iter().map(|op| op.cost()).sum::<usize>(),
            total
        );
    }

    #[test]
    fn test_alignment_script_replays_the_transformation() {
        let a = chars("kitten");
        let b = chars("sitting");
        let config = AlignConfig::new().allow_sub(true);

        let mut sink = ScriptSink::new();
        let total = edit_alignment(&a, &b, &mut sink, &UnitCost, &config).unwrap();
        assert_eq!(total, 3);

        let mut rebuilt = Vec::new();
        for op in sink.ops() {
            match op {
                EditOp::Eql(_, to) | EditOp::Ins(to, _) | EditOp::Sub(_, to, _) => {
                    rebuilt.push(*to)
                }
                EditOp::Del(_, _) => {}
            }
        }
        assert_eq!(rebuilt, b);
    }
}
