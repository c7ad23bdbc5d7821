//! Edit-script emission: the sink contract and a collecting sink.
//!
//! [`edit_alignment`](crate::edit_alignment) reports the optimal edit
//! path by calling a sink once per edit, in forward order along the path.
//! [`ScriptSink`] is the batteries-included implementation that records
//! the script as a `Vec` of [`EditOp`]s; callers with streaming needs
//! (rendering a diff, patching in place) implement [`EditSink`] directly.

use crate::cost::Cost;

/// Receiver for the edits of an optimal alignment.
///
/// Calls arrive in forward order along the path, exactly once per edit.
/// `cost` is the incremental cost of that edit; the increments sum to the
/// total returned by the alignment call. No return value is consulted;
/// a sink that wants to stop early has to tolerate the remaining calls.
pub trait EditSink<A, B, C> {
    /// Matched pair: `a` equals `b` under the cost policy.
    fn output_eql(&mut self, a: &A, b: &B);

    /// `b` is inserted from the target sequence.
    fn output_ins(&mut self, b: &B, cost: C);

    /// `a` is deleted from the source sequence.
    fn output_del(&mut self, a: &A, cost: C);

    /// `a` is substituted by `b`.
    fn output_sub(&mut self, a: &A, b: &B, cost: C);
}

/// A single edit operation, as recorded by [`ScriptSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOp<A, B, C> {
    /// Matched pair carried over unchanged.
    Eql(A, B),
    /// Insertion of a target element.
    Ins(B, C),
    /// Deletion of a source element.
    Del(A, C),
    /// Substitution of a source element by a target element.
    Sub(A, B, C),
}

impl<A, B, C: Cost> EditOp<A, B, C> {
    /// Incremental cost of this edit; zero for a match.
    pub fn cost(&self) -> C {
        match self {
            EditOp::Eql(_, _) => C::zero(),
            EditOp::Ins(_, c) | EditOp::Del(_, c) | EditOp::Sub(_, _, c) => *c,
        }
    }
}

/// Sink that records the emitted script as owned [`EditOp`]s.
///
/// # Example
///
/// ```rust
/// use seqalign::prelude::*;
/// use seqalign::script::EditOp;
///
/// let a: Vec<char> = "ab".chars().collect();
/// let b: Vec<char> = "b".chars().collect();
/// let mut sink = ScriptSink::new();
///
/// let cost = edit_alignment(&a, &b, &mut sink, &UnitCost, &AlignConfig::new()).unwrap();
/// assert_eq!(cost, 1);
/// assert_eq!(
///     sink.into_ops(),
///     vec![EditOp::Del('a', 1), EditOp::Eql('b', 'b')]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptSink<A, B, C> {
    ops: Vec<EditOp<A, B, C>>,
}

impl<A, B, C> ScriptSink<A, B, C> {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// The recorded operations, in emission order.
    pub fn ops(&self) -> &[EditOp<A, B, C>] {
        &self.ops
    }

    /// Consume the sink, yielding the recorded script.
    pub fn into_ops(self) -> Vec<EditOp<A, B, C>> {
        self.ops
    }
}

impl<A: Clone, B: Clone, C> EditSink<A, B, C> for ScriptSink<A, B, C> {
    fn output_eql(&mut self, a: &A, b: &B) {
        self.ops.push(EditOp::Eql(a.clone(), b.clone()));
    }

    fn output_ins(&mut self, b: &B, cost: C) {
        self.ops.push(EditOp::Ins(b.clone(), cost));
    }

    fn output_del(&mut self, a: &A, cost: C) {
        self.ops.push(EditOp::Del(a.clone(), cost));
    }

    fn output_sub(&mut self, a: &A, b: &B, cost: C) {
        self.ops.push(EditOp::Sub(a.clone(), b.clone(), cost));
    }
}
