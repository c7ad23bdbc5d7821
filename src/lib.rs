//! # seqalign
//!
//! Generic sequence edit distance and edit alignment.
//!
//! Given two finite sequences and a caller-supplied cost policy for
//! insertion, deletion, and substitution, this crate computes the minimum
//! total edit cost and, on request, a concrete edit script realizing it.
//! The engine is a single-source shortest-path search over the implicit
//! edit graph, with beam-style pruning, a lower-bound envelope, and
//! Myers-style compression of equal runs so that work scales with the
//! number of true edits on mostly-equal inputs.
//!
//! ## Example
//!
//! ```rust
//! use seqalign::prelude::*;
//!
//! let a: Vec<char> = "kitten".chars().collect();
//! let b: Vec<char> = "sitting".chars().collect();
//! let config = AlignConfig::new().allow_sub(true);
//!
//! let mut sink = ScriptSink::new();
//! let total = edit_alignment(&a, &b, &mut sink, &UnitCost, &config).unwrap();
//!
//! assert_eq!(total, 3);
//! assert_eq!(sink.ops().len(), 7); // one op per aligned element pair
//! ```
//!
//! Cost policies are ordinary values implementing
//! [`CostPolicy`](cost::CostPolicy); the substitution cost doubles as the
//! equality predicate, so a policy can make arbitrary element pairs
//! "equal" (case folding, whitespace insensitivity) or price the three
//! operations asymmetrically.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alignment;
pub mod config;
pub mod cost;
pub mod error;
pub mod script;

pub use alignment::{edit_alignment, edit_distance};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::alignment::{edit_alignment, edit_distance};
    pub use crate::config::AlignConfig;
    pub use crate::cost::{Cost, CostPolicy, UnitCost};
    pub use crate::error::AlignError;
    pub use crate::script::{EditOp, EditSink, ScriptSink};
}
