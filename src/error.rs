//! Error types for alignment searches.

/// Error type for a failed alignment search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    /// The frontier drained without reaching the goal: no edit path stays
    /// within the configured beam. Cannot occur when no beam is set.
    #[error("no alignment within edit beam {beam}")]
    BeamExhausted {
        /// The beam width that exhausted the search.
        beam: usize,
    },
}
