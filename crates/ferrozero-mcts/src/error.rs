//! Search errors.

/// Ways a search can fail before or during tree construction.
///
/// Failures inside the injected policy or evaluator (panics) unwind
/// through the driver; the tree is arena-owned and freed with the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The root position has no legal moves; the caller must test for a
    /// finished game before searching.
    #[error("search requires at least one legal move at the root")]
    TerminalRoot,
    /// The configuration asks for zero simulations, leaving nothing to
    /// choose a move by.
    #[error("search requires a nonzero simulation count")]
    NoSimulations,
    /// The policy returned a move that was not among the offered
    /// candidates.
    #[error("policy returned a move outside the offered candidates")]
    ForeignPolicyMove,
    /// The evaluator returned a different number of values than states.
    #[error("evaluator returned {got} values for a batch of {expected} states")]
    ValueCountMismatch {
        /// Number of states in the batch.
        expected: usize,
        /// Number of values returned.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::SearchError;

    #[test]
    fn display_messages() {
        assert_eq!(
            format!("{}", SearchError::TerminalRoot),
            "search requires at least one legal move at the root"
        );
        assert_eq!(
            format!(
                "{}",
                SearchError::ValueCountMismatch {
                    expected: 32,
                    got: 31
                }
            ),
            "evaluator returned 31 values for a batch of 32 states"
        );
    }
}
