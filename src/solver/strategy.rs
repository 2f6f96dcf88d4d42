//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;

/// A strategy for selecting the next guess from the current candidates
///
/// Candidates are always sorted ascending and contain exactly the codes
/// consistent with the session history.
pub trait Strategy {
    /// Select the next guess, or `None` if no candidates remain
    fn select_guess(&self, candidates: &[Code]) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Numerically-smallest-first baseline
    Sequential(SequentialStrategy),
    /// Worst-case minimization (default, fewest turns)
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        match self {
            Self::Sequential(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "sequential", "minimax".
    /// Defaults to minimax if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "sequential" | "linear" => Self::Sequential(SequentialStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Sequential baseline strategy
///
/// Always guesses the numerically smallest remaining candidate. Offers no
/// bound on turns to converge; exists as a comparator for minimax.
pub struct SequentialStrategy;

impl Strategy for SequentialStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        candidates.first().copied()
    }
}

/// Minimax strategy
///
/// Selects the candidate minimizing the worst-case number of candidates
/// remaining after feedback, with ties broken toward the smallest code.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, candidates: &[Code]) -> Option<Code> {
        super::minimax::select_best_guess(candidates).map(|(best, _)| best)
    }
}
