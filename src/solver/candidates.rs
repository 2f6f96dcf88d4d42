//! Candidate set maintenance
//!
//! The candidate set holds every code still consistent with the feedback
//! given so far. Filtering re-checks the entire history on every call, so
//! the set can always be rebuilt from a replayed history and the invariant
//! (candidates = codes consistent with all of history) is self-evident.

use crate::core::{Code, Feedback};

/// At or below this many candidates, the full set is surfaced for display
pub const DISPLAY_THRESHOLD: usize = 10;

/// The full 000-999 domain in ascending order
#[must_use]
pub fn full_domain() -> Vec<Code> {
    Code::all().collect()
}

/// Check whether a candidate is consistent with every recorded feedback
///
/// A candidate survives iff scoring each past guess against it reproduces
/// the feedback that was actually given.
#[must_use]
pub fn is_consistent(candidate: Code, history: &[(Code, Feedback)]) -> bool {
    history
        .iter()
        .all(|&(guess, feedback)| Feedback::score(guess, candidate) == feedback)
}

/// Filter a candidate set against the full history
///
/// Retains the members of `current` consistent with every record, in their
/// original (ascending) order. Checking the whole history rather than just
/// the newest record is deliberate: the result is correct even when invoked
/// on a freshly rebuilt set.
#[must_use]
pub fn filter(current: &[Code], history: &[(Code, Feedback)]) -> Vec<Code> {
    current
        .iter()
        .copied()
        .filter(|&candidate| is_consistent(candidate, history))
        .collect()
}
