//! Minimax guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::worst_case_remaining;
use crate::core::Code;

/// Select the guess minimizing worst-case remaining candidates
///
/// The guess domain is restricted to the current candidates, so every guess
/// issued is itself a possible secret and play always converges. Returns the
/// best guess and its worst-case score, or `None` if there are no candidates.
///
/// Ties are broken by first-encountered order: candidates are scanned in
/// ascending order and only a strictly smaller score replaces the current
/// best. Evaluating every candidate against every candidate is O(n²)
/// feedback computations, which tops out around 10^6 for the full domain.
///
/// # Examples
/// ```
/// use number_mind::core::Code;
/// use number_mind::solver::minimax::select_best_guess;
///
/// let candidates = vec![
///     Code::new(111).unwrap(),
///     Code::new(112).unwrap(),
///     Code::new(121).unwrap(),
/// ];
///
/// let (best, worst_case) = select_best_guess(&candidates).unwrap();
/// assert_eq!(best.value(), 112); // First candidate reaching score 1
/// assert_eq!(worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess(candidates: &[Code]) -> Option<(Code, usize)> {
    let mut best: Option<(Code, usize)> = None;

    for &guess in candidates {
        let worst_case = worst_case_remaining(guess, candidates);

        match best {
            Some((_, best_score)) if worst_case >= best_score => {}
            _ => best = Some((guess, worst_case)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[u16]) -> Vec<Code> {
        values.iter().map(|&v| Code::new(v).unwrap()).collect()
    }

    #[test]
    fn empty_candidates_returns_none() {
        assert!(select_best_guess(&[]).is_none());
    }

    #[test]
    fn single_candidate_is_selected() {
        let candidates = codes(&[427]);
        let (best, worst_case) = select_best_guess(&candidates).unwrap();
        assert_eq!(best.value(), 427);
        assert_eq!(worst_case, 1);
    }

    #[test]
    fn reference_selection() {
        // Scores: 111 -> 2, 112 -> 1, 121 -> 1. The first candidate
        // achieving the minimum wins, so 112 beats 121.
        let candidates = codes(&[111, 112, 121]);
        let (best, worst_case) = select_best_guess(&candidates).unwrap();
        assert_eq!(best.value(), 112);
        assert_eq!(worst_case, 1);
    }

    #[test]
    fn ties_broken_by_ascending_order() {
        // Symmetric candidate sets give equal scores; the smallest
        // candidate must win the tie.
        let candidates = codes(&[123, 231, 312]);
        let scores: Vec<usize> = candidates
            .iter()
            .map(|&g| worst_case_remaining(g, &candidates))
            .collect();
        assert!(scores.iter().all(|&s| s == scores[0]));

        let (best, _) = select_best_guess(&candidates).unwrap();
        assert_eq!(best.value(), 123);
    }

    #[test]
    fn selection_is_deterministic() {
        let candidates = codes(&[17, 170, 701, 710, 711]);
        let first = select_best_guess(&candidates);
        let second = select_best_guess(&candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn best_score_is_minimal() {
        let candidates = codes(&[55, 505, 550, 555, 556, 565]);
        let (_, best_score) = select_best_guess(&candidates).unwrap();

        for &guess in &candidates {
            assert!(worst_case_remaining(guess, &candidates) >= best_score);
        }
    }
}
