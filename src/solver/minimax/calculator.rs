//! Minimax worst-case calculation for feedback partitions
//!
//! Given a guess and a set of candidates, computes the maximum number of
//! candidates that could remain after the guess is answered.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the worst-case remaining candidates for a guess
///
/// Partitions the candidates by the feedback each would produce for this
/// guess and returns the size of the largest partition: the number of
/// candidates left if the adversary picks the least-informative true secret.
///
/// # Examples
/// ```
/// use number_mind::core::Code;
/// use number_mind::solver::minimax::worst_case_remaining;
///
/// let guess = Code::new(112).unwrap();
/// let candidates = vec![
///     Code::new(111).unwrap(),
///     Code::new(112).unwrap(),
///     Code::new(121).unwrap(),
/// ];
///
/// // 112 distinguishes all three candidates
/// assert_eq!(worst_case_remaining(guess, &candidates), 1);
/// ```
#[must_use]
pub fn worst_case_remaining(guess: Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let partitions = partition_by_feedback(guess, candidates);

    partitions.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they would produce for the guess
fn partition_by_feedback(guess: Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let feedback = Feedback::score(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[u16]) -> Vec<Code> {
        values.iter().map(|&v| Code::new(v).unwrap()).collect()
    }

    #[test]
    fn worst_case_empty_candidates() {
        assert_eq!(worst_case_remaining(Code::new(0).unwrap(), &[]), 0);
    }

    #[test]
    fn worst_case_single_candidate() {
        let candidates = codes(&[314]);
        assert_eq!(worst_case_remaining(Code::new(0).unwrap(), &candidates), 1);
    }

    #[test]
    fn worst_case_reference_scores() {
        // For candidates {111, 112, 121}: guessing 111 cannot separate
        // 112 from 121 (both score (2,0)), so its worst case is 2; either
        // of the others splits all three apart.
        let candidates = codes(&[111, 112, 121]);

        assert_eq!(worst_case_remaining(Code::new(111).unwrap(), &candidates), 2);
        assert_eq!(worst_case_remaining(Code::new(112).unwrap(), &candidates), 1);
        assert_eq!(worst_case_remaining(Code::new(121).unwrap(), &candidates), 1);
    }

    #[test]
    fn worst_case_all_same_partition() {
        // 000 gets (0,0) from every candidate sharing no digits with it
        let candidates = codes(&[111, 222, 333]);
        assert_eq!(
            worst_case_remaining(Code::new(0).unwrap(), &candidates),
            3
        );
    }

    #[test]
    fn worst_case_bounded_by_candidate_count() {
        let candidates = codes(&[5, 50, 500, 555]);
        for guess in Code::all().step_by(97) {
            let worst = worst_case_remaining(guess, &candidates);
            assert!(worst >= 1);
            assert!(worst <= candidates.len());
        }
    }

    #[test]
    fn partitions_cover_all_candidates() {
        let candidates = codes(&[12, 120, 201, 210, 345]);
        let partitions = partition_by_feedback(Code::new(12).unwrap(), &candidates);
        assert_eq!(partitions.values().sum::<usize>(), candidates.len());
    }
}
