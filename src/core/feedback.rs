//! Guess feedback calculation and representation
//!
//! Feedback is the pair (exact, misplaced): `exact` counts positions where
//! guess and secret digits match, `misplaced` counts the additional digit
//! matches achievable by repositioning. Repeated digits use multiset
//! semantics, so guess 112 vs secret 121 scores (1, 2), not (1, 3).

use super::Code;
use std::fmt;

/// Feedback for a guess against a secret
///
/// Construction is validated: each count is at most 3 and their sum is at
/// most 3, so a `Feedback` value is well-formed by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    misplaced: u8,
}

/// Error type for invalid feedback pairs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    CountTooLarge(u8),
    SumTooLarge(u8, u8),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountTooLarge(count) => {
                write!(f, "Feedback count must be at most 3, got {count}")
            }
            Self::SumTooLarge(exact, misplaced) => write!(
                f,
                "Feedback counts must sum to at most 3, got {exact} exact + {misplaced} misplaced"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All three digits exact (solved)
    pub const PERFECT: Self = Self {
        exact: 3,
        misplaced: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Errors
    /// Returns `FeedbackError` if either count exceeds 3 or the counts sum
    /// to more than 3.
    ///
    /// # Examples
    /// ```
    /// use number_mind::core::Feedback;
    ///
    /// let fb = Feedback::new(1, 2).unwrap();
    /// assert_eq!(fb.exact(), 1);
    /// assert_eq!(fb.misplaced(), 2);
    ///
    /// assert!(Feedback::new(2, 2).is_err());
    /// ```
    pub const fn new(exact: u8, misplaced: u8) -> Result<Self, FeedbackError> {
        if exact > 3 {
            return Err(FeedbackError::CountTooLarge(exact));
        }
        if misplaced > 3 {
            return Err(FeedbackError::CountTooLarge(misplaced));
        }
        if exact + misplaced > 3 {
            return Err(FeedbackError::SumTooLarge(exact, misplaced));
        }
        Ok(Self { exact, misplaced })
    }

    /// Number of digits in the correct position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of correct digits in the wrong position
    #[inline]
    #[must_use]
    pub const fn misplaced(self) -> u8 {
        self.misplaced
    }

    /// Check if this feedback means the guess equals the secret
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.exact == 3
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions where the digits agree (exact matches).
    /// 2. For the mismatched positions only, build a digit-frequency table
    ///    per side; `misplaced` is the multiset intersection, summing
    ///    `min(guess_count[d], secret_count[d])` over all digits.
    ///
    /// The intersection construction makes the function symmetric and keeps
    /// repeated digits from being over-counted.
    ///
    /// # Examples
    /// ```
    /// use number_mind::core::{Code, Feedback};
    ///
    /// let guess = Code::new(112).unwrap();
    /// let secret = Code::new(121).unwrap();
    /// let fb = Feedback::score(guess, secret);
    ///
    /// assert_eq!((fb.exact(), fb.misplaced()), (1, 2));
    /// ```
    #[must_use]
    pub fn score(guess: Code, secret: Code) -> Self {
        let guess_digits = guess.digits();
        let secret_digits = secret.digits();

        let mut exact = 0u8;
        let mut guess_counts = [0u8; 10];
        let mut secret_counts = [0u8; 10];

        for i in 0..3 {
            if guess_digits[i] == secret_digits[i] {
                exact += 1;
            } else {
                guess_counts[guess_digits[i] as usize] += 1;
                secret_counts[secret_digits[i] as usize] += 1;
            }
        }

        let misplaced: u8 = (0..10)
            .map(|d| guess_counts[d].min(secret_counts[d]))
            .sum();

        Self { exact, misplaced }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: u16) -> Code {
        Code::new(value).unwrap()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.exact(), 3);
        assert_eq!(Feedback::PERFECT.misplaced(), 0);
        assert!(Feedback::PERFECT.is_perfect());
    }

    #[test]
    fn feedback_new_valid() {
        for exact in 0..=3u8 {
            for misplaced in 0..=(3 - exact) {
                let fb = Feedback::new(exact, misplaced).unwrap();
                assert_eq!(fb.exact(), exact);
                assert_eq!(fb.misplaced(), misplaced);
            }
        }
    }

    #[test]
    fn feedback_new_invalid() {
        assert!(matches!(
            Feedback::new(4, 0),
            Err(FeedbackError::CountTooLarge(4))
        ));
        assert!(matches!(
            Feedback::new(0, 4),
            Err(FeedbackError::CountTooLarge(4))
        ));
        assert!(matches!(
            Feedback::new(2, 2),
            Err(FeedbackError::SumTooLarge(2, 2))
        ));
        assert!(matches!(
            Feedback::new(3, 1),
            Err(FeedbackError::SumTooLarge(3, 1))
        ));
    }

    #[test]
    fn score_zero_overlap() {
        let fb = Feedback::score(code(0), code(314));
        assert_eq!((fb.exact(), fb.misplaced()), (0, 0));
    }

    #[test]
    fn score_repeated_digits() {
        // Position 0 matches; the remaining {1,2} vs {2,1} are both misplaced
        let fb = Feedback::score(code(112), code(121));
        assert_eq!((fb.exact(), fb.misplaced()), (1, 2));
    }

    #[test]
    fn score_repeated_digits_not_over_counted() {
        // Guess has two 1s, secret has one; only one can count as misplaced
        let fb = Feedback::score(code(110), code(901));
        assert_eq!((fb.exact(), fb.misplaced()), (0, 2));

        let fb = Feedback::score(code(111), code(100));
        assert_eq!((fb.exact(), fb.misplaced()), (1, 0));
    }

    #[test]
    fn score_all_misplaced() {
        let fb = Feedback::score(code(123), code(312));
        assert_eq!((fb.exact(), fb.misplaced()), (0, 3));
    }

    #[test]
    fn score_identity() {
        for value in [0, 7, 112, 500, 999] {
            let c = code(value);
            assert_eq!(Feedback::score(c, c), Feedback::PERFECT);
        }
    }

    #[test]
    fn score_perfect_implies_equality() {
        for guess in Code::all() {
            let fb = Feedback::score(guess, code(427));
            assert_eq!(fb.exact() == 3, guess == code(427));
        }
    }

    #[test]
    fn score_symmetry() {
        // Full pairwise check is 10^6 evaluations; a strided sweep keeps the
        // test fast while still crossing repeated-digit cases.
        for g in (0..1000).step_by(7) {
            for s in (0..1000).step_by(13) {
                assert_eq!(
                    Feedback::score(code(g), code(s)),
                    Feedback::score(code(s), code(g)),
                    "asymmetric for {g} vs {s}"
                );
            }
        }
    }

    #[test]
    fn score_bounds() {
        for g in (0..1000).step_by(11) {
            for s in (0..1000).step_by(17) {
                let fb = Feedback::score(code(g), code(s));
                assert!(fb.exact() <= 3);
                assert!(fb.misplaced() <= 3);
                assert!(fb.exact() + fb.misplaced() <= 3);
            }
        }
    }

    #[test]
    fn feedback_display() {
        let fb = Feedback::new(1, 2).unwrap();
        assert_eq!(format!("{fb}"), "1 exact, 2 misplaced");
    }
}
