//! Session state machine
//!
//! A session owns one game: the strategy, the append-only history of
//! (guess, feedback) records, and the candidate set derived from it. The
//! caller alternates `next_guess` and `apply_feedback` until the session
//! reaches `Solved` or `Contradiction`.

use super::candidates::{self, DISPLAY_THRESHOLD};
use super::strategy::Strategy;
use crate::core::{Code, Feedback, FeedbackError};
use std::fmt;

/// Lifecycle state of a session
///
/// `Solved` and `Contradiction` are terminal; no further guesses are issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to issue the next guess
    AwaitingGuess,
    /// A guess is outstanding; waiting for its feedback
    AwaitingFeedback,
    /// The last guess scored (3, 0); the secret is the last guess
    Solved,
    /// No code is consistent with the accumulated feedback
    Contradiction,
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Feedback pair failed validation; never reaches the history
    InvalidFeedback(FeedbackError),
    /// Filtering emptied the candidate set: some accepted feedback was
    /// impossible for any secret
    Contradiction { turn: usize },
    /// A guess was requested while the candidate set is already empty
    ExhaustedDomain,
    /// Feedback was applied with no guess outstanding
    NoPendingGuess,
    /// The session already reached a terminal state
    SessionOver,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFeedback(err) => write!(f, "Invalid feedback: {err}"),
            Self::Contradiction { turn } => write!(
                f,
                "No candidates remain after turn {turn}; some feedback was inconsistent"
            ),
            Self::ExhaustedDomain => {
                write!(f, "Guess requested with an empty candidate set")
            }
            Self::NoPendingGuess => write!(f, "Feedback given with no guess outstanding"),
            Self::SessionOver => write!(f, "Session already reached a terminal state"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFeedback(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FeedbackError> for SolverError {
    fn from(err: FeedbackError) -> Self {
        Self::InvalidFeedback(err)
    }
}

/// One game of guessing a hidden 3-digit code
///
/// Owns all game state; single-threaded by design, with the caller and the
/// session acting in strict alternation.
pub struct Session<S: Strategy> {
    strategy: S,
    candidates: Vec<Code>,
    history: Vec<(Code, Feedback)>,
    pending: Option<Code>,
    state: SessionState,
    turn: usize,
}

impl<S: Strategy> Session<S> {
    /// Start a fresh session over the full 000-999 domain
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            candidates: candidates::full_domain(),
            history: Vec::new(),
            pending: None,
            state: SessionState::AwaitingGuess,
            turn: 0,
        }
    }

    /// Rebuild a session from an existing history
    ///
    /// The candidate set is re-derived from the full domain against the
    /// whole history, so a replayed session is identical to one that played
    /// the same records live. Used by the play command's undo.
    ///
    /// # Errors
    /// Returns `SolverError::Contradiction` if the history is inconsistent
    /// with every possible secret.
    pub fn from_history(
        strategy: S,
        history: Vec<(Code, Feedback)>,
    ) -> Result<Self, SolverError> {
        let remaining = candidates::filter(&candidates::full_domain(), &history);
        if remaining.is_empty() {
            return Err(SolverError::Contradiction {
                turn: history.len(),
            });
        }

        let solved = history.last().is_some_and(|&(_, f)| f.is_perfect());
        let turn = history.len();

        Ok(Self {
            strategy,
            candidates: remaining,
            pending: None,
            state: if solved {
                SessionState::Solved
            } else {
                SessionState::AwaitingGuess
            },
            history,
            turn,
        })
    }

    /// Issue the next guess
    ///
    /// Idempotent while feedback is outstanding: asking again returns the
    /// same pending guess.
    ///
    /// # Errors
    /// - `SolverError::SessionOver` after `Solved` or `Contradiction`
    /// - `SolverError::ExhaustedDomain` if the candidate set is empty (a
    ///   guard that should be unreachable when contradictions are handled
    ///   promptly)
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        match self.state {
            SessionState::Solved | SessionState::Contradiction => {
                return Err(SolverError::SessionOver);
            }
            SessionState::AwaitingFeedback => {
                return self.pending.ok_or(SolverError::NoPendingGuess);
            }
            SessionState::AwaitingGuess => {}
        }

        let guess = self
            .strategy
            .select_guess(&self.candidates)
            .ok_or(SolverError::ExhaustedDomain)?;

        self.pending = Some(guess);
        self.turn += 1;
        self.state = SessionState::AwaitingFeedback;
        Ok(guess)
    }

    /// Apply the collaborator's feedback for the pending guess
    ///
    /// Appends the record, refilters the candidates against the entire
    /// history, and transitions the state machine.
    ///
    /// # Errors
    /// - `SolverError::SessionOver` after a terminal state
    /// - `SolverError::NoPendingGuess` if no guess is outstanding
    /// - `SolverError::Contradiction` if the record empties the candidate
    ///   set; the history is kept for diagnosis
    pub fn apply_feedback(&mut self, feedback: Feedback) -> Result<SessionState, SolverError> {
        match self.state {
            SessionState::Solved | SessionState::Contradiction => {
                return Err(SolverError::SessionOver);
            }
            SessionState::AwaitingGuess => return Err(SolverError::NoPendingGuess),
            SessionState::AwaitingFeedback => {}
        }

        let Some(guess) = self.pending.take() else {
            return Err(SolverError::NoPendingGuess);
        };

        self.history.push((guess, feedback));
        self.candidates = candidates::filter(&self.candidates, &self.history);

        if feedback.is_perfect() {
            self.state = SessionState::Solved;
            Ok(SessionState::Solved)
        } else if self.candidates.is_empty() {
            self.state = SessionState::Contradiction;
            Err(SolverError::Contradiction { turn: self.turn })
        } else {
            self.state = SessionState::AwaitingGuess;
            Ok(SessionState::AwaitingGuess)
        }
    }

    /// Validate a raw feedback pair and apply it
    ///
    /// The validation gate for feedback arriving from outside (menus, raw
    /// input): invalid pairs are rejected before they can touch the history.
    ///
    /// # Errors
    /// `SolverError::InvalidFeedback` for an impossible pair, plus every
    /// error `apply_feedback` can return.
    pub fn apply_raw_feedback(
        &mut self,
        exact: u8,
        misplaced: u8,
    ) -> Result<SessionState, SolverError> {
        let feedback = Feedback::new(exact, misplaced)?;
        self.apply_feedback(feedback)
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Number of guesses issued so far
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Number of candidates still consistent with the history
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// All (guess, feedback) records, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// The remaining candidates, ascending
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// The remaining candidates when few enough to display
    ///
    /// Returns `Some` when at most `DISPLAY_THRESHOLD` candidates remain;
    /// cheap to enumerate and useful for diagnosing a stuck game.
    #[must_use]
    pub fn candidates_if_few(&self) -> Option<&[Code]> {
        (self.candidates.len() <= DISPLAY_THRESHOLD).then_some(self.candidates.as_slice())
    }

    /// The solved secret, once the session reaches `Solved`
    #[must_use]
    pub fn secret(&self) -> Option<Code> {
        match self.state {
            SessionState::Solved => self.history.last().map(|&(guess, _)| guess),
            _ => None,
        }
    }
}
