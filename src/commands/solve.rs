//! Secret solving command
//!
//! Solves a specific known secret and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::minimax::worst_case_remaining;
use crate::solver::{Session, SessionState, Strategy};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub worst_case: Option<usize>,
}

/// Solve a specific secret with the given strategy
///
/// Feedback is generated internally by scoring each guess against the
/// secret, so this doubles as an end-to-end check of the whole engine.
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid 3-digit code
/// - The engine fails to issue a guess
pub fn solve_secret<S: Strategy>(config: SolveConfig, strategy: S) -> Result<SolveResult, String> {
    let secret: Code = config
        .secret
        .parse()
        .map_err(|e| format!("Invalid secret: {e}"))?;

    let mut session = Session::new(strategy);
    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.remaining();

        let guess = session.next_guess().map_err(|e| e.to_string())?;

        // Worst-case bound only means something with a real choice left
        let worst_case = (candidates_before > 1)
            .then(|| worst_case_remaining(guess, session.candidates()));

        let feedback = Feedback::score(guess, secret);
        let state = session.apply_feedback(feedback).map_err(|e| e.to_string())?;

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: session.remaining(),
            worst_case,
        });

        if state == SessionState::Solved {
            return Ok(SolveResult {
                success: true,
                steps,
                secret: config.secret,
            });
        }
    }

    // Ran out of guesses
    Ok(SolveResult {
        success: false,
        steps,
        secret: config.secret,
    })
}
