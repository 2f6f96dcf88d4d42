//! Number Mind
//!
//! A bulls-and-cows style solver: it guesses a hidden 3-digit number from
//! (exact, misplaced) feedback, using either a sequential baseline or a
//! minimax strategy that minimizes the worst-case remaining candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use number_mind::core::{Code, Feedback};
//! use number_mind::solver::{MinimaxStrategy, Session, SessionState};
//!
//! let secret = Code::new(314).unwrap();
//! let mut session = Session::new(MinimaxStrategy);
//!
//! loop {
//!     let guess = session.next_guess().unwrap();
//!     let feedback = Feedback::score(guess, secret);
//!     if session.apply_feedback(feedback).unwrap() == SessionState::Solved {
//!         break;
//!     }
//! }
//!
//! assert_eq!(session.secret(), Some(secret));
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
