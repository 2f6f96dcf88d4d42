//! Code-breaking engine
//!
//! Candidate filtering, guess-selection strategies, and the session state
//! machine that ties them together.

pub mod candidates;
pub mod minimax;
mod session;
pub mod strategy;

pub use candidates::DISPLAY_THRESHOLD;
pub use session::{Session, SessionState, SolverError};
pub use strategy::{MinimaxStrategy, SequentialStrategy, Strategy, StrategyType};
