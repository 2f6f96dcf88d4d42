//! Core domain types for the code-breaking game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;

pub use code::{Code, CodeError, DOMAIN_SIZE};
pub use feedback::{Feedback, FeedbackError};
