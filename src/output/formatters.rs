//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as compact pegs
///
/// Exact matches render as `●`, misplaced digits as `○`, the remainder as
/// `·`, always three glyphs wide.
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let exact = feedback.exact() as usize;
    let misplaced = feedback.misplaced() as usize;
    let blank = 3 - exact - misplaced;

    format!(
        "{}{}{}",
        "●".repeat(exact),
        "○".repeat(misplaced),
        "·".repeat(blank)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_matches() {
        let feedback = Feedback::new(0, 0).unwrap();
        assert_eq!(feedback_pegs(feedback), "···");
    }

    #[test]
    fn pegs_perfect() {
        assert_eq!(feedback_pegs(Feedback::PERFECT), "●●●");
    }

    #[test]
    fn pegs_mixed() {
        let feedback = Feedback::new(1, 2).unwrap();
        assert_eq!(feedback_pegs(feedback), "●○○");

        let feedback = Feedback::new(2, 0).unwrap();
        assert_eq!(feedback_pegs(feedback), "●●·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
