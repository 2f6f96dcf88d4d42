//! Interactive play mode
//!
//! Line-oriented prompt loop: the program guesses, the human answers a
//! 5-choice feedback menu, and the session narrows the candidates until the
//! secret is found or the feedback contradicts itself.

use crate::solver::{Session, SessionState, SolverError, StrategyType};
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if reading user input fails or the engine cannot issue
/// a guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_play(strategy_name: &str) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Number Mind - Interactive Code Breaker            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Think of a 3-digit number (000-999, digits may repeat).");
    println!("I'll guess it; after each guess pick the matching feedback option.\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'undo' to undo last feedback\n");

    let mut session = Session::new(StrategyType::from_name(strategy_name));

    loop {
        let guess = match session.next_guess() {
            Ok(guess) => guess,
            Err(err) => return Err(err.to_string()),
        };

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining",
            session.turn(),
            session.remaining()
        );
        println!("────────────────────────────────────────────────────────────");
        println!("\n🔢 My guess: {}", guess.to_string().bright_yellow().bold());

        if let Some(few) = session.candidates_if_few() {
            println!("\nRemaining possibilities:");
            for candidate in few {
                println!("  • {candidate}");
            }
        }

        println!("\nFeedback:");
        println!("  [1] All digits wrong");
        println!("  [2] Some correct digits, all in WRONG positions");
        println!("  [3] Some correct digits, all in CORRECT positions");
        println!("  [4] Some correct digits, mixed correct and wrong positions");
        println!("  [5] All digits correct (you got it!)");

        let outcome = loop {
            let input = get_user_input("Your choice (1-5, or command)")?.to_lowercase();

            let result = match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session = Session::new(StrategyType::from_name(strategy_name));
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    match undo_last(&session, strategy_name) {
                        Some(rewound) => {
                            session = rewound;
                            println!("✓ Undone! Back to turn {}\n", session.turn());
                            break None;
                        }
                        None => {
                            println!("Nothing to undo!\n");
                            continue;
                        }
                    }
                }
                "1" => session.apply_raw_feedback(0, 0),
                "2" => {
                    let misplaced = prompt_count("How many digits are correct but misplaced?")?;
                    session.apply_raw_feedback(0, misplaced)
                }
                "3" => {
                    let exact = prompt_count("How many digits are in the correct position?")?;
                    session.apply_raw_feedback(exact, 0)
                }
                "4" => {
                    let exact = prompt_count("How many digits are in the CORRECT position?")?;
                    let misplaced =
                        prompt_count("How many digits are correct but in WRONG positions?")?;
                    session.apply_raw_feedback(exact, misplaced)
                }
                "5" => session.apply_raw_feedback(3, 0),
                _ => {
                    println!("❌ Invalid choice! Enter 1-5, 'undo', 'new', or 'quit'\n");
                    continue;
                }
            };

            match result {
                Ok(state) => break Some(state),
                Err(SolverError::InvalidFeedback(err)) => {
                    println!("❌ {err}\n");
                }
                Err(SolverError::Contradiction { turn }) => {
                    print_contradiction(&session, turn);
                    // The session is stuck until the bad record is undone
                    break Some(SessionState::Contradiction);
                }
                Err(err) => return Err(err.to_string()),
            }
        };

        match outcome {
            Some(SessionState::Solved) => {
                print_victory(&session);

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        session = Session::new(StrategyType::from_name(strategy_name));
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            Some(SessionState::Contradiction) => {
                // Offer recovery rather than exiting
                loop {
                    match get_user_input("Command ('undo' or 'new')")?.to_lowercase().as_str() {
                        "undo" | "u" => {
                            if let Some(rewound) = undo_last(&session, strategy_name) {
                                session = rewound;
                                println!("✓ Undone! Back to turn {}\n", session.turn());
                            } else {
                                println!("Nothing to undo!\n");
                            }
                            break;
                        }
                        "new" | "n" => {
                            session = Session::new(StrategyType::from_name(strategy_name));
                            println!("\n🔄 New game started!\n");
                            break;
                        }
                        "quit" | "q" | "exit" => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        _ => println!("Enter 'undo', 'new', or 'quit'\n"),
                    }
                }
            }
            _ => {}
        }
    }
}

/// Rebuild the session with the newest history record dropped
fn undo_last(session: &Session<StrategyType>, strategy_name: &str) -> Option<Session<StrategyType>> {
    let mut history = session.history().to_vec();
    history.pop()?;

    // A truncated history of a once-valid session cannot contradict
    Session::from_history(StrategyType::from_name(strategy_name), history).ok()
}

/// Explain a contradiction with the history that produced it
fn print_contradiction(session: &Session<StrategyType>, turn: usize) {
    println!(
        "\n{}",
        format!("❌ No valid numbers remain after turn {turn}!").red().bold()
    );
    println!("Some feedback must have been wrong. Here is what I was told:\n");

    for (i, (guess, feedback)) in session.history().iter().enumerate() {
        println!("  {}. guess {} → {}", i + 1, guess, feedback);
    }

    println!("\nType 'undo' to take back the last feedback, or 'new' to start over.\n");
}

/// Celebrate a solved game
fn print_victory(session: &Session<StrategyType>) {
    let turns = session.turn();

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "        🎉  C O D E   C R A C K E D !  🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    if let Some(secret) = session.secret() {
        println!(
            "\n  Your number is {}",
            secret.to_string().bright_yellow().bold()
        );
    }
    println!(
        "  Found in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (guess, feedback)) in session.history().iter().enumerate() {
        println!(
            "    {}. {}  ({})",
            (i + 1).to_string().bright_black(),
            guess.to_string().bright_white().bold(),
            feedback
        );
    }

    println!("\n{}", "═".repeat(62).bright_cyan());
    println!();
}

/// Prompt for a digit count (0-3)
fn prompt_count(prompt: &str) -> Result<u8, String> {
    loop {
        let input = get_user_input(prompt)?;
        match input.parse::<u8>() {
            Ok(count) if count <= 3 => return Ok(count),
            _ => println!("❌ Enter a number between 0 and 3\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Code, Feedback};

    #[test]
    fn undo_rewinds_one_turn() {
        let mut session = Session::new(StrategyType::from_name("sequential"));
        let secret = Code::new(512).unwrap();

        for _ in 0..2 {
            let guess = session.next_guess().unwrap();
            session
                .apply_feedback(Feedback::score(guess, secret))
                .unwrap();
        }
        assert_eq!(session.turn(), 2);

        let rewound = undo_last(&session, "sequential").unwrap();
        assert_eq!(rewound.turn(), 1);
        assert_eq!(rewound.history().len(), 1);
        assert_eq!(rewound.history(), &session.history()[..1]);
    }

    #[test]
    fn undo_on_fresh_session_is_none() {
        let session = Session::new(StrategyType::from_name("sequential"));
        assert!(undo_last(&session, "sequential").is_none());
    }

    #[test]
    fn undo_recovers_from_contradiction() {
        let mut session = Session::new(StrategyType::from_name("sequential"));

        let guess = session.next_guess().unwrap();
        session
            .apply_feedback(Feedback::score(guess, Code::new(123).unwrap()))
            .unwrap();

        // Claim impossible feedback for the same digits next turn
        session.next_guess().unwrap();
        let err = loop {
            match session.apply_raw_feedback(0, 0) {
                Err(SolverError::Contradiction { turn }) => break turn,
                Ok(_) => {
                    session.next_guess().unwrap();
                }
                Err(err) => panic!("unexpected error: {err}"),
            }
        };
        assert!(err >= 2);

        let rewound = undo_last(&session, "sequential").unwrap();
        assert!(rewound.remaining() > 0);
        assert_eq!(rewound.state(), SessionState::AwaitingGuess);
    }
}
