//! Benchmark command
//!
//! Measures solver performance across randomly sampled secrets.

use crate::core::{Code, Feedback};
use crate::solver::{Session, SessionState, StrategyType};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run the benchmark on `count` randomly sampled secrets
///
/// Secrets are drawn uniformly from 000-999 (with repetition possible);
/// each game runs to completion with internally generated feedback.
///
/// # Panics
///
/// Panics if the engine fails mid-game, which would mean the filtering
/// invariant is broken.
#[must_use]
pub fn run_benchmark(strategy_name: &str, count: usize) -> BenchmarkResult {
    let mut rng = rand::rng();
    let secrets: Vec<Code> = (0..count)
        .map(|_| {
            let value = rng.random_range(0..1000u16);
            Code::new(value).expect("sampled value is in range")
        })
        .collect();

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &secret in &secrets {
        let guesses = play_to_completion(strategy_name, secret);

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();

    BenchmarkResult {
        total_secrets: count,
        total_guesses,
        average_guesses: total_guesses as f64 / count as f64,
        min_guesses,
        max_guesses,
        distribution,
        duration,
        secrets_per_second: count as f64 / duration.as_secs_f64(),
    }
}

/// Play one full game against a known secret; returns the guess count
pub(crate) fn play_to_completion(strategy_name: &str, secret: Code) -> usize {
    let mut session = Session::new(StrategyType::from_name(strategy_name));

    loop {
        let guess = session
            .next_guess()
            .expect("candidate set cannot empty out under honest feedback");
        let feedback = Feedback::score(guess, secret);
        let state = session
            .apply_feedback(feedback)
            .expect("honest feedback never contradicts");

        if state == SessionState::Solved {
            return session.turn();
        }
    }
}
