//! Exhaustive evaluation over every possible secret
//!
//! Runs the solver against all 1000 secrets and aggregates statistics.
//! Games are independent, so they run in parallel; the per-game engine
//! stays sequential.

use crate::core::Code;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::benchmark::play_to_completion;

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_secrets: Vec<(Code, usize)>,
}

/// Run the solver on every secret 000-999 (or a limited prefix)
///
/// # Panics
///
/// Panics if the progress bar template is malformed or a game fails, which
/// would mean the filtering invariant is broken.
#[must_use]
pub fn run_test_all(strategy_name: &str, limit: Option<usize>) -> TestAllStatistics {
    let secrets: Vec<Code> = Code::all()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<(Code, usize)> = secrets
        .par_iter()
        .map(|&secret| {
            let guesses = play_to_completion(strategy_name, secret);
            pb.inc(1);
            (secret, guesses)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for &(_, guesses) in &results {
        *guess_distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = results.iter().map(|&(_, g)| g).sum();
    let max_guesses = results.iter().map(|&(_, g)| g).max().unwrap_or(0);
    let min_guesses = results.iter().map(|&(_, g)| g).min().unwrap_or(0);

    let mut hardest_secrets: Vec<(Code, usize)> = results
        .iter()
        .filter(|&&(_, g)| g == max_guesses)
        .copied()
        .collect();
    hardest_secrets.sort_by_key(|&(secret, _)| secret);
    hardest_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        guess_distribution,
        total_time,
        average_guesses: total_guesses as f64 / results.len() as f64,
        max_guesses,
        min_guesses,
        hardest_secrets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:   {}", stats.total_secrets);
    println!(
        "  Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Best case:        {}", stats.min_guesses);
    println!("  Worst case:       {}", stats.max_guesses);
    println!(
        "  Total time:       {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:  {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_secrets as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        let percentage = *count as f64 / stats.total_secrets as f64 * 100.0;
        let bar_len = if max_count > 0 {
            (*count * 40 / max_count).max(usize::from(*count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_secrets.is_empty() {
        println!(
            "\n😰 {}",
            format!("Hardest Secrets ({} guesses)", stats.max_guesses)
                .yellow()
                .bold()
        );
        for (secret, guesses) in stats.hardest_secrets.iter().take(5) {
            println!("  {} ({guesses} guesses)", secret.to_string().yellow());
        }
    }
}
