//! Number Mind - CLI
//!
//! Interactive and batch modes for the 3-digit code-breaking solver.

use anyhow::Result;
use clap::{Parser, Subcommand};
use number_mind::{
    commands::{SolveConfig, print_test_all_statistics, run_benchmark, run_play, run_test_all, solve_secret},
    output::{print_benchmark_result, print_solve_result},
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "number_mind",
    about = "Bulls-and-cows solver for 3-digit codes using minimax worst-case search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default) or sequential
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): think of a number, answer the feedback menu
    Play,

    /// Solve a specific known secret
    Solve {
        /// The secret to solve (000-999)
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the solver on every possible secret
    TestAll {
        /// Limit the number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to interactive play if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&cli.strategy).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { secret, verbose } => run_solve_command(&cli.strategy, &secret, verbose),
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random secrets...");
            let result = run_benchmark(&cli.strategy, count);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            let stats = run_test_all(&cli.strategy, limit);
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_solve_command(strategy_name: &str, secret: &str, verbose: bool) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let config = SolveConfig::new(secret.to_string());
    let result = solve_secret(config, strategy).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}
