//! Example demonstrating puzzle generation.
//!
//! Generates one or more puzzles and prints the problem, solution, seed, and
//! removal count for each. With `--count` above 1 the puzzles are generated
//! in parallel.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Generate a batch:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 10
//! ```

use clap::Parser;
use pawdoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty to generate (easy, medium, hard).
    #[arg(long, value_name = "DIFFICULTY", default_value = "easy", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::ALL
        .into_iter()
        .find(|difficulty| difficulty.to_string().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("unknown difficulty {s:?} (expected easy, medium, or hard)"))
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty);

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed), args.difficulty);
        return;
    }

    let puzzles: Vec<GeneratedPuzzle> = (0..args.count.max(1))
        .into_par_iter()
        .map(|_| generator.generate())
        .collect();
    for puzzle in &puzzles {
        print_puzzle(puzzle, args.difficulty);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, difficulty: Difficulty) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();
    println!(
        "Removed {} of {} targeted cells ({} givens remain)",
        puzzle.removed,
        difficulty.removal_target(),
        puzzle.problem.filled_count()
    );
    println!();
}
