//! Example demonstrating Gridcrack puzzle generation.
//!
//! This example shows how to:
//! - Generate a puzzle for a difficulty or a rush stage
//! - Reproduce a puzzle from its seed
//! - Display the grid, sequences, par, and solution path
//! - Sample many puzzles in parallel and report the par distribution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty or a rush stage:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! cargo run --example generate_puzzle -- --stage 7
//! ```
//!
//! Reproduce a puzzle:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample puzzles and print how often each par value occurs (set
//! `RUST_LOG=debug` to see rejected attempts):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard --samples 1000
//! ```

use std::{collections::BTreeMap, process};

use clap::{Parser, ValueEnum};
use gridcrack_generator::{Difficulty, Puzzle, PuzzleGenerator, PuzzleSeed, PuzzleTier};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Medium => Self::Medium,
            DifficultyArg::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty of a standard puzzle.
    #[arg(short, long, value_name = "LEVEL", default_value = "easy", conflicts_with = "stage")]
    difficulty: DifficultyArg,

    /// Rush stage to generate instead of a standard puzzle.
    #[arg(long, value_name = "STAGE", value_parser = clap::value_parser!(u32).range(1..))]
    stage: Option<u32>,

    /// Seed to reproduce (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to sample for par statistics.
    #[arg(long, value_name = "COUNT")]
    samples: Option<usize>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let tier = match args.stage {
        Some(stage) => PuzzleTier::Stage(stage),
        None => PuzzleTier::Difficulty(args.difficulty.into()),
    };
    let generator = PuzzleGenerator::new();

    if let Some(samples) = args.samples {
        if samples == 0 {
            eprintln!("--samples must be at least 1.");
            process::exit(1);
        }
        print_par_stats(&generator, tier, samples);
        return;
    }

    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);
    let puzzle = generator.generate_with_seed(tier, seed);
    print_puzzle(&puzzle);
}

fn print_par_stats(generator: &PuzzleGenerator, tier: PuzzleTier, samples: usize) {
    let pars = (0..samples)
        .into_par_iter()
        .map(|_| generator.generate_with_seed(tier, PuzzleSeed::random()).par)
        .fold(BTreeMap::new, |mut counts, par| {
            *counts.entry(par).or_insert(0_usize) += 1;
            counts
        })
        .reduce(BTreeMap::new, |mut a, b| {
            for (par, count) in b {
                *a.entry(par).or_insert(0) += count;
            }
            a
        });

    println!("Tier: {tier}");
    println!("Samples: {samples}");
    println!();
    println!("Par:");
    for (par, count) in pars {
        println!("  {par}: {count}");
    }
}

fn print_puzzle(puzzle: &Puzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    println!("Tier: {}", puzzle.tier);
    println!("Buffer: {}", puzzle.buffer_size);
    println!("Par: {}", puzzle.par);
    println!();

    println!("Grid:");
    for line in puzzle.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Sequences:");
    for sequence in &puzzle.sequences {
        println!("  {sequence}");
    }
    println!();

    println!("Solution:");
    for (step, pos) in puzzle.solution_path.iter().enumerate() {
        println!("  {}. {pos} {}", step + 1, puzzle.grid[*pos].code());
    }
}
