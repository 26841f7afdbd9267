//! Helpers for building hand-written puzzles in tests.

use gridcrack_core::{Code, Grid, TargetSequence};
use gridcrack_generator::{Difficulty, Puzzle, PuzzleSeed, PuzzleTier};

/// Builds a puzzle from grid text and space-separated sequences.
///
/// `par` and the solution path are left empty; sessions never read them
/// except for reporting.
pub(crate) fn puzzle(grid: &str, sequences: &[&str], buffer_size: usize) -> Puzzle {
    let grid: Grid = grid.parse().unwrap();
    let sequences = sequences
        .iter()
        .map(|text| {
            TargetSequence::new(text.split_whitespace().map(|c| c.parse::<Code>().unwrap()))
        })
        .collect();
    Puzzle {
        seed: PuzzleSeed::from_bytes([0; 32]),
        tier: PuzzleTier::Difficulty(Difficulty::Easy),
        grid,
        sequences,
        buffer_size,
        par: 0,
        solution_path: Vec::new(),
    }
}
