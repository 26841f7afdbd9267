use gridcrack_core::{Grid, Position, TargetSequence};

use crate::{PuzzleParams, PuzzleSeed, PuzzleTier};

/// A generated puzzle.
///
/// The bundle is immutable once produced; sessions clone the grid and the
/// sequences and mutate their own copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// The seed that reproduces this puzzle for its tier.
    pub seed: PuzzleSeed,
    /// The difficulty or stage the puzzle was generated for.
    pub tier: PuzzleTier,
    /// The code grid.
    pub grid: Grid,
    /// The target sequences, all pending.
    pub sequences: Vec<TargetSequence>,
    /// The maximum number of selections.
    pub buffer_size: usize,
    /// The fewest moves that complete every sequence.
    pub par: usize,
    /// A path of exactly `par` moves that completes every sequence.
    pub solution_path: Vec<Position>,
}

impl Puzzle {
    /// Returns the parameters the puzzle was generated with.
    #[must_use]
    pub fn params(&self) -> PuzzleParams {
        self.tier.params()
    }

    /// Returns the stage number for rush puzzles.
    #[must_use]
    pub fn stage(&self) -> Option<u32> {
        match self.tier {
            PuzzleTier::Stage(stage) => Some(stage),
            PuzzleTier::Difficulty(_) => None,
        }
    }
}
