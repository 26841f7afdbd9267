//! Puzzle generation for Gridcrack.
//!
//! [`PuzzleGenerator`] builds puzzles for the fixed [`Difficulty`] levels and
//! for the escalating stages of rush mode. Every puzzle carries its `par`,
//! the fewest moves that complete all target sequences, and a solution path
//! of exactly that length.
//!
//! Randomness is fully determined by a [`PuzzleSeed`]: generation draws from
//! PCG streams derived from the seed, so a seed and tier always reproduce the
//! same puzzle.
//!
//! # Examples
//!
//! ```
//! use gridcrack_generator::{Difficulty, PuzzleGenerator, PuzzleTier};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Easy);
//!
//! let again = generator.generate_with_seed(PuzzleTier::Difficulty(Difficulty::Easy), puzzle.seed);
//! assert_eq!(puzzle, again);
//! ```

pub use self::{
    generator::{GeneratorSettings, PuzzleGenerator},
    params::{
        Difficulty, MAX_SPECIAL_CELLS, PuzzleParams, PuzzleTier, SEQUENCE_LENGTH, SpecialCells,
    },
    puzzle::Puzzle,
    seed::{PuzzleSeed, SeedParseError},
};

mod generator;
mod layout;
mod params;
mod puzzle;
mod seed;
