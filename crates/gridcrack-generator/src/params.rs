//! Difficulty and stage tables.

use serde::{Deserialize, Serialize};

/// Fixed difficulty levels of the standard game.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Difficulty {
    /// 5×5 grid, one sequence, five-slot buffer.
    #[default]
    #[display("easy")]
    Easy,
    /// 5×5 grid, two overlapping sequences, six-slot buffer.
    #[display("medium")]
    Medium,
    /// 6×6 grid, three overlapping sequences, seven-slot buffer.
    #[display("hard")]
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the generation parameters for this difficulty.
    #[must_use]
    pub const fn params(self) -> PuzzleParams {
        match self {
            Self::Easy => PuzzleParams::plain(5, 5, 1, false),
            Self::Medium => PuzzleParams::plain(5, 6, 2, true),
            Self::Hard => PuzzleParams::plain(6, 7, 3, true),
        }
    }
}

/// Which table a puzzle was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PuzzleTier {
    /// A standard game at a fixed difficulty.
    #[display("{_0}")]
    Difficulty(Difficulty),
    /// A rush-mode stage, starting at 1.
    #[display("stage {_0}")]
    Stage(u32),
}

impl PuzzleTier {
    /// Returns the generation parameters for this tier.
    ///
    /// # Panics
    ///
    /// Panics for `Stage(0)`; stages start at 1.
    #[must_use]
    pub fn params(self) -> PuzzleParams {
        match self {
            Self::Difficulty(difficulty) => difficulty.params(),
            Self::Stage(stage) => PuzzleParams::for_stage(stage),
        }
    }
}

impl From<Difficulty> for PuzzleTier {
    fn from(difficulty: Difficulty) -> Self {
        Self::Difficulty(difficulty)
    }
}

/// How many special cells a rush stage places.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialCells {
    /// Cells whose code re-randomizes after a countdown.
    pub decaying: usize,
    /// Cells that can never be selected.
    pub blocked: usize,
    /// Cells that match any needed code.
    pub wildcard: usize,
}

impl SpecialCells {
    /// No special cells.
    pub const NONE: Self = Self {
        decaying: 0,
        blocked: 0,
        wildcard: 0,
    };

    /// Returns the total number of special cells.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.decaying + self.blocked + self.wildcard
    }
}

/// Parameters that shape one generated puzzle.
///
/// Instances come from [`Difficulty::params`] or [`PuzzleParams::for_stage`];
/// every instance admits a chained layout that fits its buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleParams {
    grid_size: usize,
    buffer_size: usize,
    sequence_count: usize,
    sequence_length: usize,
    require_overlap: bool,
    specials: SpecialCells,
    decay_moves: u8,
}

/// Length of every target sequence.
pub const SEQUENCE_LENGTH: usize = 3;

/// Upper bound on special cells in any stage.
pub const MAX_SPECIAL_CELLS: usize = 8;

impl PuzzleParams {
    const fn plain(
        grid_size: usize,
        buffer_size: usize,
        sequence_count: usize,
        require_overlap: bool,
    ) -> Self {
        Self {
            grid_size,
            buffer_size,
            sequence_count,
            sequence_length: SEQUENCE_LENGTH,
            require_overlap,
            specials: SpecialCells::NONE,
            decay_moves: 0,
        }
    }

    /// Returns the parameters for rush stage `stage`.
    ///
    /// Grids grow from 5 to 6 at stage 4 and sequences from one to three by
    /// stage 4. Stage 2 unlocks decaying cells, stage 3 blocked cells, and
    /// stage 5 wildcards; the special cell total grows by one per stage up to
    /// [`MAX_SPECIAL_CELLS`] and is dealt round-robin over the unlocked kinds.
    ///
    /// # Panics
    ///
    /// Panics if `stage` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrack_generator::PuzzleParams;
    ///
    /// let first = PuzzleParams::for_stage(1);
    /// assert_eq!(first.grid_size(), 5);
    /// assert_eq!(first.sequence_count(), 1);
    /// assert_eq!(first.specials().total(), 0);
    ///
    /// let later = PuzzleParams::for_stage(6);
    /// assert_eq!(later.grid_size(), 6);
    /// assert_eq!(later.buffer_size(), 7);
    /// assert!(later.require_overlap());
    /// assert_eq!(later.specials().total(), 5);
    /// assert_eq!(later.decay_moves(), 3);
    /// ```
    #[must_use]
    pub fn for_stage(stage: u32) -> Self {
        assert!(stage >= 1, "stages start at 1");
        let grid_size = if stage < 4 { 5 } else { 6 };
        let sequence_count = match stage {
            1 => 1,
            2 | 3 => 2,
            _ => 3,
        };
        let buffer_size = 4 + sequence_count;
        let require_overlap = sequence_count * SEQUENCE_LENGTH > buffer_size;

        let total = usize::try_from(stage - 1)
            .unwrap_or(usize::MAX)
            .min(MAX_SPECIAL_CELLS);
        let mut unlocked = Vec::with_capacity(3);
        if stage >= 2 {
            unlocked.push(SpecialKind::Decaying);
        }
        if stage >= 3 {
            unlocked.push(SpecialKind::Blocked);
        }
        if stage >= 5 {
            unlocked.push(SpecialKind::Wildcard);
        }
        let mut specials = SpecialCells::NONE;
        for kind in unlocked.iter().cycle().take(total) {
            match kind {
                SpecialKind::Decaying => specials.decaying += 1,
                SpecialKind::Blocked => specials.blocked += 1,
                SpecialKind::Wildcard => specials.wildcard += 1,
            }
        }

        let half = u8::try_from(stage / 2).unwrap_or(u8::MAX);
        let decay_moves = 6_u8.saturating_sub(half).max(2);

        Self {
            grid_size,
            buffer_size,
            sequence_count,
            sequence_length: SEQUENCE_LENGTH,
            require_overlap,
            specials,
            decay_moves,
        }
    }

    /// Returns the grid side length.
    #[must_use]
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Returns the maximum number of selections.
    #[must_use]
    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Returns the number of target sequences.
    #[must_use]
    pub const fn sequence_count(&self) -> usize {
        self.sequence_count
    }

    /// Returns the length of each target sequence.
    #[must_use]
    pub const fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Returns `true` if sequences must share codes along the solution path.
    #[must_use]
    pub const fn require_overlap(&self) -> bool {
        self.require_overlap
    }

    /// Returns the special cell counts.
    #[must_use]
    pub const fn specials(&self) -> SpecialCells {
        self.specials
    }

    /// Returns the initial countdown of decaying cells.
    #[must_use]
    pub const fn decay_moves(&self) -> u8 {
        self.decay_moves
    }

    /// Returns the move count of laying every sequence end to end.
    #[must_use]
    pub const fn naive_length(&self) -> usize {
        self.sequence_count * self.sequence_length
    }
}

#[derive(Debug, Clone, Copy)]
enum SpecialKind {
    Decaying,
    Blocked,
    Wildcard,
}
