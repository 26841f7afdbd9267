use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};
use gridcrack_generator::Puzzle;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{GameError, GameEvent, GameSession, SelectBlockReason, board::Board};

/// How a standard game ended.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum GameResult {
    /// Every sequence was completed.
    #[display("won")]
    Won,
    /// At least one sequence, but not all, was completed.
    #[display("partial win")]
    PartialWin,
    /// No sequence was completed.
    #[display("lost")]
    Lost,
}

impl GameResult {
    pub(crate) fn from_completed(completed: usize, total: usize) -> Self {
        if completed == total {
            Self::Won
        } else if completed > 0 {
            Self::PartialWin
        } else {
            Self::Lost
        }
    }
}

/// A standard game session over one puzzle.
///
/// Each selection appends a code to the buffer, flips the active line,
/// advances matching sequences, and fails sequences that can no longer be
/// completed. The game ends when every sequence is settled, when the buffer
/// is full, or when the active line has nothing left to select.
///
/// # Example
///
/// ```
/// use gridcrack_game::{Game, GameResult, GameSession as _};
/// use gridcrack_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Medium);
/// let mut game = Game::new(puzzle.clone());
///
/// for &pos in &puzzle.solution_path {
///     game.select(pos)?;
/// }
///
/// assert_eq!(game.result(), Some(GameResult::Won));
/// assert_eq!(game.moves(), puzzle.par);
/// # Ok::<(), gridcrack_game::GameError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    board: Board,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let board = Board::new(&puzzle);
        Self { puzzle, board }
    }

    /// Returns the puzzle this game was created from.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the number of selections made.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.board.moves()
    }

    /// Discards all progress and starts the same puzzle again.
    pub fn restart(&mut self) {
        self.board = Board::new(&self.puzzle);
    }
}

impl GameSession for Game {
    type Outcome = GameResult;

    fn grid(&self) -> &Grid {
        self.board.grid()
    }

    fn sequences(&self) -> &[TargetSequence] {
        self.board.sequences()
    }

    fn buffer(&self) -> &[Code] {
        self.board.buffer()
    }

    fn buffer_size(&self) -> usize {
        self.board.buffer_size()
    }

    fn selection_mode(&self) -> SelectionMode {
        self.board.mode()
    }

    fn selection_capability(&self, pos: Position) -> Result<(), SelectBlockReason> {
        if self.board.outcome().is_some() {
            return Err(SelectBlockReason::GameOver);
        }
        self.board.capability(pos)
    }

    fn select(&mut self, pos: Position) -> Result<Vec<GameEvent>, GameError> {
        self.selection_capability(pos)?;

        let mut events = Vec::new();
        self.board.select(pos, &mut events);
        self.board.update_feasibility(&mut events);
        if let Some(result) = self.board.outcome() {
            debug!(
                "game ended after {} moves (par {}): {result}",
                self.board.moves(),
                self.puzzle.par
            );
            events.push(GameEvent::GameEnded);
        }
        Ok(events)
    }

    fn advancing_positions(&self) -> PositionSet {
        self.board.advancing_positions()
    }

    fn suggested_move(&self) -> Option<Position> {
        self.board.suggested_move()
    }

    fn result(&self) -> Option<GameResult> {
        self.board.outcome()
    }
}
