use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};
use gridcrack_generator::{Puzzle, PuzzleGenerator, PuzzleSeed, PuzzleTier};
use log::{debug, info};
use rand::Rng as _;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

use crate::{
    GameError, GameEvent, GameSession, RushClock, RushSettings, SelectBlockReason, board::Board,
};

/// Summary of a finished rush run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RushSummary {
    /// The stage being played when time ran out.
    pub stage: u32,
    /// Grids cleared during the run.
    pub grids_cleared: u32,
    /// Selections made across all grids.
    pub moves: usize,
}

/// A timed session over a stream of escalating puzzles.
///
/// Clearing a grid adds bonus seconds and loads the next stage. A grid that
/// ends without being cleared is replaced by a fresh puzzle at the same
/// stage. Decaying cells tick after every move. The run ends when the clock
/// expires.
///
/// Every puzzle is derived from the run seed, so a seed replays the same
/// sequence of grids for the same moves.
#[derive(Debug, Clone)]
pub struct RushGame {
    generator: PuzzleGenerator,
    settings: RushSettings,
    run_seed: PuzzleSeed,
    grids_started: u64,
    stage: u32,
    grids_cleared: u32,
    total_moves: usize,
    puzzle: Puzzle,
    board: Board,
    decay_rng: Pcg64,
    clock: RushClock,
}

impl RushGame {
    /// Starts a run at stage 1 with a random seed.
    #[must_use]
    pub fn new(settings: RushSettings) -> Self {
        Self::with_seed(PuzzleGenerator::new(), settings, PuzzleSeed::random())
    }

    /// Starts a run at stage 1 whose puzzles are derived from `run_seed`.
    #[must_use]
    pub fn with_seed(
        generator: PuzzleGenerator,
        settings: RushSettings,
        run_seed: PuzzleSeed,
    ) -> Self {
        let clock = RushClock::new(settings.initial_seconds, settings.warning_seconds);
        let puzzle = next_puzzle(&generator, run_seed, 0, 1);
        let board = Board::new(&puzzle);
        let decay_rng = puzzle.seed.stream("decay", 0);
        Self {
            generator,
            settings,
            run_seed,
            grids_started: 1,
            stage: 1,
            grids_cleared: 0,
            total_moves: 0,
            puzzle,
            board,
            decay_rng,
            clock,
        }
    }

    /// Returns the seed the run's puzzles are derived from.
    #[must_use]
    pub fn run_seed(&self) -> PuzzleSeed {
        self.run_seed
    }

    /// Returns the current stage, starting at 1.
    #[must_use]
    pub fn stage(&self) -> u32 {
        self.stage
    }

    /// Returns the number of grids cleared so far.
    #[must_use]
    pub fn grids_cleared(&self) -> u32 {
        self.grids_cleared
    }

    /// Returns the puzzle currently being played.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the number of selections made on the current grid.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.board.moves()
    }

    /// Returns the time budget.
    #[must_use]
    pub fn clock(&self) -> &RushClock {
        &self.clock
    }

    /// Stops the clock.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// Restarts the clock.
    pub fn resume(&mut self) {
        self.clock.resume();
    }

    /// Counts the clock down by one second.
    ///
    /// Called by an external scheduler at 1 Hz.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if let Some(event) = self.clock.tick() {
            events.push(event);
            if event.is_time_expired() {
                info!(
                    "rush run ended at stage {} with {} grids cleared",
                    self.stage, self.grids_cleared
                );
                events.push(GameEvent::GameEnded);
            }
        }
        events
    }

    /// Returns the run summary so far.
    #[must_use]
    pub fn summary(&self) -> RushSummary {
        RushSummary {
            stage: self.stage,
            grids_cleared: self.grids_cleared,
            moves: self.total_moves,
        }
    }

    fn load(&mut self, stage: u32, events: &mut Vec<GameEvent>) {
        self.puzzle = next_puzzle(&self.generator, self.run_seed, self.grids_started, stage);
        self.grids_started += 1;
        self.board = Board::new(&self.puzzle);
        self.decay_rng = self.puzzle.seed.stream("decay", 0);
        self.stage = stage;
        events.push(GameEvent::NewGrid { stage });
    }
}

fn next_puzzle(
    generator: &PuzzleGenerator,
    run_seed: PuzzleSeed,
    index: u64,
    stage: u32,
) -> Puzzle {
    let seed = PuzzleSeed::from_bytes(run_seed.stream("grid", index).random());
    generator.generate_with_seed(PuzzleTier::Stage(stage), seed)
}

impl GameSession for RushGame {
    type Outcome = RushSummary;

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
        if self.clock.is_expired() {
            return Err(SelectBlockReason::GameOver);
        }
        self.board.capability(pos)
    }

    fn select(&mut self, pos: Position) -> Result<Vec<GameEvent>, GameError> {
        self.selection_capability(pos)?;

        let mut events = Vec::new();
        self.board.select(pos, &mut events);
        self.board.decay(&mut self.decay_rng, &mut events);
        self.board.update_feasibility(&mut events);
        self.total_moves += 1;

        let Some(result) = self.board.outcome() else {
            return Ok(events);
        };
        if result.is_won() {
            self.grids_cleared += 1;
            events.push(GameEvent::GridCleared {
                stage: self.stage,
                moves: self.board.moves(),
                par: self.puzzle.par,
            });
            let bonus = self.settings.clear_bonus_seconds;
            self.clock.add_seconds(bonus);
            events.push(GameEvent::BonusAwarded { seconds: bonus });
            info!(
                "stage {} cleared in {} moves (par {}), advancing",
                self.stage,
                self.board.moves(),
                self.puzzle.par
            );
            self.load(self.stage + 1, &mut events);
        } else {
            debug!("stage {} grid ended without a clear: {result}", self.stage);
            self.load(self.stage, &mut events);
        }
        Ok(events)
    }

    fn advancing_positions(&self) -> PositionSet {
        self.board.advancing_positions()
    }

    fn suggested_move(&self) -> Option<Position> {
        self.board.suggested_move()
    }

    fn result(&self) -> Option<RushSummary> {
        self.clock.is_expired().then(|| self.summary())
    }
}
