use gridcrack_core::{
    CellKind, Code, DecayTick, Grid, Position, PositionSet, SelectionMode, TargetSequence,
};
use gridcrack_generator::Puzzle;
use gridcrack_solver::{
    apply_selected_cell, can_complete_sequence, positions_advancing_sequences,
    selectable_positions, suggest_next_move,
};
use rand::Rng;

use crate::{GameEvent, GameResult, SelectBlockReason};

/// Move state of a single grid, shared by both session kinds.
///
/// The board owns its copies of the grid and the sequences; the puzzle it was
/// built from is never touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Board {
    grid: Grid,
    sequences: Vec<TargetSequence>,
    buffer: Vec<Code>,
    buffer_size: usize,
    mode: SelectionMode,
    used: PositionSet,
}

impl Board {
    pub(crate) fn new(puzzle: &Puzzle) -> Self {
        Self {
            grid: puzzle.grid.clone(),
            sequences: puzzle.sequences.clone(),
            buffer: Vec::with_capacity(puzzle.buffer_size),
            buffer_size: puzzle.buffer_size,
            mode: SelectionMode::START,
            used: PositionSet::EMPTY,
        }
    }

    pub(crate) fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn sequences(&self) -> &[TargetSequence] {
        &self.sequences
    }

    pub(crate) fn buffer(&self) -> &[Code] {
        &self.buffer
    }

    pub(crate) fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub(crate) fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub(crate) fn moves(&self) -> usize {
        self.buffer.len()
    }

    fn moves_remaining(&self) -> usize {
        self.buffer_size.saturating_sub(self.buffer.len())
    }

    /// Checks whether `pos` may be selected next, ignoring whether the game
    /// has ended.
    pub(crate) fn capability(&self, pos: Position) -> Result<(), SelectBlockReason> {
        let cell = &self.grid[pos];
        if cell.is_selected() {
            return Err(SelectBlockReason::AlreadySelected);
        }
        if !self.mode.contains(pos) {
            return Err(SelectBlockReason::OutsideActiveLine);
        }
        if !cell.kind().is_selectable() {
            return Err(SelectBlockReason::BlockedCell);
        }
        Ok(())
    }

    /// Selects `pos` and feeds its code to the sequences.
    ///
    /// The caller checks [`Board::capability`] first.
    pub(crate) fn select(&mut self, pos: Position, events: &mut Vec<GameEvent>) {
        self.grid[pos].mark_selected();
        let cell = &self.grid[pos];
        self.used.insert(pos);
        self.buffer.push(cell.code());
        self.mode = self.mode.after_selecting(pos);
        events.push(GameEvent::CellSelected {
            position: pos,
            code: cell.code(),
            wildcard: cell.is_wildcard(),
        });

        for index in apply_selected_cell(&mut self.sequences, cell) {
            let sequence = &self.sequences[index];
            events.push(GameEvent::SequenceProgressed {
                index,
                matched: sequence.matched_count(),
            });
            if sequence.is_complete() {
                events.push(GameEvent::SequenceCompleted { index });
            }
        }
    }

    /// Advances every unselected decaying cell by one move.
    ///
    /// Expired cells take a fresh code drawn from `rng` and become normal.
    pub(crate) fn decay<R>(&mut self, rng: &mut R, events: &mut Vec<GameEvent>)
    where
        R: Rng,
    {
        for cell in self.grid.cells_mut() {
            if cell.is_selected() {
                continue;
            }
            match cell.kind().tick() {
                DecayTick::Unchanged => {}
                DecayTick::Counting(kind) => cell.set_kind(kind),
                DecayTick::Expired => {
                    let code = Code::ALL[rng.random_range(0..Code::ALL.len())];
                    cell.set_code(code);
                    cell.set_kind(CellKind::Normal);
                    events.push(GameEvent::CellDecayed {
                        position: cell.position(),
                        code,
                    });
                }
            }
        }
    }

    /// Marks every live sequence that can no longer be completed as impossible.
    pub(crate) fn update_feasibility(&mut self, events: &mut Vec<GameEvent>) {
        let moves_remaining = self.moves_remaining();
        for (index, sequence) in self.sequences.iter_mut().enumerate() {
            if sequence.is_live()
                && !can_complete_sequence(
                    sequence,
                    self.mode,
                    self.used,
                    moves_remaining,
                    &self.grid,
                )
            {
                sequence.mark_impossible();
                events.push(GameEvent::SequenceFailed { index });
            }
        }
    }

    /// Returns the result once the grid can make no further progress.
    ///
    /// A grid ends when no sequence is live, when the buffer is full, or when
    /// the active line has no selectable cell left.
    pub(crate) fn outcome(&self) -> Option<GameResult> {
        let ended = !self.sequences.iter().any(TargetSequence::is_live)
            || self.moves_remaining() == 0
            || selectable_positions(self.mode, self.used, &self.grid).is_empty();
        ended.then(|| {
            let completed = self.sequences.iter().filter(|seq| seq.is_complete()).count();
            GameResult::from_completed(completed, self.sequences.len())
        })
    }

    pub(crate) fn advancing_positions(&self) -> PositionSet {
        positions_advancing_sequences(&self.sequences, self.mode, self.used, &self.grid)
    }

    /// Returns the first move of a shortest completion of the live sequences,
    /// or any advancing cell when no such completion exists.
    pub(crate) fn suggested_move(&self) -> Option<Position> {
        suggest_next_move(
            &self.sequences,
            self.mode,
            self.used,
            self.moves_remaining(),
            &self.grid,
        )
        .or_else(|| self.advancing_positions().iter().next())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::testing::puzzle;

    #[test]
    fn test_capability_checks_in_order() {
        let board = Board::new(&puzzle("## 1C\nFF FF", &["1C"], 2));
        assert_eq!(
            board.capability(Position::new(0, 0)),
            Err(SelectBlockReason::BlockedCell)
        );
        assert_eq!(
            board.capability(Position::new(1, 1)),
            Err(SelectBlockReason::OutsideActiveLine)
        );
        assert_eq!(board.capability(Position::new(0, 1)), Ok(()));

        let mut board = board;
        board.select(Position::new(0, 1), &mut Vec::new());
        assert_eq!(
            board.capability(Position::new(0, 1)),
            Err(SelectBlockReason::AlreadySelected)
        );
    }

    #[test]
    fn test_select_appends_and_flips_mode() {
        let mut board = Board::new(&puzzle("1C BD\nFF 55", &["BD 55"], 3));
        let mut events = Vec::new();
        board.select(Position::new(0, 1), &mut events);

        assert_eq!(board.buffer(), [Code::XBD]);
        assert_eq!(board.mode(), SelectionMode::Vertical { col: 1 });
        assert_eq!(
            events,
            [
                GameEvent::CellSelected {
                    position: Position::new(0, 1),
                    code: Code::XBD,
                    wildcard: false,
                },
                GameEvent::SequenceProgressed {
                    index: 0,
                    matched: 1,
                },
            ]
        );

        events.clear();
        board.select(Position::new(1, 1), &mut events);
        assert!(events.contains(&GameEvent::SequenceCompleted { index: 0 }));
        assert_eq!(board.outcome(), Some(GameResult::Won));
    }

    #[test]
    fn test_decay_counts_down_then_rerolls() {
        let mut board = Board::new(&puzzle("1C 55~2\nFF FF", &["1C FF"], 4));
        let mut rng = Pcg64::seed_from_u64(7);
        let decaying = Position::new(0, 1);

        let mut events = Vec::new();
        board.decay(&mut rng, &mut events);
        assert!(events.is_empty());
        assert_eq!(
            board.grid()[decaying].kind(),
            CellKind::Decaying { moves_left: 1 }
        );

        board.decay(&mut rng, &mut events);
        assert_eq!(board.grid()[decaying].kind(), CellKind::Normal);
        assert_eq!(
            events,
            [GameEvent::CellDecayed {
                position: decaying,
                code: board.grid()[decaying].code(),
            }]
        );
    }

    #[test]
    fn test_selected_cells_do_not_decay() {
        let mut board = Board::new(&puzzle("55~1 FF\nFF FF", &["55 FF"], 4));
        board.select(Position::new(0, 0), &mut Vec::new());

        let mut events = Vec::new();
        board.decay(&mut Pcg64::seed_from_u64(0), &mut events);
        assert!(events.is_empty());
        assert_eq!(
            board.grid()[Position::new(0, 0)].kind(),
            CellKind::Decaying { moves_left: 1 }
        );
    }

    #[test]
    fn test_feasibility_fails_sequences_out_of_reach() {
        let mut board = Board::new(&puzzle("FF 1C\nFF FF", &["1C 55", "FF"], 4));
        let mut events = Vec::new();
        board.select(Position::new(0, 0), &mut events);
        board.update_feasibility(&mut events);

        assert!(board.sequences()[0].is_impossible());
        assert!(board.sequences()[1].is_complete());
        assert_eq!(events.last(), Some(&GameEvent::SequenceFailed { index: 0 }));
        assert_eq!(board.outcome(), Some(GameResult::PartialWin));
    }

    #[test]
    fn test_outcome_when_active_line_is_exhausted() {
        let mut board = Board::new(&puzzle("FF ##\n## 1C", &["1C"], 4));
        board.select(Position::new(0, 0), &mut Vec::new());
        assert_eq!(board.outcome(), Some(GameResult::Lost));
    }

    #[test]
    fn test_suggested_move_prefers_shortest_completion() {
        let board = Board::new(&puzzle(
            "
            55 1C FF
            FF BD FF
            FF FF FF
            ",
            &["1C BD"],
            3,
        ));
        assert_eq!(board.suggested_move(), Some(Position::new(0, 1)));
        assert_eq!(
            board.advancing_positions(),
            PositionSet::from_elem(Position::new(0, 1))
        );
    }
}
