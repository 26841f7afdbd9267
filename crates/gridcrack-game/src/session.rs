use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};

use crate::{AssistSettings, GameError, GameEvent, SelectBlockReason};

/// The capabilities shared by every session kind.
///
/// A presentation layer can drive a standard [`Game`](crate::Game) and a
/// [`RushGame`](crate::RushGame) through this trait alone.
pub trait GameSession {
    /// The final result reported once the session ends.
    type Outcome;

    /// Returns the current grid.
    fn grid(&self) -> &Grid;

    /// Returns the target sequences and their progress.
    fn sequences(&self) -> &[TargetSequence];

    /// Returns the codes selected so far on the current grid.
    fn buffer(&self) -> &[Code];

    /// Returns the maximum number of selections on the current grid.
    fn buffer_size(&self) -> usize;

    /// Returns the line the next selection must come from.
    fn selection_mode(&self) -> SelectionMode;

    /// Checks whether `pos` may be selected next.
    ///
    /// # Errors
    ///
    /// Returns the [`SelectBlockReason`] that [`GameSession::select`] would
    /// fail with.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn selection_capability(&self, pos: Position) -> Result<(), SelectBlockReason>;

    /// Returns `true` if `pos` may be selected next.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn can_select(&self, pos: Position) -> bool {
        self.selection_capability(pos).is_ok()
    }

    /// Selects `pos` and returns the resulting events in order.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the selection is not legal; the session is
    /// left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    fn select(&mut self, pos: Position) -> Result<Vec<GameEvent>, GameError>;

    /// Returns the selectable cells that advance at least one live sequence.
    ///
    /// This is advisory only and never restricts [`GameSession::select`].
    fn advancing_positions(&self) -> PositionSet;

    /// Returns a recommended next move, if any cell is worth selecting.
    fn suggested_move(&self) -> Option<Position>;

    /// Returns the final result, or `None` while the session is running.
    fn result(&self) -> Option<Self::Outcome>;

    /// Returns `true` once the session has ended.
    fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Returns the hints enabled by `assist`.
    fn hints(&self, assist: &AssistSettings) -> Hints {
        if self.is_over() {
            return Hints::default();
        }
        Hints {
            highlighted: if assist.highlight_advancing {
                self.advancing_positions()
            } else {
                PositionSet::EMPTY
            },
            suggestion: assist
                .suggest_move
                .then(|| self.suggested_move())
                .flatten(),
        }
    }
}

/// Hints to show alongside the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hints {
    /// Cells to highlight.
    pub highlighted: PositionSet,
    /// The suggested next move.
    pub suggestion: Option<Position>,
}
