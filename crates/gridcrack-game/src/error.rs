/// Error returned when a selection is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The cell was already selected on this grid.
    #[display("cell is already selected")]
    AlreadySelected,
    /// The cell is not in the active row or column.
    #[display("cell is outside the active line")]
    OutsideActiveLine,
    /// The cell is blocked and can never be selected.
    #[display("cell is blocked")]
    BlockedCell,
    /// The session has already ended.
    #[display("game is over")]
    GameOver,
}

/// Reason a cell cannot be selected right now.
///
/// Returned by non-mutating capability checks so callers can grey out cells
/// without attempting a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SelectBlockReason {
    /// The cell was already selected on this grid.
    AlreadySelected,
    /// The cell is not in the active row or column.
    OutsideActiveLine,
    /// The cell is blocked.
    BlockedCell,
    /// The session has already ended.
    GameOver,
}

impl From<SelectBlockReason> for GameError {
    fn from(reason: SelectBlockReason) -> Self {
        match reason {
            SelectBlockReason::AlreadySelected => Self::AlreadySelected,
            SelectBlockReason::OutsideActiveLine => Self::OutsideActiveLine,
            SelectBlockReason::BlockedCell => Self::BlockedCell,
            SelectBlockReason::GameOver => Self::GameOver,
        }
    }
}
