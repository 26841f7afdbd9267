use gridcrack_core::{Code, Position};

/// A state change produced by a session call.
///
/// Events are returned in the order they happened so a presentation layer
/// can attach sounds or animations to them. They carry no timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameEvent {
    /// A cell was selected and its code appended to the buffer.
    CellSelected {
        /// The selected cell.
        position: Position,
        /// The code appended to the buffer.
        code: Code,
        /// Whether the cell was a wildcard.
        wildcard: bool,
    },
    /// A sequence matched its next code.
    SequenceProgressed {
        /// Index of the sequence.
        index: usize,
        /// Codes matched so far.
        matched: usize,
    },
    /// A sequence matched its last code.
    SequenceCompleted {
        /// Index of the sequence.
        index: usize,
    },
    /// A sequence can no longer be completed.
    SequenceFailed {
        /// Index of the sequence.
        index: usize,
    },
    /// A decaying cell ran out of moves and took a new code.
    CellDecayed {
        /// The decayed cell.
        position: Position,
        /// Its new code.
        code: Code,
    },
    /// Every sequence on the current rush grid was completed.
    GridCleared {
        /// The stage that was cleared.
        stage: u32,
        /// Moves spent on the grid.
        moves: usize,
        /// The grid's par.
        par: usize,
    },
    /// Seconds were added to the rush clock.
    BonusAwarded {
        /// Seconds added.
        seconds: u32,
    },
    /// A new rush grid was loaded.
    NewGrid {
        /// Stage of the new grid.
        stage: u32,
    },
    /// The rush clock is running low.
    TimerWarning {
        /// Seconds left.
        remaining: u32,
    },
    /// The rush clock reached zero.
    TimeExpired,
    /// The session ended; its result is available from the session.
    GameEnded,
}
