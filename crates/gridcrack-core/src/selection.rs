//! The alternating row/column selection constraint.

use crate::{Grid, Position};

/// The line the next selection must come from.
///
/// The first move of every puzzle is confined to row 0. Each selection then
/// flips the orientation and re-anchors on the selected cell: after picking a
/// cell in a row, the next pick must come from that cell's column, and vice
/// versa.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Position, SelectionMode};
///
/// let mode = SelectionMode::START;
/// assert!(mode.contains(Position::new(0, 3)));
///
/// let mode = mode.after_selecting(Position::new(0, 3));
/// assert_eq!(mode, SelectionMode::Vertical { col: 3 });
///
/// let mode = mode.after_selecting(Position::new(4, 3));
/// assert_eq!(mode, SelectionMode::Horizontal { row: 4 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum SelectionMode {
    /// Selections are confined to a row.
    #[display("row {row}")]
    Horizontal {
        /// Row index (0-based).
        row: u8,
    },
    /// Selections are confined to a column.
    #[display("column {col}")]
    Vertical {
        /// Column index (0-based).
        col: u8,
    },
}

impl Default for SelectionMode {
    fn default() -> Self {
        Self::START
    }
}

impl SelectionMode {
    /// The constraint in effect before the first move.
    pub const START: Self = Self::Horizontal { row: 0 };

    /// Returns `true` if `pos` lies on the active line.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Horizontal { row } => pos.row() == row,
            Self::Vertical { col } => pos.col() == col,
        }
    }

    /// Returns the constraint that applies after selecting `pos`.
    ///
    /// This does not check that `pos` was on the active line; see
    /// [`SelectionMode::contains`].
    #[must_use]
    #[inline]
    pub const fn after_selecting(self, pos: Position) -> Self {
        match self {
            Self::Horizontal { .. } => Self::Vertical { col: pos.col() },
            Self::Vertical { .. } => Self::Horizontal { row: pos.row() },
        }
    }

    /// Returns the positions of the active line on a grid of the given size,
    /// in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if the anchor lies outside a grid of side `size`.
    pub fn line_positions(self, size: usize) -> impl Iterator<Item = Position> {
        let anchor = match self {
            Self::Horizontal { row } => row,
            Self::Vertical { col } => col,
        };
        assert!(
            usize::from(anchor) < size,
            "{self} is outside a grid of size {size}"
        );
        #[expect(clippy::cast_possible_truncation)]
        let size = size as u8;
        (0..size).map(move |i| match self {
            Self::Horizontal { row } => Position::new(row, i),
            Self::Vertical { col } => Position::new(i, col),
        })
    }

    /// Returns the positions of the active line on `grid`.
    pub fn line(self, grid: &Grid) -> impl Iterator<Item = Position> + use<> {
        self.line_positions(grid.size())
    }
}

/// Returns `true` if `path` obeys the alternating-line law from the start of a puzzle.
///
/// Move 0 must lie in row 0; every later move must share the row or column of
/// the previous one, alternating between the two, and no position may repeat.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Position, is_alternating_path};
///
/// let path = [Position::new(0, 2), Position::new(3, 2), Position::new(3, 0)];
/// assert!(is_alternating_path(&path));
///
/// let bad = [Position::new(0, 2), Position::new(0, 4)];
/// assert!(!is_alternating_path(&bad));
/// ```
#[must_use]
pub fn is_alternating_path(path: &[Position]) -> bool {
    let mut mode = SelectionMode::START;
    let mut seen = crate::PositionSet::EMPTY;
    for &pos in path {
        if !mode.contains(pos) || !seen.insert(pos) {
            return false;
        }
        mode = mode.after_selecting(pos);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_alternates() {
        let path = [
            Position::new(0, 1),
            Position::new(4, 1),
            Position::new(4, 3),
            Position::new(2, 3),
        ];
        let mut mode = SelectionMode::START;
        let mut horizontal = Vec::new();
        for pos in path {
            assert!(mode.contains(pos));
            horizontal.push(mode.is_horizontal());
            mode = mode.after_selecting(pos);
        }
        assert_eq!(horizontal, [true, false, true, false]);
        assert_eq!(mode, SelectionMode::Horizontal { row: 2 });
    }

    #[test]
    fn test_line_positions() {
        let row: Vec<_> = SelectionMode::Horizontal { row: 2 }.line_positions(3).collect();
        assert_eq!(
            row,
            [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)]
        );
        let col: Vec<_> = SelectionMode::Vertical { col: 0 }.line_positions(2).collect();
        assert_eq!(col, [Position::new(0, 0), Position::new(1, 0)]);
    }

    #[test]
    fn test_alternating_path_rejects_repeats_and_wrong_start() {
        assert!(is_alternating_path(&[]));
        assert!(!is_alternating_path(&[Position::new(1, 0)]));
        assert!(!is_alternating_path(&[
            Position::new(0, 0),
            Position::new(2, 0),
            Position::new(2, 0),
        ]));
    }

    #[test]
    #[should_panic(expected = "outside a grid")]
    fn test_line_outside_grid_panics() {
        let _ = SelectionMode::Vertical { col: 5 }.line_positions(5);
    }
}
