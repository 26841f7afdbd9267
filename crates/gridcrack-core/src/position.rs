//! Grid positions and position sets.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr, BitOrAssign, Not},
};

/// The largest grid side length a [`PositionSet`] can address.
pub const MAX_GRID_SIZE: usize = 8;

/// A cell position on the grid, identified by row and column.
///
/// `(0, 0)` is the top-left corner.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`MAX_GRID_SIZE`].
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < MAX_GRID_SIZE && (col as usize) < MAX_GRID_SIZE);
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    const fn bit(self) -> u64 {
        1 << (self.row as usize * MAX_GRID_SIZE + self.col as usize)
    }

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    const fn from_bit_index(index: u32) -> Self {
        let index = index as usize;
        Self {
            row: (index / MAX_GRID_SIZE) as u8,
            col: (index % MAX_GRID_SIZE) as u8,
        }
    }
}

/// A set of positions stored as a 64-bit mask.
///
/// Used for the monotonic set of consumed cells and for hint sets. The set is
/// `Copy`, so search code can branch on it without allocating.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Position, PositionSet};
///
/// let mut used = PositionSet::EMPTY;
/// used.insert(Position::new(0, 2));
/// used.insert(Position::new(3, 2));
///
/// assert!(used.contains(Position::new(3, 2)));
/// assert_eq!(used.len(), 2);
/// assert_eq!(
///     used.iter().collect::<Vec<_>>(),
///     [Position::new(0, 2), Position::new(3, 2)]
/// );
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u64);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single position.
    #[must_use]
    pub const fn from_elem(pos: Position) -> Self {
        Self(pos.bit())
    }

    /// Inserts a position, returning `true` if it was not present.
    pub fn insert(&mut self, pos: Position) -> bool {
        let added = self.0 & pos.bit() == 0;
        self.0 |= pos.bit();
        added
    }

    /// Removes a position, returning `true` if it was present.
    pub fn remove(&mut self, pos: Position) -> bool {
        let present = self.0 & pos.bit() != 0;
        self.0 &= !pos.bit();
        present
    }

    /// Returns a copy of this set with `pos` added.
    #[must_use]
    pub const fn with(self, pos: Position) -> Self {
        Self(self.0 | pos.bit())
    }

    /// Returns `true` if the set contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & pos.bit() != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the positions in row-major order.
    #[must_use]
    pub fn iter(self) -> PositionSetIter {
        PositionSetIter(self.0)
    }
}

impl fmt::Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl Not for PositionSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl Extend<Position> for PositionSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        for pos in iter {
            self.insert(pos);
        }
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`].
#[derive(Debug, Clone)]
pub struct PositionSetIter(u64);

impl Iterator for PositionSetIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Some(Position::from_bit_index(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for PositionSetIter {}
impl ExactSizeIterator for PositionSetIter {}
