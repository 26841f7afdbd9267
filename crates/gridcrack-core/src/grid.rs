//! Square grid of code cells.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{Cell, CellId, CellKind, Code, MAX_GRID_SIZE, Position, PositionSet};

/// A square grid of [`Cell`]s stored in row-major order.
///
/// Every cell has a unique position and a stable [`CellId`] equal to its
/// row-major index.
///
/// # Text format
///
/// The grid parses from and displays as whitespace-separated tokens, one row
/// per line:
///
/// - `1C`: a normal cell with code `1C`
/// - `##`: a blocked cell
/// - `**`: a wildcard cell
/// - `1C~3`: a decaying cell with code `1C` and three moves left
///
/// # Examples
///
/// ```
/// use gridcrack_core::{CellKind, Code, Grid, Position};
///
/// let grid: Grid = "
///     1C BD 55
///     E9 ## 7A
///     ** FF 1C~2
/// "
/// .parse()?;
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid[Position::new(0, 1)].code(), Code::XBD);
/// assert_eq!(grid[Position::new(1, 1)].kind(), CellKind::Blocked);
/// assert_eq!(
///     grid[Position::new(2, 2)].kind(),
///     CellKind::Decaying { moves_left: 2 }
/// );
/// # Ok::<(), gridcrack_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of normal cells whose codes are produced by `code_at`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or larger than [`MAX_GRID_SIZE`].
    #[must_use]
    pub fn from_fn<F>(size: usize, mut code_at: F) -> Self
    where
        F: FnMut(Position) -> Code,
    {
        assert!(
            (1..=MAX_GRID_SIZE).contains(&size),
            "grid size must be within 1..={MAX_GRID_SIZE}, got {size}"
        );
        let mut cells = Vec::with_capacity(size * size);
        for (index, pos) in Self::positions_of(size).enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let id = CellId(index as u16);
            cells.push(Cell::new(id, pos, code_at(pos), CellKind::Normal));
        }
        Self { size, cells }
    }

    /// Creates a grid where every cell has the same code.
    #[must_use]
    pub fn filled(size: usize, code: Code) -> Self {
        Self::from_fn(size, |_| code)
    }

    #[expect(clippy::cast_possible_truncation)]
    fn positions_of(size: usize) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |row| {
            (0..size).map(move |col| Position::new(row as u8, col as u8))
        })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        usize::from(pos.row()) < self.size && usize::from(pos.col()) < self.size
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        Self::positions_of(self.size)
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterates mutably over all cells in row-major order.
    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.index_of(pos).map(|i| &self.cells[i])
    }

    /// Returns the cell at `pos` mutably, or `None` if it is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.index_of(pos).map(|i| &mut self.cells[i])
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| usize::from(pos.row()) * self.size + usize::from(pos.col()))
    }

    /// Returns the cells of row `row`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the grid.
    pub fn row(&self, row: u8) -> impl Iterator<Item = &Cell> {
        let row = usize::from(row);
        assert!(row < self.size, "row {row} is outside a grid of size {}", self.size);
        self.cells[row * self.size..(row + 1) * self.size].iter()
    }

    /// Returns the cells of column `col`, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is outside the grid.
    pub fn column(&self, col: u8) -> impl Iterator<Item = &Cell> {
        let col = usize::from(col);
        assert!(col < self.size, "column {col} is outside a grid of size {}", self.size);
        self.cells.iter().skip(col).step_by(self.size)
    }

    /// Returns the positions of all selected cells.
    #[must_use]
    pub fn selected_positions(&self) -> PositionSet {
        self.cells
            .iter()
            .filter(|cell| cell.is_selected())
            .map(Cell::position)
            .collect()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        match self.get(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} is outside a grid of size {}", self.size),
        }
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let size = self.size;
        match self.get_mut(pos) {
            Some(cell) => cell,
            None => panic!("position {pos} is outside a grid of size {size}"),
        }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match cell.kind() {
                    CellKind::Normal => write!(f, "{}", cell.code())?,
                    CellKind::Blocked => f.write_str("##")?,
                    CellKind::Wildcard => f.write_str("**")?,
                    CellKind::Decaying { moves_left } => {
                        write!(f, "{}~{moves_left}", cell.code())?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Grid`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text contains no rows.
    #[display("grid text is empty")]
    Empty,
    /// The grid is larger than [`MAX_GRID_SIZE`].
    #[display("grid size {size} exceeds the maximum of {}", MAX_GRID_SIZE)]
    TooLarge {
        /// Number of rows found.
        size: usize,
    },
    /// A row has a different number of cells than there are rows.
    #[display("row {row} has {found} cells, expected {expected}")]
    NotSquare {
        /// Row index (0-based).
        row: usize,
        /// Number of cells found in the row.
        found: usize,
        /// Expected number of cells.
        expected: usize,
    },
    /// A token could not be parsed.
    #[display("invalid cell `{token}`")]
    InvalidCell {
        /// The offending token.
        token: String,
    },
}

fn parse_cell(token: &str) -> Result<(Code, CellKind), GridParseError> {
    let invalid = || GridParseError::InvalidCell {
        token: token.to_owned(),
    };
    match token {
        "##" => return Ok((Code::default(), CellKind::Blocked)),
        "**" => return Ok((Code::default(), CellKind::Wildcard)),
        _ => {}
    }
    if let Some((code, moves)) = token.split_once('~') {
        let code = code.parse().map_err(|_| invalid())?;
        let moves_left = moves.parse::<u8>().map_err(|_| invalid())?;
        if moves_left == 0 {
            return Err(invalid());
        }
        return Ok((code, CellKind::Decaying { moves_left }));
    }
    let code = token.parse().map_err(|_| invalid())?;
    Ok((code, CellKind::Normal))
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<&str>> = s
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();
        let size = rows.len();
        if size == 0 {
            return Err(GridParseError::Empty);
        }
        if size > MAX_GRID_SIZE {
            return Err(GridParseError::TooLarge { size });
        }

        let mut parsed = Vec::with_capacity(size * size);
        for (row, tokens) in rows.iter().enumerate() {
            if tokens.len() != size {
                return Err(GridParseError::NotSquare {
                    row,
                    found: tokens.len(),
                    expected: size,
                });
            }
            for token in tokens {
                parsed.push(parse_cell(token)?);
            }
        }

        let mut grid = Self::from_fn(size, |pos| {
            parsed[usize::from(pos.row()) * size + usize::from(pos.col())].0
        });
        for (cell, (_, kind)) in grid.cells.iter_mut().zip(parsed) {
            cell.set_kind(kind);
        }
        Ok(grid)
    }
}
