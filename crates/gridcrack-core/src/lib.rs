//! Core data structures for the Gridcrack puzzle.
//!
//! A puzzle is a square grid of two-character codes. The player picks cells
//! under an alternating row/column constraint to assemble one or more ordered
//! target sequences within a fixed-size buffer. This crate holds the value
//! types shared by the generator, the matching and feasibility engines, and
//! session layers.
//!
//! # Overview
//!
//! - [`Code`]: the fixed six-code alphabet
//! - [`Position`] and [`PositionSet`]: cell coordinates and compact sets of them
//! - [`Cell`], [`CellKind`]: cells with normal, blocked, decaying, or wildcard behavior
//! - [`Grid`]: the square grid, with a text format for tests and tooling
//! - [`SelectionMode`]: the row/column line the next selection must come from
//! - [`TargetSequence`]: a required code sequence and its progress
//!
//! # Examples
//!
//! ```
//! use gridcrack_core::{Code, Grid, Position, SelectionMode, TargetSequence};
//!
//! let grid: Grid = "
//!     1C BD 55
//!     E9 7A FF
//!     55 1C BD
//! "
//! .parse()?;
//!
//! let sequence = TargetSequence::new([Code::XBD, Code::X1C]);
//! let first = Position::new(0, 1);
//!
//! assert!(SelectionMode::START.contains(first));
//! assert_eq!(Some(grid[first].code()), sequence.next_needed_code());
//! # Ok::<(), gridcrack_core::GridParseError>(())
//! ```

pub use self::{
    cell::{Cell, CellId, CellKind, DecayTick},
    code::{Code, CodeParseError},
    grid::{Grid, GridParseError},
    position::{MAX_GRID_SIZE, Position, PositionSet, PositionSetIter},
    selection::{SelectionMode, is_alternating_path},
    sequence::{SequenceCodes, SequenceStatus, TargetSequence},
};

mod cell;
mod code;
mod grid;
mod position;
mod selection;
mod sequence;
