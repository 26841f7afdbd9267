//! Test utilities for the matching and feasibility engines.
//!
//! This module provides [`ScenarioTester`], a harness that plays moves on a
//! grid the way a session would and checks engine answers along the way.
//!
//! # Example
//!
//! ```ignore
//! ScenarioTester::new(
//!     "
//!     1C BD
//!     55 FF
//! ",
//!     &["1C 55"],
//!     3,
//! )
//! .select(0, 0)
//! .select(1, 0)
//! .assert_complete(0);
//! ```

use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};

use crate::{
    apply_selected_cell, can_complete_sequence, positions_advancing_sequences,
    selectable_positions,
};

/// A test harness that replays selections against a grid.
///
/// After every selection the tester applies the matching law and, like a
/// session, flags every live sequence that can no longer be completed in the
/// remaining buffer space as impossible.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct ScenarioTester {
    grid: Grid,
    sequences: Vec<TargetSequence>,
    mode: SelectionMode,
    used: PositionSet,
    buffer: Vec<Code>,
    buffer_size: usize,
}

impl ScenarioTester {
    /// Creates a tester from a grid string, one sequence string per target,
    /// and the buffer capacity.
    ///
    /// # Panics
    ///
    /// Panics if the grid or any sequence fails to parse.
    #[track_caller]
    pub fn new(grid: &str, sequences: &[&str], buffer_size: usize) -> Self {
        let grid = grid.parse().unwrap();
        let sequences = sequences
            .iter()
            .map(|s| {
                TargetSequence::new(
                    s.split_whitespace()
                        .map(|code| code.parse::<Code>().unwrap()),
                )
            })
            .collect();
        Self {
            grid,
            sequences,
            mode: SelectionMode::START,
            used: PositionSet::EMPTY,
            buffer: Vec::new(),
            buffer_size,
        }
    }

    fn moves_remaining(&self) -> usize {
        self.buffer_size - self.buffer.len()
    }

    /// Selects the cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if the selection is illegal or the buffer is already full.
    #[track_caller]
    pub fn select(mut self, row: u8, col: u8) -> Self {
        let pos = Position::new(row, col);
        assert!(
            self.buffer.len() < self.buffer_size,
            "Expected room in the buffer to select {pos}, but it is full"
        );
        let legal = selectable_positions(self.mode, self.used, &self.grid);
        assert!(
            legal.contains(pos),
            "Expected {pos} to be selectable in {}, but legal positions are {legal:?}",
            self.mode
        );

        let cell = &self.grid[pos];
        self.buffer.push(cell.code());
        apply_selected_cell(&mut self.sequences, cell);
        self.used.insert(pos);
        self.mode = self.mode.after_selecting(pos);

        let moves_remaining = self.moves_remaining();
        for sequence in &mut self.sequences {
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
            }
        }
        self
    }

    /// Asserts how many codes of sequence `index` have been matched.
    ///
    /// # Panics
    ///
    /// Panics if the matched count differs.
    #[track_caller]
    pub fn assert_matched(self, index: usize, expected: usize) -> Self {
        let actual = self.sequences[index].matched_count();
        assert_eq!(
            actual, expected,
            "Expected sequence {index} to have {expected} matched codes, but it has {actual} (buffer: {:?})",
            self.buffer
        );
        self
    }

    /// Asserts that sequence `index` is complete.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is not complete.
    #[track_caller]
    pub fn assert_complete(self, index: usize) -> Self {
        let sequence = &self.sequences[index];
        assert!(
            sequence.is_complete(),
            "Expected sequence {index} ({sequence}) to be complete, but it is {:?}",
            sequence.status()
        );
        self
    }

    /// Asserts whether sequence `index` can still be completed.
    ///
    /// # Panics
    ///
    /// Panics if the feasibility answer differs.
    #[track_caller]
    pub fn assert_feasible(self, index: usize, expected: bool) -> Self {
        let sequence = &self.sequences[index];
        let actual = can_complete_sequence(
            sequence,
            self.mode,
            self.used,
            self.moves_remaining(),
            &self.grid,
        );
        assert_eq!(
            actual,
            expected,
            "Expected feasibility of sequence {index} ({sequence}) to be {expected} in {} with {} moves left",
            self.mode,
            self.moves_remaining()
        );
        self
    }

    /// Asserts the exact set of advancing positions.
    ///
    /// # Panics
    ///
    /// Panics if the hint set differs.
    #[track_caller]
    pub fn assert_hints(self, expected: &[(u8, u8)]) -> Self {
        let expected: PositionSet = expected
            .iter()
            .map(|&(row, col)| Position::new(row, col))
            .collect();
        let actual =
            positions_advancing_sequences(&self.sequences, self.mode, self.used, &self.grid);
        assert_eq!(
            actual, expected,
            "Expected hints {expected:?} in {}, but got {actual:?}",
            self.mode
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_chaining() {
        ScenarioTester::new(
            "
            1C BD
            55 FF
            ",
            &["1C 55"],
            3,
        )
        .assert_hints(&[(0, 0)])
        .select(0, 0)
        .assert_matched(0, 1)
        .select(1, 0)
        .assert_complete(0)
        .assert_hints(&[]);
    }

    #[test]
    fn test_infeasible_sequences_are_flagged() {
        let tester = ScenarioTester::new(
            "
            BD 1C
            FF 55
            ",
            &["1C 55", "BD 55"],
            2,
        )
        .select(0, 1);
        assert!(tester.sequences[1].is_impossible());
        tester.select(1, 1).assert_complete(0);
    }

    #[test]
    #[should_panic(expected = "to be selectable")]
    fn test_select_outside_line_panics() {
        ScenarioTester::new("1C BD\n55 FF", &["1C"], 2).select(1, 1);
    }

    #[test]
    #[should_panic(expected = "Expected sequence 0 to have 2 matched codes")]
    fn test_assert_matched_fails_on_mismatch() {
        ScenarioTester::new("1C BD\n55 FF", &["1C 55"], 2)
            .select(0, 1)
            .assert_matched(0, 2);
    }
}
