//! Reachability checks under the alternating-line constraint.

use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};

/// Returns the positions that may legally be selected next.
///
/// A position qualifies when it lies on the active line, is not in `used`,
/// is not already marked selected, and is not blocked.
///
/// # Panics
///
/// Panics if the anchor of `mode` lies outside `grid`.
#[must_use]
pub fn selectable_positions(mode: SelectionMode, used: PositionSet, grid: &Grid) -> PositionSet {
    mode.line(grid)
        .filter(|&pos| is_available(grid, used, pos))
        .collect()
}

pub(crate) fn is_available(grid: &Grid, used: PositionSet, pos: Position) -> bool {
    let cell = &grid[pos];
    !used.contains(pos) && !cell.is_selected() && cell.kind().is_selectable()
}

/// Decides whether `sequence` can still be completed within `moves_remaining`
/// selections.
///
/// The search walks the alternating lines starting from `mode`. A candidate
/// whose code is the next needed code, or a wildcard, advances the sequence.
/// Any other candidate is a detour: it spends one move without progress but
/// moves the constraint to a new line. Detours are only explored while the
/// budget still covers every remaining code afterwards.
///
/// Complete sequences report `true` and impossible ones `false`. The search
/// is exhaustive over the bounded tree, so a `false` here is final for the
/// given budget.
///
/// # Panics
///
/// Panics if the anchor of `mode` lies outside `grid`.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Code, Grid, PositionSet, SelectionMode, TargetSequence};
/// use gridcrack_solver::can_complete_sequence;
///
/// let grid: Grid = "
///     1C FF FF
///     FF FF FF
///     55 FF FF
/// "
/// .parse()?;
/// let sequence = TargetSequence::new([Code::X1C, Code::X55]);
/// let start = SelectionMode::START;
///
/// assert!(can_complete_sequence(&sequence, start, PositionSet::EMPTY, 2, &grid));
/// assert!(!can_complete_sequence(&sequence, start, PositionSet::EMPTY, 1, &grid));
/// # Ok::<(), gridcrack_core::GridParseError>(())
/// ```
#[must_use]
pub fn can_complete_sequence(
    sequence: &TargetSequence,
    mode: SelectionMode,
    used: PositionSet,
    moves_remaining: usize,
    grid: &Grid,
) -> bool {
    if sequence.is_complete() {
        return true;
    }
    if sequence.is_impossible() {
        return false;
    }
    let needed = &sequence.codes()[sequence.matched_count()..];
    completes(needed, mode, used, moves_remaining, grid)
}

fn completes(
    needed: &[Code],
    mode: SelectionMode,
    used: PositionSet,
    moves_remaining: usize,
    grid: &Grid,
) -> bool {
    let Some((&next, rest)) = needed.split_first() else {
        return true;
    };
    if moves_remaining < needed.len() {
        return false;
    }
    let can_detour = moves_remaining > needed.len();
    for pos in mode.line(grid) {
        if !is_available(grid, used, pos) {
            continue;
        }
        let next_mode = mode.after_selecting(pos);
        let next_used = used.with(pos);
        let reached = if grid[pos].matches(next) {
            completes(rest, next_mode, next_used, moves_remaining - 1, grid)
        } else {
            can_detour && completes(needed, next_mode, next_used, moves_remaining - 1, grid)
        };
        if reached {
            return true;
        }
    }
    false
}

/// Returns the positions in the active line whose selection would advance at
/// least one live sequence.
///
/// Wildcards qualify whenever any sequence is live. The result is empty once
/// every sequence is terminal.
///
/// # Panics
///
/// Panics if the anchor of `mode` lies outside `grid`.
#[must_use]
pub fn positions_advancing_sequences(
    sequences: &[TargetSequence],
    mode: SelectionMode,
    used: PositionSet,
    grid: &Grid,
) -> PositionSet {
    let needed: Vec<Code> = sequences
        .iter()
        .filter(|seq| seq.is_live())
        .filter_map(TargetSequence::next_needed_code)
        .collect();
    if needed.is_empty() {
        return PositionSet::EMPTY;
    }
    selectable_positions(mode, used, grid)
        .iter()
        .filter(|&pos| {
            let cell = &grid[pos];
            cell.is_wildcard() || needed.contains(&cell.code())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScenarioTester;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_insufficient_budget_is_infeasible() {
        let grid = grid(
            "
            1C 55 BD
            55 BD 1C
            BD 1C 55
            ",
        );
        let sequence = TargetSequence::new([Code::X1C, Code::X55]);
        assert!(!can_complete_sequence(
            &sequence,
            SelectionMode::START,
            PositionSet::EMPTY,
            1,
            &grid
        ));
        assert!(can_complete_sequence(
            &sequence,
            SelectionMode::START,
            PositionSet::EMPTY,
            2,
            &grid
        ));
    }

    #[test]
    fn test_terminal_sequences_short_circuit() {
        let grid = Grid::filled(3, Code::XFF);
        let mut complete = TargetSequence::new([Code::X1C]);
        complete.advance();
        assert!(can_complete_sequence(
            &complete,
            SelectionMode::START,
            PositionSet::EMPTY,
            0,
            &grid
        ));

        let mut impossible = TargetSequence::new([Code::XFF]);
        impossible.mark_impossible();
        assert!(!can_complete_sequence(
            &impossible,
            SelectionMode::START,
            PositionSet::EMPTY,
            5,
            &grid
        ));
    }

    #[test]
    fn test_missing_code_is_infeasible() {
        let grid = Grid::filled(4, Code::XFF);
        let sequence = TargetSequence::new([Code::X1C]);
        assert!(!can_complete_sequence(
            &sequence,
            SelectionMode::START,
            PositionSet::EMPTY,
            8,
            &grid
        ));
    }

    #[test]
    fn test_detour_reaches_code_off_the_line() {
        // 55 sits off column 0; reaching it takes a detour into row 2.
        let grid = grid(
            "
            1C FF FF
            FF FF FF
            FF FF 55
            ",
        );
        let mut sequence = TargetSequence::new([Code::X1C, Code::X55]);
        sequence.advance();
        let mode = SelectionMode::Vertical { col: 0 };
        let used = PositionSet::from_elem(Position::new(0, 0));

        assert!(!can_complete_sequence(&sequence, mode, used, 1, &grid));
        assert!(can_complete_sequence(&sequence, mode, used, 2, &grid));
    }

    #[test]
    fn test_blocked_and_used_cells_are_skipped() {
        let grid = grid(
            "
            ## 1C
            55 ##
            ",
        );
        let sequence = TargetSequence::new([Code::X1C, Code::X55]);
        // Row 0 offers only (0, 1); column 1 then offers nothing selectable.
        assert!(!can_complete_sequence(
            &sequence,
            SelectionMode::START,
            PositionSet::EMPTY,
            4,
            &grid
        ));

        let open = "1C FF\n55 FF".parse::<Grid>().unwrap();
        let used = PositionSet::from_elem(Position::new(1, 0));
        assert!(!can_complete_sequence(
            &sequence,
            SelectionMode::START,
            used,
            4,
            &open
        ));
    }

    #[test]
    fn test_wildcard_substitutes_for_needed_code() {
        let grid = grid(
            "
            FF ** FF
            FF FF FF
            FF 7A FF
            ",
        );
        let sequence = TargetSequence::new([Code::X1C, Code::X7A]);
        assert!(can_complete_sequence(
            &sequence,
            SelectionMode::START,
            PositionSet::EMPTY,
            2,
            &grid
        ));
    }

    #[test]
    fn test_advancing_positions() {
        let grid = grid(
            "
            1C 55 ** BD
            FF FF FF FF
            FF FF FF FF
            FF FF FF FF
            ",
        );
        let sequences = [
            TargetSequence::new([Code::X1C, Code::XFF]),
            TargetSequence::new([Code::XBD]),
        ];
        let hints = positions_advancing_sequences(
            &sequences,
            SelectionMode::START,
            PositionSet::EMPTY,
            &grid,
        );
        let expected: PositionSet = [Position::new(0, 0), Position::new(0, 2), Position::new(0, 3)]
            .into_iter()
            .collect();
        assert_eq!(hints, expected);

        let used = PositionSet::from_elem(Position::new(0, 0));
        let hints = positions_advancing_sequences(&sequences, SelectionMode::START, used, &grid);
        assert!(!hints.contains(Position::new(0, 0)));
    }

    #[test]
    fn test_no_hints_once_all_terminal() {
        let grid = grid("** **\n** **");
        let mut done = TargetSequence::new([Code::X1C]);
        done.advance();
        let mut dead = TargetSequence::new([Code::X55]);
        dead.mark_impossible();
        let hints = positions_advancing_sequences(
            &[done, dead],
            SelectionMode::START,
            PositionSet::EMPTY,
            &grid,
        );
        assert!(hints.is_empty());
    }

    #[test]
    fn test_scenario_tracks_feasibility_through_moves() {
        ScenarioTester::new(
            "
            1C BD FF
            FF 55 FF
            E9 7A FF
            ",
            &["1C 55", "BD 55 7A"],
            5,
        )
        .assert_feasible(0, true)
        .assert_feasible(1, true)
        .select(0, 1)
        .assert_matched(1, 1)
        .assert_feasible(0, false)
        .select(1, 1)
        .assert_matched(1, 2)
        .assert_hints(&[])
        .select(1, 0)
        .select(2, 0)
        .assert_feasible(1, true)
        .assert_hints(&[(2, 1)])
        .select(2, 1)
        .assert_complete(1);
    }
}
