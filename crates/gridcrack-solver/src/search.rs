//! Shortest-solution search over every live sequence at once.

use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};

use crate::feasibility::is_available;

/// Finds a shortest selection path that completes every live sequence.
///
/// The search is an iterative-deepening depth-first search: it tries every
/// path of length `k` for increasing `k`, starting at the longest remaining
/// sequence and stopping after `max_moves`. The first path found is therefore
/// minimal. Selections follow the matching law, so one cell may advance
/// several sequences and wildcards advance all of them.
///
/// Impossible sequences are ignored. Returns `Some(vec![])` when nothing is
/// live, and `None` when no path of at most `max_moves` exists.
///
/// # Panics
///
/// Panics if the anchor of `mode` lies outside `grid`.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Code, Grid, Position, PositionSet, SelectionMode, TargetSequence};
/// use gridcrack_solver::find_shortest_solution;
///
/// let grid: Grid = "
///     FF 1C FF
///     FF 55 BD
///     FF FF FF
/// "
/// .parse()?;
/// let sequences = [
///     TargetSequence::new([Code::X1C, Code::X55]),
///     TargetSequence::new([Code::X55, Code::XBD]),
/// ];
///
/// let path =
///     find_shortest_solution(&sequences, SelectionMode::START, PositionSet::EMPTY, 5, &grid);
/// assert_eq!(
///     path,
///     Some(vec![Position::new(0, 1), Position::new(1, 1), Position::new(1, 2)])
/// );
/// # Ok::<(), gridcrack_core::GridParseError>(())
/// ```
#[must_use]
pub fn find_shortest_solution(
    sequences: &[TargetSequence],
    mode: SelectionMode,
    used: PositionSet,
    max_moves: usize,
    grid: &Grid,
) -> Option<Vec<Position>> {
    let mut search = Search::new(sequences, grid);
    let lower_bound = search.lower_bound();
    if lower_bound == 0 {
        return Some(Vec::new());
    }
    for limit in lower_bound..=max_moves {
        let mut path = Vec::with_capacity(limit);
        if search.descend(mode, used, limit, &mut path) {
            return Some(path);
        }
    }
    None
}

/// Returns the first move of a shortest solution, if any exists within
/// `max_moves`.
///
/// # Panics
///
/// Panics if the anchor of `mode` lies outside `grid`.
#[must_use]
pub fn suggest_next_move(
    sequences: &[TargetSequence],
    mode: SelectionMode,
    used: PositionSet,
    max_moves: usize,
    grid: &Grid,
) -> Option<Position> {
    find_shortest_solution(sequences, mode, used, max_moves, grid)?
        .first()
        .copied()
}

#[derive(Debug)]
struct Search<'a> {
    grid: &'a Grid,
    // Remaining codes per live sequence; progress is the index into each.
    targets: Vec<&'a [Code]>,
    progress: Vec<usize>,
    undo: Vec<usize>,
}

impl<'a> Search<'a> {
    fn new(sequences: &'a [TargetSequence], grid: &'a Grid) -> Self {
        let targets: Vec<_> = sequences
            .iter()
            .filter(|seq| seq.is_live())
            .map(|seq| &seq.codes()[seq.matched_count()..])
            .collect();
        let progress = vec![0; targets.len()];
        Self {
            grid,
            targets,
            progress,
            undo: Vec::new(),
        }
    }

    fn lower_bound(&self) -> usize {
        self.targets
            .iter()
            .zip(&self.progress)
            .map(|(codes, &done)| codes.len() - done)
            .max()
            .unwrap_or(0)
    }

    fn descend(
        &mut self,
        mode: SelectionMode,
        used: PositionSet,
        moves_left: usize,
        path: &mut Vec<Position>,
    ) -> bool {
        let remaining = self.lower_bound();
        if remaining == 0 {
            return true;
        }
        if moves_left < remaining {
            return false;
        }
        for pos in mode.line(self.grid) {
            if !is_available(self.grid, used, pos) {
                continue;
            }
            let mark = self.undo.len();
            self.select(pos);
            path.push(pos);
            if self.descend(mode.after_selecting(pos), used.with(pos), moves_left - 1, path) {
                return true;
            }
            path.pop();
            self.rollback(mark);
        }
        false
    }

    fn select(&mut self, pos: Position) {
        let grid = self.grid;
        let cell = &grid[pos];
        for (index, (codes, done)) in self.targets.iter().zip(&mut self.progress).enumerate() {
            if let Some(&needed) = codes.get(*done)
                && cell.matches(needed)
            {
                *done += 1;
                self.undo.push(index);
            }
        }
    }

    fn rollback(&mut self, mark: usize) {
        for index in self.undo.drain(mark..) {
            self.progress[index] -= 1;
        }
    }
}
