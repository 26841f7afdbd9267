use gridcrack_core::{CellKind, Grid, Position, PositionSet, SelectionMode, TargetSequence};
use gridcrack_solver::{can_complete_sequence, find_shortest_solution};
use log::{debug, warn};
use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};

use crate::{
    Difficulty, Puzzle, PuzzleParams, PuzzleSeed, PuzzleTier,
    layout::{self, Layout},
};

/// Retry budgets for [`PuzzleGenerator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Random layouts tried before the deterministic fallback.
    pub max_attempts: usize,
    /// Filler re-roll rounds per attempt when a shortcut appears.
    pub max_rerolls: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_attempts: 64,
            max_rerolls: 8,
        }
    }
}

/// Why a random attempt was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
enum Rejection {
    #[display("no share plan fits the buffer")]
    NoLayout,
    #[display("two sequences are identical")]
    DuplicateSequences,
    #[display("the path completes every sequence early")]
    EarlyCompletion,
    #[display("the path walked into a full line")]
    DeadEnd,
    #[display("a shorter solution survived {_0} re-rolls")]
    Shortcut(usize),
    #[display("a sequence cannot be completed from the start")]
    Unsolvable,
}

#[derive(Debug)]
struct Candidate {
    layout: Layout,
    grid: Grid,
    path: Vec<Position>,
}

/// Generates puzzles that are solvable in exactly `par` moves.
///
/// Each attempt chains the target sequences along a random alternating path,
/// fills the rest of the grid with random codes, and re-rolls any filler cell
/// that takes part in a shorter solution. Generation never fails: once the
/// attempt budget runs out, a deterministic fallback layout is used whose
/// `par` comes straight from the shortest-solution search.
///
/// # Examples
///
/// ```
/// use gridcrack_core::is_alternating_path;
/// use gridcrack_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(Difficulty::Medium);
///
/// assert_eq!(puzzle.grid.size(), 5);
/// assert_eq!(puzzle.sequences.len(), 2);
/// assert!(puzzle.par <= puzzle.buffer_size);
/// assert_eq!(puzzle.solution_path.len(), puzzle.par);
/// assert!(is_alternating_path(&puzzle.solution_path));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    settings: GeneratorSettings,
}

impl PuzzleGenerator {
    /// Creates a generator with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom retry budgets.
    #[must_use]
    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Returns the retry budgets.
    #[must_use]
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Generates a standard puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> Puzzle {
        self.generate_with_seed(PuzzleTier::Difficulty(difficulty), PuzzleSeed::random())
    }

    /// Generates a rush puzzle for `stage` from a fresh random seed.
    ///
    /// # Panics
    ///
    /// Panics if `stage` is 0.
    #[must_use]
    pub fn generate_stage(&self, stage: u32) -> Puzzle {
        self.generate_with_seed(PuzzleTier::Stage(stage), PuzzleSeed::random())
    }

    /// Generates the puzzle that `seed` determines for `tier`.
    ///
    /// The same seed and tier always produce the same puzzle.
    ///
    /// # Panics
    ///
    /// Panics if `tier` is `Stage(0)`.
    #[must_use]
    pub fn generate_with_seed(&self, tier: PuzzleTier, seed: PuzzleSeed) -> Puzzle {
        let params = tier.params();
        let label = tier.to_string();
        for attempt in 0..self.settings.max_attempts {
            let mut rng = seed.stream(&label, attempt as u64);
            match self.attempt(&params, &mut rng) {
                Ok(candidate) => {
                    debug!("{tier}: accepted attempt {attempt}");
                    return finish(tier, seed, &params, candidate);
                }
                Err(rejection) => debug!("{tier}: attempt {attempt} rejected: {rejection}"),
            }
        }
        warn!(
            "{tier}: no layout accepted after {} attempts, using fallback",
            self.settings.max_attempts
        );
        let mut rng = seed.stream(&label, u64::MAX);
        finish(tier, seed, &params, fallback(&params, &mut rng))
    }

    fn attempt<R: Rng>(&self, params: &PuzzleParams, rng: &mut R) -> Result<Candidate, Rejection> {
        let layout = layout::random_layout(params, rng).ok_or(Rejection::NoLayout)?;
        if layout.has_duplicate_sequences() {
            return Err(Rejection::DuplicateSequences);
        }
        if layout.completes_early() {
            return Err(Rejection::EarlyCompletion);
        }
        let path = layout::random_path(params.grid_size(), layout.path_codes.len(), rng)
            .ok_or(Rejection::DeadEnd)?;
        let mut grid = fill_grid(params.grid_size(), &layout, &path, rng);

        let targets = layout.targets();
        let on_path: PositionSet = path.iter().copied().collect();
        let mut rerolls = 0;
        while let Some(shortcut) = find_shortcut(&targets, &grid, path.len()) {
            let filler: Vec<Position> = shortcut
                .into_iter()
                .filter(|&pos| !on_path.contains(pos))
                .collect();
            if filler.is_empty() || rerolls == self.settings.max_rerolls {
                return Err(Rejection::Shortcut(rerolls));
            }
            for pos in filler {
                grid[pos].set_code(layout::random_code(rng));
            }
            rerolls += 1;
        }

        place_specials(params, &targets, &path, &mut grid, rng);
        if !is_solvable(&targets, params.buffer_size(), &grid) {
            return Err(Rejection::Unsolvable);
        }
        Ok(Candidate { layout, grid, path })
    }
}

/// Checks every sequence with the feasibility engine from the start state.
fn is_solvable(targets: &[TargetSequence], buffer_size: usize, grid: &Grid) -> bool {
    targets.iter().all(|target| {
        can_complete_sequence(target, SelectionMode::START, PositionSet::EMPTY, buffer_size, grid)
    })
}

/// Searches for a solution strictly shorter than `par`.
fn find_shortcut(targets: &[TargetSequence], grid: &Grid, par: usize) -> Option<Vec<Position>> {
    let limit = par.checked_sub(1)?;
    find_shortest_solution(targets, SelectionMode::START, PositionSet::EMPTY, limit, grid)
}

fn fill_grid<R: Rng>(size: usize, layout: &Layout, path: &[Position], rng: &mut R) -> Grid {
    Grid::from_fn(size, |pos| match path.iter().position(|&p| p == pos) {
        Some(step) => layout.path_codes[step],
        None => layout::random_code(rng),
    })
}

/// Turns filler cells into special cells.
///
/// Path cells stay normal so the intended solution keeps working. Blocked and
/// decaying cells cannot shorten a solution at generation time; a wildcard
/// that does is demoted back to a normal cell.
fn place_specials<R: Rng>(
    params: &PuzzleParams,
    targets: &[TargetSequence],
    path: &[Position],
    grid: &mut Grid,
    rng: &mut R,
) {
    let specials = params.specials();
    if specials.total() == 0 {
        return;
    }
    let on_path: PositionSet = path.iter().copied().collect();
    let mut filler: Vec<Position> = grid
        .positions()
        .filter(|&pos| !on_path.contains(pos))
        .collect();
    filler.shuffle(rng);
    let mut filler = filler.into_iter();

    for pos in filler.by_ref().take(specials.blocked) {
        grid[pos].set_kind(CellKind::Blocked);
    }
    let decaying = CellKind::Decaying {
        moves_left: params.decay_moves(),
    };
    for pos in filler.by_ref().take(specials.decaying) {
        grid[pos].set_kind(decaying);
    }
    for pos in filler.take(specials.wildcard) {
        grid[pos].set_kind(CellKind::Wildcard);
        if find_shortcut(targets, grid, path.len()).is_some() {
            debug!("wildcard at {pos} opens a shortcut, demoting it");
            grid[pos].set_kind(CellKind::Normal);
        }
    }
}

/// Builds the deterministic fallback: a staircase path with the least sharing
/// that fits the buffer and no shortcut filtering.
///
/// The shortest solution of the plain grid replaces the staircase before
/// specials are placed, so no special cell lands on the published path.
fn fallback<R: Rng>(params: &PuzzleParams, rng: &mut R) -> Candidate {
    let shares = layout::minimal_shares(params);
    let layout = layout::build_layout(params, &shares, rng);
    let staircase = layout::staircase_path(params.grid_size(), layout.path_codes.len());
    let mut grid = fill_grid(params.grid_size(), &layout, &staircase, rng);
    let targets = layout.targets();
    let limit = staircase.len();
    let path =
        find_shortest_solution(&targets, SelectionMode::START, PositionSet::EMPTY, limit, &grid)
            .unwrap_or(staircase);
    place_specials(params, &targets, &path, &mut grid, rng);
    debug_assert!(is_solvable(&targets, params.buffer_size(), &grid));
    Candidate { layout, grid, path }
}

fn finish(
    tier: PuzzleTier,
    seed: PuzzleSeed,
    params: &PuzzleParams,
    candidate: Candidate,
) -> Puzzle {
    let Candidate { layout, grid, path } = candidate;
    let sequences = layout.targets();
    // The intended path is itself a solution; keep it unless the search finds
    // a strictly shorter one.
    let solution_path = match find_shortcut(&sequences, &grid, path.len()) {
        Some(shorter) => shorter,
        None => path,
    };
    Puzzle {
        seed,
        tier,
        grid,
        sequences,
        buffer_size: params.buffer_size(),
        par: solution_path.len(),
        solution_path,
    }
}
