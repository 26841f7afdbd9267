//! Chained sequence layouts and solution paths.
//!
//! A layout lays the target sequences one after another along the solution
//! path. Consecutive sequences may share boundary codes: with a share of 2,
//! `1C 55 BD` followed by `55 BD E9` costs four moves instead of six.

use gridcrack_core::{Code, Position, PositionSet, SelectionMode, TargetSequence};
use gridcrack_solver::update_sequence_progress;
use rand::{Rng, seq::IndexedRandom as _};

use crate::PuzzleParams;

/// Most codes two neighboring sequences may share.
const MAX_SHARE: usize = 2;

/// Target codes plus the code every path step must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) sequences: Vec<Vec<Code>>,
    pub(crate) path_codes: Vec<Code>,
}

impl Layout {
    pub(crate) fn targets(&self) -> Vec<TargetSequence> {
        self.sequences
            .iter()
            .map(|codes| TargetSequence::new(codes.iter().copied()))
            .collect()
    }

    /// Returns `true` if walking the path completes every sequence before its
    /// last step, which would make the path longer than par.
    pub(crate) fn completes_early(&self) -> bool {
        let mut targets = self.targets();
        let Some((_, prefix)) = self.path_codes.split_last() else {
            return false;
        };
        for &code in prefix {
            update_sequence_progress(&mut targets, code, false);
        }
        targets.iter().all(TargetSequence::is_complete)
    }

    pub(crate) fn has_duplicate_sequences(&self) -> bool {
        self.sequences
            .iter()
            .enumerate()
            .any(|(i, codes)| self.sequences[..i].contains(codes))
    }
}

pub(crate) fn random_code<R: Rng>(rng: &mut R) -> Code {
    Code::ALL[rng.random_range(0..Code::ALL.len())]
}

fn max_share(params: &PuzzleParams) -> usize {
    MAX_SHARE.min(params.sequence_length() - 1)
}

fn path_length(params: &PuzzleParams, shares: &[usize]) -> usize {
    params.naive_length() - shares.iter().sum::<usize>()
}

/// Lists every share vector that fits the buffer and honors the overlap rule.
pub(crate) fn share_plans(params: &PuzzleParams) -> Vec<Vec<usize>> {
    let links = params.sequence_count().saturating_sub(1);
    let overlap = params.require_overlap() && links > 0;
    let mut plans = vec![Vec::new()];
    for _ in 0..links {
        plans = plans
            .into_iter()
            .flat_map(|plan| {
                (0..=max_share(params)).map(move |share| {
                    let mut next = plan.clone();
                    next.push(share);
                    next
                })
            })
            .collect();
    }
    plans.retain(|plan| {
        let shared: usize = plan.iter().sum();
        path_length(params, plan) <= params.buffer_size() && (!overlap || shared > 0)
    });
    plans
}

/// Returns the least sharing that fits the buffer, one code per link at a
/// time from the front.
pub(crate) fn minimal_shares(params: &PuzzleParams) -> Vec<usize> {
    let links = params.sequence_count().saturating_sub(1);
    let mut needed = params.naive_length().saturating_sub(params.buffer_size());
    let mut shares = vec![0; links];
    for _ in 0..max_share(params) {
        for share in &mut shares {
            if needed == 0 {
                return shares;
            }
            *share += 1;
            needed -= 1;
        }
    }
    shares
}

/// Draws random codes for a chain with the given shares.
pub(crate) fn build_layout<R: Rng>(
    params: &PuzzleParams,
    shares: &[usize],
    rng: &mut R,
) -> Layout {
    let length = params.sequence_length();
    let mut sequences: Vec<Vec<Code>> = Vec::with_capacity(params.sequence_count());
    let mut path_codes = Vec::with_capacity(path_length(params, shares));
    for index in 0..params.sequence_count() {
        let share = index.checked_sub(1).map_or(0, |link| shares[link]);
        let mut codes = match sequences.last() {
            Some(prev) => prev[length - share..].to_vec(),
            None => Vec::with_capacity(length),
        };
        while codes.len() < length {
            let code = random_code(rng);
            codes.push(code);
            path_codes.push(code);
        }
        sequences.push(codes);
    }
    Layout {
        sequences,
        path_codes,
    }
}

/// Picks a random share plan and draws codes for it.
pub(crate) fn random_layout<R: Rng>(params: &PuzzleParams, rng: &mut R) -> Option<Layout> {
    let plans = share_plans(params);
    let shares = plans.choose(rng)?;
    Some(build_layout(params, shares, rng))
}

/// Walks a random alternating path of `len` distinct positions.
///
/// Returns `None` if the walk runs into a line with no unused cell.
pub(crate) fn random_path<R: Rng>(
    size: usize,
    len: usize,
    rng: &mut R,
) -> Option<Vec<Position>> {
    let mut mode = SelectionMode::START;
    let mut used = PositionSet::EMPTY;
    let mut path = Vec::with_capacity(len);
    for _ in 0..len {
        let candidates: Vec<Position> = mode
            .line_positions(size)
            .filter(|&pos| !used.contains(pos))
            .collect();
        let &pos = candidates.choose(rng)?;
        used.insert(pos);
        path.push(pos);
        mode = mode.after_selecting(pos);
    }
    Some(path)
}

/// A staircase from the top-left corner: `(0,0) (1,0) (1,1) (2,1) ...`.
///
/// # Panics
///
/// Panics if `len` exceeds `2 * size - 1`.
pub(crate) fn staircase_path(size: usize, len: usize) -> Vec<Position> {
    assert!(len < 2 * size, "a staircase of {len} steps does not fit a grid of size {size}");
    (0..len)
        .map(|step| {
            #[expect(clippy::cast_possible_truncation)]
            let step = step as u8;
            Position::new(step.div_ceil(2), step / 2)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use gridcrack_core::is_alternating_path;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;
    use crate::Difficulty;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(7)
    }

    #[test]
    fn test_share_plans_respect_buffer_and_overlap() {
        assert_eq!(share_plans(&Difficulty::Easy.params()), [Vec::<usize>::new()]);

        let medium = share_plans(&Difficulty::Medium.params());
        assert_eq!(medium, [vec![1], vec![2]]);

        let hard = Difficulty::Hard.params();
        for plan in share_plans(&hard) {
            assert!(path_length(&hard, &plan) <= 7);
            assert!(plan.iter().sum::<usize>() >= 2);
        }
    }

    #[test]
    fn test_minimal_shares() {
        assert_eq!(minimal_shares(&Difficulty::Easy.params()), Vec::<usize>::new());
        assert_eq!(minimal_shares(&Difficulty::Medium.params()), [0]);
        assert_eq!(minimal_shares(&Difficulty::Hard.params()), [1, 1]);
    }

    #[test]
    fn test_build_layout_chains_shared_codes() {
        let params = Difficulty::Hard.params();
        let layout = build_layout(&params, &[2, 1], &mut rng());
        let [a, b, c] = &layout.sequences[..] else {
            panic!("expected three sequences");
        };
        assert_eq!(a[1..], b[..2]);
        assert_eq!(b[2..], c[..1]);
        assert_eq!(layout.path_codes.len(), 6);

        let mut targets = layout.targets();
        for &code in &layout.path_codes {
            update_sequence_progress(&mut targets, code, false);
        }
        assert!(targets.iter().all(TargetSequence::is_complete));
    }

    #[test]
    fn test_completes_early() {
        let layout = Layout {
            sequences: vec![vec![Code::X1C, Code::X55]],
            path_codes: vec![Code::X1C, Code::X55, Code::XBD],
        };
        assert!(layout.completes_early());
        let layout = Layout {
            sequences: vec![vec![Code::X1C, Code::X55]],
            path_codes: vec![Code::X1C, Code::X55],
        };
        assert!(!layout.completes_early());
    }

    #[test]
    fn test_random_path_alternates() {
        let mut rng = rng();
        for _ in 0..50 {
            if let Some(path) = random_path(5, 7, &mut rng) {
                assert_eq!(path.len(), 7);
                assert!(is_alternating_path(&path));
            }
        }
    }

    #[test]
    fn test_staircase_path() {
        let path = staircase_path(5, 5);
        assert_eq!(
            path,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
        assert!(is_alternating_path(&staircase_path(6, 11)));
    }
}
