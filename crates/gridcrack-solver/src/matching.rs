//! The sequence matching law.
//!
//! Each selection is checked against every live sequence independently: a
//! sequence advances when the selected code equals its next needed code, or
//! when the selected cell is a wildcard. One selection may therefore advance
//! several sequences at once.

use gridcrack_core::{Cell, Code, TargetSequence};

/// Applies one selected code to every live sequence.
///
/// Sequences that are complete or impossible are left untouched. Returns the
/// indices of the sequences that advanced, in ascending order. Callers that
/// need to know which sequences completed compare state before and after.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Code, TargetSequence};
/// use gridcrack_solver::update_sequence_progress;
///
/// let mut sequences = vec![
///     TargetSequence::new([Code::X1C, Code::X55]),
///     TargetSequence::new([Code::XBD, Code::X1C]),
/// ];
///
/// assert_eq!(update_sequence_progress(&mut sequences, Code::X1C, false), [0]);
/// assert_eq!(update_sequence_progress(&mut sequences, Code::XFF, true), [0, 1]);
/// assert!(sequences[0].is_complete());
/// assert_eq!(sequences[1].matched_count(), 1);
/// ```
pub fn update_sequence_progress(
    sequences: &mut [TargetSequence],
    latest: Code,
    is_wildcard: bool,
) -> Vec<usize> {
    let mut advanced = Vec::new();
    for (index, sequence) in sequences.iter_mut().enumerate() {
        let Some(needed) = sequence.next_needed_code() else {
            continue;
        };
        if sequence.is_impossible() {
            continue;
        }
        if (is_wildcard || needed == latest) && sequence.advance() {
            advanced.push(index);
        }
    }
    advanced
}

/// Applies the selection of `cell` to every live sequence.
///
/// Shorthand for [`update_sequence_progress`] with the cell's code and
/// wildcard flag.
pub fn apply_selected_cell(sequences: &mut [TargetSequence], cell: &Cell) -> Vec<usize> {
    update_sequence_progress(sequences, cell.code(), cell.is_wildcard())
}

/// Counts how many leading `codes` are matched by scanning `buffer` once, left
/// to right, advancing on each equal code.
///
/// This is the reference form of the matching law for buffers without
/// wildcards: replaying `buffer` through [`update_sequence_progress`] on a
/// fresh sequence always reaches the same count.
///
/// # Examples
///
/// ```
/// use gridcrack_core::Code;
/// use gridcrack_solver::greedy_match_count;
///
/// let target = [Code::X1C, Code::XE9, Code::XBD];
/// let buffer = [Code::X7A, Code::X1C, Code::XE9, Code::X55, Code::XBD];
/// assert_eq!(greedy_match_count(&target, &buffer), 3);
///
/// let target = [Code::X1C, Code::XBD, Code::X55];
/// let buffer = [Code::XBD, Code::X1C, Code::X55];
/// assert_eq!(greedy_match_count(&target, &buffer), 1);
/// ```
#[must_use]
pub fn greedy_match_count(codes: &[Code], buffer: &[Code]) -> usize {
    let mut matched = 0;
    for &code in buffer {
        if codes.get(matched) == Some(&code) {
            matched += 1;
        }
    }
    matched
}
