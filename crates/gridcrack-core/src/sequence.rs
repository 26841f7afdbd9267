//! Target code sequences and their progress.

use std::fmt::{self, Display};

use tinyvec::TinyVec;

use crate::Code;

/// Inline storage for the codes of a sequence; spills to the heap past four codes.
pub type SequenceCodes = TinyVec<[Code; 4]>;

/// Lifecycle state of a [`TargetSequence`].
///
/// `Complete` and `Impossible` are terminal and mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SequenceStatus {
    /// No code has been matched yet.
    Pending,
    /// Some, but not all, codes have been matched.
    Partial,
    /// Every code has been matched.
    Complete,
    /// The sequence can no longer be completed.
    Impossible,
}

impl SequenceStatus {
    /// Returns `true` for states no transition ever leaves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Impossible)
    }
}

/// An ordered list of required codes plus the progress made against it.
///
/// Codes must appear in order, though not necessarily contiguously, among
/// the player's selections.
///
/// # Examples
///
/// ```
/// use gridcrack_core::{Code, SequenceStatus, TargetSequence};
///
/// let mut seq = TargetSequence::new([Code::X1C, Code::X55, Code::XBD]);
/// assert_eq!(seq.next_needed_code(), Some(Code::X1C));
///
/// seq.advance();
/// assert_eq!(seq.status(), SequenceStatus::Partial);
/// assert_eq!(seq.next_needed_code(), Some(Code::X55));
///
/// seq.advance();
/// seq.advance();
/// assert!(seq.is_complete());
/// assert_eq!(seq.next_needed_code(), None);
///
/// // Terminal states are sticky.
/// assert!(!seq.mark_impossible());
/// assert!(seq.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetSequence {
    codes: SequenceCodes,
    matched: usize,
    impossible: bool,
}

impl TargetSequence {
    /// Creates a pending sequence.
    ///
    /// # Panics
    ///
    /// Panics if `codes` is empty.
    #[must_use]
    pub fn new<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = Code>,
    {
        let codes: SequenceCodes = codes.into_iter().collect();
        assert!(!codes.is_empty(), "a target sequence needs at least one code");
        Self {
            codes,
            matched: 0,
            impossible: false,
        }
    }

    /// Returns the required codes in order.
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Returns the number of required codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always `false`; sequences hold at least one code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns how many leading codes have been matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched
    }

    /// Returns how many codes still have to be matched.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.codes.len() - self.matched
    }

    /// Returns `true` once every code has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched == self.codes.len()
    }

    /// Returns `true` once the sequence has been judged uncompletable.
    #[must_use]
    pub fn is_impossible(&self) -> bool {
        self.impossible
    }

    /// Returns `true` while the sequence is neither complete nor impossible.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.is_complete() && !self.impossible
    }

    /// Returns the code at index `matched_count`, or `None` once complete.
    #[must_use]
    pub fn next_needed_code(&self) -> Option<Code> {
        self.codes.get(self.matched).copied()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn status(&self) -> SequenceStatus {
        if self.is_complete() {
            SequenceStatus::Complete
        } else if self.impossible {
            SequenceStatus::Impossible
        } else if self.matched == 0 {
            SequenceStatus::Pending
        } else {
            SequenceStatus::Partial
        }
    }

    /// Matches the next needed code.
    ///
    /// Returns `false` without changing anything if the sequence is terminal.
    pub fn advance(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        self.matched += 1;
        true
    }

    /// Flags the sequence as impossible.
    ///
    /// Returns `false` without changing anything if the sequence is terminal.
    pub fn mark_impossible(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        self.impossible = true;
        true
    }

    /// Returns a pending copy of this sequence with all progress discarded.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            codes: self.codes.clone(),
            matched: 0,
            impossible: false,
        }
    }
}

impl Display for TargetSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.codes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TargetSequence {
        TargetSequence::new([Code::X1C, Code::X55, Code::XBD])
    }

    #[test]
    fn test_status_transitions_to_complete() {
        let mut seq = sample();
        assert_eq!(seq.status(), SequenceStatus::Pending);
        assert!(seq.advance());
        assert_eq!(seq.status(), SequenceStatus::Partial);
        assert!(seq.advance());
        assert!(seq.advance());
        assert_eq!(seq.status(), SequenceStatus::Complete);
        assert!(!seq.advance());
        assert_eq!(seq.matched_count(), 3);
    }

    #[test]
    fn test_impossible_is_sticky() {
        let mut seq = sample();
        seq.advance();
        assert!(seq.mark_impossible());
        assert_eq!(seq.status(), SequenceStatus::Impossible);
        assert!(!seq.advance());
        assert!(!seq.mark_impossible());
        assert_eq!(seq.matched_count(), 1);
        assert!(!seq.is_complete());
    }

    #[test]
    fn test_reset_clears_progress_only() {
        let mut seq = sample();
        seq.advance();
        seq.mark_impossible();
        let fresh = seq.reset();
        assert_eq!(fresh.status(), SequenceStatus::Pending);
        assert_eq!(fresh.codes(), seq.codes());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "1C 55 BD");
    }

    #[test]
    #[should_panic(expected = "at least one code")]
    fn test_empty_sequence_panics() {
        let _ = TargetSequence::new(Vec::<Code>::new());
    }
}
