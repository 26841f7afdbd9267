//! Grid cells and their special behaviors.

use crate::{Code, Position};

/// Stable identity of a cell within one grid.
///
/// Identities survive code changes (for example, when a decaying cell
/// re-randomizes), so presentation layers can key animations on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct CellId(pub u16);

/// The behavior attached to a cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellKind {
    /// An ordinary selectable cell.
    #[default]
    Normal,
    /// A cell that can never be selected.
    Blocked,
    /// A cell whose code re-randomizes once `moves_left` more moves have been made.
    Decaying {
        /// Moves remaining before the code changes.
        moves_left: u8,
    },
    /// A cell that matches whatever code any live sequence needs next.
    Wildcard,
}

/// Result of advancing a [`CellKind`] by one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecayTick {
    /// The kind does not decay.
    Unchanged,
    /// The countdown advanced; the cell keeps decaying with the new kind.
    Counting(CellKind),
    /// The countdown reached zero: the code must be re-rolled and the cell
    /// reverts to [`CellKind::Normal`].
    Expired,
}

impl CellKind {
    /// Advances the decay countdown by one move.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcrack_core::{CellKind, DecayTick};
    ///
    /// let kind = CellKind::Decaying { moves_left: 2 };
    /// let DecayTick::Counting(kind) = kind.tick() else { unreachable!() };
    /// assert_eq!(kind, CellKind::Decaying { moves_left: 1 });
    /// assert_eq!(kind.tick(), DecayTick::Expired);
    /// assert_eq!(CellKind::Wildcard.tick(), DecayTick::Unchanged);
    /// ```
    #[must_use]
    pub const fn tick(self) -> DecayTick {
        match self {
            Self::Decaying { moves_left } if moves_left <= 1 => DecayTick::Expired,
            Self::Decaying { moves_left } => DecayTick::Counting(Self::Decaying {
                moves_left: moves_left - 1,
            }),
            Self::Normal | Self::Blocked | Self::Wildcard => DecayTick::Unchanged,
        }
    }

    /// Returns `true` if a cell of this kind may ever be selected.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// A single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    code: Code,
    position: Position,
    selected: bool,
    kind: CellKind,
}

impl Cell {
    /// Creates an unselected cell.
    #[must_use]
    pub fn new(id: CellId, position: Position, code: Code, kind: CellKind) -> Self {
        Self {
            id,
            code,
            position,
            selected: false,
            kind,
        }
    }

    /// Returns the cell identity.
    #[must_use]
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Returns the printed code.
    ///
    /// For wildcards this is only cosmetic; see [`Cell::matches`].
    #[must_use]
    pub fn code(&self) -> Code {
        self.code
    }

    /// Returns the cell position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if the cell has been selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns the cell kind.
    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns `true` if the cell is a wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.kind.is_wildcard()
    }

    /// Returns `true` if selecting this cell would count as `needed`.
    #[must_use]
    pub fn matches(&self, needed: Code) -> bool {
        self.is_wildcard() || self.code == needed
    }

    /// Marks the cell as selected. Selection is permanent for the grid's lifetime.
    pub fn mark_selected(&mut self) {
        self.selected = true;
    }

    /// Replaces the printed code.
    pub fn set_code(&mut self, code: Code) {
        self.code = code;
    }

    /// Replaces the cell kind.
    pub fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_counts_down_to_expiry() {
        let mut kind = CellKind::Decaying { moves_left: 3 };
        let mut ticks = 0;
        loop {
            ticks += 1;
            match kind.tick() {
                DecayTick::Counting(next) => kind = next,
                DecayTick::Expired => break,
                DecayTick::Unchanged => panic!("decaying cell must not be unchanged"),
            }
        }
        assert_eq!(ticks, 3);
    }

    #[test]
    fn test_non_decaying_kinds_are_unchanged() {
        for kind in [CellKind::Normal, CellKind::Blocked, CellKind::Wildcard] {
            assert_eq!(kind.tick(), DecayTick::Unchanged);
        }
    }

    #[test]
    fn test_wildcard_matches_every_code() {
        let cell = Cell::new(
            CellId(0),
            Position::new(0, 0),
            Code::X1C,
            CellKind::Wildcard,
        );
        assert!(Code::ALL.into_iter().all(|code| cell.matches(code)));
    }

    #[test]
    fn test_normal_cell_matches_only_its_code() {
        let cell = Cell::new(CellId(0), Position::new(0, 0), Code::X55, CellKind::Normal);
        assert!(cell.matches(Code::X55));
        assert!(!cell.matches(Code::XBD));
        assert!(CellKind::Normal.is_selectable());
        assert!(!CellKind::Blocked.is_selectable());
    }
}
