//! Game sessions for Gridcrack.
//!
//! A session owns a copy of a generated puzzle and applies the player's
//! selections to it: each selection extends the buffer, flips the active
//! line, advances matching sequences, and fails sequences that can no longer
//! be completed. Every call returns the [`GameEvent`]s it produced so a
//! presentation layer can react without polling.
//!
//! # Overview
//!
//! - [`GameSession`]: the capabilities shared by both session kinds
//! - [`Game`]: a single puzzle ending in a [`GameResult`]
//! - [`RushGame`]: a timed run over escalating stages, driven by a [`RushClock`]
//! - [`Settings`] and [`Statistics`]: serializable records for an external store
//!
//! # Examples
//!
//! ```
//! use gridcrack_core::Position;
//! use gridcrack_game::{Game, GameError, GameSession as _};
//! use gridcrack_generator::{Difficulty, PuzzleGenerator};
//!
//! let mut game = Game::new(PuzzleGenerator::new().generate(Difficulty::Easy));
//!
//! // The first selection must come from row 0.
//! assert_eq!(game.select(Position::new(1, 0)), Err(GameError::OutsideActiveLine));
//! ```

pub use self::{
    clock::RushClock,
    error::{GameError, SelectBlockReason},
    event::GameEvent,
    game::{Game, GameResult},
    rush::{RushGame, RushSummary},
    session::{GameSession, Hints},
    settings::{AssistSettings, RushSettings, Settings},
    stats::Statistics,
};

mod board;
mod clock;
mod error;
mod event;
mod game;
mod rush;
mod session;
mod settings;
mod stats;
#[cfg(test)]
mod testing;
