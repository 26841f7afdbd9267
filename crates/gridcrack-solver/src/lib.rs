//! Sequence matching and reachability engines for Gridcrack.
//!
//! All functions here are pure: they read a [`Grid`](gridcrack_core::Grid)
//! and sequence state and never mutate anything except the caller-owned
//! sequence slice passed to [`update_sequence_progress`].
//!
//! - [`update_sequence_progress`] applies one selection under the matching law.
//! - [`can_complete_sequence`] decides whether a sequence is still reachable
//!   within a move budget under the alternating-line constraint.
//! - [`positions_advancing_sequences`] computes the hint set for the next move.
//! - [`find_shortest_solution`] computes an optimal path for a whole puzzle;
//!   generators use it for par values and sessions for move suggestions.

pub use self::{
    feasibility::{can_complete_sequence, positions_advancing_sequences, selectable_positions},
    matching::{apply_selected_cell, greedy_match_count, update_sequence_progress},
    search::{find_shortest_solution, suggest_next_move},
};

mod feasibility;
mod matching;
mod search;

#[cfg(test)]
mod testing;
