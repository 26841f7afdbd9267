use serde::{Deserialize, Serialize};

use crate::{GameResult, RushSummary};

/// Lifetime play statistics.
///
/// The record is updated from finished sessions and serialized by whoever
/// persists it.
///
/// # Examples
///
/// ```
/// use gridcrack_game::{GameResult, RushSummary, Statistics};
///
/// let mut stats = Statistics::default();
/// stats.record_game(GameResult::Won);
/// stats.record_game(GameResult::Lost);
/// stats.record_rush(&RushSummary { stage: 4, grids_cleared: 3, moves: 21 });
///
/// assert_eq!(stats.games_played, 2);
/// assert_eq!(stats.win_rate(), Some(0.5));
/// assert_eq!(stats.best_rush_stage, 4);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    /// Standard games finished.
    pub games_played: u32,
    /// Standard games won outright.
    pub games_won: u32,
    /// Standard games that completed some but not all sequences.
    pub games_partial: u32,
    /// Rush runs finished.
    pub rush_runs: u32,
    /// Highest stage reached in any rush run.
    pub best_rush_stage: u32,
    /// Rush grids cleared across all runs.
    pub grids_cleared: u32,
}

impl Statistics {
    /// Records a finished standard game.
    pub fn record_game(&mut self, result: GameResult) {
        self.games_played += 1;
        match result {
            GameResult::Won => self.games_won += 1,
            GameResult::PartialWin => self.games_partial += 1,
            GameResult::Lost => {}
        }
    }

    /// Records a finished rush run.
    pub fn record_rush(&mut self, summary: &RushSummary) {
        self.rush_runs += 1;
        self.best_rush_stage = self.best_rush_stage.max(summary.stage);
        self.grids_cleared += summary.grids_cleared;
    }

    /// Returns the share of standard games won, or `None` before the first game.
    #[must_use]
    pub fn win_rate(&self) -> Option<f64> {
        (self.games_played > 0)
            .then(|| f64::from(self.games_won) / f64::from(self.games_played))
    }
}
