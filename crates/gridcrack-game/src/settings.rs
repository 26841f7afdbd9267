use serde::{Deserialize, Serialize};

/// Player-facing session settings.
///
/// Missing fields deserialize to their defaults so stored settings keep
/// loading after new options are added.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hint options.
    pub assist: AssistSettings,
    /// Rush mode timing.
    pub rush: RushSettings,
}

/// Hint options applied by [`GameSession::hints`](crate::GameSession::hints).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistSettings {
    /// Highlight cells that advance a live sequence.
    pub highlight_advancing: bool,
    /// Suggest the first move of a shortest completion.
    pub suggest_move: bool,
}

impl Default for AssistSettings {
    fn default() -> Self {
        Self {
            highlight_advancing: true,
            suggest_move: false,
        }
    }
}

/// Clock settings for rush mode, in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RushSettings {
    /// Time budget at the start of a run.
    pub initial_seconds: u32,
    /// Seconds added for every cleared grid.
    pub clear_bonus_seconds: u32,
    /// Remaining time at or below which the clock warns.
    pub warning_seconds: u32,
}

impl Default for RushSettings {
    fn default() -> Self {
        Self {
            initial_seconds: 90,
            clear_bonus_seconds: 15,
            warning_seconds: 10,
        }
    }
}
