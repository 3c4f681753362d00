use serde::{Deserialize, Serialize};

use super::bot_controller::ScoringPolicy;

pub const DEFAULT_BOARD_SIZE: i64 = 3;
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// What to do with a board size below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizePolicy {
    #[default]
    Reject,
    CoerceToMinimum,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    /// Deepest ply that is still expanded; deeper non-terminal boards score 0.
    pub max_depth: usize,
    pub scoring: ScoringPolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            scoring: ScoringPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicTacToeSettings {
    pub board_size: i64,
    pub size_policy: SizePolicy,
    pub search: SearchSettings,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            size_policy: SizePolicy::default(),
            search: SearchSettings::default(),
        }
    }
}
