use serde::{Deserialize, Serialize};

use super::Validate;
use crate::games::tictactoe::{
    DEFAULT_BOARD_SIZE, ScoringPolicy, SearchSettings, SizePolicy, TicTacToeSettings,
};

pub const DEFAULT_COMPUTER_DELAY_MS: u64 = 100;
const MAX_COMPUTER_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: i64,
    pub size_policy: SizePolicy,
    /// Pause before the computer replies, so the human move shows first.
    pub computer_delay_ms: u64,
    pub scoring: ScoringPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            size_policy: SizePolicy::default(),
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
            scoring: ScoringPolicy::default(),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < 1 && self.size_policy == SizePolicy::Reject {
            return Err(format!("Board size must be at least 1, got {}", self.board_size));
        }
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "Computer delay cannot exceed {} ms, got {}",
                MAX_COMPUTER_DELAY_MS, self.computer_delay_ms
            ));
        }
        if !self.scoring.win_score.is_finite() || self.scoring.win_score <= 0.0 {
            return Err(format!(
                "Win score must be a positive number, got {}",
                self.scoring.win_score
            ));
        }
        if !self.scoring.draw_score.is_finite() {
            return Err("Draw score must be a finite number".to_string());
        }
        Ok(())
    }
}

impl From<&GameConfig> for TicTacToeSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            board_size: config.board_size,
            size_policy: config.size_policy,
            search: SearchSettings {
                scoring: config.scoring,
                ..SearchSettings::default()
            },
        }
    }
}
