use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::settings::SearchSettings;
use super::types::{Mark, Move, Outcome, Player};
use super::win_detector::evaluate;

/// Terminal values seen from the engine's side: engine wins are worth
/// `+win_score`, opponent wins `-win_score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub engine: Player,
    pub win_score: f64,
    pub draw_score: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            engine: Player::O,
            win_score: 1.0,
            draw_score: 0.0,
        }
    }
}

impl ScoringPolicy {
    pub fn terminal_score(&self, outcome: Outcome) -> Option<f64> {
        match outcome {
            Outcome::None => None,
            Outcome::Draw => Some(self.draw_score),
            Outcome::Winner(mark) if mark == self.engine.mark() => Some(self.win_score),
            Outcome::Winner(_) => Some(-self.win_score),
        }
    }
}

/// Places a mark for the lifetime of the guard and clears the cell again on drop.
struct SpeculativeMove<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> SpeculativeMove<'a> {
    fn place(board: &'a mut Board, mv: Move, mark: Mark) -> Self {
        debug_assert_eq!(board.get(mv.row, mv.col), Mark::Empty);
        board.set(mv, mark);
        Self { board, mv }
    }
}

impl Deref for SpeculativeMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for SpeculativeMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for SpeculativeMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv, Mark::Empty);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimaxEngine {
    settings: SearchSettings,
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchSettings::default())
    }
}

impl MinimaxEngine {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    pub fn player(&self) -> Player {
        self.settings.scoring.engine
    }

    /// Minimax value of `board` with `depth` plies already played.
    ///
    /// Terminal values are divided by the depth (0 counts as 1) so quicker
    /// results weigh more. Past `max_depth` a non-terminal board scores 0.
    /// Every speculative placement is undone before this returns.
    pub fn score(&self, board: &mut Board, depth: usize, is_maximizing: bool) -> f64 {
        let scoring = &self.settings.scoring;
        if let Some(value) = scoring.terminal_score(evaluate(board)) {
            return value / depth.max(1) as f64;
        }

        if depth > self.settings.max_depth {
            return 0.0;
        }

        let (mark, mut best) = if is_maximizing {
            (scoring.engine.mark(), f64::NEG_INFINITY)
        } else {
            (scoring.engine.opponent().mark(), f64::INFINITY)
        };

        for mv in board.available_moves() {
            let mut trial = SpeculativeMove::place(board, mv, mark);
            let value = self.score(&mut trial, depth + 1, !is_maximizing);

            best = if is_maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    /// Best move for the engine, scanning empty cells in row-major order.
    /// Equal scores go to the later cell. `None` when the board is full.
    pub fn choose_move(&self, board: &Board, turn: u32) -> Option<Move> {
        let mark = self.player().mark();
        let mut scratch = board.clone();
        let mut best: Option<(Move, f64)> = None;

        for mv in board.available_moves() {
            let value = {
                let mut trial = SpeculativeMove::place(&mut scratch, mv, mark);
                self.score(&mut trial, 0, false)
            };

            if best.is_none_or(|(_, best_score)| value >= best_score) {
                best = Some((mv, value));
            }
        }

        match best {
            Some((mv, value)) => {
                crate::debug_log!("Turn {}: {} picks {} with score {:.4}", turn, mark, mv, value);
                Some(mv)
            }
            None => {
                crate::debug_log!("Turn {}: no empty cell left for {}", turn, mark);
                None
            }
        }
    }
}
