mod board;
mod bot_controller;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, generate_board, parse_board_size};
pub use bot_controller::{MinimaxEngine, ScoringPolicy};
pub use game_state::TicTacToeGameState;
pub use settings::{
    DEFAULT_BOARD_SIZE, DEFAULT_MAX_DEPTH, SearchSettings, SizePolicy, TicTacToeSettings,
};
pub use types::{BoardError, Mark, Move, Outcome, Player, WinningLine};
pub use win_detector::{evaluate, winning_line};
