use super::board::{Board, generate_board};
use super::bot_controller::MinimaxEngine;
use super::settings::{SizePolicy, TicTacToeSettings};
use super::types::{BoardError, Mark, Move, Outcome};
use super::win_detector::evaluate;

/// One human-versus-engine game. The board is replaced by a fresh copy on
/// every accepted move, so clones taken earlier stay valid.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub turn: u32,
    pub outcome: Outcome,
    pub last_move: Option<Move>,
    size_policy: SizePolicy,
    engine: MinimaxEngine,
}

impl TicTacToeGameState {
    pub fn new(settings: &TicTacToeSettings) -> Result<Self, BoardError> {
        let board = generate_board(settings.board_size, settings.size_policy)?;

        Ok(Self {
            board,
            turn: 0,
            outcome: Outcome::None,
            last_move: None,
            size_policy: settings.size_policy,
            engine: MinimaxEngine::new(settings.search),
        })
    }

    pub fn engine(&self) -> &MinimaxEngine {
        &self.engine
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_mark(&self) -> Mark {
        Mark::for_turn(self.turn)
    }

    pub fn is_engine_turn(&self) -> bool {
        self.current_mark() == self.engine.player().mark()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Applies the mark whose turn it is. A rejected move leaves the game untouched.
    pub fn place_mark(&mut self, mv: Move) -> Result<Outcome, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }

        let mark = self.current_mark();
        self.board = self.board.with_mark(mv, mark)?;
        self.turn += 1;
        self.last_move = Some(mv);
        self.outcome = evaluate(&self.board);

        match self.outcome {
            Outcome::Winner(winner) => crate::log!("{} wins after {} moves", winner, self.turn),
            Outcome::Draw => crate::log!("Draw after {} moves", self.turn),
            Outcome::None => crate::debug_log!("{} played {}", mark, mv),
        }

        Ok(self.outcome)
    }

    pub fn play_human_move(&mut self, mv: Move) -> Result<Outcome, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        if self.is_engine_turn() {
            return Err(BoardError::NotYourTurn);
        }
        self.place_mark(mv)
    }

    /// Lets the engine reply. `Ok(None)` means there was no empty cell; the
    /// outcome is re-evaluated in that case.
    pub fn play_computer_move(&mut self) -> Result<Option<Move>, BoardError> {
        if self.is_over() {
            return Err(BoardError::GameOver);
        }
        if !self.is_engine_turn() {
            return Err(BoardError::NotYourTurn);
        }

        let Some(mv) = self.engine.choose_move(&self.board, self.turn) else {
            self.outcome = evaluate(&self.board);
            return Ok(None);
        };

        self.place_mark(mv)?;
        Ok(Some(mv))
    }

    /// Starts over on a new board of `size`. On error the current game is kept.
    pub fn reset(&mut self, size: i64) -> Result<(), BoardError> {
        self.board = generate_board(size, self.size_policy)?;
        self.turn = 0;
        self.outcome = Outcome::None;
        self.last_move = None;
        crate::log!("New {}x{} game", self.board.size(), self.board.size());
        Ok(())
    }

    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Winner(mark) => format!("{} wins", mark),
            Outcome::Draw => "Nobody wins".to_string(),
            Outcome::None => format!("Current player: {}", self.current_mark()),
        }
    }
}
