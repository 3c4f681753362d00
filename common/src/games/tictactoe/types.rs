use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Mark that moves on the given turn: even turns are X, odd turns are O.
    pub fn for_turn(turn: u32) -> Mark {
        if turn % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Empty => ".",
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A side that can move. Unlike [`Mark`] it has no empty variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    None,
    Winner(Mark),
    Draw,
}

impl Outcome {
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Move,
    pub end: Move,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Move, end: Move) -> Self {
        Self { mark, start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize(String),
    OutOfBounds { row: usize, col: usize, size: usize },
    OccupiedCell(Move),
    GameOver,
    NotYourTurn,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(value) => write!(f, "Invalid board size: {}", value),
            BoardError::OutOfBounds { row, col, size } => {
                write!(f, "Position ({}, {}) is outside the {}x{} board", row, col, size, size)
            }
            BoardError::OccupiedCell(mv) => write!(f, "Cell {} is already marked", mv),
            BoardError::GameOver => f.write_str("Game is already over"),
            BoardError::NotYourTurn => f.write_str("Not your turn"),
        }
    }
}

impl std::error::Error for BoardError {}
