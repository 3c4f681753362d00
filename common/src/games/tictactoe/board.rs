use std::fmt;

use super::settings::SizePolicy;
use super::types::{BoardError, Mark, Move};

/// Square grid of marks, indexed as `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Mark>>,
}

impl Board {
    fn empty(size: usize) -> Self {
        Self {
            cells: vec![vec![Mark::Empty; size]; size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, BoardError> {
        let size = rows.len();
        if size == 0 {
            return Err(BoardError::InvalidSize("0".to_string()));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(BoardError::InvalidSize(format!(
                "row of length {} in a board with {} rows",
                row.len(),
                size
            )));
        }
        Ok(Self { cells: rows })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<Mark>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.cells[row][col]
    }

    pub(crate) fn set(&mut self, mv: Move, mark: Mark) {
        self.cells[mv.row][mv.col] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn check_move(&self, mv: Move) -> Result<(), BoardError> {
        let size = self.size();
        if mv.row >= size || mv.col >= size {
            return Err(BoardError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                size,
            });
        }
        if self.cells[mv.row][mv.col] != Mark::Empty {
            return Err(BoardError::OccupiedCell(mv));
        }
        Ok(())
    }

    /// Copy of this board with `mark` placed at `mv`. `self` is left untouched.
    pub fn with_mark(&self, mv: Move, mark: Mark) -> Result<Board, BoardError> {
        self.check_move(mv)?;
        let mut next = self.clone();
        next.set(mv, mark);
        Ok(next)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, "{:>2}", col)?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "{:>2} ", row)?;
            for cell in cells {
                write!(f, "{:>2}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn generate_board(size: i64, policy: SizePolicy) -> Result<Board, BoardError> {
    if size >= 1 {
        let size = usize::try_from(size).map_err(|_| BoardError::InvalidSize(size.to_string()))?;
        return Ok(Board::empty(size));
    }

    match policy {
        SizePolicy::Reject => Err(BoardError::InvalidSize(size.to_string())),
        SizePolicy::CoerceToMinimum => Ok(Board::empty(1)),
    }
}

pub fn parse_board_size(text: &str) -> Result<i64, BoardError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| BoardError::InvalidSize(format!("'{}' is not an integer", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_board_is_square_and_empty() {
        for size in 1..=8 {
            let board = generate_board(size, SizePolicy::Reject).unwrap();

            assert_eq!(board.size(), size as usize);
            assert!(board.rows().iter().all(|row| row.len() == size as usize));
            assert!(board.rows().iter().flatten().all(|&cell| cell == Mark::Empty));
        }
    }

    #[test]
    fn test_generate_board_rejects_non_positive_size() {
        assert_eq!(
            generate_board(0, SizePolicy::Reject),
            Err(BoardError::InvalidSize("0".to_string()))
        );
        assert!(generate_board(-3, SizePolicy::Reject).is_err());
    }

    #[test]
    fn test_generate_board_coerces_non_positive_size() {
        let board = generate_board(-5, SizePolicy::CoerceToMinimum).unwrap();

        assert_eq!(board.size(), 1);
        assert_eq!(board.get(0, 0), Mark::Empty);
    }

    #[test]
    fn test_parse_board_size() {
        assert_eq!(parse_board_size(" 4 "), Ok(4));
        assert_eq!(parse_board_size("-1"), Ok(-1));
        assert!(matches!(parse_board_size("3.5"), Err(BoardError::InvalidSize(_))));
        assert!(matches!(parse_board_size("abc"), Err(BoardError::InvalidSize(_))));
        assert!(matches!(parse_board_size(""), Err(BoardError::InvalidSize(_))));
    }

    #[test]
    fn test_from_rows_rejects_ragged_board() {
        let rows = vec![vec![Mark::Empty; 3], vec![Mark::Empty; 2], vec![Mark::Empty; 3]];

        assert!(Board::from_rows(rows).is_err());
        assert!(Board::from_rows(Vec::new()).is_err());
    }

    #[test]
    fn test_available_moves_row_major() {
        let mut board = generate_board(3, SizePolicy::Reject).unwrap();
        board.set(Move::new(0, 1), Mark::X);
        board.set(Move::new(2, 0), Mark::O);

        let moves = board.available_moves();

        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(0, 2));
        assert_eq!(moves[6], Move::new(2, 2));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = generate_board(3, SizePolicy::Reject).unwrap();

        let next = board.with_mark(Move::new(1, 1), Mark::X).unwrap();

        assert_eq!(board.get(1, 1), Mark::Empty);
        assert_eq!(next.get(1, 1), Mark::X);
    }

    #[test]
    fn test_with_mark_rejects_occupied_and_out_of_bounds() {
        let board = generate_board(3, SizePolicy::Reject)
            .unwrap()
            .with_mark(Move::new(0, 0), Mark::O)
            .unwrap();

        assert_eq!(
            board.with_mark(Move::new(0, 0), Mark::X),
            Err(BoardError::OccupiedCell(Move::new(0, 0)))
        );
        assert_eq!(
            board.with_mark(Move::new(3, 0), Mark::X),
            Err(BoardError::OutOfBounds { row: 3, col: 0, size: 3 })
        );
        assert_eq!(board.get(0, 0), Mark::O);
    }

    #[test]
    fn test_display_renders_grid() {
        let board = generate_board(2, SizePolicy::Reject)
            .unwrap()
            .with_mark(Move::new(1, 0), Mark::X)
            .unwrap();

        let text = board.to_string();

        assert_eq!(text, "    0 1\n 0  . .\n 1  X .\n");
    }
}
