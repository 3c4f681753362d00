use super::board::Board;
use super::types::{Mark, Move, Outcome, WinningLine};

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        return Outcome::Winner(line.mark);
    }

    if board.is_full() {
        return Outcome::Draw;
    }

    Outcome::None
}

/// First complete line on the board, checked rows, columns, main diagonal,
/// then anti-diagonal.
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    if size == 0 {
        return None;
    }
    let last = size - 1;

    for (row, cells) in board.rows().iter().enumerate() {
        if let Some(mark) = line_owner(cells) {
            return Some(WinningLine::new(mark, Move::new(row, 0), Move::new(row, last)));
        }
    }

    for (col, cells) in transpose(board).iter().enumerate() {
        if let Some(mark) = line_owner(cells) {
            return Some(WinningLine::new(mark, Move::new(0, col), Move::new(last, col)));
        }
    }

    let main_diagonal: Vec<Mark> = (0..size).map(|i| board.get(i, i)).collect();
    if let Some(mark) = line_owner(&main_diagonal) {
        return Some(WinningLine::new(mark, Move::new(0, 0), Move::new(last, last)));
    }

    let anti_diagonal: Vec<Mark> = (0..size).map(|i| board.get(i, last - i)).collect();
    if let Some(mark) = line_owner(&anti_diagonal) {
        return Some(WinningLine::new(mark, Move::new(0, last), Move::new(last, 0)));
    }

    None
}

fn transpose(board: &Board) -> Vec<Vec<Mark>> {
    let size = board.size();
    (0..size)
        .map(|col| (0..size).map(|row| board.get(row, col)).collect())
        .collect()
}

fn line_owner(cells: &[Mark]) -> Option<Mark> {
    let first = *cells.first()?;
    if first == Mark::Empty {
        return None;
    }
    cells.iter().all(|&cell| cell == first).then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn board(rows: Vec<Vec<Mark>>) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn rotate(board: &Board) -> Board {
        let size = board.size();
        let rows = (0..size)
            .map(|row| (0..size).map(|col| board.get(size - 1 - col, row)).collect())
            .collect();
        Board::from_rows(rows).unwrap()
    }

    fn reflect(board: &Board) -> Board {
        let rows = board
            .rows()
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_empty_board_continues() {
        let empty = board(vec![vec![E; 3]; 3]);

        assert_eq!(evaluate(&empty), Outcome::None);
        assert_eq!(winning_line(&empty), None);
    }

    #[test]
    fn test_top_row_wins_for_x() {
        let b = board(vec![vec![X, X, X], vec![E, E, E], vec![E, E, E]]);

        assert_eq!(evaluate(&b), Outcome::Winner(X));
        assert_eq!(
            winning_line(&b),
            Some(WinningLine::new(X, Move::new(0, 0), Move::new(0, 2)))
        );
    }

    #[test]
    fn test_column_win() {
        let b = board(vec![vec![E, O, X], vec![X, O, E], vec![E, O, X]]);

        assert_eq!(evaluate(&b), Outcome::Winner(O));
        assert_eq!(
            winning_line(&b),
            Some(WinningLine::new(O, Move::new(0, 1), Move::new(2, 1)))
        );
    }

    #[test]
    fn test_diagonal_wins() {
        let main = board(vec![vec![O, X, E], vec![X, O, E], vec![E, E, O]]);
        let anti = board(vec![vec![O, O, X], vec![E, X, E], vec![X, E, E]]);

        assert_eq!(evaluate(&main), Outcome::Winner(O));
        assert_eq!(evaluate(&anti), Outcome::Winner(X));
        assert_eq!(
            winning_line(&anti),
            Some(WinningLine::new(X, Move::new(0, 2), Move::new(2, 0)))
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board(vec![vec![X, O, X], vec![X, O, O], vec![O, X, X]]);

        assert_eq!(evaluate(&b), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win_not_a_draw() {
        let b = board(vec![vec![X, X, X], vec![O, O, X], vec![X, O, O]]);

        assert_eq!(evaluate(&b), Outcome::Winner(X));
    }

    #[test]
    fn test_partial_line_does_not_win() {
        let b = board(vec![
            vec![X, X, X, E],
            vec![E, E, E, E],
            vec![E, E, E, E],
            vec![E, E, E, E],
        ]);

        assert_eq!(evaluate(&b), Outcome::None);
    }

    #[test]
    fn test_single_cell_board() {
        assert_eq!(evaluate(&board(vec![vec![E]])), Outcome::None);
        assert_eq!(evaluate(&board(vec![vec![O]])), Outcome::Winner(O));
    }

    #[test]
    fn test_rotation_and_reflection_preserve_winner() {
        let winners = [
            board(vec![vec![X, X, X], vec![O, O, E], vec![E, E, E]]),
            board(vec![vec![O, X, E], vec![O, X, E], vec![O, E, X]]),
            board(vec![vec![X, O, E], vec![E, X, O], vec![E, E, X]]),
            board(vec![vec![E, X, O], vec![X, O, E], vec![O, E, X]]),
        ];

        for b in winners {
            let expected = evaluate(&b);
            assert!(matches!(expected, Outcome::Winner(_)));

            let mut rotated = b.clone();
            for _ in 0..4 {
                rotated = rotate(&rotated);
                assert_eq!(evaluate(&rotated), expected);
                assert_eq!(evaluate(&reflect(&rotated)), expected);
            }
        }
    }

    #[test]
    fn test_random_boards_agree_with_brute_force() {
        let mut rng = StdRng::seed_from_u64(12345);

        for _ in 0..500 {
            let size = rng.random_range(1..=5);
            let rows: Vec<Vec<Mark>> = (0..size)
                .map(|_| {
                    (0..size)
                        .map(|_| match rng.random_range(0..3) {
                            0 => E,
                            1 => X,
                            _ => O,
                        })
                        .collect()
                })
                .collect();
            let b = board(rows);

            let mut lines: Vec<Vec<Mark>> = b.rows().to_vec();
            lines.extend((0..size).map(|c| (0..size).map(|r| b.get(r, c)).collect::<Vec<Mark>>()));
            lines.push((0..size).map(|i| b.get(i, i)).collect());
            lines.push((0..size).map(|i| b.get(i, size - 1 - i)).collect());
            let has_line = lines
                .iter()
                .any(|line| line[0] != E && line.iter().all(|&c| c == line[0]));

            match evaluate(&b) {
                Outcome::Winner(mark) => {
                    assert!(has_line);
                    assert_ne!(mark, E);
                }
                Outcome::Draw => {
                    assert!(!has_line);
                    assert!(b.is_full());
                }
                Outcome::None => {
                    assert!(!has_line);
                    assert!(!b.is_full());
                }
            }
        }
    }
}
