#[cfg(test)]
mod tests {
    use crate::core::{Board, Checker, CheckerPair};
    use crate::error::GameError;
    use crate::logic::{down_diagonal_run, horizontal_run, up_diagonal_run, vertical_run};

    fn board_from_rows(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len(), CheckerPair::default()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch != '.' {
                    board.place(Checker::new(ch).unwrap(), row, col).unwrap();
                }
            }
        }
        board
    }

    #[test]
    fn test_top_row_win() {
        let mut board = Board::default();
        board.place(Checker::X, 0, 0).unwrap();
        board.place(Checker::X, 0, 1).unwrap();
        board.place(Checker::X, 0, 2).unwrap();

        assert!(board.is_win_for(Checker::X).unwrap());
        assert!(!board.is_win_for(Checker::O).unwrap());
    }

    #[test]
    fn test_each_direction() {
        let board = board_from_rows(&["...", "OOO", "..."]);
        assert!(horizontal_run(&board, Checker::O));
        assert!(!vertical_run(&board, Checker::O));

        let board = board_from_rows(&[".X.", ".X.", ".X."]);
        assert!(vertical_run(&board, Checker::X));
        assert!(!horizontal_run(&board, Checker::X));

        let board = board_from_rows(&["X..", ".X.", "..X"]);
        assert!(down_diagonal_run(&board, Checker::X));
        assert!(!up_diagonal_run(&board, Checker::X));

        let board = board_from_rows(&["..X", ".X.", "X.."]);
        assert!(up_diagonal_run(&board, Checker::X));
        assert!(!down_diagonal_run(&board, Checker::X));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = board_from_rows(&["XOX", "OXO", "OXO"]);
        assert!(!board.is_win_for(Checker::X).unwrap());
        assert!(!board.is_win_for(Checker::O).unwrap());
        assert!(board.is_full());
    }

    #[test]
    fn test_run_of_five_on_large_board() {
        // 7x7 needs five in a row, not seven
        let mut board = Board::new(7, CheckerPair::default()).unwrap();
        for i in 0..4 {
            board.place(Checker::O, 1 + i, 2 + i).unwrap();
        }
        assert!(!board.is_win_for(Checker::O).unwrap());
        board.place(Checker::O, 5, 6).unwrap();
        assert!(board.is_win_for(Checker::O).unwrap());
    }

    #[test]
    fn test_off_center_up_diagonal_on_large_board() {
        let mut board = Board::new(6, CheckerPair::default()).unwrap();
        // (5,1) (4,2) (3,3) (2,4) (1,5)
        for i in 0..5 {
            board.place(Checker::X, 5 - i, 1 + i).unwrap();
        }
        assert!(up_diagonal_run(&board, Checker::X));
        assert!(!down_diagonal_run(&board, Checker::X));
    }

    #[test]
    fn test_four_by_four_needs_four() {
        let board = board_from_rows(&["XXX.", "....", "....", "...."]);
        assert!(!board.is_win_for(Checker::X).unwrap());
        let board = board_from_rows(&["XXXX", "....", "....", "...."]);
        assert!(board.is_win_for(Checker::X).unwrap());
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1, CheckerPair::default()).unwrap();
        assert!(!board.is_win_for(Checker::X).unwrap());
        board.place(Checker::X, 0, 0).unwrap();
        assert!(board.is_win_for(Checker::X).unwrap());
        assert!(board.is_full());
    }

    #[test]
    fn test_foreign_checker_rejected() {
        let board = Board::default();
        let z = Checker::new('Z').unwrap();
        assert_eq!(board.is_win_for(z), Err(GameError::InvalidChecker('Z')));
    }
}
