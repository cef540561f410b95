use crate::core::{Board, Checker};

/// True if `checker` owns `board.run_length()` consecutive cells along a row,
/// a column or either diagonal.
///
/// Runs at every search node, so it slides fixed windows over the grid and
/// never allocates.
pub fn has_run(board: &Board, checker: Checker) -> bool {
    horizontal_run(board, checker)
        || vertical_run(board, checker)
        || down_diagonal_run(board, checker)
        || up_diagonal_run(board, checker)
}

/// Number of window start positions along an axis of `len` cells.
fn starts(len: usize, run: usize) -> usize {
    (len + 1).saturating_sub(run)
}

fn window_filled(
    board: &Board,
    checker: Checker,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> bool {
    (0..board.run_length()).all(|i| {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        r >= 0 && c >= 0 && board.get(r as usize, c as usize) == Some(checker)
    })
}

pub fn horizontal_run(board: &Board, checker: Checker) -> bool {
    let run = board.run_length();
    (0..board.height()).any(|row| {
        (0..starts(board.width(), run)).any(|col| window_filled(board, checker, row, col, 0, 1))
    })
}

pub fn vertical_run(board: &Board, checker: Checker) -> bool {
    let run = board.run_length();
    (0..board.width()).any(|col| {
        (0..starts(board.height(), run)).any(|row| window_filled(board, checker, row, col, 1, 0))
    })
}

/// Top-left to bottom-right.
pub fn down_diagonal_run(board: &Board, checker: Checker) -> bool {
    let run = board.run_length();
    (0..starts(board.height(), run)).any(|row| {
        (0..starts(board.width(), run)).any(|col| window_filled(board, checker, row, col, 1, 1))
    })
}

/// Bottom-left to top-right.
pub fn up_diagonal_run(board: &Board, checker: Checker) -> bool {
    let run = board.run_length();
    let height = board.height();
    (0..starts(height, run)).any(|row| {
        (0..starts(board.width(), run))
            .any(|col| window_filled(board, checker, height - 1 - row, col, -1, 1))
    })
}
