use super::types::{Checker, CheckerPair, Coord};
use crate::error::GameError;
use std::fmt;

/// Longest run ever required to win, whatever the board width.
pub const MAX_RUN_LENGTH: usize = 5;
pub const DEFAULT_DIM: usize = 3;

/// Tic-Tac-Toe grid.
///
/// `available` always lists the empty cells in row-major order, so anything
/// that enumerates or tie-breaks over it sees the same order no matter how
/// many place/remove pairs the search has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    run_length: usize,
    checkers: CheckerPair,
    cells: Vec<Option<Checker>>,
    occupied: usize,
    available: Vec<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Board::blank(DEFAULT_DIM, DEFAULT_DIM, CheckerPair::default())
    }
}

impl Board {
    /// Square board of `dim × dim`.
    pub fn new(dim: usize, checkers: CheckerPair) -> Result<Self, GameError> {
        Self::with_size(dim, dim, checkers)
    }

    pub fn with_size(
        width: usize,
        height: usize,
        checkers: CheckerPair,
    ) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "board dimensions must be positive, got {}x{}",
                height, width
            )));
        }
        Ok(Board::blank(width, height, checkers))
    }

    fn blank(width: usize, height: usize, checkers: CheckerPair) -> Self {
        let mut board = Board {
            width,
            height,
            run_length: width.min(MAX_RUN_LENGTH),
            checkers,
            cells: vec![None; width * height],
            occupied: 0,
            available: Vec::with_capacity(width * height),
        };
        board.reset();
        board
    }

    /// Clears every cell and repopulates the available moves.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.occupied = 0;
        self.available.clear();
        for row in 0..self.height {
            for col in 0..self.width {
                self.available.push(Coord::new(row, col));
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn run_length(&self) -> usize {
        self.run_length
    }

    pub fn checkers(&self) -> CheckerPair {
        self.checkers
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> &[Coord] {
        &self.available
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Checker> {
        if self.in_bounds(row, col) {
            self.cells[row * self.width + col]
        } else {
            None
        }
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    pub fn can_place(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[row * self.width + col].is_none()
    }

    pub fn place(&mut self, checker: Checker, row: usize, col: usize) -> Result<(), GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::InvalidMove {
                row,
                col,
                reason: "out of bounds",
            });
        }
        self.checkers.ensure(checker)?;
        let idx = row * self.width + col;
        if self.cells[idx].is_some() {
            return Err(GameError::InvalidMove {
                row,
                col,
                reason: "cell is occupied",
            });
        }

        self.cells[idx] = Some(checker);
        self.occupied += 1;
        let coord = Coord::new(row, col);
        if let Ok(pos) = self.available.binary_search(&coord) {
            self.available.remove(pos);
        }
        Ok(())
    }

    /// Undoes a placement. Returns the checker that was there.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<Checker, GameError> {
        if !self.in_bounds(row, col) {
            return Err(GameError::InvalidMove {
                row,
                col,
                reason: "out of bounds",
            });
        }
        let idx = row * self.width + col;
        let checker = self.cells[idx].take().ok_or(GameError::InvalidMove {
            row,
            col,
            reason: "cell is already empty",
        })?;

        self.occupied -= 1;
        let coord = Coord::new(row, col);
        if let Err(pos) = self.available.binary_search(&coord) {
            self.available.insert(pos, coord);
        }
        Ok(checker)
    }

    /// Places `checker` at `coord`, runs `f`, then removes it again.
    ///
    /// The board seen by `f` holds the extra checker; once this returns the
    /// board is back to its prior state, including the order of
    /// `available_moves`.
    pub fn with_move<T>(
        &mut self,
        checker: Checker,
        coord: Coord,
        f: impl FnOnce(&mut Board) -> T,
    ) -> Result<T, GameError> {
        self.place(checker, coord.row, coord.col)?;
        let out = f(self);
        self.remove(coord.row, coord.col)?;
        Ok(out)
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.width * self.height
    }

    pub fn is_win_for(&self, checker: Checker) -> Result<bool, GameError> {
        self.checkers.ensure(checker)?;
        Ok(crate::logic::has_run(self, checker))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let separator = format!("{}-", "--".repeat(self.width + 1));
        for row in 0..self.height {
            write!(f, "{} |", row % 10)?;
            for col in 0..self.width {
                match self.get(row, col) {
                    Some(c) => write!(f, "{}|", c)?,
                    None => write!(f, " |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        write!(f, "  ")?;
        for col in 0..self.width {
            write!(f, " {}", col % 10)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board3() -> Board {
        Board::new(3, CheckerPair::default()).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board3();
        assert_eq!(board.run_length(), 3);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.available_moves().len(), 9);
        assert_eq!(board.available_moves()[0], Coord::new(0, 0));
        assert_eq!(board.available_moves()[8], Coord::new(2, 2));
        assert!(!board.is_full());
    }

    #[test]
    fn test_run_length_caps_at_five() {
        let board = Board::new(7, CheckerPair::default()).unwrap();
        assert_eq!(board.run_length(), 5);
        let board = Board::new(4, CheckerPair::default()).unwrap();
        assert_eq!(board.run_length(), 4);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Board::new(0, CheckerPair::default()),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_place_and_remove_keep_counts_in_sync() {
        let mut board = board3();
        board.place(Checker::X, 1, 1).unwrap();
        board.place(Checker::O, 0, 2).unwrap();
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.available_moves().len(), 7);
        assert!(!board.can_place(1, 1));
        assert!(!board.available_moves().contains(&Coord::new(0, 2)));

        assert_eq!(board.remove(1, 1).unwrap(), Checker::X);
        assert_eq!(board.occupied_count(), 1);
        assert!(board.can_place(1, 1));
        // Re-inserted at its row-major slot
        assert_eq!(board.available_moves()[3], Coord::new(1, 1));
    }

    #[test]
    fn test_place_rejections() {
        let mut board = board3();
        board.place(Checker::X, 0, 0).unwrap();
        assert!(matches!(
            board.place(Checker::O, 0, 0),
            Err(GameError::InvalidMove { row: 0, col: 0, .. })
        ));
        assert!(matches!(
            board.place(Checker::O, 3, 0),
            Err(GameError::InvalidMove { .. })
        ));
        let z = Checker::new('Z').unwrap();
        assert_eq!(board.place(z, 1, 1), Err(GameError::InvalidChecker('Z')));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_remove_rejections() {
        let mut board = board3();
        assert!(matches!(
            board.remove(0, 0),
            Err(GameError::InvalidMove { .. })
        ));
        assert!(matches!(
            board.remove(0, 5),
            Err(GameError::InvalidMove { .. })
        ));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_with_move_restores_board() {
        let mut board = board3();
        board.place(Checker::O, 2, 0).unwrap();
        let before = board.clone();
        let seen = board
            .with_move(Checker::X, Coord::new(0, 1), |b| b.get(0, 1))
            .unwrap();
        assert_eq!(seen, Some(Checker::X));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new(2, CheckerPair::default()).unwrap();
        board.place(Checker::X, 0, 0).unwrap();
        board.place(Checker::O, 0, 1).unwrap();
        board.place(Checker::X, 1, 0).unwrap();
        board.place(Checker::O, 1, 1).unwrap();
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());

        board.reset();
        assert_eq!(board, Board::new(2, CheckerPair::default()).unwrap());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, CheckerPair::default()).unwrap();
        board.place(Checker::X, 0, 1).unwrap();
        let expected = "0 | |X|\n-------\n1 | | |\n-------\n   0 1";
        assert_eq!(board.to_string(), expected);
    }
}
