use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Board coordinate (0-indexed, row first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A player's game piece. Any printable, non-whitespace symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Checker(char);

impl Checker {
    pub const X: Checker = Checker('X');
    pub const O: Checker = Checker('O');

    pub fn new(symbol: char) -> Result<Self, GameError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(GameError::InvalidChecker(symbol));
        }
        Ok(Checker(symbol))
    }

    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Checker {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Checker::new(symbol)
    }
}

impl From<Checker> for char {
    fn from(checker: Checker) -> char {
        checker.0
    }
}

impl fmt::Display for Checker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two distinct checkers that take part in one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[char; 2]", into = "[char; 2]")]
pub struct CheckerPair {
    first: Checker,
    second: Checker,
}

impl Default for CheckerPair {
    fn default() -> Self {
        CheckerPair {
            first: Checker::X,
            second: Checker::O,
        }
    }
}

impl TryFrom<[char; 2]> for CheckerPair {
    type Error = GameError;

    fn try_from([first, second]: [char; 2]) -> Result<Self, Self::Error> {
        CheckerPair::new(first, second)
    }
}

impl From<CheckerPair> for [char; 2] {
    fn from(pair: CheckerPair) -> [char; 2] {
        [pair.first.0, pair.second.0]
    }
}

impl CheckerPair {
    pub fn new(first: char, second: char) -> Result<Self, GameError> {
        let first = Checker::new(first)?;
        let second = Checker::new(second)?;
        if first == second {
            return Err(GameError::InvalidConfig(format!(
                "checkers must differ, got '{}' twice",
                first
            )));
        }
        Ok(CheckerPair { first, second })
    }

    pub fn first(&self) -> Checker {
        self.first
    }

    pub fn second(&self) -> Checker {
        self.second
    }

    pub fn contains(&self, checker: Checker) -> bool {
        checker == self.first || checker == self.second
    }

    /// Fails with `InvalidChecker` for a symbol outside the pair.
    pub fn opponent(&self, checker: Checker) -> Result<Checker, GameError> {
        if checker == self.first {
            Ok(self.second)
        } else if checker == self.second {
            Ok(self.first)
        } else {
            Err(GameError::InvalidChecker(checker.symbol()))
        }
    }

    pub fn ensure(&self, checker: Checker) -> Result<Checker, GameError> {
        if self.contains(checker) {
            Ok(checker)
        } else {
            Err(GameError::InvalidChecker(checker.symbol()))
        }
    }
}
