pub mod board;
pub mod types;

pub use board::{Board, DEFAULT_DIM, MAX_RUN_LENGTH};
pub use types::{Checker, CheckerPair, Coord};
