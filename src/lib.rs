//! Generalized Tic-Tac-Toe on an N×N grid with a depth-limited alpha-beta AI.
//!
//! ```
//! use tictactoe::core::{Board, Checker};
//! use tictactoe::player::ai::{best_move, TieBreak, WIN_BASE};
//!
//! let mut board = Board::default();
//! board.place(Checker::X, 0, 0).unwrap();
//! board.place(Checker::X, 0, 1).unwrap();
//! board.place(Checker::O, 1, 1).unwrap();
//! board.place(Checker::O, 2, 2).unwrap();
//!
//! let (mv, score) = best_move(&mut board, 3, Checker::X, TieBreak::First).unwrap();
//! assert_eq!(mv.map(|c| (c.row, c.col)), Some((0, 2)));
//! assert!(score >= WIN_BASE);
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod logic;
pub mod player;
pub mod selfplay;

mod logic_tests;

pub use error::GameError;
