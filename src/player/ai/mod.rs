pub mod alpha_beta;
pub mod minimax;
pub mod tiebreak;

pub use alpha_beta::{best_move, SearchEngine, SearchResult, LOSE_BASE, TIE_BASE, WIN_BASE};
pub use minimax::AiPlayer;
pub use tiebreak::TieBreak;
