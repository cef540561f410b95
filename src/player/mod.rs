pub mod ai;
pub mod controller;
pub mod human;

pub use ai::{AiPlayer, TieBreak};
pub use controller::Player;
pub use human::HumanPlayer;
