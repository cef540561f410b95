use crate::core::Coord;
use crate::error::GameError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an AI picks among moves when the search has nothing better to go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// First move in row-major order
    #[default]
    First,
    /// Last move in row-major order
    Last,
    /// Uniformly random move
    Random,
}

impl TieBreak {
    pub fn pick<R: Rng + ?Sized>(self, moves: &[Coord], rng: &mut R) -> Result<Coord, GameError> {
        let chosen = match self {
            TieBreak::First => moves.first(),
            TieBreak::Last => moves.last(),
            TieBreak::Random => moves.choose(rng),
        };
        chosen.copied().ok_or(GameError::NoAvailableMoves)
    }
}

impl FromStr for TieBreak {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" | "left" => Ok(TieBreak::First),
            "last" | "right" => Ok(TieBreak::Last),
            "random" => Ok(TieBreak::Random),
            other => Err(GameError::InvalidConfig(format!(
                "unknown tie-break '{}' (expected first, last or random)",
                other
            ))),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TieBreak::First => "first",
            TieBreak::Last => "last",
            TieBreak::Random => "random",
        };
        write!(f, "{}", name)
    }
}
