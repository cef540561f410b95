use crate::core::{Board, CheckerPair, DEFAULT_DIM};
use crate::error::GameError;
use crate::player::{AiPlayer, HumanPlayer, Player, TieBreak};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub name: String,
    pub kind: PlayerKind,
    pub tiebreak: TieBreak,
    pub depth: u32,
    /// Fixed seed for random tie-breaks; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            name: "Computer".to_string(),
            kind: PlayerKind::Ai,
            tiebreak: TieBreak::First,
            depth: 9,
            seed: None,
        }
    }
}

impl PlayerSettings {
    pub fn human(name: &str) -> Self {
        PlayerSettings {
            name: name.to_string(),
            kind: PlayerKind::Human,
            ..Self::default()
        }
    }

    pub fn ai(name: &str, tiebreak: TieBreak, depth: u32) -> Self {
        PlayerSettings {
            name: name.to_string(),
            kind: PlayerKind::Ai,
            tiebreak,
            depth,
            seed: None,
        }
    }
}

/// Game setup, loadable from JSON:
///
/// ```json
/// {
///   "board_dim": 3,
///   "checkers": ["X", "O"],
///   "players": [
///     { "name": "Player 1", "kind": "human" },
///     { "name": "Computer", "kind": "ai", "tiebreak": "random", "depth": 5 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_dim: usize,
    pub checkers: CheckerPair,
    pub players: [PlayerSettings; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_dim: DEFAULT_DIM,
            checkers: CheckerPair::default(),
            players: [
                PlayerSettings::human("Player 1"),
                PlayerSettings::ai("Computer", TieBreak::First, 9),
            ],
        }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Falls back to defaults when `path` is missing or unusable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        if !path.as_ref().exists() {
            log::debug!("no config at {}, using defaults", path.as_ref().display());
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "using default configuration, could not load {}: {}",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_dim == 0 {
            return Err(GameError::InvalidConfig(
                "board_dim must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_board(&self) -> Result<Board, GameError> {
        self.validate()?;
        Board::new(self.board_dim, self.checkers)
    }

    /// Builds both players; the first one gets the first checker.
    /// Humans read from stdin.
    pub fn build_players(&self) -> [Box<dyn Player>; 2] {
        let checkers = [self.checkers.first(), self.checkers.second()];
        let build = |i: usize| -> Box<dyn Player> {
            let s = &self.players[i];
            match s.kind {
                PlayerKind::Human => Box::new(HumanPlayer::stdio(&s.name, checkers[i])),
                PlayerKind::Ai => match s.seed {
                    Some(seed) => Box::new(AiPlayer::with_seed(
                        &s.name,
                        checkers[i],
                        s.tiebreak,
                        s.depth,
                        seed,
                    )),
                    None => Box::new(AiPlayer::new(&s.name, checkers[i], s.tiebreak, s.depth)),
                },
            }
        };
        [build(0), build(1)]
    }
}
