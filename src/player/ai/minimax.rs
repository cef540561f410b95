use super::alpha_beta::SearchEngine;
use super::tiebreak::TieBreak;
use crate::core::{Board, Checker, Coord};
use crate::error::GameError;
use crate::player::Player;
use log::info;

/// Search-driven player.
pub struct AiPlayer {
    name: String,
    checker: Checker,
    depth: u32,
    engine: SearchEngine,
    move_count: usize,
    last_score: Option<i32>,
}

impl AiPlayer {
    pub fn new(name: &str, checker: Checker, tiebreak: TieBreak, depth: u32) -> Self {
        Self {
            name: name.to_string(),
            checker,
            depth,
            engine: SearchEngine::new(tiebreak),
            move_count: 0,
            last_score: None,
        }
    }

    /// Same as `new` but random tie-breaks replay identically for a given seed.
    pub fn with_seed(
        name: &str,
        checker: Checker,
        tiebreak: TieBreak,
        depth: u32,
        seed: u64,
    ) -> Self {
        Self {
            engine: SearchEngine::with_seed(tiebreak, seed),
            ..Self::new(name, checker, tiebreak, depth)
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn tiebreak(&self) -> TieBreak {
        self.engine.tiebreak()
    }

    /// Score of the most recent move this player chose.
    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }
}

impl Player for AiPlayer {
    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Coord>, GameError> {
        let result = self.engine.best_move(board, self.depth, self.checker)?;
        match result.best {
            Some(mv) => {
                info!(
                    "{} places '{}' at {} (score {}, {} nodes)",
                    self.label(),
                    self.checker,
                    mv,
                    result.score,
                    self.engine.nodes_evaluated()
                );
                self.last_score = Some(result.score);
                Ok(Some(mv))
            }
            None => Err(GameError::NoMoveFound {
                player: self.label(),
            }),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        format!(
            "AI Player {{name: {}, checker: {}, tie-break: {}, depth: {}}}",
            self.name,
            self.checker,
            self.engine.tiebreak(),
            self.depth
        )
    }

    fn checker(&self) -> Checker {
        self.checker
    }

    fn move_count(&self) -> usize {
        self.move_count
    }

    fn record_move(&mut self) {
        self.move_count += 1;
    }
}
