use crate::core::{Board, Checker, CheckerPair};
use crate::error::GameError;
use crate::game::{Game, GameOutcome};
use crate::player::{AiPlayer, TieBreak};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct AiSetup {
    pub tiebreak: TieBreak,
    pub depth: u32,
}

#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub board_dim: usize,
    pub checkers: CheckerPair,
    pub ai1: AiSetup,
    pub ai2: AiSetup,
    /// Game `i` seeds its random tie-breaks from `base_seed + i`.
    pub base_seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Checker>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub ties: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_result(&mut self, result: GameResult, p1: Checker) {
        self.total_games += 1;
        match result.winner {
            Some(c) if c == p1 => self.p1_wins += 1,
            Some(_) => self.p2_wins += 1,
            None => self.ties += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

/// Plays `num_games` AI-vs-AI games. Games run in parallel; each search
/// stays on its own thread.
pub fn run_selfplay(config: &SelfPlayConfig) -> Result<SelfPlayStats, GameError> {
    let results: Vec<GameResult> = (0..config.num_games)
        .into_par_iter()
        .map(|i| play_one(config, config.base_seed.wrapping_add(i as u64)))
        .collect::<Result<_, _>>()?;

    let mut stats = SelfPlayStats::new();
    for result in results {
        stats.add_result(result, config.checkers.first());
    }
    log::info!(
        "self-play done: {} games, p1 {} / p2 {} / ties {}",
        stats.total_games,
        stats.p1_wins,
        stats.p2_wins,
        stats.ties
    );
    Ok(stats)
}

fn play_one(config: &SelfPlayConfig, seed: u64) -> Result<GameResult, GameError> {
    let start_time = Instant::now();
    let board = Board::new(config.board_dim, config.checkers)?;
    let mut game = Game::new(board);

    let mut p1 = AiPlayer::with_seed(
        "AI-P1",
        config.checkers.first(),
        config.ai1.tiebreak,
        config.ai1.depth,
        seed,
    );
    let mut p2 = AiPlayer::with_seed(
        "AI-P2",
        config.checkers.second(),
        config.ai2.tiebreak,
        config.ai2.depth,
        seed.wrapping_mul(31).wrapping_add(7),
    );

    let outcome = game.play(&mut p1, &mut p2, |_, _| {})?;
    let winner = match outcome {
        GameOutcome::Win { checker, .. } => Some(checker),
        _ => None,
    };
    Ok(GameResult {
        winner,
        moves: game.history.len(),
        time_ms: start_time.elapsed().as_millis(),
    })
}
