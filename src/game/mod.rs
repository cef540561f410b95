pub mod journal;
pub mod record;

pub use journal::MoveLog;
pub use record::GameRecord;

use crate::core::{Board, Checker, Coord};
use crate::error::GameError;
use crate::player::Player;
use chrono::{DateTime, Local};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub ply: usize,
    pub player: String,
    pub checker: Checker,
    pub coord: Coord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameOutcome {
    Win {
        name: String,
        checker: Checker,
        moves: usize,
    },
    Tie,
    /// A player quit before the game was decided.
    Aborted { name: String },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Checker> {
        match self {
            GameOutcome::Win { checker, .. } => Some(*checker),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameOutcome::Win {
                name,
                checker,
                moves,
            } => write!(f, "{} ({}) wins in {} moves.", name, checker, moves),
            GameOutcome::Tie => write!(f, "It's a tie!"),
            GameOutcome::Aborted { name } => write!(f, "Game is terminated by {}!", name),
        }
    }
}

/// Turn driver: two players, one board.
pub struct Game {
    pub board: Board,
    pub history: Vec<MoveRecord>,
    players: Vec<String>,
    started_at: DateTime<Local>,
    log: Option<MoveLog>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Game {
            board,
            history: Vec::new(),
            players: Vec::new(),
            started_at: Local::now(),
            log: None,
        }
    }

    pub fn with_log(mut self, log: MoveLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Plays until someone wins, the board fills up or a player quits.
    /// `p1` moves first. `on_move` sees the board after every applied move.
    pub fn play<F>(
        &mut self,
        p1: &mut dyn Player,
        p2: &mut dyn Player,
        mut on_move: F,
    ) -> Result<GameOutcome, GameError>
    where
        F: FnMut(&Board, &MoveRecord),
    {
        let pair = self.board.checkers();
        if p1.checker() == p2.checker() || !pair.contains(p1.checker()) || !pair.contains(p2.checker())
        {
            return Err(GameError::MismatchedPlayers);
        }

        self.players = vec![p1.label(), p2.label()];
        info!("game started: {} vs {}", self.players[0], self.players[1]);
        if let Some(log) = self.log.as_mut() {
            log.game_started(&self.players);
        }

        let mut players: [&mut dyn Player; 2] = [p1, p2];
        let mut turn = 0;
        loop {
            let player = &mut *players[turn % 2];

            let Some(coord) = player.choose_move(&mut self.board)? else {
                warn!("{} left the game", player.label());
                return Ok(self.finish(GameOutcome::Aborted {
                    name: player.name().to_string(),
                }));
            };

            let checker = player.checker();
            self.board.place(checker, coord.row, coord.col)?;
            player.record_move();

            let record = MoveRecord {
                ply: self.history.len() + 1,
                player: player.name().to_string(),
                checker,
                coord,
            };
            if let Some(log) = self.log.as_mut() {
                log.record_move(&record);
            }
            on_move(&self.board, &record);
            self.history.push(record);

            if self.board.is_win_for(checker)? {
                return Ok(self.finish(GameOutcome::Win {
                    name: player.name().to_string(),
                    checker,
                    moves: player.move_count(),
                }));
            }
            if self.board.is_full() {
                return Ok(self.finish(GameOutcome::Tie));
            }
            turn += 1;
        }
    }

    fn finish(&mut self, outcome: GameOutcome) -> GameOutcome {
        info!("game over: {}", outcome);
        if let Some(log) = self.log.as_mut() {
            log.record_outcome(&outcome);
        }
        outcome
    }

    pub fn to_record(&self, outcome: Option<GameOutcome>) -> GameRecord {
        GameRecord {
            started_at: self.started_at,
            width: self.board.width(),
            height: self.board.height(),
            checkers: self.board.checkers(),
            players: self.players.clone(),
            moves: self.history.clone(),
            outcome,
        }
    }
}
