use super::{GameOutcome, MoveRecord};
use crate::core::{Board, CheckerPair};
use crate::error::GameError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serializable account of a finished (or abandoned) game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub started_at: DateTime<Local>,
    pub width: usize,
    pub height: usize,
    pub checkers: CheckerPair,
    pub players: Vec<String>,
    pub moves: Vec<MoveRecord>,
    pub outcome: Option<GameOutcome>,
}

impl GameRecord {
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        self.write_to(File::create(path)?)
    }

    /// Writes the record as pretty JSON and flushes, so a failed final
    /// write is reported instead of lost on drop.
    pub fn write_to<W: Write>(&self, out: W) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(out);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        let record = serde_json::from_reader(BufReader::new(file))?;
        Ok(record)
    }

    /// Rebuilds the final board by replaying every move.
    pub fn replay(&self) -> Result<Board, GameError> {
        let mut board = Board::with_size(self.width, self.height, self.checkers)?;
        for mv in &self.moves {
            board.place(mv.checker, mv.coord.row, mv.coord.col)?;
        }
        Ok(board)
    }
}
