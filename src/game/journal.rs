use super::{GameOutcome, MoveRecord};
use log::warn;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Move-by-move journal written to a sink owned by the game that uses it.
///
/// Write failures are reported through `log` and never interrupt play.
/// The sink is flushed when the journal is dropped.
pub struct MoveLog {
    sink: Box<dyn Write + Send>,
}

impl MoveLog {
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Self { sink }
    }

    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(Box::new(BufWriter::new(file))))
    }

    pub fn game_started(&mut self, players: &[String]) {
        let line = format!("game started: {}", players.join(" vs "));
        self.write_line(&line);
    }

    pub fn record_move(&mut self, mv: &MoveRecord) {
        let line = format!(
            "move {}: {} ({}) -> {}",
            mv.ply, mv.player, mv.checker, mv.coord
        );
        self.write_line(&line);
    }

    pub fn record_outcome(&mut self, outcome: &GameOutcome) {
        let line = format!("result: {}", outcome);
        self.write_line(&line);
    }

    fn write_line(&mut self, line: &str) {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        if let Err(e) = writeln!(self.sink, "[{}] {}", stamp, line) {
            warn!("move log write failed: {}", e);
        }
    }
}

impl Drop for MoveLog {
    fn drop(&mut self) {
        if let Err(e) = self.sink.flush() {
            warn!("move log flush failed: {}", e);
        }
    }
}
