use crate::core::{Board, Checker, Coord};
use crate::error::GameError;

/// Anything that can take a turn.
pub trait Player {
    /// Picks the next move on `board`.
    ///
    /// `Ok(None)` means the player gave up (a human asking to quit). The
    /// board may be mutated during the call but must be returned unchanged.
    fn choose_move(&mut self, board: &mut Board) -> Result<Option<Coord>, GameError>;

    fn name(&self) -> &str;

    fn checker(&self) -> Checker;

    fn move_count(&self) -> usize;

    /// Called by the driver once the chosen move is on the board.
    fn record_move(&mut self);

    fn label(&self) -> String {
        format!("{} ({})", self.name(), self.checker())
    }

    fn describe(&self) -> String {
        self.label()
    }
}
