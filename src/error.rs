use thiserror::Error;

/// Engine errors. Every variant is a caller or state-tracking defect, never
/// an expected runtime condition, so callers propagate them instead of retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: &'static str,
    },
    #[error("invalid checker '{0}'")]
    InvalidChecker(char),
    #[error("no available moves")]
    NoAvailableMoves,
    #[error("{player} did not produce a move on a live board")]
    NoMoveFound { player: String },
    #[error("players must hold the two distinct checkers of the board")]
    MismatchedPlayers,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
