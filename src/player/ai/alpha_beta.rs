use super::tiebreak::TieBreak;
use crate::core::{Board, Checker, Coord};
use crate::error::GameError;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const WIN_BASE: i32 = 100;
pub const TIE_BASE: i32 = 0;
pub const LOSE_BASE: i32 = -100;

/// Outcome of a search: the chosen move (none on a finished board) and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<Coord>,
    pub score: i32,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// One engine is reused for every ply: the search state is just the board,
/// the window, the remaining depth and whose turn it is. The board is mutated
/// in place through `Board::with_move`, never copied.
///
/// Scores are from the root mover's point of view: a win is
/// `WIN_BASE + depth_remaining`, a loss `LOSE_BASE - depth_remaining`, so
/// quicker wins and slower losses rank higher. Positions still open when the
/// depth runs out count as ties.
pub struct SearchEngine {
    tiebreak: TieBreak,
    rng: StdRng,
    nodes: u64,
}

impl SearchEngine {
    pub fn new(tiebreak: TieBreak) -> Self {
        Self {
            tiebreak,
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(tiebreak: TieBreak, seed: u64) -> Self {
        Self {
            tiebreak,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn tiebreak(&self) -> TieBreak {
        self.tiebreak
    }

    /// Nodes visited by the last `best_move` call.
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes
    }

    /// Best move for `checker` looking `depth_limit` plies ahead.
    ///
    /// The board is left exactly as it was passed in.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        depth_limit: u32,
        checker: Checker,
    ) -> Result<SearchResult, GameError> {
        self.nodes = 0;
        // No line of play outlasts the empty cells.
        let horizon = u32::try_from(board.available_moves().len()).unwrap_or(u32::MAX);
        let depth_limit = depth_limit.min(horizon);
        let result = self.evaluate(board, i32::MIN, i32::MAX, depth_limit, checker, true)?;
        debug!(
            "search for '{}' at depth {}: best={:?} score={} nodes={}",
            checker, depth_limit, result.best, result.score, self.nodes
        );
        Ok(result)
    }

    fn evaluate(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        mut beta: i32,
        depth: u32,
        mover: Checker,
        maximizing: bool,
    ) -> Result<SearchResult, GameError> {
        self.nodes += 1;

        let opponent = board.checkers().opponent(mover)?;
        let hero = if maximizing { mover } else { opponent };
        let villain = if maximizing { opponent } else { mover };
        let depth_bonus = i32::try_from(depth).unwrap_or(i32::MAX);

        if board.is_win_for(hero)? {
            return Ok(SearchResult {
                best: None,
                score: WIN_BASE.saturating_add(depth_bonus),
            });
        }
        if board.is_win_for(villain)? {
            return Ok(SearchResult {
                best: None,
                score: LOSE_BASE.saturating_sub(depth_bonus),
            });
        }
        if board.is_full() {
            return Ok(SearchResult {
                best: None,
                score: TIE_BASE,
            });
        }
        if depth == 0 {
            let chosen = self.tiebreak.pick(board.available_moves(), &mut self.rng)?;
            return Ok(SearchResult {
                best: Some(chosen),
                score: TIE_BASE,
            });
        }

        let mut best = None;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        // Row-major over every cell; a cell empty at the start of the loop is
        // empty again whenever we reach it since each child undoes its move.
        for row in 0..board.height() {
            for col in 0..board.width() {
                if !board.can_place(row, col) {
                    continue;
                }
                let mv = Coord::new(row, col);
                let child = board.with_move(mover, mv, |b| {
                    self.evaluate(b, alpha, beta, depth - 1, opponent, !maximizing)
                })??;

                if maximizing {
                    if child.score > best_score {
                        best_score = child.score;
                        best = Some(mv);
                    }
                    alpha = alpha.max(child.score);
                } else {
                    if child.score < best_score {
                        best_score = child.score;
                        best = Some(mv);
                    }
                    beta = beta.min(child.score);
                }

                if beta <= alpha {
                    return Ok(SearchResult {
                        best,
                        score: best_score,
                    });
                }
            }
        }

        Ok(SearchResult {
            best,
            score: best_score,
        })
    }
}

/// One-shot search with an entropy-seeded engine.
pub fn best_move(
    board: &mut Board,
    depth_limit: u32,
    checker: Checker,
    tiebreak: TieBreak,
) -> Result<(Option<Coord>, i32), GameError> {
    let result = SearchEngine::new(tiebreak).best_move(board, depth_limit, checker)?;
    Ok((result.best, result.score))
}
