//! Board evaluation: occupancy, wins, draws, and game outcome.
//!
//! These are the pure functions a front end calls between moves:
//! - `new_game` / `submit_human_move` / `apply_move` build boards
//! - `check_win` / `check_draw` inspect them
//! - `evaluate` maps a board and the side that just moved to a `GameOutcome`

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, CellMask, Player, Result};

use super::patterns::WIN_PATTERNS;

/// State of a game after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No winner yet and free cells remain.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board filled with no line completed.
    Draw,
}

impl GameOutcome {
    /// True for `Won` and `Draw`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameOutcome::Won(p) if *p == player)
    }

    /// The winner, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(p) => Some(*p),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Won(p) => write!(f, "{} won", p),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Start a game: an empty board.
#[must_use]
pub fn new_game() -> Board {
    Board::new()
}

/// Check whether any move sits on `index`.
#[must_use]
pub fn is_occupied(board: &Board, index: usize) -> bool {
    board.is_occupied(index)
}

/// Return `board` with `player` on `index`.
///
/// Refuses occupied cells with `EngineError::Occupied`; never overwrites.
pub fn apply_move(board: &Board, player: Player, index: usize) -> Result<Board> {
    board.with_move(player, index)
}

/// Apply the human's tap.
pub fn submit_human_move(board: &Board, index: usize) -> Result<Board> {
    apply_move(board, Player::Human, index)
}

/// True if `player` holds every cell of some winning line.
#[must_use]
pub fn check_win(board: &Board, player: Player) -> bool {
    winning_pattern(board, player).is_some()
}

/// The first winning line `player` has completed.
#[must_use]
pub fn winning_pattern(board: &Board, player: Player) -> Option<CellMask> {
    let own = board.occupancy(player);
    WIN_PATTERNS
        .iter()
        .copied()
        .find(|&pattern| own.is_superset_of(pattern))
}

/// True if all nine cells are filled.
///
/// Says nothing about wins: a full board with a line is a win, so check
/// `check_win` first.
#[must_use]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

/// Outcome of the game right after `just_moved` played.
///
/// Pure: evaluating the same board twice gives the same answer.
#[must_use]
pub fn evaluate(board: &Board, just_moved: Player) -> GameOutcome {
    let outcome = if check_win(board, just_moved) {
        GameOutcome::Won(just_moved)
    } else if check_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    };

    trace!(player = %just_moved, moves = board.move_count(), %outcome, "evaluated board");
    outcome
}
