//! Game rules: winning lines and board evaluation.
//!
//! The rules never pick moves; they only answer questions about a board.
//! Move selection lives in `agent`.

pub mod engine;
pub mod patterns;

pub use engine::{
    apply_move, check_draw, check_win, evaluate, is_occupied, new_game, submit_human_move,
    winning_pattern, GameOutcome,
};
pub use patterns::{WIN_LINES, WIN_PATTERNS};
