//! # tictactoe-ai
//!
//! Tic-tac-toe board engine with a rule-based opponent.
//!
//! ## Design Principles
//!
//! 1. **Plain values**: Boards are `Copy` values. Every query is a pure
//!    function; mutable, observable state lives only in `GameSession`.
//!
//! 2. **Bit masks**: Each player's cells are a 9-bit `CellMask`, and the
//!    eight winning lines are precomputed masks. Win and block checks are an
//!    AND plus a popcount.
//!
//! 3. **Faithful, beatable agent**: The agent tries win, block, center, then
//!    a random free cell. No corner or fork play, so it can lose.
//!
//! ## Modules
//!
//! - `core`: Players, moves, board, cell masks, RNG, configuration, errors
//! - `rules`: Winning lines, win/draw checks, game outcome
//! - `agent`: Move selection policies and the agent's reply
//! - `session`: One game's state machine and snapshots
//!
//! ## Example
//!
//! ```
//! use tictactoe_ai::{evaluate, GameOutcome, GameRng, Player};
//! use tictactoe_ai::{agent_respond, new_game, submit_human_move};
//!
//! let mut rng = GameRng::new(7);
//! let board = submit_human_move(&new_game(), 0).unwrap();
//! assert_eq!(evaluate(&board, Player::Human), GameOutcome::InProgress);
//!
//! let board = agent_respond(&board, &mut rng).unwrap();
//! assert!(board.is_occupied(4));
//! ```

pub mod core;
pub mod rules;
pub mod agent;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Move, MoveRecord,
    Board, CellMask, CELL_COUNT, CENTER,
    GameRng, GameRngState,
    EngineConfig,
    EngineError, Result,
};

pub use crate::rules::{
    apply_move, check_draw, check_win, evaluate, is_occupied, new_game, submit_human_move,
    winning_pattern, GameOutcome, WIN_LINES, WIN_PATTERNS,
};

pub use crate::agent::{
    agent_respond, choose_agent_move,
    HeuristicPolicy, MoveChoice, MovePolicy, Tactic, UniformPolicy,
};

pub use crate::session::{AgentReply, GameSession, GameSnapshot, SessionBuilder, TurnReport};
