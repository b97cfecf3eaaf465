//! Human-vs-agent game session.
//!
//! Holds the mutable state a front end observes (board, outcome, whether
//! input is locked while the agent thinks) and enforces move order:
//! - the human opens and moves only on their turn
//! - the agent replies once per non-final human move
//! - nothing moves after a win or draw until `reset`

mod game;
mod snapshot;

pub use game::{AgentReply, GameSession, MoveHistory, SessionBuilder, TurnReport};
pub use snapshot::GameSnapshot;
