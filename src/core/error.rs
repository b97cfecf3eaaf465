//! Error types for the engine.

use thiserror::Error;

/// Errors returned by board and session operations.
///
/// Variants other than `InvalidSnapshot` and `Snapshot` are precondition
/// violations by the caller; the board is left untouched when one is returned.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    #[error("cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("cell {index} is out of bounds (must be 0-8)")]
    OutOfBounds { index: usize },

    #[error("slot {slot} holds a move for cell {index}")]
    MisplacedMove { slot: usize, index: usize },

    #[error("invalid board '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },

    #[error("board is full")]
    BoardFull,

    #[error("game already over")]
    GameOver,

    #[error("waiting for the agent to respond")]
    AwaitingAgent,

    #[error("agent cannot move before the human")]
    NotAgentTurn,

    #[error("inconsistent snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::Occupied { index: 4 }.to_string(),
            "cell 4 is already occupied"
        );
        assert_eq!(
            EngineError::OutOfBounds { index: 12 }.to_string(),
            "cell 12 is out of bounds (must be 0-8)"
        );
        assert_eq!(EngineError::GameOver.to_string(), "game already over");
    }
}
