//! Serializable session state.

use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineError, GameRngState, Player, Result};
use crate::rules::{evaluate, GameOutcome};

use super::game::MoveHistory;

/// A game in progress, frozen.
///
/// Captures the RNG position too, so a restored session makes the same
/// random fallback moves the original would have.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub outcome: GameOutcome,
    pub awaiting_agent: bool,
    pub history: MoveHistory,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    ///
    /// Fails with `Snapshot` for malformed bytes and `InvalidSnapshot` when
    /// the decoded state fails `validate`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let snapshot: GameSnapshot = bincode::deserialize(bytes)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that the snapshot describes a game a session could have reached.
    ///
    /// The history is replayed on an empty board: it must alternate from the
    /// human, number its records in order, stop at the first terminal
    /// outcome, and rebuild `board` exactly. `outcome` must match the replay
    /// and `awaiting_agent` must hold exactly when the human moved last in a
    /// game still in progress.
    pub fn validate(&self) -> Result<()> {
        let mut replay = Board::new();
        let mut outcome = GameOutcome::InProgress;

        for (i, record) in self.history.iter().enumerate() {
            if outcome.is_terminal() {
                return Err(invalid(format!("move {} played after {}", i, outcome)));
            }
            if record.sequence as usize != i {
                return Err(invalid(format!(
                    "record {} has sequence {}",
                    i, record.sequence
                )));
            }

            let expected = if i % 2 == 0 { Player::Human } else { Player::Agent };
            let player = record.mv.player();
            if player != expected {
                return Err(invalid(format!("move {} by {}, expected {}", i, player, expected)));
            }

            replay
                .place(player, record.mv.board_index())
                .map_err(|err| invalid(format!("move {}: {}", i, err)))?;
            outcome = evaluate(&replay, player);
        }

        if replay != self.board {
            return Err(invalid("history does not match board".to_string()));
        }
        if outcome != self.outcome {
            return Err(invalid(format!(
                "outcome {} but board says {}",
                self.outcome, outcome
            )));
        }

        let agent_owes_reply = !outcome.is_terminal() && self.history.len() % 2 == 1;
        if self.awaiting_agent != agent_owes_reply {
            return Err(invalid(format!(
                "awaiting_agent is {} after {} moves",
                self.awaiting_agent,
                self.history.len()
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidSnapshot { reason }
}
