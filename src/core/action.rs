//! Move representation: a player claiming one cell.
//!
//! A `Move` is immutable once created. The board stores it in the slot whose
//! index matches `board_index`, so a slot and its move always agree.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A single placement on the board.
///
/// ## Example
///
/// ```
/// use tictactoe_ai::core::{Move, Player};
///
/// let mv = Move::new(Player::Agent, 4);
/// assert_eq!(mv.player(), Player::Agent);
/// assert_eq!(mv.board_index(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    board_index: usize,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, board_index: usize) -> Self {
        Self {
            player,
            board_index,
        }
    }

    /// Who made the move.
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Cell the move occupies (0-8, row-major).
    #[must_use]
    pub const fn board_index(&self) -> usize {
        self.board_index
    }
}

/// A move with its position in the game's history.
///
/// Used for:
/// - Replaying or auditing a finished game
/// - Snapshots of a session in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move taken.
    pub mv: Move,

    /// Zero-based position in the game (0 = opening move).
    pub sequence: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mv: Move, sequence: u32) -> Self {
        Self { mv, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_accessors() {
        let mv = Move::new(Player::Human, 7);

        assert_eq!(mv.player(), Player::Human);
        assert_eq!(mv.board_index(), 7);
    }

    #[test]
    fn test_move_equality() {
        let m1 = Move::new(Player::Human, 3);
        let m2 = Move::new(Player::Human, 3);
        let m3 = Move::new(Player::Agent, 3);
        let m4 = Move::new(Player::Human, 4);

        assert_eq!(m1, m2);
        assert_ne!(m1, m3);
        assert_ne!(m1, m4);
    }

    #[test]
    fn test_move_record() {
        let mv = Move::new(Player::Agent, 4);
        let record = MoveRecord::new(mv, 1);

        assert_eq!(record.mv, mv);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Move::new(Player::Human, 0), 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
