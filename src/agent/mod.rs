//! The agent: picks and plays the computer's reply.
//!
//! `choose_agent_move` runs the fixed-priority heuristic for the agent side;
//! `agent_respond` plays the chosen cell. A caller may wait any amount of time
//! before calling `agent_respond`; it has no effect on the result.

pub mod policy;

pub use policy::{HeuristicPolicy, MoveChoice, MovePolicy, Tactic, UniformPolicy};

use crate::core::{Board, EngineError, GameRng, Player, Result};

/// Cell the agent would play on `board`.
///
/// Returns `None` only when the board is full. The index is always free.
pub fn choose_agent_move(board: &Board, rng: &mut GameRng) -> Option<usize> {
    HeuristicPolicy::default()
        .choose(board, rng)
        .map(|choice| choice.index)
}

/// Return `board` with the agent's chosen move applied.
///
/// Fails with `BoardFull` when there is nowhere to play.
pub fn agent_respond(board: &Board, rng: &mut GameRng) -> Result<Board> {
    let index = choose_agent_move(board, rng).ok_or(EngineError::BoardFull)?;
    board.with_move(Player::Agent, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_agent_move_scenarios() {
        let mut rng = GameRng::new(42);

        let win: Board = "OO. ... ...".parse().unwrap();
        assert_eq!(choose_agent_move(&win, &mut rng), Some(2));

        let block: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(choose_agent_move(&block, &mut rng), Some(2));

        assert_eq!(choose_agent_move(&Board::new(), &mut rng), Some(4));
    }

    #[test]
    fn test_agent_respond_places_agent() {
        let mut rng = GameRng::new(42);
        let board: Board = "X.. ... ...".parse().unwrap();

        let next = agent_respond(&board, &mut rng).unwrap();

        assert_eq!(next.move_count(), 2);
        assert_eq!(next.get(4).map(|m| m.player()), Some(Player::Agent));
        assert_eq!(next.get(0), board.get(0));
    }

    #[test]
    fn test_agent_respond_full_board() {
        let mut rng = GameRng::new(42);
        let board: Board = "XOX XOO OXX".parse().unwrap();

        assert!(matches!(
            agent_respond(&board, &mut rng),
            Err(EngineError::BoardFull)
        ));
    }
}
