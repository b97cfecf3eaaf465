//! Move selection policies.
//!
//! Policies are trait-based so a session or a test harness can swap the
//! opponent:
//! - `HeuristicPolicy`: the fixed win / block / center / random priority
//! - `UniformPolicy`: any free cell, uniformly

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, CellMask, GameRng, Player, CENTER};
use crate::rules::WIN_PATTERNS;

/// Which rule produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tactic {
    /// Completes one of the mover's lines.
    Win,
    /// Fills the last gap in one of the opponent's lines.
    Block,
    /// Takes the center cell.
    Center,
    /// Random free cell.
    Random,
}

impl std::fmt::Display for Tactic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tactic::Win => "win",
            Tactic::Block => "block",
            Tactic::Center => "center",
            Tactic::Random => "random",
        };
        write!(f, "{}", name)
    }
}

/// A chosen cell and the rule that picked it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveChoice {
    pub index: usize,
    pub tactic: Tactic,
}

/// Policy for choosing a cell on the mover's behalf.
pub trait MovePolicy: Send + Sync {
    /// Pick a free cell, or `None` if the board is full.
    ///
    /// Never returns an occupied index.
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<MoveChoice>;
}

/// The agent's fixed-priority heuristic.
///
/// Tried in order, first match wins:
/// 1. complete one of its own lines
/// 2. block a line the opponent is one cell from completing
/// 3. take the center
/// 4. take a random free cell, resampling until one is free
///
/// There is deliberately no corner or fork logic, so a careful human can
/// beat it.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicPolicy {
    side: Player,
}

impl Default for HeuristicPolicy {
    fn default() -> Self {
        Self::new(Player::Agent)
    }
}

impl HeuristicPolicy {
    /// Heuristic playing as `side`.
    #[must_use]
    pub fn new(side: Player) -> Self {
        Self { side }
    }

    /// The side this policy moves for.
    #[must_use]
    pub fn side(&self) -> Player {
        self.side
    }
}

impl MovePolicy for HeuristicPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<MoveChoice> {
        if board.is_full() {
            return None;
        }

        let free = board.free();
        let choice = if let Some(index) = line_gap(board.occupancy(self.side), free) {
            MoveChoice { index, tactic: Tactic::Win }
        } else if let Some(index) = line_gap(board.occupancy(self.side.opponent()), free) {
            MoveChoice { index, tactic: Tactic::Block }
        } else if free.contains(CENTER) {
            MoveChoice { index: CENTER, tactic: Tactic::Center }
        } else {
            // Terminates: the board has at least one free cell.
            let mut index = rng.gen_cell();
            while board.is_occupied(index) {
                index = rng.gen_cell();
            }
            MoveChoice { index, tactic: Tactic::Random }
        };

        debug!(side = %self.side, index = choice.index, tactic = %choice.tactic, "heuristic move");
        Some(choice)
    }
}

/// A free cell that is the only one missing from some pattern, given `own`.
///
/// Subtracting `own` from a pattern leaves the cells still needed; exactly one
/// needed cell that is also free is a winning (or blocking) move.
fn line_gap(own: CellMask, free: CellMask) -> Option<usize> {
    WIN_PATTERNS.iter().find_map(|&pattern| {
        let missing = pattern.difference(own);
        if missing.count() == 1 && free.is_superset_of(missing) {
            missing.first()
        } else {
            None
        }
    })
}

/// Uniformly random free cell.
///
/// Stands in for an unskilled human in simulations and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicy;

impl MovePolicy for UniformPolicy {
    fn choose(&self, board: &Board, rng: &mut GameRng) -> Option<MoveChoice> {
        let free = board.free_cells();
        rng.choose(&free).map(|&index| MoveChoice {
            index,
            tactic: Tactic::Random,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{check_win, WIN_PATTERNS};

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn choose(s: &str) -> MoveChoice {
        let mut rng = GameRng::new(42);
        HeuristicPolicy::default().choose(&board(s), &mut rng).unwrap()
    }

    #[test]
    fn test_takes_win() {
        let choice = choose("OO. ... ...");
        assert_eq!(choice, MoveChoice { index: 2, tactic: Tactic::Win });
    }

    #[test]
    fn test_prefers_win_over_block() {
        // Agent can win at 5, human threatens 2
        let choice = choose("XX. OO. X..");
        assert_eq!(choice, MoveChoice { index: 5, tactic: Tactic::Win });
    }

    #[test]
    fn test_blocks_human() {
        let choice = choose("XX. ... ...");
        assert_eq!(choice, MoveChoice { index: 2, tactic: Tactic::Block });
    }

    #[test]
    fn test_takes_center() {
        assert_eq!(choose("... ... ..."), MoveChoice { index: 4, tactic: Tactic::Center });
        assert_eq!(choose("X.. ... ..."), MoveChoice { index: 4, tactic: Tactic::Center });
    }

    #[test]
    fn test_skips_gap_already_filled() {
        // Agent's top row gap at 2 is held by the human
        let b = board("OOX .X. ...");
        let mut rng = GameRng::new(1);
        let choice = HeuristicPolicy::default().choose(&b, &mut rng).unwrap();

        // Human 2,4 threatens 6 on the anti-diagonal
        assert_eq!(choice, MoveChoice { index: 6, tactic: Tactic::Block });
    }

    #[test]
    fn test_random_fallback_picks_free_cell() {
        // No wins, no threats, center taken
        let b = board("X.. .O. ...");
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            let choice = HeuristicPolicy::default().choose(&b, &mut rng).unwrap();

            assert_eq!(choice.tactic, Tactic::Random);
            assert!(!b.is_occupied(choice.index));
        }
    }

    #[test]
    fn test_multiple_wins_completes_some_line() {
        // Agent can finish the top row (2) or the left column (6)
        let b = board("OO. OX. .XX");
        let choice = choose("OO. OX. .XX");

        assert_eq!(choice.tactic, Tactic::Win);
        assert!(choice.index == 2 || choice.index == 6);
        let after = b.with_move(Player::Agent, choice.index).unwrap();
        assert!(check_win(&after, Player::Agent));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut rng = GameRng::new(0);
        let b = board("XOX XOO OXX");

        assert_eq!(HeuristicPolicy::default().choose(&b, &mut rng), None);
        assert_eq!(UniformPolicy.choose(&b, &mut rng), None);
    }

    #[test]
    fn test_heuristic_for_human_side() {
        let policy = HeuristicPolicy::new(Player::Human);
        let mut rng = GameRng::new(0);

        let choice = policy.choose(&board("XX. OO. ..."), &mut rng).unwrap();
        assert_eq!(policy.side(), Player::Human);
        assert_eq!(choice, MoveChoice { index: 2, tactic: Tactic::Win });
    }

    #[test]
    fn test_uniform_policy_picks_free_cell() {
        let b = board("XOX .O. X.O");
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let choice = UniformPolicy.choose(&b, &mut rng).unwrap();
            assert!(!b.is_occupied(choice.index));
        }
    }

    #[test]
    fn test_line_gap_needs_free_cell() {
        let own = CellMask::from_cells(&[0, 1]);
        let free_without_2 = CellMask::FULL.difference(CellMask::from_cells(&[0, 1, 2]));

        assert_eq!(line_gap(own, free_without_2), None);
        assert_eq!(line_gap(own, CellMask::FULL.difference(own)), Some(2));
        assert!(WIN_PATTERNS.iter().all(|p| p.count() == 3));
    }
}
