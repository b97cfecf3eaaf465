//! The 3x3 board.
//!
//! ## Layout
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```
//!
//! ## Representation
//!
//! Nine optional `Move` slots, plus one `CellMask` per player kept in sync
//! with the slots. The slots are the source of truth for serialization;
//! the masks back every rule and heuristic query.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::action::Move;
use super::error::{EngineError, Result};
use super::mask::CellMask;
use super::player::{Player, PlayerMap};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Cell indices, at most nine, kept inline.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

/// Board state: which player, if any, holds each cell.
///
/// Invariants:
/// - slot `i` is empty or holds a `Move` with `board_index() == i`
/// - a filled slot is never overwritten
/// - `occupancy[Human]` and `occupancy[Agent]` are disjoint and together
///   cover exactly the filled slots
///
/// ## Example
///
/// ```
/// use tictactoe_ai::core::{Board, Player};
///
/// let board = Board::new().with_move(Player::Human, 0).unwrap();
/// assert!(board.is_occupied(0));
/// assert!(board.with_move(Player::Agent, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Option<Move>; CELL_COUNT]", into = "[Option<Move>; CELL_COUNT]")]
pub struct Board {
    slots: [Option<Move>; CELL_COUNT],
    occupancy: PlayerMap<CellMask>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any move sits on `index`.
    ///
    /// Out-of-range indices are never occupied.
    #[must_use]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupied().contains(index)
    }

    /// The move in a cell, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Move> {
        self.slots.get(index).copied().flatten()
    }

    /// All nine slots in index order.
    #[must_use]
    pub fn slots(&self) -> &[Option<Move>; CELL_COUNT] {
        &self.slots
    }

    /// Cells held by `player`.
    #[must_use]
    pub fn occupancy(&self, player: Player) -> CellMask {
        self.occupancy[player]
    }

    /// Cells held by either player.
    #[must_use]
    pub fn occupied(&self) -> CellMask {
        self.occupancy[Player::Human].union(self.occupancy[Player::Agent])
    }

    /// Cells nobody holds yet.
    #[must_use]
    pub fn free(&self) -> CellMask {
        self.occupied().complement()
    }

    /// Free cell indices in ascending order.
    #[must_use]
    pub fn free_cells(&self) -> CellList {
        self.free().iter().collect()
    }

    /// Number of moves made so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.occupied().count() as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    /// True once all nine cells are filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Return a copy of this board with `player` on `index`.
    ///
    /// Fails with `OutOfBounds` for `index >= 9` and `Occupied` if the cell
    /// is taken. `self` is never modified.
    pub fn with_move(&self, player: Player, index: usize) -> Result<Board> {
        let mut next = *self;
        next.place(player, index)?;
        Ok(next)
    }

    /// Place `player` on `index` in place.
    ///
    /// Same contract as `with_move`: on error the board is unchanged.
    pub fn place(&mut self, player: Player, index: usize) -> Result<()> {
        if index >= CELL_COUNT {
            return Err(EngineError::OutOfBounds { index });
        }
        if self.is_occupied(index) {
            return Err(EngineError::Occupied { index });
        }

        self.slots[index] = Some(Move::new(player, index));
        self.occupancy[player] = self.occupancy[player].with(index);
        Ok(())
    }
}

impl TryFrom<[Option<Move>; CELL_COUNT]> for Board {
    type Error = EngineError;

    fn try_from(slots: [Option<Move>; CELL_COUNT]) -> Result<Self> {
        let mut board = Board::new();
        for (slot, mv) in slots.iter().enumerate() {
            if let Some(mv) = mv {
                if mv.board_index() != slot {
                    return Err(EngineError::MisplacedMove {
                        slot,
                        index: mv.board_index(),
                    });
                }
                board.place(mv.player(), slot)?;
            }
        }
        Ok(board)
    }
}

impl From<Board> for [Option<Move>; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.slots
    }
}

/// Parse a board from nine cell glyphs.
///
/// `X` is the human, `O` the agent, `.`/`_`/`-` an empty cell. Whitespace
/// and `|` separators are ignored, so both `"XX......."` and the
/// `Display` output parse.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| EngineError::InvalidBoard {
            input: s.to_string(),
            reason,
        };

        let mut board = Board::new();
        let mut index = 0;
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if index >= CELL_COUNT {
                return Err(invalid(format!("more than {} cells", CELL_COUNT)));
            }
            match c.to_ascii_uppercase() {
                'X' => board.place(Player::Human, index)?,
                'O' => board.place(Player::Agent, index)?,
                '.' | '_' | '-' => {}
                other => return Err(invalid(format!("unexpected character '{}'", other))),
            }
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(invalid(format!("expected {} cells, got {}", CELL_COUNT, index)));
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let glyph = self
                    .get(row * 3 + col)
                    .map_or('.', |mv| mv.player().symbol());
                write!(f, "{}", glyph)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert!(board.is_empty());
        assert!(!board.is_full());
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.free_cells().as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!((0..CELL_COUNT).all(|i| !board.is_occupied(i)));
    }

    #[test]
    fn test_place_sets_slot_and_mask() {
        let mut board = Board::new();
        board.place(Player::Agent, 4).unwrap();

        assert!(board.is_occupied(4));
        assert_eq!(board.get(4), Some(Move::new(Player::Agent, 4)));
        assert!(board.occupancy(Player::Agent).contains(4));
        assert!(board.occupancy(Player::Human).is_empty());
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_place_occupied_is_refused() {
        let mut board = Board::new();
        board.place(Player::Human, 2).unwrap();

        let before = board;
        let err = board.place(Player::Agent, 2).unwrap_err();

        assert!(matches!(err, EngineError::Occupied { index: 2 }));
        assert_eq!(board, before);
        assert_eq!(board.get(2).map(|m| m.player()), Some(Player::Human));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        let err = board.place(Player::Human, 9).unwrap_err();

        assert!(matches!(err, EngineError::OutOfBounds { index: 9 }));
        assert!(board.is_empty());
        assert!(!board.is_occupied(9));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_with_move_leaves_original() {
        let board = Board::new();
        let next = board.with_move(Player::Human, 0).unwrap();

        assert!(board.is_empty());
        assert!(next.is_occupied(0));
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XO. / .X. / ..O".replace('/', "").parse().unwrap();

        assert_eq!(board.occupancy(Player::Human), CellMask::from_cells(&[0, 4]));
        assert_eq!(board.occupancy(Player::Agent), CellMask::from_cells(&[1, 8]));
        assert_eq!(board.to_string(), "X|O|.\n.|X|.\n.|.|O");

        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "XO".parse::<Board>(),
            Err(EngineError::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XO.......X".parse::<Board>(),
            Err(EngineError::InvalidBoard { .. })
        ));
        assert!(matches!(
            "XZ.......".parse::<Board>(),
            Err(EngineError::InvalidBoard { .. })
        ));
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX XOO OXX".parse().unwrap();

        assert!(board.is_full());
        assert!(board.free_cells().is_empty());
        assert_eq!(board.move_count(), 9);
    }

    #[test]
    fn test_serde_rebuilds_masks() {
        let board: Board = "X.. .O. ..X".parse().unwrap();

        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(board, deserialized);
        assert_eq!(deserialized.occupancy(Player::Human), CellMask::from_cells(&[0, 8]));
    }

    #[test]
    fn test_serde_rejects_misplaced_move() {
        let mut slots: [Option<Move>; CELL_COUNT] = [None; CELL_COUNT];
        slots[0] = Some(Move::new(Player::Human, 3));

        let err = Board::try_from(slots).unwrap_err();
        assert!(matches!(err, EngineError::MisplacedMove { slot: 0, index: 3 }));
    }
}
