//! Core engine types: players, moves, board, RNG, configuration, errors.
//!
//! Everything here is independent of the game rules and the agent's
//! heuristic; those live in `rules` and `agent`.

pub mod player;
pub mod mask;
pub mod action;
pub mod board;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerMap};
pub use mask::{CellMask, CellMaskIter};
pub use action::{Move, MoveRecord};
pub use board::{Board, CellList, CELL_COUNT, CENTER};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
