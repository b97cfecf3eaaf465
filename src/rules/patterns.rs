//! The eight winning lines.

use crate::core::CellMask;

/// Winning lines as cell index triples.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Winning lines as bit masks, built at compile time from `WIN_LINES`.
///
/// Iteration order carries no meaning; callers that pick among several
/// matching lines must not rely on it.
pub const WIN_PATTERNS: [CellMask; 8] = {
    let mut patterns = [CellMask::EMPTY; 8];
    let mut i = 0;
    while i < WIN_LINES.len() {
        patterns[i] = CellMask::from_cells(&WIN_LINES[i]);
        i += 1;
    }
    patterns
};
