//! 9-bit cell set for occupancy and pattern matching.
//!
//! Bit `i` stands for cell `i` (row-major). Win and block detection reduce to
//! `pattern.difference(own)` followed by a popcount.

use serde::{Deserialize, Serialize};

use super::board::CELL_COUNT;

/// Set of cell indices packed into the low 9 bits of a `u16`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellMask(u16);

impl CellMask {
    /// No cells.
    pub const EMPTY: CellMask = CellMask(0);

    /// All nine cells.
    pub const FULL: CellMask = CellMask((1 << CELL_COUNT) - 1);

    /// Mask holding a single cell. Out-of-range indices give `EMPTY`.
    #[inline]
    #[must_use]
    pub const fn single(index: usize) -> Self {
        if index < CELL_COUNT {
            CellMask(1 << index)
        } else {
            CellMask::EMPTY
        }
    }

    /// Build a mask from cell indices. Usable in const context.
    #[must_use]
    pub const fn from_cells(cells: &[usize]) -> Self {
        let mut bits = 0u16;
        let mut i = 0;
        while i < cells.len() {
            bits |= CellMask::single(cells[i]).0;
            i += 1;
        }
        CellMask(bits)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        self.0 & CellMask::single(index).0 != 0
    }

    /// Copy of this mask with `index` added.
    #[inline]
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        CellMask(self.0 | CellMask::single(index).0)
    }

    /// Number of cells in the set (popcount).
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.0 == CellMask::FULL.0
    }

    /// True if every cell of `other` is also in `self`.
    #[inline]
    #[must_use]
    pub const fn is_superset_of(self, other: CellMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Cells in `self` but not in `other`.
    #[inline]
    #[must_use]
    pub const fn difference(self, other: CellMask) -> Self {
        CellMask(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: CellMask) -> Self {
        CellMask(self.0 | other.0)
    }

    /// Cells not in the set, restricted to the board.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        CellMask(!self.0 & CellMask::FULL.0)
    }

    /// Lowest cell index in the set.
    #[inline]
    #[must_use]
    pub fn first(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as usize)
        }
    }

    /// Iterate over cell indices in ascending order.
    pub fn iter(self) -> CellMaskIter {
        CellMaskIter { bits: self.0 }
    }
}

/// Iterator over set cells of a `CellMask`.
pub struct CellMaskIter {
    bits: u16,
}

impl Iterator for CellMaskIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }

        let index = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CellMaskIter {}
