//! Bitboard implementation for cheap board copies

use super::MAX_CELLS;

/// Bitboard over up to 100 cells, one bit per row-major cell index.
/// A single `u128` covers the largest (10x10) board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Bitboard with the lowest `cells` bits set
    pub const fn filled(cells: usize) -> Self {
        debug_assert!(cells <= MAX_CELLS);
        if cells == 0 {
            Self { bits: 0 }
        } else {
            Self { bits: u128::MAX >> (128 - cells) }
        }
    }

    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits |= 1u128 << idx;
    }

    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        debug_assert!(idx < MAX_CELLS);
        (self.bits >> idx) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | other.bits }
    }

    /// Bits set in `self` but not in `other`
    #[inline]
    pub fn without(self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits & !other.bits }
    }

    /// Iterate over set bit indices in ascending (row-major) order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}
