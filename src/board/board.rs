//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Difficulty, Player, Pos};

/// Square N×N game board. `Copy`, so every search child owns its own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Player One stones
    pub one: Bitboard,
    /// Player Two stones
    pub two: Bitboard,
}

impl Board {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            size: difficulty.board_size() as u8,
            one: Bitboard::new(),
            two: Bitboard::new(),
        }
    }

    /// Side length N
    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size() && (pos.col as usize) < self.size()
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        let idx = pos.to_index(self.size());
        if self.one.get(idx) {
            Cell::Stone(Player::One)
        } else if self.two.get(idx) {
            Cell::Stone(Player::Two)
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Place a stone. The cell must be empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.contains(pos) && self.is_empty(pos));
        let idx = pos.to_index(self.size());
        match player {
            Player::One => self.one.set(idx),
            Player::Two => self.two.set(idx),
        }
    }

    /// Copy of this board with one more stone
    #[inline]
    #[must_use]
    pub fn with_stone(mut self, pos: Pos, player: Player) -> Board {
        self.place_stone(pos, player);
        self
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.one.count() + self.two.count()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.cell_count()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> {
        let size = self.size();
        Bitboard::filled(self.cell_count())
            .without(self.one.union(self.two))
            .iter_ones()
            .map(move |idx| Pos::from_index(idx, size))
    }

    /// All cells of one row, left to right
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size()).map(move |col| self.get(Pos::new(row as u8, col as u8)))
    }
}

/// Renders the board the way the terminal front end prints it:
/// one row per line, cells separated by a single space.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            let line: Vec<String> = self.row(row).map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
