//! Board representation for Freedom

pub mod bitboard;
pub mod board;


use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Largest supported board side (10x10 on "experienced")
pub const MAX_BOARD_SIZE: usize = 10;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 100

/// The two players. `One` is the human, `Two` is the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Glyph used by the text front end
    pub fn symbol(self) -> char {
        match self {
            Player::One => '●',
            Player::Two => '○',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Contents of a single cell. A stone never reverts to `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Stone(Player),
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '*',
            Cell::Stone(player) => player.symbol(),
        }
    }
}

/// Position on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major cell index on a board of side `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// Difficulty picked at game start; fixes the board side for the whole game.
///
/// Parsed case-insensitively from its name or from the board side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// 6x6
    #[default]
    Beginner,
    /// 8x8
    Novice,
    /// 10x10
    Experienced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Novice, Difficulty::Experienced];

    #[inline]
    pub fn board_size(self) -> usize {
        match self {
            Difficulty::Beginner => 6,
            Difficulty::Novice => 8,
            Difficulty::Experienced => 10,
        }
    }

    pub fn from_board_size(size: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.board_size() == size)
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Novice => "Novice",
            Difficulty::Experienced => "Experienced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "beginner" | "6" => Ok(Difficulty::Beginner),
            "novice" | "8" => Ok(Difficulty::Novice),
            "experienced" | "10" => Ok(Difficulty::Experienced),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.board_size();
        write!(f, "{} ({}x{})", self.label(), n, n)
    }
}
