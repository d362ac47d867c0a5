//! Run scoring for Freedom positions
//!
//! Every row and every diagonal (both orientations) is scanned as a line.
//! A player's run reaching exactly four stones scores +1; reaching five
//! takes that point back. Longer runs change nothing further, so a run of
//! exactly four is worth 1 and any run of five or more is worth 0.
//!
//! Columns are not scanned.

use crate::board::{Board, Cell, Player, Pos};

/// Run length that earns a point
const SCORING_RUN: u32 = 4;
/// Run length that cancels the point again
const OVERLONG_RUN: u32 = 5;

/// Scores for both players, always recomputed from the full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ScorePair {
    pub one: i32,
    pub two: i32,
}

impl ScorePair {
    pub fn new(one: i32, two: i32) -> Self {
        Self { one, two }
    }

    #[inline]
    pub fn of(&self, player: Player) -> i32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    /// `two - one`: positive favours the computer player.
    #[inline]
    pub fn margin(&self) -> i32 {
        self.two - self.one
    }

    /// Player with the strictly higher score, `None` on a tie
    pub fn leader(&self) -> Option<Player> {
        match self.one.cmp(&self.two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Running run-length counters for one scanned line.
#[derive(Debug, Default)]
struct LineScanner {
    run_one: u32,
    run_two: u32,
    scores: ScorePair,
}

impl LineScanner {
    fn feed(&mut self, cell: Cell) {
        match cell {
            Cell::Stone(Player::One) => {
                self.run_one += 1;
                self.run_two = 0;
                self.scores.one += Self::transition(self.run_one);
            }
            Cell::Stone(Player::Two) => {
                self.run_two += 1;
                self.run_one = 0;
                self.scores.two += Self::transition(self.run_two);
            }
            Cell::Empty => {
                self.run_one = 0;
                self.run_two = 0;
            }
        }
    }

    /// Score change when a run grows to `len`
    #[inline]
    fn transition(len: u32) -> i32 {
        match len {
            SCORING_RUN => 1,
            OVERLONG_RUN => -1,
            _ => 0,
        }
    }
}

/// Score a single ordered line of cells.
pub fn score_line<I>(cells: I) -> ScorePair
where
    I: IntoIterator<Item = Cell>,
{
    let mut scanner = LineScanner::default();
    for cell in cells {
        scanner.feed(cell);
    }
    scanner.scores
}

/// One scanned line: a start cell, a step direction and a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub step: (i8, i8),
    pub len: u8,
}

impl Line {
    /// Cells of the line in scan order
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let (dr, dc) = self.step;
        (0..self.len as i32).map(move |i| {
            let row = i32::from(self.start.row) + i32::from(dr) * i;
            let col = i32::from(self.start.col) + i32::from(dc) * i;
            Pos::new(row as u8, col as u8)
        })
    }
}

/// Every scanned line of an N×N board: N rows, then 2N-1 "\" diagonals,
/// then 2N-1 "/" diagonals.
pub fn scan_lines(size: usize) -> impl Iterator<Item = Line> {
    let n = size as i32;

    // Rows, left to right
    let rows = (0..n).map(move |row| Line {
        start: Pos::new(row as u8, 0),
        step: (0, 1),
        len: n as u8,
    });

    // "\" diagonals: col - row = k
    let falling = (-(n - 1)..n).map(move |k| Line {
        start: Pos::new((-k).max(0) as u8, k.max(0) as u8),
        step: (1, 1),
        len: (n - k.abs()) as u8,
    });

    // "/" diagonals: row + col = s
    let rising = (0..(2 * n - 1)).map(move |s| {
        let row = (s - (n - 1)).max(0);
        Line {
            start: Pos::new(row as u8, (s - row) as u8),
            step: (1, -1),
            len: (n - (s - (n - 1)).abs()) as u8,
        }
    });

    rows.chain(falling).chain(rising)
}

/// Full-board scores.
#[must_use]
pub fn scores(board: &Board) -> ScorePair {
    let mut total = ScorePair::default();
    for line in scan_lines(board.size()) {
        let s = score_line(line.cells().map(|p| board.get(p)));
        total.one += s.one;
        total.two += s.two;
    }
    total
}
