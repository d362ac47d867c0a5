//! Placement adjacency ("freedom") rule
//!
//! A stone must be placed orthogonally next to the previously placed stone.
//! When every such neighbor is already occupied the mover has *freedom* and
//! may use any empty cell. The very first stone of a game is unconstrained.
//!
//! Move generation and input validation both go through [`legal_targets`],
//! so they can never disagree about which cells are playable.

use crate::board::{Board, Pos};

/// Where a cell sits on the board, which fixes how many neighbors it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass {
    /// 2 neighbors
    Corner,
    /// First/last row or column, not a corner: 3 neighbors
    Edge,
    /// 4 neighbors
    Interior,
}

impl PositionClass {
    pub fn classify(size: usize, pos: Pos) -> Self {
        let last = size - 1;
        let on_row_edge = pos.row == 0 || pos.row as usize == last;
        let on_col_edge = pos.col == 0 || pos.col as usize == last;
        match (on_row_edge, on_col_edge) {
            (true, true) => PositionClass::Corner,
            (true, false) | (false, true) => PositionClass::Edge,
            (false, false) => PositionClass::Interior,
        }
    }

    #[inline]
    pub fn neighbor_count(self) -> usize {
        match self {
            PositionClass::Corner => 2,
            PositionClass::Edge => 3,
            PositionClass::Interior => 4,
        }
    }
}

/// In-bounds orthogonal neighbors of a cell, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    cells: [Pos; 4],
    len: u8,
}

impl Neighbors {
    #[inline]
    pub fn as_slice(&self) -> &[Pos] {
        &self.cells[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Orthogonal neighbors of `pos` on an N×N board, in row-major order
/// (up, left, right, down). This order is also the search's move order.
pub fn neighbors(size: usize, pos: Pos) -> Neighbors {
    // (d_row, d_col) in row-major order
    const OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

    let mut out = Neighbors {
        cells: [pos; 4],
        len: 0,
    };
    for (dr, dc) in OFFSETS {
        let r = i32::from(pos.row) + dr;
        let c = i32::from(pos.col) + dc;
        if Pos::is_valid(r, c, size) {
            out.cells[out.len as usize] = Pos::new(r as u8, c as u8);
            out.len += 1;
        }
    }

    debug_assert_eq!(
        out.as_slice().len(),
        PositionClass::classify(size, pos).neighbor_count()
    );
    out
}

/// True when `last` has no empty orthogonal neighbor, i.e. the next mover may
/// use any empty cell.
pub fn has_freedom(board: &Board, last: Pos) -> bool {
    neighbors(board.size(), last)
        .iter()
        .all(|p| !board.is_empty(p))
}

/// Cells the next stone may go on, in row-major order.
///
/// `last_placed == None` means no stone has been played yet, so every empty
/// cell is legal. Otherwise the empty neighbors of `last_placed`, or every
/// empty cell if there are none.
pub fn legal_targets(board: &Board, last_placed: Option<Pos>) -> Vec<Pos> {
    let Some(last) = last_placed else {
        return board.empty_cells().collect();
    };

    let adjacent: Vec<Pos> = neighbors(board.size(), last)
        .iter()
        .filter(|&p| board.is_empty(p))
        .collect();

    if adjacent.is_empty() {
        tracing::trace!(%last, "freedom: all neighbors occupied");
        board.empty_cells().collect()
    } else {
        adjacent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Difficulty, Player};

    fn board6() -> Board {
        Board::new(Difficulty::Beginner)
    }

    #[test]
    fn test_classify() {
        assert_eq!(PositionClass::classify(6, Pos::new(0, 0)), PositionClass::Corner);
        assert_eq!(PositionClass::classify(6, Pos::new(0, 5)), PositionClass::Corner);
        assert_eq!(PositionClass::classify(6, Pos::new(5, 0)), PositionClass::Corner);
        assert_eq!(PositionClass::classify(6, Pos::new(5, 5)), PositionClass::Corner);
        assert_eq!(PositionClass::classify(6, Pos::new(0, 3)), PositionClass::Edge);
        assert_eq!(PositionClass::classify(6, Pos::new(3, 0)), PositionClass::Edge);
        assert_eq!(PositionClass::classify(6, Pos::new(5, 2)), PositionClass::Edge);
        assert_eq!(PositionClass::classify(6, Pos::new(2, 5)), PositionClass::Edge);
        assert_eq!(PositionClass::classify(6, Pos::new(2, 2)), PositionClass::Interior);
    }

    #[test]
    fn test_neighbor_counts_match_class() {
        for size in [6usize, 8, 10] {
            for row in 0..size as u8 {
                for col in 0..size as u8 {
                    let pos = Pos::new(row, col);
                    let n = neighbors(size, pos);
                    assert_eq!(n.as_slice().len(), PositionClass::classify(size, pos).neighbor_count());
                    for p in n.iter() {
                        let dist = (p.row as i32 - row as i32).abs() + (p.col as i32 - col as i32).abs();
                        assert_eq!(dist, 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_neighbors_row_major() {
        let n = neighbors(6, Pos::new(2, 2));
        assert_eq!(
            n.as_slice(),
            &[Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 3), Pos::new(3, 2)]
        );

        let n = neighbors(6, Pos::new(5, 5));
        assert_eq!(n.as_slice(), &[Pos::new(4, 5), Pos::new(5, 4)]);

        let n = neighbors(6, Pos::new(0, 3));
        assert_eq!(n.as_slice(), &[Pos::new(0, 2), Pos::new(0, 4), Pos::new(1, 3)]);
    }

    #[test]
    fn test_first_move_all_empty() {
        let mut board = board6();
        board.place_stone(Pos::new(4, 4), Player::One);
        let targets = legal_targets(&board, None);
        assert_eq!(targets.len(), 35);
        assert!(!targets.contains(&Pos::new(4, 4)));
    }

    #[test]
    fn test_adjacent_only() {
        let board = board6().with_stone(Pos::new(2, 2), Player::One);
        let targets = legal_targets(&board, Some(Pos::new(2, 2)));
        assert_eq!(
            targets,
            vec![Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 3), Pos::new(3, 2)]
        );
        assert!(!has_freedom(&board, Pos::new(2, 2)));
    }

    #[test]
    fn test_occupied_neighbors_filtered() {
        let board = board6()
            .with_stone(Pos::new(0, 0), Player::One)
            .with_stone(Pos::new(0, 1), Player::Two);
        let targets = legal_targets(&board, Some(Pos::new(0, 0)));
        assert_eq!(targets, vec![Pos::new(1, 0)]);
    }

    #[test]
    fn test_freedom_in_corner() {
        let board = board6()
            .with_stone(Pos::new(0, 0), Player::One)
            .with_stone(Pos::new(0, 1), Player::Two)
            .with_stone(Pos::new(1, 0), Player::Two);
        assert!(has_freedom(&board, Pos::new(0, 0)));
        let targets = legal_targets(&board, Some(Pos::new(0, 0)));
        assert_eq!(targets.len(), 33);
        assert_eq!(targets[0], Pos::new(0, 2));
    }

    #[test]
    fn test_freedom_interior() {
        let mut board = board6();
        for pos in [Pos::new(2, 2), Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1), Pos::new(2, 3)] {
            board.place_stone(pos, Player::One);
        }
        assert!(has_freedom(&board, Pos::new(2, 2)));
        assert_eq!(legal_targets(&board, Some(Pos::new(2, 2))).len(), 31);

        // One free neighbor is enough to withhold freedom
        let mut board = board6();
        for pos in [Pos::new(2, 2), Pos::new(1, 2), Pos::new(3, 2), Pos::new(2, 1)] {
            board.place_stone(pos, Player::One);
        }
        assert!(!has_freedom(&board, Pos::new(2, 2)));
        assert_eq!(legal_targets(&board, Some(Pos::new(2, 2))), vec![Pos::new(2, 3)]);
    }

    #[test]
    fn test_freedom_on_edge() {
        let anchor = Pos::new(0, 3);
        let around = [Pos::new(0, 2), Pos::new(0, 4), Pos::new(1, 3)];

        let mut board = board6().with_stone(anchor, Player::Two);
        for pos in around {
            board.place_stone(pos, Player::One);
        }
        assert!(has_freedom(&board, anchor));
        assert_eq!(legal_targets(&board, Some(anchor)).len(), 32);

        // Leaving any one of the three open withholds freedom
        for open in around {
            let mut board = board6().with_stone(anchor, Player::Two);
            for pos in around.into_iter().filter(|&p| p != open) {
                board.place_stone(pos, Player::One);
            }
            assert!(!has_freedom(&board, anchor));
            assert_eq!(legal_targets(&board, Some(anchor)), vec![open]);
        }
    }

    #[test]
    fn test_never_empty_on_non_full_board() {
        // Fill all but the last cell; from any last placed stone a target exists
        let mut board = board6();
        let cells: Vec<Pos> = board.empty_cells().collect();
        for (i, pos) in cells.iter().take(35).enumerate() {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board.place_stone(*pos, player);
        }
        for last in cells.iter().take(35) {
            assert_eq!(legal_targets(&board, Some(*last)), vec![Pos::new(5, 5)]);
        }
    }

    #[test]
    fn test_full_board_has_no_targets() {
        let mut board = board6();
        let cells: Vec<Pos> = board.empty_cells().collect();
        for pos in cells {
            board.place_stone(pos, Player::One);
        }
        assert!(legal_targets(&board, Some(Pos::new(0, 0))).is_empty());
    }
}
