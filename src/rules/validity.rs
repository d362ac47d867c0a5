//! Validation of human-entered coordinates

use crate::board::Pos;
use crate::error::MoveError;
use crate::game::GameState;

use super::adjacency::legal_targets;

/// Parse one raw coordinate token. Only plain ASCII digits are accepted,
/// so signs ("-1", "+1") and anything else are parse errors.
pub fn parse_coordinate(token: &str) -> Result<usize, MoveError> {
    let trimmed = token.trim();
    let parse_error = || MoveError::Parse {
        token: token.to_string(),
    };

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(parse_error());
    }
    trimmed.parse::<usize>().map_err(|_| parse_error())
}

/// Check an already-parsed `(row, col)` against bounds, occupancy and the
/// adjacency rule. Returns the accepted position.
pub fn check_position(state: &GameState, row: usize, col: usize) -> Result<Pos, MoveError> {
    let board = &state.board;
    let size = board.size();

    if row >= size || col >= size {
        return Err(MoveError::OutOfBounds { row, col, size });
    }

    let pos = Pos::new(row as u8, col as u8);
    if !board.is_empty(pos) {
        return Err(MoveError::Occupied { pos });
    }

    let Some(last) = state.adjacency_anchor() else {
        // First stone of the game
        return Ok(pos);
    };

    if legal_targets(board, Some(last)).contains(&pos) {
        Ok(pos)
    } else {
        Err(MoveError::NotAdjacent { pos, last })
    }
}

/// Validate a raw `row col` token pair for the side to move.
///
/// Pure: the caller applies the accepted position with
/// [`GameState::place`] (or uses [`GameState::play`], which does both).
pub fn check_move(state: &GameState, raw_row: &str, raw_col: &str) -> Result<Pos, MoveError> {
    let row = parse_coordinate(raw_row)?;
    let col = parse_coordinate(raw_col)?;
    check_position(state, row, col)
}

/// Boolean form of [`check_move`].
#[inline]
pub fn is_valid(state: &GameState, raw_row: &str, raw_col: &str) -> bool {
    check_move(state, raw_row, raw_col).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Difficulty, Player};

    /// 6x6 game where Player One opened at (2, 2); Player Two to move.
    fn after_center_opening() -> GameState {
        GameState::new(Difficulty::Beginner)
            .place(Pos::new(2, 2))
            .unwrap()
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("0"), Ok(0));
        assert_eq!(parse_coordinate("12"), Ok(12));
        assert_eq!(parse_coordinate(" 3 "), Ok(3));
        assert!(parse_coordinate("").is_err());
        assert!(parse_coordinate("a").is_err());
        assert!(parse_coordinate("-1").is_err());
        assert!(parse_coordinate("+1").is_err());
        assert!(parse_coordinate("1.0").is_err());
        assert!(parse_coordinate("99999999999999999999999999").is_err());
    }

    #[test]
    fn test_interior_neighbors_valid() {
        let state = after_center_opening();
        assert_eq!(state.move_count, 1);
        assert!(is_valid(&state, "1", "2"));
        assert!(is_valid(&state, "3", "2"));
        assert!(is_valid(&state, "2", "1"));
        assert!(is_valid(&state, "2", "3"));
        assert!(!is_valid(&state, "0", "0"));
        assert_eq!(
            check_move(&state, "0", "0"),
            Err(MoveError::NotAdjacent {
                pos: Pos::new(0, 0),
                last: Pos::new(2, 2)
            })
        );
    }

    #[test]
    fn test_rejections() {
        let state = after_center_opening();
        assert!(matches!(check_move(&state, "a", "2"), Err(MoveError::Parse { .. })));
        assert!(matches!(check_move(&state, "2", "x"), Err(MoveError::Parse { .. })));
        assert_eq!(
            check_move(&state, "6", "2"),
            Err(MoveError::OutOfBounds { row: 6, col: 2, size: 6 })
        );
        assert_eq!(
            check_move(&state, "2", "2"),
            Err(MoveError::Occupied { pos: Pos::new(2, 2) })
        );
        // Diagonal is not orthogonally adjacent
        assert!(!is_valid(&state, "1", "1"));
    }

    #[test]
    fn test_first_move_unconstrained() {
        let state = GameState::new(Difficulty::Beginner);
        assert!(is_valid(&state, "0", "0"));
        assert!(is_valid(&state, "5", "5"));
        assert!(is_valid(&state, "3", "1"));
        assert!(!is_valid(&state, "6", "0"));
    }

    #[test]
    fn test_freedom_accepts_any_empty() {
        // Surround (0, 0) so the next mover has freedom
        let mut state = GameState::new(Difficulty::Beginner);
        for pos in [Pos::new(0, 1), Pos::new(1, 0)] {
            state.board.place_stone(pos, Player::Two);
        }
        let state = state.place(Pos::new(0, 0)).unwrap();
        assert!(is_valid(&state, "5", "5"));
        assert!(is_valid(&state, "3", "4"));
        assert!(!is_valid(&state, "0", "1"));
    }

    #[test]
    fn test_check_agrees_with_legal_targets() {
        let state = after_center_opening()
            .place(Pos::new(2, 3))
            .unwrap()
            .place(Pos::new(1, 3))
            .unwrap();
        let targets = state.legal_targets();
        for row in 0..6 {
            for col in 0..6 {
                let pos = Pos::new(row as u8, col as u8);
                let accepted = check_position(&state, row, col).is_ok();
                assert_eq!(accepted, targets.contains(&pos), "mismatch at {pos}");
            }
        }
    }
}
