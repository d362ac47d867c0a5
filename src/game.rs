//! Game state threaded through the turn loop
//!
//! [`GameState`] is a plain value. Every transition returns a new state, so
//! front ends can keep earlier states around for undo and the engine can
//! search from a state without touching it.

use crate::board::{Board, Difficulty, Player, Pos};
use crate::error::MoveError;
use crate::eval::{scores, ScorePair};
use crate::rules::{check_move, check_position, legal_targets};

/// Final result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub scores: ScorePair,
    /// `None` on a draw
    pub winner: Option<Player>,
}

impl Outcome {
    pub fn from_scores(scores: ScorePair) -> Self {
        Self {
            scores,
            winner: scores.leader(),
        }
    }
}

/// `InProgress` until the board fills up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Complete(Outcome),
}

/// Board plus whose turn it is and which stone the next one must touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// `None` only before the first stone
    pub last_placed: Option<Pos>,
    pub move_count: u32,
    pub current: Player,
}

impl GameState {
    /// Fresh game; Player One (the human) moves first.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(difficulty),
            last_placed: None,
            move_count: 0,
            current: Player::One,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_board_size(self.board.size()).unwrap_or_default()
    }

    /// Stone the next placement must be adjacent to, if any.
    #[inline]
    pub fn adjacency_anchor(&self) -> Option<Pos> {
        if self.move_count == 0 {
            None
        } else {
            self.last_placed
        }
    }

    /// Cells the side to move may play, row-major.
    pub fn legal_targets(&self) -> Vec<Pos> {
        legal_targets(&self.board, self.adjacency_anchor())
    }

    /// True iff the board has no empty cell left.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.board.is_full()
    }

    pub fn scores(&self) -> ScorePair {
        scores(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_complete() {
            GameStatus::Complete(Outcome::from_scores(self.scores()))
        } else {
            GameStatus::InProgress
        }
    }

    /// Put the current player's stone on `pos` and pass the turn.
    ///
    /// Only occupancy and bounds are enforced here; use [`GameState::play`] or
    /// [`GameState::play_at`] for moves that must respect adjacency.
    pub fn place(&self, pos: Pos) -> Result<GameState, MoveError> {
        if self.is_complete() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(pos) {
            return Err(MoveError::OutOfBounds {
                row: pos.row as usize,
                col: pos.col as usize,
                size: self.board.size(),
            });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { pos });
        }

        let next = GameState {
            board: self.board.with_stone(pos, self.current),
            last_placed: Some(pos),
            move_count: self.move_count + 1,
            current: self.current.opponent(),
        };
        tracing::trace!(
            player = self.current.name(),
            %pos,
            move_count = next.move_count,
            "stone placed"
        );
        Ok(next)
    }

    /// Validate a fully rule-checked placement on an already parsed cell.
    pub fn play_at(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        if self.is_complete() {
            return Err(MoveError::GameOver);
        }
        let pos = check_position(self, row, col)?;
        self.place(pos)
    }

    /// Validate raw `row col` tokens and apply them.
    pub fn play(&self, raw_row: &str, raw_col: &str) -> Result<GameState, MoveError> {
        if self.is_complete() {
            return Err(MoveError::GameOver);
        }
        let pos = check_move(self, raw_row, raw_col)?;
        self.place(pos)
    }
}
