//! AI engine facade used by the front ends
//!
//! Wraps the [`Searcher`] with the game-level checks the turn loop needs
//! (nothing to search on a finished game) and with timing, so the front ends
//! can show what the computer thought about its move.
//!
//! # Example
//!
//! ```
//! use freedom::{AIEngine, Difficulty, GameState, Pos};
//!
//! // Smaller depth for a fast doc test
//! let mut engine = AIEngine::with_config(4, false);
//!
//! let state = GameState::new(Difficulty::Beginner).play("2", "2").unwrap();
//! let result = engine.get_move_with_stats(&state);
//! let pos = result.best_move.unwrap();
//! let state = state.place(pos).unwrap();
//! assert_eq!(state.move_count, 2);
//! ```

use std::time::Instant;

use crate::board::Pos;
use crate::game::GameState;
use crate::search::{SearchResult, Searcher, DEFAULT_DEPTH};

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found; `None` when the game is already complete
    pub best_move: Option<Pos>,
    /// Minimax value after the move (positive favours Player Two)
    pub score: i32,
    /// Lookahead used, in half-moves
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }

    #[inline]
    fn game_over(state: &GameState) -> Self {
        Self {
            best_move: None,
            score: state.scores().margin(),
            depth: 0,
            nodes: 0,
            time_ms: 0,
        }
    }
}

/// Computer opponent.
///
/// Default configuration: depth 6, sequential search.
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DEPTH, false)
    }

    /// * `max_depth` - lookahead in half-moves, clamped to at least 1
    /// * `parallel` - search the root's children on the rayon pool
    #[must_use]
    pub fn with_config(max_depth: u8, parallel: bool) -> Self {
        Self {
            searcher: Searcher::with_parallel(parallel),
            max_depth: max_depth.max(1),
        }
    }

    /// Best move for the side to move, or `None` once the board is full.
    #[must_use]
    pub fn get_move(&mut self, state: &GameState) -> Option<Pos> {
        self.get_move_with_stats(state).best_move
    }

    /// Best move along with score, node count and timing.
    #[must_use]
    pub fn get_move_with_stats(&mut self, state: &GameState) -> MoveResult {
        if state.is_complete() {
            tracing::debug!("search requested on a completed game");
            return MoveResult::game_over(state);
        }

        let start = Instant::now();
        let result = self.searcher.search(state, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            player = state.current.name(),
            depth = result.depth,
            nodes = result.nodes,
            leaves = result.stats.leaves,
            cutoffs = result.stats.cutoffs,
            first_move_rate = result.stats.first_move_rate(),
            score = result.score,
            best_move = ?result.best_move,
            time_ms,
            "search finished"
        );

        MoveResult::from_search(result, time_ms)
    }

    /// Set maximum search depth (clamped to at least 1)
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_parallel(&mut self, parallel: bool) {
        self.searcher = Searcher::with_parallel(parallel);
    }

    pub fn is_parallel(&self) -> bool {
        self.searcher.is_parallel()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
