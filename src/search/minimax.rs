//! Depth-limited minimax with alpha-beta pruning
//!
//! The computer (Player Two) is the maximizing side and the static value of a
//! position is `p2_score - p1_score`. Children are searched in the order the
//! move generator yields them, and among equal values the first child wins,
//! which makes the chosen move deterministic.
//!
//! # Example
//!
//! ```
//! use freedom::board::{Difficulty, Pos};
//! use freedom::game::GameState;
//! use freedom::search::Searcher;
//!
//! let state = GameState::new(Difficulty::Beginner)
//!     .place(Pos::new(2, 2))
//!     .unwrap();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&state, 4);
//! assert!(state.legal_targets().contains(&result.best_move.unwrap()));
//! ```

use rayon::prelude::*;

use crate::board::{Player, Pos};
use crate::eval::scores;
use crate::game::GameState;

use super::movegen::SearchNode;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX;

/// Lookahead used for the computer's moves, in half-moves
pub const DEFAULT_DEPTH: u8 = 6;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Statically evaluated positions
    pub leaves: u64,
    /// Times a node stopped iterating its children early
    pub cutoffs: u64,
    /// Cutoffs that happened right after the first child
    pub first_move_cutoffs: u64,
}

impl SearchStats {
    /// First-move cutoff rate, in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }

    fn merge(&mut self, other: &SearchStats) {
        self.leaves += other.leaves;
        self.cutoffs += other.cutoffs;
        self.first_move_cutoffs += other.first_move_cutoffs;
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the board was already full
    pub best_move: Option<Pos>,
    /// Minimax value, from Player Two's point of view
    pub score: i32,
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Minimax searcher. Holds only counters, so one instance can be reused.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
    parallel: bool,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Searcher that spreads the root's children over the rayon pool.
    ///
    /// Each root child then gets a full window of its own, so fewer cutoffs
    /// happen, but the value and the chosen move match the sequential search.
    #[must_use]
    pub fn with_parallel(parallel: bool) -> Self {
        Self {
            parallel,
            ..Self::default()
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Nodes visited since the last [`Searcher::search`] started
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax over `node`'s subtree.
    ///
    /// Returns the value and the move that leads to it: at a leaf that is
    /// the move which produced the leaf itself, otherwise the first child
    /// reaching the best value. Cutoffs happen once `beta <= alpha`.
    pub fn minimax(
        &mut self,
        node: &SearchNode,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        if depth == 0 || node.board.is_full() {
            self.stats.leaves += 1;
            return (scores(&node.board).margin(), node.mov);
        }

        let mover = if maximizing { Player::Two } else { Player::One };
        let children = node.children(mover);

        let mut best_value = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for (i, child) in children.iter().enumerate() {
            let (value, _) = self.minimax(child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = child.mov;
                }
                alpha = alpha.max(value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = child.mov;
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                break;
            }
        }

        (best_value, best_move)
    }

    /// Best move for the side to move in `state`, looking `depth` half-moves
    /// ahead. Player Two maximizes; Player One minimizes.
    #[must_use]
    pub fn search(&mut self, state: &GameState, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let root = SearchNode::root(state);
        let maximizing = state.current == Player::Two;

        let (score, best_move) = if self.parallel && depth > 0 && !root.board.is_full() {
            self.search_root_parallel(&root, depth, maximizing)
        } else {
            self.minimax(&root, depth, -INF, INF, maximizing)
        };

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Root children searched concurrently, each with a full window; the
    /// reduction keeps the first child reaching the best value.
    fn search_root_parallel(
        &mut self,
        root: &SearchNode,
        depth: u8,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;

        let mover = if maximizing { Player::Two } else { Player::One };
        let children = root.children(mover);

        let results: Vec<(i32, Option<Pos>, u64, SearchStats)> = children
            .par_iter()
            .map(|child| {
                let mut worker = Searcher::new();
                let (value, _) = worker.minimax(child, depth - 1, -INF, INF, !maximizing);
                (value, child.mov, worker.nodes, worker.stats)
            })
            .collect();

        let mut best_value = if maximizing { -INF } else { INF };
        let mut best_move = None;
        for (value, mov, nodes, stats) in results {
            self.nodes += nodes;
            self.stats.merge(&stats);

            let better = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if better {
                best_value = value;
                best_move = mov;
            }
        }

        (best_value, best_move)
    }
}
