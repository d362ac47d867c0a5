//! Search module for the Freedom AI
//!
//! Contains:
//! - Candidate generation under the adjacency rule
//! - Minimax with alpha-beta pruning, optionally parallel at the root

pub mod minimax;
pub mod movegen;

pub use minimax::{SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, INF};
pub use movegen::{generate, SearchNode};
