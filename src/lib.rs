//! Freedom game engine
//!
//! Freedom is a Gomoku-style game on a 6x6, 8x8 or 10x10 board:
//! - Each stone must be placed orthogonally next to the previous stone
//! - If every such neighbor is taken, the mover has *freedom* and may use
//!   any empty cell; the first stone of the game is unconstrained
//! - A run of exactly four stones (in a row or on a diagonal) scores a point,
//!   a run of five or more scores nothing
//! - The game ends when the board is full; higher score wins
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Adjacency rule and input validation
//! - [`eval`]: Run scoring
//! - [`search`]: Move generation and minimax with alpha-beta pruning
//! - [`engine`]: AI facade used by the front ends
//! - [`game`]: Immutable game state and transitions
//!
//! # Quick Start
//!
//! ```
//! use freedom::{AIEngine, Difficulty, GameState, GameStatus};
//!
//! let mut engine = AIEngine::with_config(3, false);
//! let mut state = GameState::new(Difficulty::Beginner);
//!
//! // Human opens in the middle, computer answers
//! state = state.play("2", "3").unwrap();
//! if let Some(pos) = engine.get_move(&state) {
//!     state = state.place(pos).unwrap();
//! }
//!
//! assert_eq!(state.move_count, 2);
//! assert_eq!(state.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Difficulty, Player, Pos};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, MoveError};
pub use eval::ScorePair;
pub use game::{GameState, GameStatus, Outcome};
