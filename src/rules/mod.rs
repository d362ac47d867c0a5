//! Game rules for Freedom
//!
//! - Adjacency rule with the freedom fallback
//! - Validation of human-entered coordinates

pub mod adjacency;
pub mod validity;

// Re-exports for convenient access
pub use adjacency::{has_freedom, legal_targets, neighbors, Neighbors, PositionClass};
pub use validity::{check_move, check_position, is_valid, parse_coordinate};
