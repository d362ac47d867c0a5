//! Evaluation module for Freedom positions
//!
//! Scores are a pure function of the stones on the board; the last placed
//! stone and the move counter play no part.

pub mod scoring;

pub use scoring::{scan_lines, score_line, scores, Line, ScorePair};
