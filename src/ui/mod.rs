//! GUI module for the Freedom game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::FreedomApp;
pub use session::GameSession;
