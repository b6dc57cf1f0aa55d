//! GUI module for the Gomoku game
//!
//! A thin egui/eframe adapter over [`crate::GameController`]: clicks become
//! `play_move` calls, and the returned `MoveResult` drives what is drawn.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::{Outcome, Session};
