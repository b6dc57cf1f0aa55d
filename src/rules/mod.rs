//! Game rules for Gomoku
//!
//! Freestyle rules: five or more in a row wins, overlines included.
//! There are no captures and no forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{winning_line_at, DIRECTIONS};
