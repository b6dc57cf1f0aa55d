//! Two-player Gomoku (five in a row)
//!
//! Freestyle rules on a 15x15 board:
//! - Black moves first, players alternate
//! - Five or more stones in an unbroken line wins (overlines allowed)
//! - A full board with no line is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`game`]: Game controller (turns, move validation, game over)
//! - [`config`]: Board size / win length configuration
//! - [`ui`]: egui front end, a thin adapter over the controller
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameController, GameStatus, MoveResult, Player};
//!
//! let mut game = GameController::default();
//! for col in 7..11 {
//!     game.play_move(7, col); // Black
//!     game.play_move(0, col); // White
//! }
//! let result = game.play_move(7, 11);
//! assert!(matches!(result, MoveResult::Won { winner: Player::Black, .. }));
//! assert_eq!(game.status(), GameStatus::Won(Player::Black));
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use config::{ConfigError, GameConfig, WIN_LENGTH};
pub use game::{GameController, GameState, GameStatus, MoveResult, Placement, RejectReason};
