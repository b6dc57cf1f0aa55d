//! UI-side game session
//!
//! Wraps the [`GameController`] and keeps the bits the board view needs to
//! draw the last [`MoveResult`]: last move marker, winning line, message.

use crate::{GameConfig, GameController, GameStatus, MoveResult, Player, Pos};

/// What the game-over card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Main game session
pub struct Session {
    pub game: GameController,
    pub last_move: Option<Pos>,
    pub winning_line: Option<Vec<Pos>>,
    pub message: Option<String>,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: GameController::new(config),
            last_move: None,
            winning_line: None,
            message: None,
        }
    }

    /// Restart / play again
    pub fn restart(&mut self) {
        self.game.reset();
        self.last_move = None;
        self.winning_line = None;
        self.message = None;
    }

    /// Forward a clicked cell to the controller and record the result
    pub fn select_cell(&mut self, pos: Pos) -> MoveResult {
        let result = self.game.play_move(pos.row as i32, pos.col as i32);
        self.apply(&result);
        result
    }

    fn apply(&mut self, result: &MoveResult) {
        match result {
            MoveResult::Rejected(reason) => {
                self.message = Some(reason.to_string());
            }
            MoveResult::Won { placed, line, .. } => {
                self.last_move = Some(placed.pos);
                self.winning_line = Some(line.clone());
                self.message = None;
            }
            MoveResult::Continue { placed, .. } | MoveResult::Draw { placed } => {
                self.last_move = Some(placed.pos);
                self.message = None;
            }
        }
    }

    pub fn current_player(&self) -> Player {
        self.game.current_player()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.game.status() {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// One-line status for the turn card
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{} to move", self.current_player().name()),
            GameStatus::Won(player) => format!("{} wins!", player.name()),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    pub fn move_count(&self) -> u32 {
        self.game.board().stone_count()
    }
}
