//! Game controller: turn order, move application and game-over detection.
//!
//! The controller owns the [`Board`] and the [`GameState`]. All input goes
//! through [`GameController::play_move`]; invalid moves leave everything
//! untouched and come back as [`MoveResult::Rejected`].

use derive_more::Display;
use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Pos};
use crate::config::GameConfig;
use crate::rules;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Turn and status, replaced wholesale on reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub current_player: Player,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_player: Player::Black,
            status: GameStatus::InProgress,
        }
    }
}

/// Why a move was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RejectReason {
    #[display("Position is off the board")]
    OutOfBounds,
    #[display("Cell is already occupied")]
    CellOccupied,
    #[display("Game is over")]
    GameAlreadyOver,
}

/// A stone that was just placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub player: Player,
}

/// Outcome of [`GameController::play_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// Stone placed, game goes on with `next` to move
    Continue { placed: Placement, next: Player },
    /// Stone placed and completed a line
    Won {
        placed: Placement,
        winner: Player,
        /// The unbroken run through the placed stone
        line: Vec<Pos>,
    },
    /// Stone placed on the last empty cell without a line
    Draw { placed: Placement },
    /// Nothing changed
    Rejected(RejectReason),
}

impl MoveResult {
    /// The stone placed by this move, `None` if rejected
    pub fn placement(&self) -> Option<Placement> {
        match self {
            MoveResult::Continue { placed, .. }
            | MoveResult::Won { placed, .. }
            | MoveResult::Draw { placed } => Some(*placed),
            MoveResult::Rejected(_) => None,
        }
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }
}

/// Rules engine for one game at a time
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,
    board: Board,
    state: GameState,
}

impl GameController {
    /// New game with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::with_size(config.board_size()),
            state: GameState::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.status.is_over()
    }

    /// Start over: empty board, Black to move
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::with_size(self.config.board_size());
        self.state = GameState::default();
        info!(size = self.config.board_size(), "New game");
    }

    /// Check a move without applying it
    pub fn validate_move(&self, row: i32, col: i32) -> Result<Pos, RejectReason> {
        if self.is_over() {
            return Err(RejectReason::GameAlreadyOver);
        }
        if !self.board.contains(row, col) {
            return Err(RejectReason::OutOfBounds);
        }
        if !self.board.is_empty(row, col) {
            return Err(RejectReason::CellOccupied);
        }
        Ok(Pos::new(row as u8, col as u8))
    }

    /// Place the current player's stone at `(row, col)`
    #[instrument(skip(self))]
    pub fn play_move(&mut self, row: i32, col: i32) -> MoveResult {
        let pos = match self.validate_move(row, col) {
            Ok(pos) => pos,
            Err(reason) => {
                debug!(%reason, "Move rejected");
                return MoveResult::Rejected(reason);
            }
        };

        let player = self.state.current_player;
        self.board.place(pos, player);
        let placed = Placement { pos, player };
        debug!(player = player.name(), row, col, "Stone placed");

        if let Some(line) = rules::winning_line_at(&self.board, pos, player, self.config.win_length()) {
            self.state.status = GameStatus::Won(player);
            info!(winner = player.name(), "Game won");
            return MoveResult::Won {
                placed,
                winner: player,
                line,
            };
        }

        if self.board.is_full() {
            self.state.status = GameStatus::Draw;
            info!("Game drawn, board full");
            return MoveResult::Draw { placed };
        }

        let next = player.opponent();
        self.state.current_player = next;
        MoveResult::Continue { placed, next }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn play_all(game: &mut GameController, moves: &[(i32, i32)]) {
        for &(r, c) in moves {
            assert!(game.play_move(r, c).is_accepted(), "move ({r}, {c}) rejected");
        }
    }

    #[test]
    fn test_initial_state() {
        let game = GameController::default();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().is_board_empty());
        assert_eq!(game.board().size(), 15);
    }

    #[test]
    fn test_first_move_continues_with_white() {
        let mut game = GameController::default();
        let result = game.play_move(7, 7);
        assert_eq!(
            result,
            MoveResult::Continue {
                placed: Placement { pos: Pos::new(7, 7), player: Player::Black },
                next: Player::White,
            }
        );
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameController::default();
        for (r, c) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100), (i32::MIN, i32::MAX)] {
            assert_eq!(game.play_move(r, c), MoveResult::Rejected(RejectReason::OutOfBounds));
        }
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_occupied_rejected() {
        let mut game = GameController::default();
        game.play_move(3, 3);
        let before = game.board().clone();
        assert_eq!(game.play_move(3, 3), MoveResult::Rejected(RejectReason::CellOccupied));
        assert_eq!(game.board(), &before);
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_row_of_five_wins() {
        let mut game = GameController::default();
        // Black on row 7, White on row 0
        play_all(&mut game, &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3)]);
        match game.play_move(7, 11) {
            MoveResult::Won { winner, line, placed } => {
                assert_eq!(winner, Player::Black);
                assert_eq!(placed.pos, Pos::new(7, 11));
                assert_eq!(line.len(), 5);
            }
            other => panic!("expected win, got {other:?}"),
        }
        assert_eq!(game.status(), GameStatus::Won(Player::Black));
        // Winner stays current player
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut game = GameController::default();
        play_all(&mut game, &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)]);
        let before = game.board().clone();
        assert_eq!(game.play_move(5, 5), MoveResult::Rejected(RejectReason::GameAlreadyOver));
        // Over takes precedence over bounds and occupancy
        assert_eq!(game.play_move(-1, 99), MoveResult::Rejected(RejectReason::GameAlreadyOver));
        assert_eq!(game.play_move(7, 7), MoveResult::Rejected(RejectReason::GameAlreadyOver));
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_reset_after_win() {
        let mut game = GameController::default();
        play_all(&mut game, &[(7, 7), (0, 0), (7, 8), (0, 1), (7, 9), (0, 2), (7, 10), (0, 3), (7, 11)]);
        assert!(game.is_over());

        game.reset();
        assert_eq!(game.state(), GameState::default());
        assert!(game.board().is_board_empty());
        assert!(game.play_move(7, 7).is_accepted());
    }

    #[test]
    fn test_draw_on_full_board() {
        // 5x5 board, five to win. Columns alternate in pairs so no line forms:
        // B B W W B / W W B B W / B B W W B / W W B B W / B B W W B
        let mut game = GameController::new(GameConfig::new(5, 5).unwrap());
        let pattern = |r: i32, c: i32| ((c / 2) + r) % 2 == 0;
        let blacks: Vec<(i32, i32)> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter(|&(r, c)| pattern(r, c))
            .collect();
        let whites: Vec<(i32, i32)> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (r, c)))
            .filter(|&(r, c)| !pattern(r, c))
            .collect();
        assert_eq!(blacks.len(), 13);
        assert_eq!(whites.len(), 12);

        let mut last = None;
        for i in 0..25 {
            let (r, c) = if i % 2 == 0 { blacks[i / 2] } else { whites[i / 2] };
            last = Some(game.play_move(r, c));
        }
        assert!(matches!(last, Some(MoveResult::Draw { .. })));
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.play_move(0, 0), MoveResult::Rejected(RejectReason::GameAlreadyOver));
    }

    #[test]
    fn test_largest_board_far_corner() {
        let mut game = GameController::new(GameConfig::new(26, 5).unwrap());
        assert_eq!(game.board().size(), 26);
        assert!(game.play_move(25, 25).is_accepted());
        assert_eq!(game.board().get(Pos::new(25, 25)), Stone::Black);
        assert_eq!(game.play_move(26, 0), MoveResult::Rejected(RejectReason::OutOfBounds));
    }

    #[test]
    fn test_short_win_length_needs_a_line() {
        // Shortest accepted win length: a lone stone never wins
        let mut game = GameController::new(GameConfig::new(5, 3).unwrap());
        assert!(matches!(game.play_move(2, 2), MoveResult::Continue { .. }));
        play_all(&mut game, &[(0, 0), (2, 3), (0, 4)]);
        assert!(matches!(game.play_move(2, 4), MoveResult::Won { winner: Player::Black, .. }));
    }

    #[test]
    fn test_validate_move_has_no_side_effects() {
        let game = GameController::default();
        assert_eq!(game.validate_move(7, 7), Ok(Pos::new(7, 7)));
        assert_eq!(game.validate_move(15, 7), Err(RejectReason::OutOfBounds));
        assert!(game.board().is_board_empty());
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(RejectReason::CellOccupied.to_string(), "Cell is already occupied");
        assert_eq!(RejectReason::GameAlreadyOver.to_string(), "Game is over");
    }
}
